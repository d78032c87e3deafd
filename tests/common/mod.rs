#![allow(dead_code)]

use flate2::Compression;
use flate2::write::GzEncoder;
use seq_packet_reader::{Limit, PacketStream, SkipRegistry, StreamOptions, SUM_SEQ_LEN};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Sequence lengths of the eight contigs in `some_seqs.fasta`.
pub const CONTIG_LENGTHS: [usize; 8] = [1020, 960, 1180, 1000, 1000, 1000, 1000, 56];
/// Sequence lengths of the seven contigs in `more_seqs.fasta.gz`.
pub const MORE_LENGTHS: [usize; 7] = [300, 420, 510, 600, 740, 800, 915];

const BASES: &[u8] = b"ACGT";

/// FASTA text with 60-column sequence lines.
pub fn fasta_text(prefix: &str, lengths: &[usize]) -> String {
    let mut out = String::new();
    for (i, &len) in lengths.iter().enumerate() {
        out.push_str(&format!(">{prefix}_{}_length_{len}\n", i + 1));
        let seq: Vec<u8> = (0..len).map(|j| BASES[(i + j) % 4]).collect();
        for chunk in seq.chunks(60) {
            out.push_str(std::str::from_utf8(chunk).unwrap());
            out.push('\n');
        }
    }
    out
}

pub fn fastq_text(n: usize) -> String {
    let mut out = String::new();
    for i in 0..n {
        out.push_str(&format!("@read{i} runid=abc\nACGTACGT\n+\nIIIIIIII\n"));
    }
    out
}

pub fn write_plain(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, text).unwrap();
    path
}

pub fn write_gz(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    let f = File::create(&path).unwrap();
    let mut enc = GzEncoder::new(f, Compression::fast());
    enc.write_all(text.as_bytes()).unwrap();
    enc.finish().unwrap();
    path
}

/// The two standard fixtures: 8 plain contigs, then 7 gzipped ones.
pub fn fixtures(dir: &Path) -> (PathBuf, PathBuf) {
    let plain = write_plain(dir, "some_seqs.fasta", &fasta_text("NODE", &CONTIG_LENGTHS));
    let gz = write_gz(dir, "more_seqs.fasta.gz", &fasta_text("CTG", &MORE_LENGTHS));
    (plain, gz)
}

pub fn by_count(n: u64) -> StreamOptions {
    StreamOptions {
        packet_size: n,
        ..Default::default()
    }
}

pub fn by_length(threshold: u64, cap: Limit) -> StreamOptions {
    StreamOptions {
        packet_mode: SUM_SEQ_LEN.to_string(),
        packet_size: threshold,
        max_seq_len: cap,
        ..Default::default()
    }
}

pub fn skipping(opts: StreamOptions, path: &Path, n: u64) -> StreamOptions {
    let name = path.file_name().unwrap().to_str().unwrap();
    StreamOptions {
        n_first_skip: SkipRegistry::from_iter([(name, n)]),
        ..opts
    }
}

pub fn packet_sizes(stream: PacketStream) -> Vec<usize> {
    stream.map(|p| p.unwrap().len()).collect()
}

pub fn ids(stream: PacketStream) -> Vec<String> {
    stream
        .flat_map(|p| p.unwrap())
        .map(|r| r.id().to_string())
        .collect()
}
