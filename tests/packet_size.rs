mod common;

use common::*;
use seq_packet_reader::{Limit, PacketStream, StreamOptions};
use tempfile::tempdir;

#[test]
fn packet_size_of_one() {
    let dir = tempdir().unwrap();
    let (plain, _) = fixtures(dir.path());
    let stream = PacketStream::open([&plain], by_count(1)).unwrap();
    assert_eq!(packet_sizes(stream), vec![1; 8]);
}

#[test]
fn packet_size_divides_record_count() {
    let dir = tempdir().unwrap();
    let (plain, _) = fixtures(dir.path());
    let stream = PacketStream::open([&plain], by_count(2)).unwrap();
    assert_eq!(packet_sizes(stream), vec![2, 2, 2, 2]);
}

#[test]
fn packet_size_leaves_short_tail() {
    let dir = tempdir().unwrap();
    let (plain, _) = fixtures(dir.path());
    let stream = PacketStream::open([&plain], by_count(3)).unwrap();
    assert_eq!(packet_sizes(stream), vec![3, 3, 2]);
}

#[test]
fn packet_size_above_record_count() {
    let dir = tempdir().unwrap();
    let (plain, _) = fixtures(dir.path());
    let stream = PacketStream::open([&plain], by_count(19)).unwrap();
    assert_eq!(packet_sizes(stream), vec![8]);
}

#[test]
fn record_order_is_file_order() {
    let dir = tempdir().unwrap();
    let (plain, gz) = fixtures(dir.path());
    let stream = PacketStream::open([&plain, &gz], by_count(3)).unwrap();
    let got = ids(stream);
    let mut expected: Vec<String> = (1..=8)
        .map(|i| format!("NODE_{i}_length_{}", CONTIG_LENGTHS[i - 1]))
        .collect();
    expected.extend((1..=7).map(|i| format!("CTG_{i}_length_{}", MORE_LENGTHS[i - 1])));
    assert_eq!(got, expected);
}

#[test]
fn packets_do_not_span_files() {
    let dir = tempdir().unwrap();
    let (plain, gz) = fixtures(dir.path());

    let stream = PacketStream::open([&plain, &gz], by_count(4)).unwrap();
    assert_eq!(packet_sizes(stream), vec![4, 4, 4, 3]);

    let stream = PacketStream::open([&plain, &gz], by_count(3)).unwrap();
    assert_eq!(packet_sizes(stream), vec![3, 3, 2, 3, 3, 1]);
}

#[test]
fn sum_seq_len_packets() {
    let dir = tempdir().unwrap();
    let (plain, _) = fixtures(dir.path());
    let stream = PacketStream::open([&plain], by_length(2000, Limit::Unbounded)).unwrap();
    assert_eq!(packet_sizes(stream), vec![3, 2, 2, 1]);
}

#[test]
fn sum_seq_len_packets_with_max_seq_len() {
    let dir = tempdir().unwrap();
    let (plain, _) = fixtures(dir.path());
    let stream = PacketStream::open([&plain], by_length(1200, Limit::At(500))).unwrap();
    assert_eq!(packet_sizes(stream), vec![3, 3, 2]);
}

#[test]
fn sequences_are_joined_across_lines() {
    let dir = tempdir().unwrap();
    let (plain, _) = fixtures(dir.path());
    let stream = PacketStream::open([&plain], by_count(100)).unwrap();
    let lengths: Vec<usize> = stream
        .flat_map(|p| p.unwrap())
        .map(|r| r.seq_len().unwrap())
        .collect();
    assert_eq!(lengths, CONTIG_LENGTHS);
}

#[test]
fn fastq_inputs_batch_the_same_way() {
    let dir = tempdir().unwrap();
    let a = write_plain(dir.path(), "a.fq", &fastq_text(5));
    let b = write_gz(dir.path(), "b.FASTQ.gz", &fastq_text(2));
    let stream = PacketStream::open(
        [&a, &b],
        StreamOptions {
            packet_size: 2,
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(packet_sizes(stream), vec![2, 2, 1, 2]);
}

#[test]
fn empty_file_is_passed_over() {
    let dir = tempdir().unwrap();
    let (plain, _) = fixtures(dir.path());
    let empty = write_plain(dir.path(), "empty.fa", "");
    let stream = PacketStream::open([&empty, &plain, &empty], by_count(5)).unwrap();
    assert_eq!(packet_sizes(stream), vec![5, 3]);
}
