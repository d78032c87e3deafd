mod common;

use common::*;
use seq_packet_reader::PacketStream;
use tempfile::tempdir;

#[test]
fn skip_less_than_record_count() {
    let dir = tempdir().unwrap();
    let (plain, _) = fixtures(dir.path());
    let opts = skipping(by_count(1000), &plain, 3);
    let got = ids(PacketStream::open([&plain], opts).unwrap());
    assert_eq!(got.len(), 5);
    assert_eq!(got[0], "NODE_4_length_1000");
}

#[test]
fn skip_does_not_distort_packet_size() {
    let dir = tempdir().unwrap();
    let (plain, _) = fixtures(dir.path());

    let opts = skipping(by_count(3), &plain, 3);
    assert_eq!(packet_sizes(PacketStream::open([&plain], opts).unwrap()), vec![3, 2]);

    let opts = skipping(by_count(3), &plain, 5);
    assert_eq!(packet_sizes(PacketStream::open([&plain], opts).unwrap()), vec![3]);
}

#[test]
fn skip_equal_or_above_record_count_yields_nothing() {
    let dir = tempdir().unwrap();
    let (plain, _) = fixtures(dir.path());
    for n in [8, 9, 1_000_000] {
        let opts = skipping(by_count(3), &plain, n);
        let mut stream = PacketStream::open([&plain], opts).unwrap();
        assert!(stream.next().is_none(), "skip={n}");
        assert_eq!(stream.current_path(), None);
    }
}

#[test]
fn exhausted_first_file_winds_to_second() {
    let dir = tempdir().unwrap();
    let (plain, gz) = fixtures(dir.path());
    let opts = skipping(by_count(1000), &plain, 8);
    let stream = PacketStream::open([&plain, &gz], opts).unwrap();
    assert_eq!(packet_sizes(stream), vec![7]);
}

#[test]
fn skip_applies_to_later_file_by_basename() {
    let dir = tempdir().unwrap();
    let (plain, gz) = fixtures(dir.path());
    let opts = skipping(by_count(4), &gz, 5);
    let got = ids(PacketStream::open([&plain, &gz], opts).unwrap());
    assert_eq!(got.len(), 8 + 2);
    assert_eq!(got[8], "CTG_6_length_800");
}

#[test]
fn skip_exhausts_file_after_a_boundary() {
    let dir = tempdir().unwrap();
    let (plain, gz) = fixtures(dir.path());
    let third = write_plain(dir.path(), "third.fna", &fasta_text("X", &[10, 20]));
    let opts = skipping(by_count(5), &gz, 7);
    let stream = PacketStream::open([&plain, &gz, &third], opts).unwrap();
    assert_eq!(packet_sizes(stream), vec![5, 3, 2]);
}
