use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

pub fn looks_like_gzip<R: Read + Seek>(mut r: R) -> io::Result<bool> {
    let mut magic = [0u8; 2];
    let pos = r.stream_position()?;
    let n = r.read(&mut magic)?;
    r.seek(SeekFrom::Start(pos))?;
    Ok(n >= 2 && magic == [0x1F, 0x8B])
}

pub fn open_file(path: &Path) -> io::Result<File> {
    File::open(path)
}

/// True when the file name carries a `.gz` suffix (any case).
pub fn has_gz_suffix(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Lowercased last extension of the file name, with one `.gz` suffix
/// removed first when `strip_gz` is set.
pub fn extension_of(path: &Path, strip_gz: bool) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    let name = match name.rsplit_once('.') {
        Some((stem, ext)) if strip_gz && ext.eq_ignore_ascii_case("gz") => stem,
        _ => name,
    };
    name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase())
}
