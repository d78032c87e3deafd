use crate::error::ConfigError;
use crate::util::extension_of;
use std::fmt;
use std::path::Path;

pub const FASTA_EXTENSIONS: &[&str] = &[
    "fasta", "fa", "fna", "fsa", "fasta_nt", "fa_nt", "fna_nt", "fsa_nt",
];
pub const FASTQ_EXTENSIONS: &[&str] = &["fastq", "fq"];
pub const SIGNAL_EXTENSIONS: &[&str] = &["fast5", "pod5"];
// Recognized, but no decoder exists for them yet.
const RESERVED_SIGNAL_EXTENSIONS: &[&str] = &["slow5", "blow5"];

/// Input encodings a stream can decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileFormat {
    Fasta,
    Fastq,
    Fast5,
    Pod5,
}

impl FileFormat {
    /// Classify `path` by extension. Text formats may carry one `.gz` suffix;
    /// signal formats never do.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        if let Some(ext) = extension_of(path, false) {
            match ext.as_str() {
                "fast5" => return Ok(FileFormat::Fast5),
                "pod5" => return Ok(FileFormat::Pod5),
                _ => {}
            }
        }

        let ext = extension_of(path, true).unwrap_or_default();
        if FASTA_EXTENSIONS.contains(&ext.as_str()) {
            Ok(FileFormat::Fasta)
        } else if FASTQ_EXTENSIONS.contains(&ext.as_str()) {
            Ok(FileFormat::Fastq)
        } else {
            if RESERVED_SIGNAL_EXTENSIONS.contains(&ext.as_str()) {
                log::debug!("`{ext}` input is recognized but has no decoder");
            }
            Err(ConfigError::UnsupportedExtension {
                found: ext,
                allowed: Self::allowed_extensions(),
            })
        }
    }

    pub fn allowed_extensions() -> Vec<&'static str> {
        FASTA_EXTENSIONS
            .iter()
            .chain(FASTQ_EXTENSIONS)
            .chain(SIGNAL_EXTENSIONS)
            .copied()
            .collect()
    }

    pub fn is_signal(self) -> bool {
        matches!(self, FileFormat::Fast5 | FileFormat::Pod5)
    }

    pub fn name(self) -> &'static str {
        match self {
            FileFormat::Fasta => "FASTA",
            FileFormat::Fastq => "FASTQ",
            FileFormat::Fast5 => "FAST5",
            FileFormat::Pod5 => "POD5",
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
