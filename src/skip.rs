use std::collections::HashMap;
use std::path::Path;

/// Per-file count of leading records to drop, keyed by file basename.
///
/// Used to resume an interrupted run: the records already handled are
/// skipped when the file is opened again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipRegistry {
    by_basename: HashMap<String, u64>,
}

impl SkipRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<S: Into<String>>(&mut self, basename: S, n: u64) -> Option<u64> {
        self.by_basename.insert(basename.into(), n)
    }

    /// Skip count for `path`, looked up by its basename. Unknown files skip nothing.
    pub fn skip_count(&self, path: &Path) -> u64 {
        path.file_name()
            .and_then(|s| s.to_str())
            .and_then(|name| self.by_basename.get(name))
            .copied()
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.by_basename.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for SkipRegistry {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        Self {
            by_basename: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
