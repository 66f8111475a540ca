use crate::options::SortKey;
use serde::Serialize;
use std::cmp::Ordering;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileStats {
    #[serde(skip)]
    pub path: PathBuf,
    /// Display name: the file name, or the `/`-separated path relative to the
    /// scanned root when walking recursively.
    pub name: String,
    pub lines: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_blank: Option<usize>,
}

impl FileStats {
    pub fn new(path: PathBuf, name: impl Into<String>) -> Self {
        Self {
            path,
            name: name.into(),
            lines: 0,
            non_blank: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub files: usize,
    pub lines: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_blank: Option<usize>,
}

impl Summary {
    /// Totals over `files`. `non_blank` is `Some` only when non-blank
    /// counting was enabled for the run, so an empty run still reports zero.
    pub fn from_files(files: &[FileStats], count_non_blank: bool) -> Self {
        let init = Self {
            files: 0,
            lines: 0,
            non_blank: count_non_blank.then_some(0),
        };
        files.iter().fold(init, |mut acc, f| {
            acc.files += 1;
            acc.lines += f.lines;
            if let Some(total) = acc.non_blank.as_mut() {
                *total += f.non_blank.unwrap_or(0);
            }
            acc
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct RunResult {
    pub files: Vec<FileStats>,
    pub summary: Summary,
}

pub fn sort_stats(stats: &mut [FileStats], key: SortKey, descending: bool) {
    stats.sort_by(|a, b| {
        let order = match key {
            SortKey::Name => Ordering::Equal,
            SortKey::Lines => a.lines.cmp(&b.lines),
            SortKey::NonBlank => a.non_blank.unwrap_or(0).cmp(&b.non_blank.unwrap_or(0)),
        }
        .then_with(|| a.name.cmp(&b.name));
        if descending { order.reverse() } else { order }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(name: &str, lines: usize, non_blank: Option<usize>) -> FileStats {
        FileStats {
            path: PathBuf::from(name),
            name: name.to_string(),
            lines,
            non_blank,
        }
    }

    #[test]
    fn summary_sums_per_file_counts() {
        let files = vec![stats("a.cc", 3, Some(2)), stats("b.hh", 0, Some(0)), stats("c.cc", 7, Some(5))];
        let summary = Summary::from_files(&files, true);

        assert_eq!(summary.files, 3);
        assert_eq!(summary.lines, 10);
        assert_eq!(summary.non_blank, Some(7));
    }

    #[test]
    fn summary_of_empty_run_is_zero() {
        assert_eq!(
            Summary::from_files(&[], true),
            Summary { files: 0, lines: 0, non_blank: Some(0) }
        );
        assert_eq!(Summary::from_files(&[], false).non_blank, None);
    }

    #[test]
    fn sort_by_lines_breaks_ties_by_name() {
        let mut files = vec![stats("z.cc", 2, None), stats("a.cc", 2, None), stats("m.cc", 1, None)];
        sort_stats(&mut files, SortKey::Lines, false);
        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["m.cc", "a.cc", "z.cc"]);
    }

    #[test]
    fn sort_descending_reverses() {
        let mut files = vec![stats("a.cc", 1, Some(1)), stats("b.cc", 5, Some(4))];
        sort_stats(&mut files, SortKey::NonBlank, true);
        assert_eq!(files[0].name, "b.cc");
    }

    #[test]
    fn serializes_without_non_blank_when_absent() {
        let json = serde_json::to_string(&stats("a.cc", 3, None)).unwrap();
        assert_eq!(json, r#"{"name":"a.cc","lines":3}"#);
    }
}
