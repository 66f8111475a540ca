use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::filesystem::Candidate;
use crate::stats::FileStats;

/// Line counts of one buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineCounts {
    pub lines: usize,
    pub non_blank: usize,
}

/// Read a qualifying file in full and count its lines.
///
/// Content is not required to be UTF-8: undecodable bytes are counted as
/// ordinary non-blank text instead of aborting the run.
///
/// # Errors
/// Returns [`EngineError::PermissionDenied`] or [`EngineError::FileRead`] when
/// the file cannot be read.
pub fn process_file(candidate: Candidate, config: &Config) -> Result<FileStats> {
    let Candidate { path, name } = candidate;
    let content = std::fs::read(&path).map_err(|e| EngineError::file_read(path.clone(), e))?;

    let counts = count_content(&content, config.count_non_blank);
    let mut stats = FileStats::new(path, name);
    stats.lines = counts.lines;
    if config.count_non_blank {
        stats.non_blank = Some(counts.non_blank);
    }

    log::debug!(
        "counted {}: {} lines, {} non-blank",
        stats.name,
        counts.lines,
        counts.non_blank
    );
    Ok(stats)
}

/// Count lines of `buf`. Line breaks are `\n`, `\r\n` and a lone `\r`; a
/// final segment without a terminator counts only if it is non-empty.
///
/// `non_blank` stays 0 unless `count_non_blank` is set.
pub fn count_content(buf: &[u8], count_non_blank: bool) -> LineCounts {
    if !count_non_blank && memchr::memchr(b'\r', buf).is_none() {
        return count_lf_only(buf);
    }

    let mut counts = LineCounts::default();
    for line in LineSegments::new(buf) {
        counts.lines += 1;
        if count_non_blank && !is_blank(line) {
            counts.non_blank += 1;
        }
    }
    counts
}

fn count_lf_only(buf: &[u8]) -> LineCounts {
    let mut lines = bytecount::count(buf, b'\n');
    // 末尾に改行がない場合の行カウント補正
    if buf.last().is_some_and(|&b| b != b'\n') {
        lines += 1;
    }
    LineCounts {
        lines,
        non_blank: 0,
    }
}

/// A line is blank when every character is whitespace. Terminator-only and
/// empty lines are blank. Invalid UTF-8 decodes to U+FFFD, which is not.
pub fn is_blank(line: &[u8]) -> bool {
    if line.is_ascii() {
        return line.iter().all(|&b| is_space(b as char));
    }
    String::from_utf8_lossy(line).chars().all(is_space)
}

/// Unicode `White_Space` plus the ASCII information separators
/// (U+001C..=U+001F), which text tools conventionally treat as whitespace.
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Iterator over the lines of a buffer, terminators excluded.
pub struct LineSegments<'a> {
    rest: &'a [u8],
}

impl<'a> LineSegments<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { rest: buf }
    }
}

impl<'a> Iterator for LineSegments<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        match memchr::memchr2(b'\n', b'\r', self.rest) {
            Some(i) => {
                let line = &self.rest[..i];
                let crlf = self.rest[i] == b'\r' && self.rest.get(i + 1) == Some(&b'\n');
                let skip = if crlf { 2 } else { 1 };
                self.rest = &self.rest[i + skip..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = &[];
                Some(line)
            }
        }
    }
}
