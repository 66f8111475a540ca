// src/presentation.rs
use crate::config::Config;
use serde::Serialize;
use srclines_engine::options::{OutputFormat, OutputMode};
use srclines_engine::stats::{FileStats, RunResult, Summary};
use std::io::{self, Write};

pub fn print_results(result: &RunResult, config: &Config) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_results(&mut out, result, config)?;
    out.flush()
}

pub fn write_results<W: Write>(out: &mut W, result: &RunResult, config: &Config) -> io::Result<()> {
    let files: &[FileStats] = match config.output_mode {
        OutputMode::Full => &result.files,
        OutputMode::TotalOnly => &[],
    };

    match config.format {
        OutputFormat::Text => write_text(out, files, &result.summary),
        OutputFormat::Json => write_json(out, files, &result.summary, config.output_mode),
        OutputFormat::Jsonl => write_jsonl(out, files, &result.summary),
    }
}

fn write_text<W: Write>(out: &mut W, files: &[FileStats], summary: &Summary) -> io::Result<()> {
    for f in files {
        match f.non_blank {
            Some(nb) => writeln!(out, "{}: {} ({nb})", f.name, f.lines)?,
            None => writeln!(out, "{}: {}", f.name, f.lines)?,
        }
    }

    write!(out, "Files: {}; Lines: {}", summary.files, summary.lines)?;
    if let Some(nb) = summary.non_blank {
        write!(out, "; Non blank lines: {nb}")?;
    }
    writeln!(out)
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    files: Option<&'a [FileStats]>,
    summary: &'a Summary,
}

fn write_json<W: Write>(
    out: &mut W,
    files: &[FileStats],
    summary: &Summary,
    mode: OutputMode,
) -> io::Result<()> {
    let report = JsonReport {
        files: matches!(mode, OutputMode::Full).then_some(files),
        summary,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)
}

fn write_jsonl<W: Write>(out: &mut W, files: &[FileStats], summary: &Summary) -> io::Result<()> {
    for f in files {
        let mut v = serde_json::to_value(f)?;
        if let Some(obj) = v.as_object_mut() {
            obj.insert("type".to_string(), "file".into());
        }
        writeln!(out, "{v}")?;
    }

    let mut total = serde_json::json!({
        "type": "total",
        "version": crate::VERSION,
        "files": summary.files,
        "lines": summary.lines,
    });
    if let (Some(nb), Some(obj)) = (summary.non_blank, total.as_object_mut()) {
        obj.insert("non_blank".to_string(), nb.into());
    }
    writeln!(out, "{total}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn file(name: &str, lines: usize, non_blank: Option<usize>) -> FileStats {
        FileStats {
            path: PathBuf::from("src").join(name),
            name: name.to_string(),
            lines,
            non_blank,
        }
    }

    fn result(count_non_blank: bool) -> RunResult {
        let files = if count_non_blank {
            vec![file("a.cc", 3, Some(2)), file("b.hh", 0, Some(0))]
        } else {
            vec![file("a.cc", 3, None), file("b.hh", 0, None)]
        };
        let summary = Summary::from_files(&files, count_non_blank);
        RunResult { files, summary }
    }

    fn render(result: &RunResult, config: &Config) -> String {
        let mut buf = Vec::new();
        write_results(&mut buf, result, config).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn text_with_non_blank_counts() {
        let out = render(&result(true), &Config::default());
        assert_eq!(
            out,
            "a.cc: 3 (2)\nb.hh: 0 (0)\nFiles: 2; Lines: 3; Non blank lines: 2\n"
        );
    }

    #[test]
    fn text_without_non_blank_counts() {
        let config = Config {
            count_non_blank: false,
            ..Config::default()
        };
        let out = render(&result(false), &config);
        assert_eq!(out, "a.cc: 3\nb.hh: 0\nFiles: 2; Lines: 3\n");
    }

    #[test]
    fn empty_run_still_prints_summary() {
        let empty = RunResult {
            files: vec![],
            summary: Summary::from_files(&[], true),
        };
        assert_eq!(
            render(&empty, &Config::default()),
            "Files: 0; Lines: 0; Non blank lines: 0\n"
        );
    }

    #[test]
    fn summary_only_text() {
        let config = Config {
            output_mode: OutputMode::TotalOnly,
            ..Config::default()
        };
        assert_eq!(
            render(&result(true), &config),
            "Files: 2; Lines: 3; Non blank lines: 2\n"
        );
    }

    #[test]
    fn json_report() {
        let config = Config {
            format: OutputFormat::Json,
            ..Config::default()
        };
        let v: serde_json::Value = serde_json::from_str(&render(&result(true), &config)).unwrap();

        assert_eq!(v["files"][0]["name"], "a.cc");
        assert_eq!(v["files"][0]["non_blank"], 2);
        assert_eq!(v["summary"]["files"], 2);
        assert_eq!(v["summary"]["lines"], 3);
        assert_eq!(v["summary"]["non_blank"], 2);
    }

    #[test]
    fn json_summary_only_omits_files() {
        let config = Config {
            format: OutputFormat::Json,
            output_mode: OutputMode::TotalOnly,
            count_non_blank: false,
            ..Config::default()
        };
        let v: serde_json::Value = serde_json::from_str(&render(&result(false), &config)).unwrap();

        assert!(v.get("files").is_none());
        assert!(v["summary"].get("non_blank").is_none());
    }

    #[test]
    fn jsonl_records() {
        let config = Config {
            format: OutputFormat::Jsonl,
            ..Config::default()
        };
        let out = render(&result(true), &config);
        let records: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0]["type"], "file");
        assert_eq!(records[1]["name"], "b.hh");
        assert_eq!(records[2]["type"], "total");
        assert_eq!(records[2]["files"], 2);
        assert_eq!(records[2]["non_blank"], 2);
        assert_eq!(records[2]["version"], crate::VERSION);
    }
}
