//! Scan command implementation

use super::OutputArgs;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{CodePointRecord, Location};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use runeclass_core::{is_graphic_char, is_printable_char};
use std::path::{Path, PathBuf};

/// Arguments for the scan command
#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Report characters that are not graphic instead of not printable
    #[arg(short, long)]
    pub graphic: bool,

    /// Do not report tabs and carriage returns
    #[arg(short = 'w', long)]
    pub allow_whitespace: bool,

    /// Stop recording findings in a file after this many (0 = unlimited)
    #[arg(short = 'm', long, value_name = "N")]
    pub max_findings: Option<usize>,

    /// Force parallel processing even for a single file
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads (default: from config, else all CPUs)
    #[arg(short = 'j', long, value_name = "N")]
    pub threads: Option<usize>,

    /// Exit with an error when anything is found
    #[arg(long)]
    pub fail_on_found: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// What a scan reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanOptions {
    /// Use the graphic predicate instead of the printable one
    pub graphic: bool,
    /// Skip `\t` and `\r`
    pub allow_whitespace: bool,
    /// Per-file cap on findings, 0 for none
    pub max_findings: usize,
}

impl ScanOptions {
    /// Merge command-line flags over the configuration file
    pub fn resolve(args: &ScanArgs, config: &CliConfig) -> Self {
        Self {
            graphic: args.graphic || config.scan.graphic,
            allow_whitespace: args.allow_whitespace || config.scan.allow_whitespace,
            max_findings: args
                .max_findings
                .unwrap_or(config.scan.max_findings_per_file),
        }
    }

    fn reports(&self, ch: char) -> bool {
        if self.allow_whitespace && matches!(ch, '\t' | '\r') {
            return false;
        }
        if self.graphic {
            !is_graphic_char(ch)
        } else {
            !is_printable_char(ch)
        }
    }
}

/// Find every reportable character in `text`
pub fn scan_text(text: &str, file: &str, options: &ScanOptions) -> Vec<CodePointRecord> {
    let mut findings = Vec::new();

    for (line_idx, line) in text.split('\n').enumerate() {
        for (col_idx, ch) in line.chars().enumerate() {
            if !options.reports(ch) {
                continue;
            }
            findings.push(CodePointRecord::new(ch as u32).at(Location {
                file: file.to_string(),
                line: line_idx + 1,
                column: col_idx + 1,
            }));
            if options.max_findings != 0 && findings.len() >= options.max_findings {
                log::debug!("{file}: stopped after {} finding(s)", findings.len());
                return findings;
            }
        }
    }

    findings
}

/// Read one file and scan it
pub fn scan_file(path: &Path, options: &ScanOptions) -> Result<Vec<CodePointRecord>> {
    let text = FileReader::read_text(path)?;
    log::debug!("Scanning {} ({} bytes)", path.display(), text.len());
    Ok(scan_text(&text, &path.display().to_string(), options))
}

impl ScanArgs {
    /// Execute the scan command
    pub fn execute(&self) -> Result<()> {
        let config = self.output.load_config()?;
        let options = ScanOptions::resolve(self, &config);
        log::info!("Starting scan");
        log::debug!("Options: {:?}", options);

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s) to scan", files.len());

        let mut progress = ProgressReporter::new(self.quiet);
        if files.len() > 1 {
            progress.init_files(files.len() as u64);
        }

        let threads = self.threads.unwrap_or_else(|| config.performance.threads());
        let results = if self.parallel || files.len() > 1 {
            self.scan_parallel(&files, &options, threads, &progress)?
        } else {
            self.scan_sequential(&files, &options, &progress)?
        };
        progress.finish();

        let mut formatter = self.output.formatter(&config)?;
        let mut total = 0;
        for record in results.iter().flatten() {
            formatter.format_record(record)?;
            total += 1;
        }
        formatter.finish()?;
        log::info!("Scan complete: {total} finding(s) in {} file(s)", files.len());

        if self.fail_on_found && total > 0 {
            return Err(CliError::FindingsPresent(total).into());
        }
        Ok(())
    }

    fn scan_sequential(
        &self,
        files: &[PathBuf],
        options: &ScanOptions,
        progress: &ProgressReporter,
    ) -> Result<Vec<Vec<CodePointRecord>>> {
        files
            .iter()
            .map(|path| -> Result<Vec<CodePointRecord>> {
                let findings = scan_file(path, options)?;
                progress.file_completed(&path.display().to_string(), findings.len());
                Ok(findings)
            })
            .collect()
    }

    fn scan_parallel(
        &self,
        files: &[PathBuf],
        options: &ScanOptions,
        threads: usize,
        progress: &ProgressReporter,
    ) -> Result<Vec<Vec<CodePointRecord>>> {
        log::debug!("Scanning in parallel with {threads} thread(s)");
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to build thread pool")?;

        pool.install(|| {
            files
                .par_iter()
                .map(|path| -> Result<Vec<CodePointRecord>> {
                    let findings = scan_file(path, options)?;
                    progress.file_completed(&path.display().to_string(), findings.len());
                    Ok(findings)
                })
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(input: Vec<String>) -> ScanArgs {
        ScanArgs {
            input,
            graphic: false,
            allow_whitespace: false,
            max_findings: None,
            parallel: false,
            threads: None,
            fail_on_found: false,
            quiet: true,
            output: OutputArgs::default(),
        }
    }

    #[test]
    fn test_scan_text_positions() {
        let text = "plain line\nta\tb\u{00ad}c\n";
        let findings = scan_text(text, "x.txt", &ScanOptions::default());

        assert_eq!(findings.len(), 2);
        let tab = findings[0].location.as_ref().unwrap();
        assert_eq!((tab.line, tab.column), (2, 3));
        assert_eq!(findings[0].code_point, "U+0009");
        let shy = findings[1].location.as_ref().unwrap();
        assert_eq!((shy.line, shy.column), (2, 5));
        assert_eq!(findings[1].code_point, "U+00AD");
    }

    #[test]
    fn test_newlines_never_reported() {
        let findings = scan_text("a\n\nb\n", "x", &ScanOptions::default());
        assert!(findings.is_empty());
    }

    #[test]
    fn test_crlf_reported_unless_allowed() {
        let text = "one\r\ntwo\r\n";
        assert_eq!(scan_text(text, "x", &ScanOptions::default()).len(), 2);

        let options = ScanOptions {
            allow_whitespace: true,
            ..ScanOptions::default()
        };
        assert!(scan_text(text, "x", &options).is_empty());
    }

    #[test]
    fn test_graphic_mode_accepts_space_separators() {
        let text = "a\u{00a0}b\u{3000}c\u{200b}";
        assert_eq!(scan_text(text, "x", &ScanOptions::default()).len(), 3);

        let options = ScanOptions {
            graphic: true,
            ..ScanOptions::default()
        };
        let findings = scan_text(text, "x", &options);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].code_point, "U+200B");
    }

    #[test]
    fn test_max_findings() {
        let options = ScanOptions {
            max_findings: 2,
            ..ScanOptions::default()
        };
        assert_eq!(scan_text("\u{1}\u{2}\u{3}\u{4}", "x", &options).len(), 2);
    }

    #[test]
    fn test_columns_count_characters_not_bytes() {
        let findings = scan_text("日本\u{7f}", "x", &ScanOptions::default());
        assert_eq!(findings[0].location.as_ref().unwrap().column, 3);
    }

    #[test]
    fn test_options_merge_config() {
        let mut config = CliConfig::default();
        config.scan.graphic = true;
        config.scan.max_findings_per_file = 5;

        let mut scan_args = args(vec![]);
        let options = ScanOptions::resolve(&scan_args, &config);
        assert!(options.graphic);
        assert_eq!(options.max_findings, 5);

        scan_args.max_findings = Some(0);
        scan_args.allow_whitespace = true;
        let options = ScanOptions::resolve(&scan_args, &config);
        assert_eq!(options.max_findings, 0);
        assert!(options.allow_whitespace);
    }

    #[test]
    fn test_execute_parallel_keeps_file_order() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "\u{1}").unwrap();
        fs::write(temp_dir.path().join("b.txt"), "clean").unwrap();
        fs::write(temp_dir.path().join("c.txt"), "\u{2}\u{3}").unwrap();
        let out_path = temp_dir.path().join("report.json");

        let mut scan_args = args(vec![temp_dir.path().join("*.txt").display().to_string()]);
        scan_args.threads = Some(2);
        scan_args.output.output = Some(out_path.clone());
        scan_args.output.format = Some(crate::output::OutputFormat::Json);
        scan_args.execute().unwrap();

        let records: Vec<CodePointRecord> =
            serde_json::from_str(&fs::read_to_string(out_path).unwrap()).unwrap();
        let cps: Vec<&str> = records.iter().map(|r| r.code_point.as_str()).collect();
        assert_eq!(cps, vec!["U+0001", "U+0002", "U+0003"]);
        assert!(records[0].location.as_ref().unwrap().file.ends_with("a.txt"));
    }

    #[test]
    fn test_fail_on_found() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("bad.txt");
        fs::write(&file, "bell\u{7}").unwrap();

        let mut scan_args = args(vec![file.display().to_string()]);
        scan_args.fail_on_found = true;
        scan_args.output.output = Some(temp_dir.path().join("out.txt"));
        let err = scan_args.execute().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::FindingsPresent(1))
        ));
    }
}
