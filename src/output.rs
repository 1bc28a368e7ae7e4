//! Output management module
//!
//! Writes the final line set to a file or stdout, or reports a preview /
//! dry-run summary instead of writing.

use colored::*;
use log::debug;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{CrunchError, Result};

/// Number of lines shown in preview mode
pub const PREVIEW_LIMIT: usize = 10;

/// Buffer size for file writing (8MB)
const WRITE_BUFFER_SIZE: usize = 8 * 1024 * 1024;

/// Buffered line writer
pub struct OutputWriter<W: Write> {
    writer: BufWriter<W>,
    lines_written: u64,
    bytes_written: u64,
}

impl OutputWriter<File> {
    /// Create (or truncate) an output file
    pub fn create(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| CrunchError::write(path.display().to_string(), e))?;

        Ok(Self::with_capacity(file, WRITE_BUFFER_SIZE))
    }
}

impl<W: Write> OutputWriter<W> {
    pub fn with_capacity(inner: W, buffer_size: usize) -> Self {
        Self {
            writer: BufWriter::with_capacity(buffer_size, inner),
            lines_written: 0,
            bytes_written: 0,
        }
    }

    /// Write a line followed by a newline
    pub fn write_line(&mut self, line: &str) -> std::io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.lines_written += 1;
        self.bytes_written += line.len() as u64 + 1;
        Ok(())
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }

    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}

/// What the sink did with the lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitMode {
    Write,
    Preview,
    DryRun,
}

impl EmitMode {
    /// Dry run takes priority over preview
    pub fn select(preview: bool, dry_run: bool) -> Self {
        if dry_run {
            Self::DryRun
        } else if preview {
            Self::Preview
        } else {
            Self::Write
        }
    }
}

/// Summary of one emit call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitReport {
    pub mode: EmitMode,
    pub lines: usize,
    pub target: String,
    pub bytes_written: u64,
}

/// Final destination for a line set
#[derive(Debug, Clone)]
pub struct OutputSink {
    destination: Option<PathBuf>,
    mode: EmitMode,
}

impl OutputSink {
    pub fn new(destination: Option<PathBuf>, preview: bool, dry_run: bool) -> Self {
        Self {
            destination,
            mode: EmitMode::select(preview, dry_run),
        }
    }

    pub fn mode(&self) -> EmitMode {
        self.mode
    }

    /// Human-readable name of the destination
    pub fn target(&self) -> String {
        match self.destination {
            Some(ref path) => path.display().to_string(),
            None => "stdout".to_string(),
        }
    }

    /// Emit `lines`; `console` receives stdout-bound text (summaries and,
    /// without a destination file, the lines themselves)
    pub fn emit<W: Write>(&self, lines: &[String], console: &mut W) -> Result<EmitReport> {
        let target = self.target();
        let console_err = |e| CrunchError::write("stdout", e);

        let bytes_written = match self.mode {
            EmitMode::DryRun => {
                writeln!(
                    console,
                    "{} Would write {} lines to {}",
                    "[DRY RUN]".yellow().bold(),
                    lines.len(),
                    target
                )
                .map_err(console_err)?;
                0
            }
            EmitMode::Preview => {
                write_preview(lines, console).map_err(console_err)?;
                0
            }
            EmitMode::Write => match self.destination {
                Some(ref path) => {
                    let mut writer = OutputWriter::create(path)?;
                    write_all(&mut writer, lines).map_err(|e| CrunchError::write(target.clone(), e))?
                }
                None => {
                    let mut writer = OutputWriter::with_capacity(&mut *console, 64 * 1024);
                    write_all(&mut writer, lines).map_err(console_err)?
                }
            },
        };

        debug!("Emitted {} lines ({:?}) to {}", lines.len(), self.mode, target);

        Ok(EmitReport {
            mode: self.mode,
            lines: lines.len(),
            target,
            bytes_written,
        })
    }
}

fn write_all<W: Write>(writer: &mut OutputWriter<W>, lines: &[String]) -> std::io::Result<u64> {
    for line in lines {
        writer.write_line(line)?;
    }
    writer.flush()?;
    debug!(
        "Flushed {} lines ({} bytes)",
        writer.lines_written(),
        writer.bytes_written()
    );
    Ok(writer.bytes_written())
}

fn write_preview<W: Write>(lines: &[String], console: &mut W) -> std::io::Result<()> {
    let shown = lines.len().min(PREVIEW_LIMIT);
    writeln!(
        console,
        "{}",
        format!("Preview (first {} of {} lines):", shown, lines.len()).cyan().bold()
    )?;

    for (index, line) in lines.iter().take(PREVIEW_LIMIT).enumerate() {
        writeln!(console, "{:>4}: {}", index + 1, line)?;
    }

    if lines.len() > PREVIEW_LIMIT {
        writeln!(console, "  ... and {} more lines", lines.len() - PREVIEW_LIMIT)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn lines(count: usize) -> Vec<String> {
        (1..=count).map(|i| format!("word{}", i)).collect()
    }

    #[test]
    fn test_output_writer() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.txt");

        let mut writer = OutputWriter::create(&path).unwrap();
        writer.write_line("hello").unwrap();
        writer.write_line("world").unwrap();
        writer.flush().unwrap();

        assert_eq!(writer.lines_written(), 2);
        assert_eq!(writer.bytes_written(), 12);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "hello\nworld\n");
    }

    #[test]
    fn test_mode_priority() {
        assert_eq!(EmitMode::select(true, true), EmitMode::DryRun);
        assert_eq!(EmitMode::select(true, false), EmitMode::Preview);
        assert_eq!(EmitMode::select(false, false), EmitMode::Write);
    }

    #[test]
    fn test_write_to_file_truncates() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");
        std::fs::write(&path, "stale\ncontent\nhere\n").unwrap();

        let sink = OutputSink::new(Some(path.clone()), false, false);
        let mut console = Vec::new();
        let report = sink.emit(&lines(2), &mut console).unwrap();

        assert_eq!(report.mode, EmitMode::Write);
        assert_eq!(report.lines, 2);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "word1\nword2\n");
        assert!(console.is_empty());
    }

    #[test]
    fn test_write_to_console() {
        let sink = OutputSink::new(None, false, false);
        let mut console = Vec::new();
        let report = sink.emit(&lines(3), &mut console).unwrap();

        assert_eq!(report.target, "stdout");
        assert_eq!(String::from_utf8(console).unwrap(), "word1\nword2\nword3\n");
    }

    #[test]
    fn test_preview_does_not_write() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");

        let sink = OutputSink::new(Some(path.clone()), true, false);
        let mut console = Vec::new();
        sink.emit(&lines(12), &mut console).unwrap();

        assert!(!path.exists());
        let text = String::from_utf8(console).unwrap();
        assert!(text.contains("   1: word1"));
        assert!(text.contains("  10: word10"));
        assert!(!text.contains("word11"));
        assert!(text.contains("... and 2 more lines"));
    }

    #[test]
    fn test_preview_short_list_has_no_remainder() {
        let sink = OutputSink::new(None, true, false);
        let mut console = Vec::new();
        sink.emit(&lines(3), &mut console).unwrap();

        let text = String::from_utf8(console).unwrap();
        assert!(text.contains("   3: word3"));
        assert!(!text.contains("more lines"));
    }

    #[test]
    fn test_dry_run_does_not_write() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");

        let sink = OutputSink::new(Some(path.clone()), true, true);
        let mut console = Vec::new();
        let report = sink.emit(&lines(5), &mut console).unwrap();

        assert_eq!(report.mode, EmitMode::DryRun);
        assert!(!path.exists());
        let text = String::from_utf8(console).unwrap();
        assert!(text.contains("Would write 5 lines to"));
        assert!(!text.contains("word1"));
    }
}
