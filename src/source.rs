//! Source reading module
//!
//! Decodes plain, gzip-compressed and zip-wrapped wordlists into lines.
//! The container format is resolved once per source from its extension.

use bstr::ByteSlice;
use flate2::read::MultiGzDecoder;
use log::{debug, warn};
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use zip::result::ZipError;
use zip::ZipArchive;

use crate::error::{CrunchError, Result};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Only zip entries with this suffix are considered text
const TEXT_ENTRY_SUFFIX: &str = ".txt";

/// How malformed UTF-8 is handled while decoding lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum DecodeMode {
    /// Drop undecodable byte sequences and keep the rest of the line
    #[default]
    Lossy,
    /// Fail the read on the first malformed line
    Strict,
}

/// Options that apply to every source read in one invocation
#[derive(Debug, Clone, Default)]
pub struct ReadOptions {
    pub decode: DecodeMode,
    /// Explicit entry to read from zip archives instead of the first text entry
    pub zip_entry: Option<String>,
}

/// Container format of a source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Plain,
    Gzip,
    ZipText,
}

impl SourceFormat {
    /// Infer the format from the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("gz") => Self::Gzip,
            Some("zip") => Self::ZipText,
            _ => Self::Plain,
        }
    }

    /// Load the raw text bytes of `path`
    fn load(self, path: &Path, options: &ReadOptions) -> Result<Payload> {
        match self {
            Self::Plain => load_plain(path),
            Self::Gzip => load_gzip(path).map(Payload::Owned),
            Self::ZipText => load_zip_entry(path, options.zip_entry.as_deref()).map(Payload::Owned),
        }
    }
}

/// Raw bytes of a source, either mapped or decompressed
enum Payload {
    Empty,
    Mapped(memmap2::Mmap),
    Owned(Vec<u8>),
}

impl Deref for Payload {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            Self::Empty => &[],
            Self::Mapped(mmap) => mmap,
            Self::Owned(bytes) => bytes,
        }
    }
}

/// A readable wordlist: a path plus its resolved format
#[derive(Debug, Clone)]
pub struct Source {
    path: PathBuf,
    format: SourceFormat,
}

impl Source {
    /// Resolve a source, failing with `NotFound` if the path does not exist
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CrunchError::NotFound(path.to_path_buf()));
        }

        let format = SourceFormat::from_path(path);
        debug!("Resolved {:?} as {:?}", path, format);

        Ok(Self {
            path: path.to_path_buf(),
            format,
        })
    }

    pub fn format(&self) -> SourceFormat {
        self.format
    }

    /// Read every line of the source into memory
    pub fn read(&self, options: &ReadOptions) -> Result<Vec<String>> {
        let payload = self.format.load(&self.path, options)?;
        let lines = decode_lines(&payload, options.decode, &self.path)?;
        debug!("Read {} lines from {:?}", lines.len(), self.path);
        Ok(lines)
    }
}

/// Open and read a source in one step
pub fn read_lines(path: impl AsRef<Path>, options: &ReadOptions) -> Result<Vec<String>> {
    Source::open(path)?.read(options)
}

fn load_plain(path: &Path) -> Result<Payload> {
    let file = File::open(path).map_err(|e| CrunchError::read(path, e))?;
    let len = file.metadata().map_err(|e| CrunchError::read(path, e))?.len();
    if len == 0 {
        return Ok(Payload::Empty);
    }

    let mmap = unsafe { memmap2::Mmap::map(&file) }.map_err(|e| CrunchError::read(path, e))?;
    Ok(Payload::Mapped(mmap))
}

fn load_gzip(path: &Path) -> Result<Vec<u8>> {
    let file = File::open(path).map_err(|e| CrunchError::read(path, e))?;
    let mut decoder = MultiGzDecoder::new(BufReader::new(file));

    let mut bytes = Vec::new();
    decoder
        .read_to_end(&mut bytes)
        .map_err(|e| CrunchError::read(path, e))?;
    Ok(bytes)
}

fn load_zip_entry(path: &Path, entry: Option<&str>) -> Result<Vec<u8>> {
    let archive_err = |source: ZipError| CrunchError::Archive {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(|e| CrunchError::read(path, e))?;
    let mut archive = ZipArchive::new(BufReader::new(file)).map_err(archive_err)?;

    let mut bytes = Vec::new();
    match entry {
        Some(name) => {
            let mut file = archive.by_name(name).map_err(|e| match e {
                ZipError::FileNotFound => CrunchError::EntryNotFound {
                    path: path.to_path_buf(),
                    entry: name.to_string(),
                },
                other => archive_err(other),
            })?;
            file.read_to_end(&mut bytes)
                .map_err(|e| CrunchError::read(path, e))?;
        }
        None => {
            let Some(index) = first_text_entry(&mut archive).map_err(archive_err)? else {
                warn!("No {} entry found in {:?}", TEXT_ENTRY_SUFFIX, path);
                return Ok(bytes);
            };
            let mut file = archive.by_index(index).map_err(archive_err)?;
            debug!("Reading zip entry {:?} from {:?}", file.name(), path);
            file.read_to_end(&mut bytes)
                .map_err(|e| CrunchError::read(path, e))?;
        }
    }

    Ok(bytes)
}

/// Index of the first non-directory entry whose name ends in `.txt`
fn first_text_entry<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
) -> std::result::Result<Option<usize>, ZipError> {
    for index in 0..archive.len() {
        let entry = archive.by_index_raw(index)?;
        if !entry.is_dir() && entry.name().to_ascii_lowercase().ends_with(TEXT_ENTRY_SUFFIX) {
            return Ok(Some(index));
        }
    }
    Ok(None)
}

/// Split raw bytes into lines, stripping `\n` / `\r\n` terminators
fn decode_lines(bytes: &[u8], mode: DecodeMode, path: &Path) -> Result<Vec<String>> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    let mut lines = Vec::new();
    let mut dropped = 0usize;

    for (index, raw) in bytes.lines().enumerate() {
        match raw.to_str() {
            Ok(line) => lines.push(line.to_owned()),
            Err(_) => match mode {
                DecodeMode::Strict => {
                    return Err(CrunchError::Decode {
                        path: path.to_path_buf(),
                        line: index + 1,
                    });
                }
                DecodeMode::Lossy => {
                    let (line, invalid) = drop_invalid(raw);
                    dropped += invalid;
                    lines.push(line);
                }
            },
        }
    }

    if dropped > 0 {
        warn!("Dropped {} undecodable bytes from {:?}", dropped, path);
    }

    Ok(lines)
}

fn drop_invalid(raw: &[u8]) -> (String, usize) {
    let mut line = String::with_capacity(raw.len());
    let mut invalid = 0;

    for chunk in ByteSlice::utf8_chunks(raw) {
        line.push_str(chunk.valid());
        invalid += chunk.invalid().len();
    }

    (line, invalid)
}
