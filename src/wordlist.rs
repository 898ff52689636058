use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::{Path, PathBuf},
};

use log::debug;

pub use crate::error::{Error, Result};

/// Longest line accepted by default, the terminating newline included.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 2048;

/// Where wordlist bytes come from.
pub trait WordlistReader {
    /// Opens the wordlist at `path` for buffered reading.
    fn open(&self, path: &Path) -> Result<Box<dyn BufRead>>;
}

/// Reads wordlists from the local filesystem.
pub struct FsReader;

impl WordlistReader for FsReader {
    fn open(&self, path: &Path) -> Result<Box<dyn BufRead>> {
        let file = File::open(path)?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// One line of a wordlist, `CODE<TAB>WORD<LF>`.
///
/// Both fields are raw bytes, a wordlist doesn't have to be UTF-8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordlistEntry {
    /// The dice roll code, kept as written. Nothing looks words up by it.
    pub code: Vec<u8>,
    pub word: Vec<u8>,
}

impl WordlistEntry {
    /// Parses a raw line, newline included. `line_number` is only used in errors.
    pub fn parse(line: &[u8], line_number: usize) -> Result<WordlistEntry> {
        let tab = line
            .iter()
            .position(|b| *b == b'\t')
            .ok_or(Error::MalformedLine(line_number, "missing tab"))?;

        let rest = &line[tab + 1..];
        let newline = rest
            .iter()
            .position(|b| *b == b'\n')
            .ok_or(Error::MalformedLine(line_number, "missing newline"))?;

        Ok(WordlistEntry {
            code: line[..tab].to_vec(),
            word: rest[..newline].to_vec(),
        })
    }
}

/// Parses every line of `input`. Stops at the first bad line, nothing partial is returned.
pub fn parse_entries<R: BufRead>(mut input: R, max_line_length: usize) -> Result<Vec<WordlistEntry>> {
    let mut entries = vec![];
    let mut line = Vec::with_capacity(64);
    let limit = (max_line_length as u64).saturating_add(1);

    loop {
        line.clear();
        let read = input.by_ref().take(limit).read_until(b'\n', &mut line)?;
        if read == 0 {
            break;
        }

        let line_number = entries.len() + 1;
        if line.len() > max_line_length {
            return Err(Error::LineTooLong(line_number, max_line_length));
        }

        entries.push(WordlistEntry::parse(&line, line_number)?);
    }

    Ok(entries)
}

/// A parsed wordlist. Never changed after loading, a new file means a new store.
pub struct WordlistStore {
    pub(crate) path: PathBuf,
    pub(crate) words: Vec<Vec<u8>>,
}

impl WordlistStore {
    /// Loads a wordlist from disk with the default line length limit.
    pub fn load(path: &Path) -> Result<WordlistStore> {
        WordlistStore::load_with(&FsReader, path, DEFAULT_MAX_LINE_LENGTH)
    }

    /// Loads a wordlist through `reader`.
    ///
    /// Fails with [`Error::EmptyWordlist`] when the file holds no lines, so a
    /// successfully loaded store always has at least one word.
    pub fn load_with<R: WordlistReader + ?Sized>(
        reader: &R,
        path: &Path,
        max_line_length: usize,
    ) -> Result<WordlistStore> {
        let input = reader.open(path)?;
        let entries = parse_entries(input, max_line_length)?;

        if entries.is_empty() {
            return Err(Error::EmptyWordlist);
        }

        debug!("loaded {} words from {}", entries.len(), path.display());

        Ok(WordlistStore {
            path: path.to_path_buf(),
            words: entries.into_iter().map(|entry| entry.word).collect(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[Vec<u8>] {
        &self.words
    }

    /// True if this store was loaded from exactly `path`, compared byte for byte.
    pub fn is_from(&self, path: &Path) -> bool {
        self.path.as_os_str() == path.as_os_str()
    }
}

#[cfg(test)]
#[path = "tests/wordlist.rs"]
mod wordlist_tests;
