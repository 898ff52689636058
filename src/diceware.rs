use std::{io::Write, path::Path};

use log::debug;

use crate::{
    error::{Error, Result},
    passphrase_generator,
    settings::Settings,
    wordlist::{FsReader, WordlistReader, WordlistStore},
};

/// Generates passphrases, keeping the last loaded wordlist around so that
/// repeated calls with the same file only parse it once.
///
/// At most one wordlist is held. Asking for a different file drops the
/// current one before the new one is read.
pub struct Diceware<R: WordlistReader = FsReader> {
    reader: R,
    max_line_length: usize,
    store: Option<WordlistStore>,
}

impl Diceware<FsReader> {
    pub fn new(settings: &Settings) -> Diceware<FsReader> {
        Diceware::with_reader(FsReader, settings)
    }
}

impl<R: WordlistReader> Diceware<R> {
    pub fn with_reader(reader: R, settings: &Settings) -> Diceware<R> {
        Diceware {
            reader,
            max_line_length: settings.max_line_length,
            store: None,
        }
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    /// Path of the cached wordlist, if any.
    pub fn cached_path(&self) -> Option<&Path> {
        self.store.as_ref().map(|store| store.path())
    }

    /// Returns the wordlist for `path`, reading it only if it isn't the cached one.
    ///
    /// On failure the cache is left empty.
    pub fn ensure_loaded(&mut self, path: &Path) -> Result<&WordlistStore> {
        let store = match self.store.take() {
            Some(store) if store.is_from(path) => {
                debug!("wordlist cache hit for {}", path.display());
                store
            }
            previous => {
                if let Some(previous) = previous {
                    debug!("dropping cached wordlist {}", previous.path().display());
                }
                debug!("wordlist cache miss for {}", path.display());
                WordlistStore::load_with(&self.reader, path, self.max_line_length)?
            }
        };

        Ok(&*self.store.insert(store))
    }

    /// Writes one passphrase of `wordcount` words from the wordlist at `path` to `out`.
    ///
    /// Failures writing to `out` are reported as [`Error::Output`].
    pub fn generate<W: Write>(&mut self, path: &Path, wordcount: usize, out: &mut W) -> Result<()> {
        let store = self.ensure_loaded(path)?;
        let passphrase = passphrase_generator::generate(store, wordcount)?;
        out.write_all(&passphrase.line()).map_err(Error::Output)
    }
}

#[cfg(test)]
#[path = "tests/diceware.rs"]
mod diceware_tests;
