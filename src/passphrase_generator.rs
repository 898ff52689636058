use rand::{rngs::OsRng, CryptoRng, Rng};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use log::trace;

use crate::{
    error::{Error, Result},
    wordlist::WordlistStore,
};

/// Words drawn for one passphrase, wiped from memory when dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Passphrase {
    words: Vec<Vec<u8>>,
}

impl Passphrase {
    pub fn words(&self) -> &[Vec<u8>] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The words separated by single spaces and terminated by a newline.
    ///
    /// Bytes are passed through as read from the wordlist.
    pub fn line(&self) -> Zeroizing<Vec<u8>> {
        let capacity = self.words.iter().map(|w| w.len() + 1).sum();
        let mut line = Zeroizing::new(Vec::with_capacity(capacity));

        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                line.push(b' ');
            }
            line.extend_from_slice(word);
        }
        line.push(b'\n');

        line
    }
}

impl std::fmt::Debug for Passphrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Passphrase")
            .field("words", &self.words.len())
            .finish()
    }
}

/// Draws `wordcount` words from `store` using the operating system's random source.
pub fn generate(store: &WordlistStore, wordcount: usize) -> Result<Passphrase> {
    generate_with_rng(store, wordcount, &mut OsRng)
}

/// Draws `wordcount` words from `store`, uniformly and with replacement.
pub fn generate_with_rng<R: Rng + CryptoRng>(
    store: &WordlistStore,
    wordcount: usize,
    rng: &mut R,
) -> Result<Passphrase> {
    if wordcount == 0 {
        return Err(Error::InvalidArgument("word count must be at least 1"));
    }
    if store.is_empty() {
        return Err(Error::EmptyWordlist);
    }

    let words = store.words();
    let selected = (0..wordcount)
        .map(|_| words[rng.gen_range(0..words.len())].clone())
        .collect();

    trace!("drew {} of {} words", wordcount, words.len());

    Ok(Passphrase { words: selected })
}

#[cfg(test)]
#[path = "tests/passphrase_generator.rs"]
mod passphrase_generator_tests;
