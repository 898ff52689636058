/// Keeps the most recently used wordlist cached and writes passphrases from it.
pub mod diceware;
pub mod error;
/// Draws random words from a loaded wordlist, using the operating system's random source.
pub mod passphrase_generator;
pub mod settings;
/// Parsing of diceware wordlists, one `CODE<TAB>WORD` pair per line, like the lists from EFF
/// https://www.eff.org/deeplinks/2016/07/new-wordlists-random-passphrases
pub mod wordlist;

pub use crate::diceware::Diceware;
pub use crate::error::{Error, Result};

#[cfg(test)]
#[path = "tests/test_helpers.rs"]
mod test_helpers;
