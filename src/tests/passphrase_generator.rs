use super::*;

use rand::{rngs::StdRng, SeedableRng};

use crate::test_helpers::{empty_store, store_from, store_from_bytes, DICE, FRUIT};

#[test]
fn generate_from_fruit() {
    let store = store_from(FRUIT);

    let passphrase = generate(&store, 2).unwrap();
    let line = String::from_utf8(passphrase.line().to_vec()).unwrap();

    let (first, second) = line
        .strip_suffix('\n')
        .and_then(|l| l.split_once(' '))
        .unwrap();
    for word in [first, second] {
        assert!(
            ["apple", "banana", "cherry"].contains(&word),
            "unexpected word {word:?}"
        );
    }
}

#[test]
fn generate_returns_requested_number_of_words() {
    let store = store_from(DICE);

    for wordcount in [1, 2, 6, 32] {
        let passphrase = generate(&store, wordcount).unwrap();
        let line = String::from_utf8(passphrase.line().to_vec()).unwrap();

        assert_eq!(wordcount, passphrase.len());
        assert_eq!(wordcount, line.trim_end_matches('\n').split(' ').count());
        assert!(line.ends_with('\n'));
        assert!(!line.ends_with(" \n"));
        for word in passphrase.words() {
            assert!(store.words().contains(word));
        }
    }
}

#[test]
fn single_word_list_repeats() {
    let store = store_from("11111\tonly\n");

    let passphrase = generate(&store, 4).unwrap();

    assert_eq!(b"only only only only\n".to_vec(), *passphrase.line());
}

#[test]
fn latin1_words_pass_through() {
    let store = store_from_bytes(b"11\tm\xfcde\n");

    let passphrase = generate(&store, 2).unwrap();

    assert_eq!(b"m\xfcde m\xfcde\n".to_vec(), *passphrase.line());
}

#[test]
fn zero_words_is_rejected() {
    let store = store_from(FRUIT);

    let err = generate(&store, 0).unwrap_err();

    assert_eq!(Error::InvalidArgument("word count must be at least 1"), err);
}

#[test]
fn empty_store_is_rejected() {
    let store = empty_store();

    let err = generate(&store, 3).unwrap_err();

    assert_eq!(Error::EmptyWordlist, err);
}

#[test]
fn same_seed_same_words() {
    let store = store_from(DICE);

    let a = generate_with_rng(&store, 8, &mut StdRng::seed_from_u64(7)).unwrap();
    let b = generate_with_rng(&store, 8, &mut StdRng::seed_from_u64(7)).unwrap();

    assert_eq!(a.words(), b.words());
}

#[test]
fn draws_are_roughly_uniform() {
    let store = store_from(DICE);
    let draws = 100_000;

    let passphrase = generate(&store, draws).unwrap();

    let mut counts = [0usize; 6];
    for word in passphrase.words() {
        let index = store.words().iter().position(|w| w == word).unwrap();
        counts[index] += 1;
    }

    // expected is 16666, a fair source stays well inside 5% of that
    let expected = draws / 6;
    for (i, count) in counts.iter().enumerate() {
        let deviation = (*count as i64 - expected as i64).unsigned_abs() as usize;
        assert!(
            deviation < expected / 20,
            "{} drawn {count} times, expected about {expected}",
            String::from_utf8_lossy(&store.words()[i])
        );
    }
}

#[test]
fn debug_does_not_show_words() {
    let store = store_from("1\tsecretword\n");

    let passphrase = generate(&store, 2).unwrap();

    assert_eq!("Passphrase { words: 2 }", format!("{passphrase:?}"));
}
