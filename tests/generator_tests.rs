use std::collections::HashSet;

use passgen::generator::{
    Alphabet, DIGITS, LETTERS, MAX_LENGTH, MIN_LENGTH, PasswordConfig, SYMBOLS, generate,
    generate_with,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn config(length: usize, include_digits: bool, include_symbols: bool) -> PasswordConfig {
    PasswordConfig {
        length,
        include_digits,
        include_symbols,
    }
}

fn all_in(password: &str, allowed: &str) -> bool {
    password.chars().all(|c| allowed.contains(c))
}

#[test]
fn test_length_matches_config() {
    for length in MIN_LENGTH..=MAX_LENGTH {
        for (digits, symbols) in [(false, false), (true, false), (false, true), (true, true)] {
            let password = generate(&config(length, digits, symbols));
            assert_eq!(password.chars().count(), length, "Wrong length for {}", length);
        }
    }
}

#[test]
fn test_letters_only() {
    for _ in 0..200 {
        let password = generate(&config(8, false, false));
        assert_eq!(password.len(), 8);
        assert!(password.chars().all(|c| c.is_ascii_alphabetic()));
    }
}

#[test]
fn test_full_alphabet_twenty() {
    let allowed = format!("{}{}{}", LETTERS, DIGITS, SYMBOLS);
    for _ in 0..200 {
        let password = generate(&config(20, true, true));
        assert_eq!(password.len(), 20);
        assert!(all_in(&password, &allowed), "Invalid password: {}", password);
    }
}

#[test]
fn test_letters_and_digits_six() {
    let allowed = format!("{}{}", LETTERS, DIGITS);
    assert_eq!(allowed.len(), 62);
    for _ in 0..200 {
        let password = generate(&config(6, true, false));
        assert_eq!(password.len(), 6);
        assert!(all_in(&password, &allowed));
        assert!(!password.chars().any(|c| SYMBOLS.contains(c)));
    }
}

#[test]
fn test_digits_alphabet_is_superset() {
    let alphabet = Alphabet::for_config(&config(8, true, false));
    assert!(LETTERS.chars().all(|c| alphabet.contains(c)));
    assert!(DIGITS.chars().all(|c| alphabet.contains(c)));
}

#[test]
fn test_repeated_calls_differ() {
    let cfg = config(20, true, true);
    assert_ne!(generate(&cfg), generate(&cfg));

    let passwords: HashSet<String> = (0..1000).map(|_| generate(&config(12, false, false))).collect();
    assert!(
        passwords.len() > 990,
        "Generated passwords lack sufficient randomness"
    );
}

#[test]
fn test_no_validation_in_generator() {
    assert_eq!(generate(&config(0, true, true)), "");
    assert_eq!(generate(&config(64, false, false)).len(), 64);
}

#[test]
fn test_seeded_rng_reproducible() {
    let cfg = config(20, true, true);
    let mut a = StdRng::seed_from_u64(2024);
    let mut b = StdRng::seed_from_u64(2024);
    for _ in 0..10 {
        assert_eq!(generate_with(&cfg, &mut a), generate_with(&cfg, &mut b));
    }
}
