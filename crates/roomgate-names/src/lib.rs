//! Random room names for Roomgate.
//!
//! Names are assembled from capitalised word-list tokens with no separator
//! between them (`BraveOwlsDanceQuietly`), so every generated name is a
//! valid URL path segment without escaping.
//!
//! ```
//! let name = roomgate_names::generate();
//! assert!(!name.is_empty());
//! assert!(name.as_str().chars().all(|c| c.is_ascii_alphabetic()));
//! ```

mod words;

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::words::{ADJECTIVES, ADVERBS, PLACES, PLURAL_NOUNS, VERBS};

// ---------------------------------------------------------------------------
// RoomName
// ---------------------------------------------------------------------------

/// A machine-generated room identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomName(String);

impl RoomName {
    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Always `false` for generated names.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the name, returning the inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RoomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RoomName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<RoomName> for String {
    fn from(name: RoomName) -> Self {
        name.0
    }
}

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
enum Token {
    Adjective,
    PluralNoun,
    Verb,
    Adverb,
    Place,
    /// A fixed connective word.
    Literal(&'static str),
}

/// The shapes a room name can take. Picked uniformly per name.
const PATTERNS: &[&[Token]] = &[
    &[Token::Adjective, Token::PluralNoun, Token::Verb, Token::Adverb],
    &[Token::PluralNoun, Token::Verb, Token::Adverb],
    &[Token::Adjective, Token::PluralNoun, Token::Verb],
    &[Token::PluralNoun, Token::Verb, Token::Literal("In"), Token::Place],
    &[
        Token::Adjective,
        Token::PluralNoun,
        Token::Literal("From"),
        Token::Place,
    ],
];

fn pick<R: Rng + ?Sized>(rng: &mut R, list: &[&'static str]) -> &'static str {
    list[rng.random_range(0..list.len())]
}

fn assemble<R: Rng + ?Sized>(rng: &mut R) -> RoomName {
    let pattern = PATTERNS[rng.random_range(0..PATTERNS.len())];
    let mut name = String::with_capacity(32);
    for token in pattern {
        let word = match token {
            Token::Adjective => pick(rng, ADJECTIVES),
            Token::PluralNoun => pick(rng, PLURAL_NOUNS),
            Token::Verb => pick(rng, VERBS),
            Token::Adverb => pick(rng, ADVERBS),
            Token::Place => pick(rng, PLACES),
            Token::Literal(word) => word,
        };
        name.push_str(word);
    }
    RoomName(name)
}

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

/// Generates a fresh room name from the thread-local RNG.
pub fn generate() -> RoomName {
    assemble(&mut rand::rng())
}

/// A room name source that owns its RNG.
///
/// Use [`RoomNameGenerator::seeded`] when a reproducible sequence is
/// needed; two generators with the same seed yield the same names.
#[derive(Debug, Clone)]
pub struct RoomNameGenerator {
    rng: StdRng,
}

impl RoomNameGenerator {
    /// Creates a generator seeded from the thread-local RNG.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Creates a generator with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Produces the next room name.
    pub fn generate(&mut self) -> RoomName {
        assemble(&mut self.rng)
    }
}

impl Default for RoomNameGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_names_are_non_empty_letters_only() {
        let mut generator = RoomNameGenerator::seeded(7);
        for _ in 0..500 {
            let name = generator.generate();
            assert!(!name.is_empty());
            assert!(
                name.as_str().chars().all(|c| c.is_ascii_alphabetic()),
                "unexpected character in {name}"
            );
        }
    }

    #[test]
    fn test_generated_names_have_no_separators() {
        for _ in 0..200 {
            let name = generate();
            for sep in [' ', '-', '_', '.', '/', '#', '?', '%'] {
                assert!(!name.as_str().contains(sep), "{name} contains {sep:?}");
            }
        }
    }

    #[test]
    fn test_names_start_uppercase() {
        let mut generator = RoomNameGenerator::seeded(42);
        let name = generator.generate();
        assert!(name.as_str().starts_with(|c: char| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_seeded_generators_are_reproducible() {
        let mut a = RoomNameGenerator::seeded(1234);
        let mut b = RoomNameGenerator::seeded(1234);
        for _ in 0..20 {
            assert_eq!(a.generate(), b.generate());
        }
    }

    #[test]
    fn test_names_vary() {
        let mut generator = RoomNameGenerator::seeded(99);
        let names: std::collections::HashSet<_> =
            (0..50).map(|_| generator.generate()).collect();
        assert!(names.len() > 40, "only {} distinct names", names.len());
    }

    #[test]
    fn test_word_lists_are_capitalised_letters() {
        for list in [ADJECTIVES, PLURAL_NOUNS, VERBS, ADVERBS, PLACES] {
            for word in list {
                assert!(word.starts_with(|c: char| c.is_ascii_uppercase()), "{word}");
                assert!(word.chars().all(|c| c.is_ascii_alphabetic()), "{word}");
            }
        }
    }

    #[test]
    fn test_len_counts_characters() {
        let name = RoomName("BraveOwls".to_string());
        assert_eq!(name.len(), 9);
        assert_eq!(name.to_string(), "BraveOwls");
        assert_eq!(String::from(name), "BraveOwls");
    }
}
