//! Randomized text from placeholder templates.
//!
//! `template::expand` turns `key-%CHAR%%num%%num%` into something like
//! `key-Q07`. The samplers behind it (`generators`) are public as well and
//! take any [`EntropySource`], which every `rand` generator already is:
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let code = glyphgen::expand("id-%num%%num%", &mut rng).unwrap();
//!
//! assert_eq!(code.len(), 5);
//! assert!(code.starts_with("id-"));
//! ```

pub mod alphabets;
pub mod config;
pub mod entropy;
pub mod errors;
pub mod generators;
pub mod template;

pub use alphabets::Alphabet;
pub use entropy::EntropySource;
pub use errors::{ConfigError, GenerationError, GenerationResult};
pub use generators::{
    Color, ColorLimits, sample_color, sample_digit, sample_from_alphabet, sample_letter,
    sample_long, sample_long_below, sample_mixed, sample_symbol,
};
pub use template::{Placeholder, expand, expand_many, placeholder_count};
