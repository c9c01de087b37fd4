//! Template expansion.
//!
//! A template is literal text with placeholder tokens mixed in:
//!
//! - `%num%` a digit, e.g. `6`
//! - `%char%` a letter, e.g. `b`
//! - `%sym%` a symbol, e.g. `~`
//! - `%rand%` a letter, digit or symbol
//! - `%randws%` a letter or digit
//!
//! `%CHAR%`, `%RAND%` and `%RANDWS%` produce uppercase letters. Every token
//! becomes exactly one character, so `q_%rand%%CHAR%%CHAR%%rand%_p` gives
//! something like `q_5FSg_p`. Anything else, including unknown `%...%`
//! words, is copied through untouched.

use tracing::{debug, trace};

use crate::entropy::EntropySource;
use crate::errors::GenerationResult;
use crate::generators::{sample_digit, sample_letter, sample_mixed, sample_symbol};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Num,
    Char,
    Sym,
    Rand,
    RandWithoutSymbols,
    UpperChar,
    UpperRand,
    UpperRandWithoutSymbols,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Digit,
    Letter,
    Symbol,
    Mixed { include_symbols: bool },
}

impl Placeholder {
    /// Scan order used by `expand`. Lowercase spellings come first.
    pub const ALL: [Placeholder; 8] = [
        Placeholder::Num,
        Placeholder::Char,
        Placeholder::Sym,
        Placeholder::Rand,
        Placeholder::RandWithoutSymbols,
        Placeholder::UpperChar,
        Placeholder::UpperRand,
        Placeholder::UpperRandWithoutSymbols,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Placeholder::Num => "%num%",
            Placeholder::Char => "%char%",
            Placeholder::Sym => "%sym%",
            Placeholder::Rand => "%rand%",
            Placeholder::RandWithoutSymbols => "%randws%",
            Placeholder::UpperChar => "%CHAR%",
            Placeholder::UpperRand => "%RAND%",
            Placeholder::UpperRandWithoutSymbols => "%RANDWS%",
        }
    }

    pub fn rule(self) -> Rule {
        match self {
            Placeholder::Num => Rule::Digit,
            Placeholder::Char | Placeholder::UpperChar => Rule::Letter,
            Placeholder::Sym => Rule::Symbol,
            Placeholder::Rand | Placeholder::UpperRand => Rule::Mixed { include_symbols: true },
            Placeholder::RandWithoutSymbols | Placeholder::UpperRandWithoutSymbols => {
                Rule::Mixed { include_symbols: false }
            }
        }
    }

    pub fn uppercase(self) -> bool {
        matches!(
            self,
            Placeholder::UpperChar | Placeholder::UpperRand | Placeholder::UpperRandWithoutSymbols
        )
    }

    fn sample<R: EntropySource + ?Sized>(self, rng: &mut R) -> GenerationResult<char> {
        let c = match self.rule() {
            Rule::Digit => sample_digit(rng),
            Rule::Letter => sample_letter(rng, false)?,
            Rule::Symbol => sample_symbol(rng)?,
            Rule::Mixed { include_symbols } => sample_mixed(rng, include_symbols)?,
        };

        Ok(if self.uppercase() { c.to_ascii_uppercase() } else { c })
    }
}

/// Replaces every placeholder in `template` with a freshly sampled character.
///
/// Tokens are handled one kind at a time in `Placeholder::ALL` order. For each
/// kind the first occurrence is replaced and the search restarts from the
/// beginning of the rewritten string until none is left. A sampling error
/// aborts the whole call.
pub fn expand<R>(template: &str, rng: &mut R) -> GenerationResult<String>
where
    R: EntropySource + ?Sized,
{
    let mut working = template.to_string();
    debug!(
        placeholders = placeholder_count(template),
        len = template.len(),
        "expanding template"
    );

    for placeholder in Placeholder::ALL {
        let token = placeholder.token();

        while let Some(start) = working.find(token) {
            let c = placeholder.sample(rng)?;
            let mut buf = [0u8; 4];
            working.replace_range(start..start + token.len(), c.encode_utf8(&mut buf));
            trace!(token, at = start, "replaced placeholder");
        }
    }

    Ok(working)
}

/// Expands the same template `count` times with one source.
pub fn expand_many<R>(template: &str, count: usize, rng: &mut R) -> GenerationResult<Vec<String>>
where
    R: EntropySource + ?Sized,
{
    (0..count).map(|_| expand(template, &mut *rng)).collect()
}

/// Number of placeholder tokens written in `template`.
pub fn placeholder_count(template: &str) -> usize {
    Placeholder::ALL
        .iter()
        .map(|p| template.matches(p.token()).count())
        .sum()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use std::collections::VecDeque;

    use super::*;
    use crate::alphabets::{LETTERS_AND_DIGITS, LETTERS_DIGITS_SYMBOLS, SYMBOLS};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    /// Returns scripted indices from `below`, in order.
    struct Sequence {
        draws: VecDeque<usize>,
    }

    impl Sequence {
        fn new(draws: &[usize]) -> Self {
            Self { draws: draws.iter().copied().collect() }
        }
    }

    impl EntropySource for Sequence {
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }

        fn below(&mut self, n: usize) -> usize {
            let next = self.draws.pop_front().unwrap_or(0);
            assert!(next < n, "scripted draw {next} out of range for {n}");
            next
        }
    }

    #[test]
    fn plain_text_passes_through() {
        let mut rng = rng();
        for template in ["", "hello world", "100% sure", "%unknown%", "%Num% %Sym%", "%%"] {
            assert_eq!(expand(template, &mut rng).unwrap(), template);
        }
    }

    #[test]
    fn num_becomes_a_digit() {
        let mut rng = rng();
        for _ in 0..500 {
            let out = expand("%num%", &mut rng).unwrap();
            assert_eq!(out.len(), 1);
            assert!(out.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn upper_char_becomes_uppercase_letter() {
        let mut rng = rng();
        for _ in 0..500 {
            let out = expand("%CHAR%", &mut rng).unwrap();
            assert_eq!(out.chars().count(), 1);
            assert!(out.chars().all(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn lower_char_and_sym() {
        let mut rng = rng();
        for _ in 0..500 {
            let out: Vec<char> = expand("%char%%sym%", &mut rng).unwrap().chars().collect();
            assert_eq!(out.len(), 2);
            assert!(out[0].is_ascii_lowercase());
            assert!(SYMBOLS.contains(out[1]));
        }
    }

    #[test]
    fn mixed_template_keeps_literal_frame() {
        let mut rng = rng();
        for _ in 0..500 {
            let out: Vec<char> = expand("a_%rand%%CHAR%%CHAR%%rand%_b", &mut rng)
                .unwrap()
                .chars()
                .collect();

            assert_eq!(out.len(), 8);
            assert_eq!(&out[..2], &['a', '_']);
            assert_eq!(&out[6..], &['_', 'b']);
            assert!(LETTERS_DIGITS_SYMBOLS.contains(out[2]));
            assert!(out[3].is_ascii_uppercase());
            assert!(out[4].is_ascii_uppercase());
            assert!(LETTERS_DIGITS_SYMBOLS.contains(out[5]));
        }
    }

    #[test]
    fn randws_never_yields_symbols() {
        let mut rng = rng();
        let out = expand(&"%randws%".repeat(300), &mut rng).unwrap();

        assert_eq!(out.len(), 300);
        assert!(out.chars().all(|c| LETTERS_AND_DIGITS.contains(c)));
    }

    #[test]
    fn upper_variants_uppercase_letters_only() {
        let mut rng = rng();
        let out = expand(&"%RAND%%RANDWS%".repeat(200), &mut rng).unwrap();

        assert_eq!(out.len(), 400);
        assert!(out.chars().all(|c| !c.is_ascii_lowercase()));
        assert!(out.chars().any(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn every_occurrence_is_replaced() {
        let mut rng = rng();
        let template = "%num%-%num%-%num%%num% %sym%x%sym%";
        let out = expand(template, &mut rng).unwrap();

        assert_eq!(placeholder_count(&out), 0);
        // Four literal characters plus one per token.
        assert_eq!(out.chars().count(), 10);
    }

    #[test]
    fn output_length_is_literals_plus_placeholders() {
        let mut rng = rng();
        let template = "id-%randws%%randws%/%RAND%:%num%%char%";
        let tokens = ["%randws%", "%randws%", "%RAND%", "%num%", "%char%"];
        let literal_len = template.len() - tokens.iter().map(|t| t.len()).sum::<usize>();

        let out = expand(template, &mut rng).unwrap();
        assert_eq!(out.chars().count(), literal_len + tokens.len());
        assert!(out.starts_with("id-"));
    }

    #[test]
    fn seeded_expansion_is_reproducible() {
        let template = "%RAND%%rand%%num%%sym%%char%";
        let a = expand(template, &mut StdRng::seed_from_u64(11)).unwrap();
        let b = expand(template, &mut StdRng::seed_from_u64(11)).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn num_is_drawn_before_upper_char() {
        let mut rng = Sequence::new(&[1, 2]);

        assert_eq!(expand("%CHAR%%num%", &mut rng).unwrap(), "C1");
    }

    #[test]
    fn sym_is_drawn_before_rand() {
        let mut rng = Sequence::new(&[1, 0]);

        assert_eq!(expand("%rand%%sym%", &mut rng).unwrap(), "a!");
    }

    #[test]
    fn lowercase_tokens_are_drawn_before_uppercase() {
        // %char% takes the first draw, %randws% the second, %RAND% the last.
        let mut rng = Sequence::new(&[3, 2, 1]);

        assert_eq!(expand("%RAND%%randws%%char%", &mut rng).unwrap(), "Bcd");
    }

    #[test]
    fn rescans_after_each_replacement() {
        // 'r' (index 17) turns "%cha" + 'r' + "%" into a fresh %char%.
        let mut rng = Sequence::new(&[17, 0]);

        assert_eq!(expand("%cha%char%%", &mut rng).unwrap(), "a");
    }

    #[test]
    fn expand_many_draws_fresh_values() {
        let mut rng = rng();
        let outputs = expand_many("%randws%%randws%%randws%%randws%%randws%%randws%", 20, &mut rng)
            .unwrap();

        assert_eq!(outputs.len(), 20);
        let first = &outputs[0];
        assert!(outputs.iter().any(|o| o != first));
        assert!(expand_many("x", 0, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn counts_placeholders() {
        assert_eq!(placeholder_count("a_%rand%%CHAR%%CHAR%%rand%_b"), 4);
        assert_eq!(placeholder_count("%randws%"), 1);
        assert_eq!(placeholder_count("%RANDWS%%randws%"), 2);
        assert_eq!(placeholder_count("plain"), 0);
    }

    #[test]
    fn placeholder_table_is_consistent() {
        for placeholder in Placeholder::ALL {
            let token = placeholder.token();
            assert_eq!(placeholder.uppercase(), token.chars().any(|c| c.is_ascii_uppercase()));
        }
        assert_eq!(Placeholder::Num.rule(), Rule::Digit);
        assert_eq!(
            Placeholder::UpperRandWithoutSymbols.rule(),
            Rule::Mixed { include_symbols: false }
        );
    }
}
