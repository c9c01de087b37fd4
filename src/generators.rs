use serde::Serialize;
use std::fmt;

use crate::alphabets::{Alphabet, DIGITS, LETTERS, LETTERS_AND_DIGITS, LETTERS_DIGITS_SYMBOLS, SYMBOLS};
use crate::entropy::EntropySource;
use crate::errors::{GenerationError, GenerationResult};

pub fn sample_from_alphabet<R>(rng: &mut R, alphabet: &Alphabet) -> GenerationResult<char>
where
    R: EntropySource + ?Sized,
{
    let len = alphabet.len();
    if len == 0 {
        return Err(GenerationError::InvalidAlphabet);
    }

    alphabet
        .nth(rng.below(len))
        .ok_or(GenerationError::InvalidAlphabet)
}

pub fn sample_digit<R: EntropySource + ?Sized>(rng: &mut R) -> char {
    let digit = rng.below(10) as u8;

    (b'0' + digit) as char
}

pub fn sample_letter<R>(rng: &mut R, uppercase: bool) -> GenerationResult<char>
where
    R: EntropySource + ?Sized,
{
    let letter = sample_from_alphabet(rng, &LETTERS)?;

    Ok(if uppercase { letter.to_ascii_uppercase() } else { letter })
}

pub fn sample_symbol<R: EntropySource + ?Sized>(rng: &mut R) -> GenerationResult<char> {
    sample_from_alphabet(rng, &SYMBOLS)
}

/// Letter or digit, plus symbols when `include_symbols` is set.
pub fn sample_mixed<R>(rng: &mut R, include_symbols: bool) -> GenerationResult<char>
where
    R: EntropySource + ?Sized,
{
    let alphabet = if include_symbols { LETTERS_DIGITS_SYMBOLS } else { LETTERS_AND_DIGITS };

    sample_from_alphabet(rng, &alphabet)
}

/// Draws an integer in `[min, max]`, both ends inclusive.
///
/// Eight random bytes are read as a little-endian `i64`, reduced to their
/// magnitude and taken modulo the span `max - min + 1`. The magnitude of
/// `i64::MIN` is 2^63 and is kept exactly rather than wrapping.
///
/// This is not perfectly uniform. The magnitude covers `[0, 2^63]` with `0`
/// and `2^63` half as likely as every other value, and when the span does not
/// divide that space evenly the low residues get one extra preimage. The
/// relative bias is at most about `span / 2^62`, which is negligible for small
/// spans and grows as the span approaches 2^63.
///
/// Spans wider than 2^63 read the draw as unsigned instead, so the top of the
/// range stays reachable. There the 2^64 draws wrap around the span once, so
/// offsets below `2^64 - span` have two preimages and the rest one: the low
/// residues are up to twice as likely. The full `i64` range returns the draw
/// as is.
pub fn sample_long<R>(rng: &mut R, min: i64, max: i64) -> GenerationResult<i64>
where
    R: EntropySource + ?Sized,
{
    if max < min {
        return Err(GenerationError::InvalidRange { min, max });
    }

    let mut buf = [0u8; 8];
    rng.fill_bytes(&mut buf);
    let drawn = i64::from_le_bytes(buf);

    let span = (i128::from(max) - i128::from(min) + 1) as u128;
    if span == 1u128 << 64 {
        return Ok(drawn);
    }

    let offset = if span > 1u128 << 63 {
        u128::from(drawn as u64) % span
    } else {
        u128::from(drawn.unsigned_abs()) % span
    };

    Ok((i128::from(min) + offset as i128) as i64)
}

/// `sample_long` with the minimum pinned at zero.
pub fn sample_long_below<R>(rng: &mut R, max: i64) -> GenerationResult<i64>
where
    R: EntropySource + ?Sized,
{
    sample_long(rng, 0, max)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Inclusive per-channel maxima for `sample_color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorLimits {
    pub max_r: u8,
    pub max_g: u8,
    pub max_b: u8,
}

impl Default for ColorLimits {
    fn default() -> Self {
        Self {
            max_r: u8::MAX,
            max_g: u8::MAX,
            max_b: u8::MAX,
        }
    }
}

impl ColorLimits {
    /// Validates untyped channel maxima, e.g. from the command line.
    pub fn checked(max_r: u16, max_g: u16, max_b: u16) -> GenerationResult<Self> {
        Ok(Self {
            max_r: channel("red", max_r)?,
            max_g: channel("green", max_g)?,
            max_b: channel("blue", max_b)?,
        })
    }
}

fn channel(name: &'static str, value: u16) -> GenerationResult<u8> {
    u8::try_from(value).map_err(|_| GenerationError::InvalidChannel { channel: name, value })
}

pub fn sample_color<R>(rng: &mut R, limits: ColorLimits) -> Color
where
    R: EntropySource + ?Sized,
{
    let mut draw = |max: u8| rng.below(usize::from(max) + 1) as u8;

    Color {
        r: draw(limits.max_r),
        g: draw(limits.max_g),
        b: draw(limits.max_b),
    }
}
