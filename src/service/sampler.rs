//! Uniform sampling over a cryptographically secure source.
//!
//! Randomness failures are never papered over: every draw returns a
//! [`Result`] and the caller aborts the value on error.

use rand::rngs::OsRng;
use rand::{TryCryptoRng, TryRngCore};

use crate::domain::Interval;
use crate::error::{GenerateError, Result};

/// Predefined alphabets.
pub mod alphabet {
    /// `0-9`.
    pub const DIGIT: &[u8] = b"0123456789";
    /// `1-9`, used for the leading position of multi-digit values.
    pub const NONZERO_DIGIT: &[u8] = b"123456789";
    /// `a-z`.
    pub const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
    /// `A-Z`.
    pub const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    /// `0-9a-z`.
    pub const DIGIT_LOWER: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    /// `0-9A-Z`.
    pub const DIGIT_UPPER: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    /// `a-zA-Z`.
    pub const LOWER_UPPER: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
    /// `0-9a-zA-Z`.
    pub const DIGIT_LOWER_UPPER: &[u8] =
        b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
}

/// Sampler over a fallible cryptographically secure RNG.
#[derive(Debug, Clone)]
pub struct Sampler<R = OsRng> {
    rng: R,
}

impl Sampler<OsRng> {
    /// Sampler backed by the operating system's CSPRNG.
    #[must_use]
    pub const fn os() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for Sampler<OsRng> {
    fn default() -> Self {
        Self::os()
    }
}

impl<R> Sampler<R>
where
    R: TryRngCore + TryCryptoRng,
{
    /// Wrap an RNG.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Fill `buf` with raw random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::RandomnessSource`] if the RNG fails.
    pub fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        self.rng
            .try_fill_bytes(buf)
            .map_err(|e| GenerateError::RandomnessSource(e.to_string()))
    }

    /// Draw a raw 64-bit value.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::RandomnessSource`] if the RNG fails.
    pub fn next_u64(&mut self) -> Result<u64> {
        self.rng
            .try_next_u64()
            .map_err(|e| GenerateError::RandomnessSource(e.to_string()))
    }

    /// Draw a uniform integer in `[0, bound)`.
    ///
    /// Uses a widening multiply and rejects the low products that would
    /// otherwise bias the result, so any bound is exact.
    ///
    /// # Errors
    ///
    /// Returns an error if `bound` is zero or the RNG fails.
    #[allow(clippy::cast_possible_truncation)]
    pub fn index_below(&mut self, bound: u64) -> Result<u64> {
        if bound == 0 {
            return Err(GenerateError::Configuration(
                "cannot sample from an empty range".to_string(),
            ));
        }

        // 2^64 mod bound
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let product = u128::from(self.next_u64()?) * u128::from(bound);
            if product as u64 >= threshold {
                return Ok((product >> 64) as u64);
            }
        }
    }

    /// Fill `buf` with bytes drawn uniformly from `alphabet`.
    ///
    /// An empty alphabet means raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::RandomnessSource`] if the RNG fails.
    #[allow(clippy::cast_possible_truncation)]
    pub fn fill_from(&mut self, buf: &mut [u8], alphabet: &[u8]) -> Result<()> {
        if alphabet.is_empty() {
            return self.fill_bytes(buf);
        }

        let bound = alphabet.len() as u64;
        for slot in buf.iter_mut() {
            *slot = alphabet[self.index_below(bound)? as usize];
        }
        Ok(())
    }

    /// Fill `buf` with digits, never starting with `0` when longer than one.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::RandomnessSource`] if the RNG fails.
    pub fn fill_digits(&mut self, buf: &mut [u8]) -> Result<()> {
        if buf.len() > 1 {
            let (first, rest) = buf.split_at_mut(1);
            self.fill_from(first, alphabet::NONZERO_DIGIT)?;
            self.fill_from(rest, alphabet::DIGIT)
        } else {
            self.fill_from(buf, alphabet::DIGIT)
        }
    }

    /// Sample `len` bytes, from `alphabet` if given, raw otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::RandomnessSource`] if the RNG fails.
    pub fn sample(&mut self, alphabet: Option<&[u8]>, len: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; len];
        self.fill_from(&mut buf, alphabet.unwrap_or_default())?;
        Ok(buf)
    }

    /// Draw a uniform integer from `interval`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::RandomnessSource`] if the RNG fails.
    pub fn int_in(&mut self, interval: &Interval) -> Result<i64> {
        let offset = self.index_below(interval.span())?;
        // offset < end - begin, so this never wraps.
        Ok(interval.begin().wrapping_add_unsigned(offset))
    }
}
