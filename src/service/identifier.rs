//! ULID and UUID construction.
//!
//! Identifiers take their entropy from the caller's [`Sampler`] instead of
//! the crates' implicit generators, so a failing source surfaces as an error
//! rather than a panic.

use std::fmt;

use chrono::Utc;
use rand::{TryCryptoRng, TryRngCore};
use ulid::Ulid;
use uuid::{Builder, Uuid};

use crate::error::{GenerateError, Result};
use crate::service::sampler::Sampler;

/// Largest timestamp representable in 48 bits.
const MAX_TIMESTAMP_MS: u64 = (1 << 48) - 1;

/// Millisecond clock that never goes backwards within one generation call.
#[derive(Debug, Clone, Default)]
pub struct MillisClock {
    last: u64,
}

impl MillisClock {
    /// Create a clock with no history.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    /// Current Unix time in milliseconds, clamped to be non-decreasing.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::IdConstruction`] if the system clock is
    /// before the Unix epoch or beyond the 48-bit range.
    pub fn now(&mut self, kind: &'static str) -> Result<u64> {
        self.observe(Utc::now().timestamp_millis(), kind)
    }

    fn observe(&mut self, millis: i64, kind: &'static str) -> Result<u64> {
        let millis = u64::try_from(millis).map_err(|_| GenerateError::IdConstruction {
            kind,
            reason: "system clock is before the Unix epoch".to_string(),
        })?;
        if millis > MAX_TIMESTAMP_MS {
            return Err(GenerateError::IdConstruction {
                kind,
                reason: format!("timestamp {millis} does not fit in 48 bits"),
            });
        }

        self.last = self.last.max(millis);
        Ok(self.last)
    }
}

/// A generated 128-bit identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identifier {
    /// ULID, optionally displayed as a UUID.
    Ulid {
        /// The ULID.
        value: Ulid,
        /// Display with the hyphenated UUID form.
        as_uuid: bool,
    },
    /// UUID of any version.
    Uuid(Uuid),
}

impl Identifier {
    /// Big-endian bytes of the identifier.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; 16] {
        match self {
            Self::Ulid { value, .. } => value.to_bytes(),
            Self::Uuid(value) => *value.as_bytes(),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ulid {
                value,
                as_uuid: false,
            } => write!(f, "{value}"),
            Self::Ulid {
                value,
                as_uuid: true,
            } => write!(f, "{}", Uuid::from_bytes(value.to_bytes()).hyphenated()),
            Self::Uuid(value) => write!(f, "{}", value.hyphenated()),
        }
    }
}

/// Build a ULID: 48-bit millisecond timestamp plus 80 random bits.
///
/// # Errors
///
/// Returns an error if the clock is out of range or the sampler fails.
pub fn new_ulid<R>(sampler: &mut Sampler<R>, clock: &mut MillisClock) -> Result<Ulid>
where
    R: TryRngCore + TryCryptoRng,
{
    let timestamp = clock.now("ULID")?;
    let mut random = [0u8; 16];
    sampler.fill_bytes(&mut random[6..])?;
    Ok(Ulid::from_parts(timestamp, u128::from_be_bytes(random)))
}

/// Build a random (v4) UUID.
///
/// # Errors
///
/// Returns an error if the sampler fails.
pub fn new_uuid4<R>(sampler: &mut Sampler<R>) -> Result<Uuid>
where
    R: TryRngCore + TryCryptoRng,
{
    let mut random = [0u8; 16];
    sampler.fill_bytes(&mut random)?;
    Ok(Builder::from_random_bytes(random).into_uuid())
}

/// Build a time-ordered (v7) UUID.
///
/// # Errors
///
/// Returns an error if the clock is out of range or the sampler fails.
pub fn new_uuid7<R>(sampler: &mut Sampler<R>, clock: &mut MillisClock) -> Result<Uuid>
where
    R: TryRngCore + TryCryptoRng,
{
    let timestamp = clock.now("UUIDv7")?;
    let mut random = [0u8; 10];
    sampler.fill_bytes(&mut random)?;
    Ok(Builder::from_unix_timestamp_millis(timestamp, &random).into_uuid())
}
