//! Generation strategy resolution.

use crate::domain::config::{GenerationConfig, Interval};

/// The single way values are produced for one generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Uniform integers drawn from an interval, rendered as decimal text.
    Interval(Interval),
    /// ULID, optionally rendered in UUID textual form.
    Ulid {
        /// Render with the 8-4-4-4-12 hyphenated form.
        as_uuid: bool,
    },
    /// Random UUID (version 4).
    Uuid4,
    /// Time-ordered UUID (version 7).
    Uuid7,
    /// Unrestricted random bytes.
    RawBytes,
    /// Digits only, no leading zero when longer than one character.
    DigitRestricted,
    /// Digits, lowercase and uppercase letters.
    Default,
}

impl Strategy {
    /// Pick the strategy for a configuration.
    ///
    /// First match wins: interval, ULID, UUIDv4, UUIDv7, raw bytes (also
    /// implied by base64 or hex), digits, then the default alphabet.
    #[must_use]
    pub const fn resolve(config: &GenerationConfig) -> Self {
        if let Some(interval) = config.interval {
            Self::Interval(interval)
        } else if config.ulid || config.ulid_as_uuid {
            Self::Ulid {
                as_uuid: config.ulid_as_uuid,
            }
        } else if config.uuid4 {
            Self::Uuid4
        } else if config.uuid7 {
            Self::Uuid7
        } else if config.any_character || config.base64 || config.hex {
            Self::RawBytes
        } else if config.digit {
            Self::DigitRestricted
        } else {
            Self::Default
        }
    }

    /// Whether this strategy yields 128-bit identifiers.
    #[must_use]
    pub const fn is_identifier(&self) -> bool {
        matches!(self, Self::Ulid { .. } | Self::Uuid4 | Self::Uuid7)
    }

    /// Raw payload length per value, or `None` when it varies per value.
    #[must_use]
    pub const fn payload_len(&self, length: usize) -> Option<usize> {
        match self {
            Self::Interval(_) => None,
            Self::Ulid { .. } | Self::Uuid4 | Self::Uuid7 => Some(16),
            Self::RawBytes | Self::DigitRestricted | Self::Default => Some(length),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Interval(interval) => write!(f, "interval {interval}"),
            Self::Ulid { as_uuid: false } => write!(f, "ulid"),
            Self::Ulid { as_uuid: true } => write!(f, "ulid-as-uuid"),
            Self::Uuid4 => write!(f, "uuid4"),
            Self::Uuid7 => write!(f, "uuid7"),
            Self::RawBytes => write!(f, "raw-bytes"),
            Self::DigitRestricted => write!(f, "digit"),
            Self::Default => write!(f, "alphanumeric"),
        }
    }
}
