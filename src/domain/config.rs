//! Generation configuration types.
//!
//! A [`GenerationConfig`] is built once per invocation from resolved flags
//! and consumed by the generator without further mutation.

use std::fmt;

use crate::error::{GenerateError, Result};

/// Default separator between generated values.
pub const DEFAULT_SEPARATOR: &str = "\n";

/// Case folding applied to every decorated value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaseMode {
    /// Leave the value untouched.
    #[default]
    None,
    /// Fold to lowercase.
    Lower,
    /// Fold to uppercase.
    Upper,
}

impl CaseMode {
    /// Resolve the `lower` / `upper` flag pair.
    ///
    /// `lower` wins when both are set.
    #[must_use]
    pub const fn from_flags(lower: bool, upper: bool) -> Self {
        match (lower, upper) {
            (true, _) => Self::Lower,
            (false, true) => Self::Upper,
            (false, false) => Self::None,
        }
    }
}

/// Open-ended integer interval `[begin, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    begin: i64,
    end: i64,
}

impl Interval {
    /// Create an interval, rejecting empty or inverted ranges.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `begin >= end`.
    pub fn new(begin: i64, end: i64) -> Result<Self> {
        if begin >= end {
            return Err(GenerateError::Configuration(
                "interval begin is greater than or equals to end".to_string(),
            ));
        }
        Ok(Self { begin, end })
    }

    /// Parse `"a,b"` as `[a, b)` or `"b"` as `[0, b)`.
    ///
    /// Only the first comma splits; anything after it belongs to the end
    /// token.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending token if a part is not a base-10
    /// integer, or a configuration error if the range is empty.
    pub fn parse(text: &str) -> Result<Self> {
        match text.split_once(',') {
            Some((begin, end)) => Self::new(parse_number(begin)?, parse_number(end)?),
            None => Self::new(0, parse_number(text)?),
        }
    }

    /// Inclusive lower bound.
    #[must_use]
    pub const fn begin(&self) -> i64 {
        self.begin
    }

    /// Exclusive upper bound.
    #[must_use]
    pub const fn end(&self) -> i64 {
        self.end
    }

    /// Number of integers in the interval. Always at least 1.
    #[must_use]
    pub const fn span(&self) -> u64 {
        self.end.abs_diff(self.begin)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.begin, self.end)
    }
}

fn parse_number(token: &str) -> Result<i64> {
    token
        .parse()
        .map_err(|source| GenerateError::InvalidNumber {
            token: token.to_string(),
            source,
        })
}

/// Fully resolved configuration for one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Sample unrestricted bytes.
    pub any_character: bool,
    /// Restrict the alphabet to digits.
    pub digit: bool,
    /// Encode output as standard padded base64.
    pub base64: bool,
    /// Encode output as lowercase hex.
    pub hex: bool,
    /// Generate ULIDs.
    pub ulid: bool,
    /// Render ULIDs in UUID textual form.
    pub ulid_as_uuid: bool,
    /// Generate random (v4) UUIDs.
    pub uuid4: bool,
    /// Generate time-ordered (v7) UUIDs.
    pub uuid7: bool,
    /// Draw integers from this interval instead of sampling characters.
    pub interval: Option<Interval>,
    /// Case folding of the decorated value.
    pub case: CaseMode,
    /// Written before each value.
    pub prefix: String,
    /// Written after each value.
    pub suffix: String,
    /// Written between values.
    pub separator: String,
    /// Write a line feed after the last value.
    pub trailing_line_feed: bool,
}

impl GenerationConfig {
    /// Start building a configuration.
    #[must_use]
    pub fn builder() -> GenerationConfigBuilder {
        GenerationConfigBuilder::default()
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            any_character: false,
            digit: false,
            base64: false,
            hex: false,
            ulid: false,
            ulid_as_uuid: false,
            uuid4: false,
            uuid7: false,
            interval: None,
            case: CaseMode::None,
            prefix: String::new(),
            suffix: String::new(),
            separator: DEFAULT_SEPARATOR.to_string(),
            trailing_line_feed: false,
        }
    }
}

/// Builder for [`GenerationConfig`].
#[derive(Debug, Default)]
pub struct GenerationConfigBuilder {
    config: GenerationConfig,
    interval: Option<String>,
    lower: bool,
    upper: bool,
}

impl GenerationConfigBuilder {
    /// Sample unrestricted bytes.
    #[must_use]
    pub fn any_character(mut self, on: bool) -> Self {
        self.config.any_character = on;
        self
    }

    /// Restrict the alphabet to digits.
    #[must_use]
    pub fn digit(mut self, on: bool) -> Self {
        self.config.digit = on;
        self
    }

    /// Encode as base64.
    #[must_use]
    pub fn base64(mut self, on: bool) -> Self {
        self.config.base64 = on;
        self
    }

    /// Encode as hex.
    #[must_use]
    pub fn hex(mut self, on: bool) -> Self {
        self.config.hex = on;
        self
    }

    /// Generate ULIDs.
    #[must_use]
    pub fn ulid(mut self, on: bool) -> Self {
        self.config.ulid = on;
        self
    }

    /// Generate ULIDs rendered as UUIDs. Implies [`ulid`](Self::ulid).
    #[must_use]
    pub fn ulid_as_uuid(mut self, on: bool) -> Self {
        self.config.ulid_as_uuid = on;
        self
    }

    /// Generate UUIDv4.
    #[must_use]
    pub fn uuid4(mut self, on: bool) -> Self {
        self.config.uuid4 = on;
        self
    }

    /// Generate UUIDv7.
    #[must_use]
    pub fn uuid7(mut self, on: bool) -> Self {
        self.config.uuid7 = on;
        self
    }

    /// Interval text, `"a,b"` or `"b"`. Parsed by [`build`](Self::build).
    #[must_use]
    pub fn interval(mut self, text: impl Into<String>) -> Self {
        self.interval = Some(text.into());
        self
    }

    /// Fold to lowercase.
    #[must_use]
    pub fn lower(mut self, on: bool) -> Self {
        self.lower = on;
        self
    }

    /// Fold to uppercase.
    #[must_use]
    pub fn upper(mut self, on: bool) -> Self {
        self.upper = on;
        self
    }

    /// Text written before each value.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.prefix = prefix.into();
        self
    }

    /// Text written after each value.
    #[must_use]
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.config.suffix = suffix.into();
        self
    }

    /// Text written between values.
    #[must_use]
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    /// Write a line feed after the last value.
    #[must_use]
    pub fn trailing_line_feed(mut self, on: bool) -> Self {
        self.config.trailing_line_feed = on;
        self
    }

    /// Finish the configuration.
    ///
    /// An empty interval string means no interval.
    ///
    /// # Errors
    ///
    /// Returns an error if the interval text is malformed or empty.
    pub fn build(self) -> Result<GenerationConfig> {
        let mut config = self.config;
        config.ulid |= config.ulid_as_uuid;
        config.case = CaseMode::from_flags(self.lower, self.upper);
        config.interval = match self.interval.as_deref() {
            None | Some("") => None,
            Some(text) => Some(Interval::parse(text)?),
        };
        Ok(config)
    }
}
