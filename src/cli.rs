//! Command-line interface.
//!
//! Flags map one-to-one onto [`GenerationConfig`]. Anything left unset falls
//! back to [`DefaultsConfig`].

use clap::Parser;

use crate::config::DefaultsConfig;
use crate::domain::GenerationConfig;
use crate::error::Result;

/// Generate unique random strings.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "ugen", version, about)]
pub struct Cli {
    /// Use any character from the random generator.
    #[arg(short = 'a', long = "any")]
    pub any_character: bool,

    /// Output base64 encoded strings. Sets --any.
    #[arg(long)]
    pub base64: bool,

    /// The number of unique strings to generate [default: 1].
    #[arg(short, long, value_name = "N")]
    pub count: Option<usize>,

    /// Use only digits. If length > 1, digit will never start with 0.
    #[arg(short, long)]
    pub digit: bool,

    /// Output hex encoded strings. Sets --any.
    #[arg(long)]
    pub hex: bool,

    /// Generate a random number within the provided open ended, i.e., [_,_),
    /// interval. E.g., -1000,1000. If a single number is provided, the
    /// interval begins with zero. Ignores --length.
    #[arg(short, long, value_name = "BEGIN,END", allow_hyphen_values = true)]
    pub interval: Option<String>,

    /// Length of the generated string [default: 12].
    #[arg(short, long, value_name = "N")]
    pub length: Option<usize>,

    /// Output characters in lower case. Wins over --upper.
    #[arg(long)]
    pub lower: bool,

    /// Write prefix before each generated string.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub prefix: String,

    /// Separator for generated strings [default: newline].
    #[arg(short, long, allow_hyphen_values = true)]
    pub separator: Option<String>,

    /// Write suffix after each generated string.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub suffix: String,

    /// Generate a ULID.
    #[arg(long)]
    pub ulid: bool,

    /// Generate a ULID displayed as a UUID. Sets --ulid.
    #[arg(long)]
    pub ulid_as_uuid: bool,

    /// Output characters in upper case.
    #[arg(long)]
    pub upper: bool,

    /// Generate a random (v4) UUID.
    #[arg(long)]
    pub uuid: bool,

    /// Generate a v7 UUID.
    #[arg(long)]
    pub uuid7: bool,
}

impl Cli {
    /// Resolve the flags into a generation configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the interval is malformed or empty.
    pub fn generation_config(
        &self,
        defaults: &DefaultsConfig,
        trailing_line_feed: bool,
    ) -> Result<GenerationConfig> {
        let mut builder = GenerationConfig::builder()
            .any_character(self.any_character)
            .digit(self.digit)
            .base64(self.base64)
            .hex(self.hex)
            .ulid(self.ulid)
            .ulid_as_uuid(self.ulid_as_uuid)
            .uuid4(self.uuid)
            .uuid7(self.uuid7)
            .lower(self.lower)
            .upper(self.upper)
            .prefix(self.prefix.as_str())
            .suffix(self.suffix.as_str())
            .separator(
                self.separator
                    .as_deref()
                    .unwrap_or(defaults.separator.as_str()),
            )
            .trailing_line_feed(trailing_line_feed);

        if let Some(interval) = &self.interval {
            builder = builder.interval(interval.as_str());
        }

        builder.build()
    }

    /// Number of values to generate.
    #[must_use]
    pub fn count(&self, defaults: &DefaultsConfig) -> usize {
        self.count.unwrap_or(defaults.count)
    }

    /// Payload length per value.
    #[must_use]
    pub fn length(&self, defaults: &DefaultsConfig) -> usize {
        self.length.unwrap_or(defaults.length)
    }
}
