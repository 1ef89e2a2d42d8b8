//! Generator service.
//!
//! Resolves a [`GenerationConfig`] into one [`Strategy`] per call, produces
//! `count` values and streams them, decorated and separated, to a sink.

use std::io::Write;

use rand::rngs::OsRng;
use rand::{TryCryptoRng, TryRngCore};
use tracing::debug;

use crate::domain::{GenerationConfig, Strategy};
use crate::error::{GenerateError, Result};
use crate::service::format::{Decoration, Encoding};
use crate::service::identifier::{self, Identifier, MillisClock};
use crate::service::sampler::{Sampler, alphabet};

/// Canonical text is at most the 36 characters of a hyphenated UUID.
const IDENTIFIER_TEXT_LEN: usize = 36;

/// Scratch space owned by one generation call.
///
/// Sized once and reused when every value has the same payload length;
/// interval values vary in length and get fresh buffers each time.
#[derive(Debug, Default)]
struct ValueBuffers {
    /// Random payload bytes.
    raw: Vec<u8>,
    /// Canonical identifier or decimal text.
    text: String,
    /// Decorated output value.
    value: Vec<u8>,
}

impl ValueBuffers {
    /// Allocate buffers up front, failing instead of aborting when the
    /// requested length cannot be allocated.
    fn sized(strategy: Strategy, payload_len: usize, decoration: &Decoration<'_>) -> Result<Self> {
        let too_large =
            || GenerateError::Configuration(format!("length {payload_len} is too large"));

        let (text, rendered_payload) = if strategy.is_identifier() {
            (
                String::with_capacity(IDENTIFIER_TEXT_LEN),
                payload_len.max(IDENTIFIER_TEXT_LEN),
            )
        } else {
            (String::new(), payload_len)
        };
        let rendered = decoration
            .rendered_len(rendered_payload)
            .ok_or_else(too_large)?;

        let mut raw = Vec::new();
        raw.try_reserve_exact(payload_len).map_err(|_| too_large())?;
        raw.resize(payload_len, 0);

        let mut value = Vec::new();
        value.try_reserve_exact(rendered).map_err(|_| too_large())?;

        Ok(Self { raw, text, value })
    }
}

/// Generator of random identifier strings.
#[derive(Debug)]
pub struct Generator<R = OsRng> {
    config: GenerationConfig,
    sampler: Sampler<R>,
}

impl Generator<OsRng> {
    /// Create a generator backed by the operating system's CSPRNG.
    #[must_use]
    pub fn new(config: GenerationConfig) -> Self {
        Self {
            config,
            sampler: Sampler::os(),
        }
    }
}

impl<R> Generator<R>
where
    R: TryRngCore + TryCryptoRng,
{
    /// Create a generator drawing from a custom sampler.
    pub fn with_sampler(config: GenerationConfig, sampler: Sampler<R>) -> Self {
        Self { config, sampler }
    }

    /// The configuration this generator was built with.
    #[must_use]
    pub const fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Write `count` values to `writer`.
    ///
    /// `length` is the payload length for character and byte strategies; it
    /// is ignored for identifiers and intervals. Values are separated by the
    /// configured separator, and a line feed follows the last one when the
    /// configuration asks for it, even if `count` is zero.
    ///
    /// # Errors
    ///
    /// Returns the first randomness, identifier, encoding or write failure.
    /// Values written before the failure remain in the sink.
    pub fn generate<W: Write>(&mut self, writer: &mut W, count: usize, length: usize) -> Result<()> {
        let Self { config, sampler } = self;
        let strategy = Strategy::resolve(config);
        let decoration = Decoration::new(config);
        let payload_len = strategy.payload_len(length);

        debug!(
            %strategy,
            encoding = %decoration.encoding(),
            count,
            length,
            "Generating values"
        );

        let mut clock = MillisClock::new();
        let mut buffers = payload_len
            .map(|len| ValueBuffers::sized(strategy, len, &decoration))
            .transpose()?
            .unwrap_or_default();

        for index in 0..count {
            if payload_len.is_none() {
                buffers = ValueBuffers::default();
            }

            let payload = produce(
                sampler,
                strategy,
                decoration.encoding(),
                &mut clock,
                &mut buffers.raw,
                &mut buffers.text,
            )?;
            decoration.render_into(payload, &mut buffers.value)?;

            if index > 0 {
                writer.write_all(config.separator.as_bytes())?;
            }
            writer.write_all(&buffers.value)?;
        }

        if config.trailing_line_feed {
            writer.write_all(b"\n")?;
        }

        Ok(())
    }
}

/// Produce the payload of one value.
///
/// Identifiers yield their canonical text unless an encoding is requested,
/// in which case their 16 raw bytes are encoded instead.
fn produce<'b, R>(
    sampler: &mut Sampler<R>,
    strategy: Strategy,
    encoding: Encoding,
    clock: &mut MillisClock,
    raw: &'b mut Vec<u8>,
    text: &'b mut String,
) -> Result<&'b [u8]>
where
    R: TryRngCore + TryCryptoRng,
{
    let id = match strategy {
        Strategy::Interval(interval) => {
            *text = sampler.int_in(&interval)?.to_string();
            return Ok(text.as_bytes());
        }
        Strategy::RawBytes => {
            sampler.fill_bytes(raw)?;
            return Ok(raw.as_slice());
        }
        Strategy::DigitRestricted => {
            sampler.fill_digits(raw)?;
            return Ok(raw.as_slice());
        }
        Strategy::Default => {
            sampler.fill_from(raw, alphabet::DIGIT_LOWER_UPPER)?;
            return Ok(raw.as_slice());
        }
        Strategy::Ulid { as_uuid } => Identifier::Ulid {
            value: identifier::new_ulid(sampler, clock)?,
            as_uuid,
        },
        Strategy::Uuid4 => Identifier::Uuid(identifier::new_uuid4(sampler)?),
        Strategy::Uuid7 => Identifier::Uuid(identifier::new_uuid7(sampler, clock)?),
    };

    if encoding == Encoding::Plain {
        text.clear();
        text.push_str(&id.to_string());
        Ok(text.as_bytes())
    } else {
        raw.clear();
        raw.extend_from_slice(&id.to_bytes());
        Ok(raw.as_slice())
    }
}
