//! Per-value formatting: encoding, decoration and case folding.
//!
//! Order matters. The payload is encoded first, then wrapped in prefix and
//! suffix, and only then is the whole decorated value case folded. Folding
//! base64 output therefore changes its alphabet and the result no longer
//! decodes to the original bytes.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::domain::{CaseMode, GenerationConfig};
use crate::error::{GenerateError, Result};

/// Payload encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Payload bytes are the output text.
    Plain,
    /// Standard base64 with padding.
    Base64,
    /// Lowercase hex.
    Hex,
}

impl Encoding {
    /// Pick the encoding for a configuration. Base64 wins over hex.
    #[must_use]
    pub const fn resolve(config: &GenerationConfig) -> Self {
        if config.base64 {
            Self::Base64
        } else if config.hex {
            Self::Hex
        } else {
            Self::Plain
        }
    }

    /// Encoded length for `raw_len` payload bytes.
    #[must_use]
    pub fn encoded_len(self, raw_len: usize) -> Option<usize> {
        match self {
            Self::Plain => Some(raw_len),
            Self::Base64 => base64::encoded_len(raw_len, true),
            Self::Hex => raw_len.checked_mul(2),
        }
    }

    /// Append the encoded form of `payload` to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Encoding`] if the encoder rejects the output
    /// buffer.
    pub fn encode_into(self, payload: &[u8], out: &mut Vec<u8>) -> Result<()> {
        let start = out.len();
        let len = self
            .encoded_len(payload.len())
            .ok_or_else(|| GenerateError::Encoding("payload too large".to_string()))?;

        match self {
            Self::Plain => out.extend_from_slice(payload),
            Self::Base64 => {
                out.resize(start + len, 0);
                STANDARD
                    .encode_slice(payload, &mut out[start..])
                    .map_err(|e| GenerateError::Encoding(e.to_string()))?;
            }
            Self::Hex => {
                out.resize(start + len, 0);
                hex::encode_to_slice(payload, &mut out[start..])
                    .map_err(|e| GenerateError::Encoding(e.to_string()))?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Base64 => write!(f, "base64"),
            Self::Hex => write!(f, "hex"),
        }
    }
}

/// Decoration applied around every encoded payload.
#[derive(Debug, Clone, Copy)]
pub struct Decoration<'a> {
    prefix: &'a [u8],
    suffix: &'a [u8],
    encoding: Encoding,
    case: CaseMode,
}

impl<'a> Decoration<'a> {
    /// Decoration described by a configuration.
    #[must_use]
    pub fn new(config: &'a GenerationConfig) -> Self {
        Self {
            prefix: config.prefix.as_bytes(),
            suffix: config.suffix.as_bytes(),
            encoding: Encoding::resolve(config),
            case: config.case,
        }
    }

    /// Encoding applied to payloads.
    #[must_use]
    pub const fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Length of a rendered value for a payload of `raw_len` bytes, before
    /// case folding. `None` if it overflows `usize`.
    #[must_use]
    pub fn rendered_len(&self, raw_len: usize) -> Option<usize> {
        self.encoding
            .encoded_len(raw_len)?
            .checked_add(self.prefix.len())?
            .checked_add(self.suffix.len())
    }

    /// Render `payload` into `out`, replacing its contents.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Encoding`] if encoding fails.
    pub fn render_into(&self, payload: &[u8], out: &mut Vec<u8>) -> Result<()> {
        out.clear();
        out.extend_from_slice(self.prefix);
        self.encoding.encode_into(payload, out)?;
        out.extend_from_slice(self.suffix);
        fold_case(out, self.case);
        Ok(())
    }
}

/// Fold the case of `value` in place.
///
/// Valid UTF-8 is folded with Unicode rules; anything else, such as raw
/// random bytes, only has its ASCII letters folded.
pub fn fold_case(value: &mut Vec<u8>, case: CaseMode) {
    match case {
        CaseMode::None => {}
        CaseMode::Lower if value.is_ascii() => value.make_ascii_lowercase(),
        CaseMode::Upper if value.is_ascii() => value.make_ascii_uppercase(),
        CaseMode::Lower => match std::str::from_utf8(value) {
            Ok(text) => *value = text.to_lowercase().into_bytes(),
            Err(_) => value.make_ascii_lowercase(),
        },
        CaseMode::Upper => match std::str::from_utf8(value) {
            Ok(text) => *value = text.to_uppercase().into_bytes(),
            Err(_) => value.make_ascii_uppercase(),
        },
    }
}
