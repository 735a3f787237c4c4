use std::fmt;
use std::str::FromStr;

use encoding_rs::{DecoderResult, Encoding, SHIFT_JIS};
use serde::{Deserialize, Serialize};

use super::{ByteTransform, Provider};
use crate::error::TransformError;

/// How malformed byte sequences are handled while decoding.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop before the first malformed sequence.
    #[default]
    Strict,
    /// Substitute U+FFFD for each malformed sequence and carry on.
    Replace,
}

impl FromStr for ErrorPolicy {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(Self::Strict),
            "replace" => Ok(Self::Replace),
            _ => Err(TransformError::UnknownPolicy(s.to_owned())),
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => f.write_str("strict"),
            Self::Replace => f.write_str("replace"),
        }
    }
}

/// Configuration for [`ShiftJis`].
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DecodeConfig {
    #[serde(default)]
    pub errors: ErrorPolicy,
}

/// Result of decoding one slice in a single pass.
#[derive(Debug)]
struct Decoded {
    text: String,
    /// Bytes of the slice that were read
    read: usize,
    /// Start of the malformed sequence that stopped a strict decode
    stopped_at: Option<usize>,
}

/// Decodes Shift_JIS bytes to text.
///
/// Decoders for multibyte encodings assume they see a complete buffer, so the
/// tail of a partial buffer needs care: a lone lead byte at the end may be the
/// first half of a pair whose second half hasn't arrived yet. Such a byte is
/// left unconsumed whichever error policy is in use.
#[derive(Clone, Debug)]
pub struct ShiftJis {
    encoding: &'static Encoding,
    errors: ErrorPolicy,
}

impl ShiftJis {
    pub fn new(errors: ErrorPolicy) -> Self {
        Self { encoding: SHIFT_JIS, errors }
    }

    pub fn errors(&self) -> ErrorPolicy {
        self.errors
    }

    /// Decodes `input` as a complete buffer under the configured policy.
    fn decode(&self, input: &[u8]) -> Decoded {
        let mut decoder = self.encoding.new_decoder_without_bom_handling();
        let capacity = decoder
            .max_utf8_buffer_length_without_replacement(input.len())
            .unwrap_or(input.len());
        let mut text = String::with_capacity(capacity);
        let mut read = 0;

        loop {
            let (result, n) = decoder.decode_to_string_without_replacement(&input[read..], &mut text, true);
            read += n;

            match result {
                DecoderResult::InputEmpty => break,
                DecoderResult::OutputFull => {
                    let more = decoder
                        .max_utf8_buffer_length_without_replacement(input.len() - read)
                        .unwrap_or(input.len() - read);
                    text.reserve(more.max(4));
                }
                DecoderResult::Malformed(bad, after) => match self.errors {
                    ErrorPolicy::Strict => {
                        let start = read - usize::from(bad) - usize::from(after);
                        return Decoded { text, read, stopped_at: Some(start) };
                    }
                    ErrorPolicy::Replace => text.push(char::REPLACEMENT_CHARACTER),
                },
            }
        }

        Decoded { text, read, stopped_at: None }
    }
}

/// Whether `byte` could open a two-byte sequence.
fn is_lead_byte(byte: u8) -> bool {
    matches!(byte, 0x81..=0x9F | 0xE0..=0xFC)
}

impl ByteTransform for ShiftJis {
    type Output = String;

    fn step(&self, input: &[u8], offset: usize) -> (String, usize) {
        let rest = input.get(offset..).unwrap_or_default();
        let Some((&last, head)) = rest.split_last() else {
            return (String::new(), 0);
        };

        let decoded = self.decode(rest);
        if let Some(start) = decoded.stopped_at {
            return (decoded.text, start);
        }

        // A strict decode that got this far has already validated the tail.
        if self.errors == ErrorPolicy::Strict || !is_lead_byte(last) {
            return (decoded.text, decoded.read);
        }

        // The replacement may have swallowed the first half of a pair. Decode
        // again without the last byte; if nothing before it changes, that byte
        // stood alone and should wait for more data.
        let shorter = self.decode(head);
        if decoded.text.starts_with(&shorter.text) {
            log::trace!("deferring trailing lead byte {last:#04x} at offset {}", offset + head.len());
            return (shorter.text, shorter.read);
        }

        (decoded.text, decoded.read)
    }
}

impl Provider for ShiftJis {
    type Config = DecodeConfig;

    fn provide(config: DecodeConfig) -> (Self, String) {
        (Self::new(config.errors), String::new())
    }
}
