use serde::{Deserialize, Serialize};

use super::{ByteTransform, Provider};

/// Configuration for [`Wrap`].
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WrapConfig {
    #[serde(default)]
    pub prefix: Vec<u8>,
    #[serde(default)]
    pub suffix: Vec<u8>,
}

/// Wraps an entire buffer with a prefix and suffix.
///
/// The prefix is added to the chunk produced at offset zero. The suffix is a
/// footer emitted by the final step, which consumes nothing. An empty buffer
/// still produces `prefix` followed by `suffix`.
#[derive(Clone, Debug)]
pub struct Wrap {
    prefix: Vec<u8>,
    suffix: Vec<u8>,
}

impl Wrap {
    /// Creates a new wrapper with the specified prefix and suffix.
    pub fn new(prefix: impl Into<Vec<u8>>, suffix: impl Into<Vec<u8>>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }
}

impl ByteTransform for Wrap {
    type Output = Vec<u8>;

    fn step(&self, input: &[u8], offset: usize) -> (Vec<u8>, usize) {
        let rest = input.get(offset..).unwrap_or_default();
        let mut buffer = Vec::new();

        if offset == 0 {
            buffer.extend_from_slice(&self.prefix);
        }

        if rest.is_empty() {
            buffer.extend_from_slice(&self.suffix);
            return (buffer, 0);
        }

        buffer.extend_from_slice(rest);
        (buffer, rest.len())
    }
}

impl Provider for Wrap {
    type Config = WrapConfig;

    fn provide(config: WrapConfig) -> (Self, Vec<u8>) {
        (Self::new(config.prefix, config.suffix), Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_first_step() {
        let transform = Wrap::new(b"<start>", b"<end>");
        assert_eq!(transform.step(b"content", 0), (b"<start>content".to_vec(), 7));
    }

    #[test]
    fn test_wrap_footer() {
        let transform = Wrap::new(b"<start>", b"<end>");
        assert_eq!(transform.step(b"content", 7), (b"<end>".to_vec(), 0));
    }

    #[test]
    fn test_wrap_empty() {
        let transform = Wrap::new(b"<start>", b"<end>");
        assert_eq!(transform.step(b"", 0), (b"<start><end>".to_vec(), 0));
    }

    #[test]
    fn test_wrap_mid_buffer_has_no_prefix() {
        let transform = Wrap::new(b"<", b">");
        assert_eq!(transform.step(b"abc", 1), (b"bc".to_vec(), 2));
    }

    #[test]
    fn test_wrap_config() {
        let config: WrapConfig = serde_json::from_str(r#"{"suffix":[10]}"#).unwrap();
        let (transform, _) = Wrap::provide(config);
        assert_eq!(transform.step(b"x", 1), (b"\n".to_vec(), 0));
    }
}
