use serde::{Deserialize, Serialize};

use super::{ByteTransform, Provider};

/// Configuration for [`Xor`].
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct XorConfig {
    #[serde(default)]
    pub pattern: Vec<u8>,
}

/// XORs the input, one pattern-length block at a time, with a fixed pattern.
///
/// The transform is its own inverse: running it twice with the same pattern
/// over the same block boundaries gives back the original bytes. A trailing
/// block shorter than the pattern is left unconsumed.
#[derive(Clone, Default, Debug)]
pub struct Xor {
    pattern: Vec<u8>,
}

impl Xor {
    pub fn new(pattern: impl Into<Vec<u8>>) -> Self {
        Self { pattern: pattern.into() }
    }
}

impl ByteTransform for Xor {
    type Output = Vec<u8>;

    fn step(&self, input: &[u8], offset: usize) -> (Vec<u8>, usize) {
        let count = self.pattern.len();
        let Some(block) = input.get(offset..offset + count) else {
            return (Vec::new(), 0);
        };
        let output = block.iter().zip(&self.pattern).map(|(&b, &p)| b ^ p).collect();
        (output, count)
    }
}

impl Provider for Xor {
    type Config = XorConfig;

    fn provide(config: XorConfig) -> (Self, Vec<u8>) {
        (Self::new(config.pattern), Vec::new())
    }
}
