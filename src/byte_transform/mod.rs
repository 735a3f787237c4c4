pub mod driver;
pub mod shift_jis;
pub mod wrap;
pub mod xor;

use std::fmt::Debug;

/// A trait for byte-level transformations that are driven one step at a time
/// over an input buffer.
///
/// Every call receives the whole buffer plus an offset into it, so an
/// implementation can look backwards or ahead as far as it needs without
/// carrying state between calls.
pub trait ByteTransform {
    /// The kind of output produced by each step.
    type Output: Chunk;

    /// Transforms data starting at `offset`, returning the produced chunk and
    /// the number of input bytes consumed.
    ///
    /// The consumed count is independent of the chunk length. Returning a
    /// consumed count of zero signals that the transform cannot proceed past
    /// this point; the chunk returned alongside it is still part of the
    /// output, which lets a transform emit a footer exactly once.
    ///
    /// # Parameters
    /// * `input` - The full input buffer
    /// * `offset` - Where in `input` this step starts
    fn step(&self, input: &[u8], offset: usize) -> (Self::Output, usize);
}

/// Builds a transform from its configuration.
pub trait Provider: ByteTransform + Sized {
    type Config: Default;

    /// Returns the transform together with the empty output value used to
    /// join its chunks.
    ///
    /// The empty value can't be inferred from the output, because an empty
    /// input may legitimately produce a non-empty chunk.
    fn provide(config: Self::Config) -> (Self, Self::Output);
}

/// An output fragment that can be concatenated with others of its kind.
pub trait Chunk: Sized + Debug {
    /// Joins `chunks` in order, placing `joiner` between each pair.
    fn join(joiner: &Self, chunks: &[Self]) -> Self;
}

impl Chunk for Vec<u8> {
    fn join(joiner: &Self, chunks: &[Self]) -> Self {
        chunks.join(joiner.as_slice())
    }
}

impl Chunk for String {
    fn join(joiner: &Self, chunks: &[Self]) -> Self {
        chunks.join(joiner.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_bytes() {
        let chunks = vec![b"ab".to_vec(), Vec::new(), b"c".to_vec()];
        assert_eq!(<Vec<u8> as Chunk>::join(&Vec::new(), &chunks), b"abc");
    }

    #[test]
    fn test_join_text_keeps_order() {
        let chunks = vec!["x".to_owned(), "y".to_owned(), "z".to_owned()];
        assert_eq!(<String as Chunk>::join(&String::new(), &chunks), "xyz");
    }

    #[test]
    fn test_join_nothing() {
        let chunks: Vec<String> = Vec::new();
        assert_eq!(<String as Chunk>::join(&String::new(), &chunks), "");
    }
}
