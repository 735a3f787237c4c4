use std::fmt::Debug;

use thiserror::Error;

/// A full pass stopped before reaching the end of its input.
///
/// Carries whatever output was produced so far, so the caller can accept it
/// or try again once more data is available.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("transform stopped with {remaining} unconsumed trailing byte(s)")]
pub struct Incomplete<O: Debug> {
    partial: O,
    remaining: usize,
}

impl<O: Debug> Incomplete<O> {
    pub fn new(partial: O, remaining: usize) -> Self {
        Self { partial, remaining }
    }

    /// Output assembled before the transform stopped.
    pub fn partial(&self) -> &O {
        &self.partial
    }

    /// Number of trailing input bytes that were never consumed.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn into_partial(self) -> O {
        self.partial
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("unknown error policy: {0}")]
    UnknownPolicy(String),
}
