pub mod byte_transform;
pub mod error;

pub use byte_transform::driver::{drive, transform};
pub use byte_transform::shift_jis::{DecodeConfig, ErrorPolicy, ShiftJis};
pub use byte_transform::wrap::{Wrap, WrapConfig};
pub use byte_transform::xor::{Xor, XorConfig};
pub use byte_transform::{ByteTransform, Chunk, Provider};
pub use error::{Incomplete, TransformError};
