use super::{ByteTransform, Chunk, Provider};
use crate::error::Incomplete;

/// Drives `transform` over `input` until it stops making progress, joining
/// every chunk it produced with `joiner`.
///
/// When `full` is set, stopping before the end of `input` is an error that
/// still carries the joined output and the number of unconsumed bytes.
pub fn drive<T: ByteTransform>(
    input: &[u8],
    transform: &T,
    joiner: &T::Output,
    full: bool,
) -> Result<T::Output, Incomplete<T::Output>> {
    let mut chunks = Vec::new();
    let mut offset = 0;

    loop {
        let (chunk, consumed) = transform.step(input, offset);
        log::trace!("step at offset {offset} consumed {consumed} byte(s)");

        // A step that consumes nothing may still emit a footer, so keep the
        // chunk before deciding whether to stop.
        chunks.push(chunk);
        offset += consumed;

        if consumed == 0 {
            break;
        }
    }

    let output = Chunk::join(joiner, &chunks);
    let remaining = input.len().saturating_sub(offset);

    if full && offset != input.len() {
        log::debug!("transform stopped at offset {offset} of {}", input.len());
        return Err(Incomplete::new(output, remaining));
    }

    Ok(output)
}

/// Builds a transform of type `P` from `config` and drives it over `input`.
pub fn transform<P: Provider>(
    input: &[u8],
    full: bool,
    config: P::Config,
) -> Result<P::Output, Incomplete<P::Output>> {
    let (transform, joiner) = P::provide(config);
    drive(input, &transform, &joiner, full)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::byte_transform::xor::{Xor, XorConfig};

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Emits the offset of each call as text, one byte per step, then a
    /// footer.
    struct Offsets;

    impl ByteTransform for Offsets {
        type Output = String;

        fn step(&self, input: &[u8], offset: usize) -> (String, usize) {
            if offset < input.len() {
                (offset.to_string(), 1)
            } else {
                ("end".to_owned(), 0)
            }
        }
    }

    #[test]
    fn test_drive_joins_in_call_order() {
        init();
        let output = drive(b"abcd", &Offsets, &String::new(), true).unwrap();
        assert_eq!(output, "0123end");
    }

    #[test]
    fn test_drive_uses_joiner() {
        init();
        let output = drive(b"ab", &Offsets, &",".to_owned(), true).unwrap();
        assert_eq!(output, "0,1,end");
    }

    #[test]
    fn test_drive_empty_input_keeps_first_chunk() {
        init();
        let output = drive(b"", &Offsets, &String::new(), true).unwrap();
        assert_eq!(output, "end");
    }

    #[test]
    fn test_drive_xor() {
        init();
        let output = transform::<Xor>(&[0x01, 0x02], true, XorConfig { pattern: vec![0x05] });
        assert_eq!(output, Ok(vec![0x04, 0x07]));
    }

    #[test]
    fn test_drive_incomplete() {
        init();
        let config = XorConfig { pattern: vec![0x05, 0x06] };
        let err = transform::<Xor>(&[0x01, 0x02, 0x03], true, config).unwrap_err();
        assert_eq!(err.partial(), &vec![0x04, 0x04]);
        assert_eq!(err.remaining(), 1);
    }

    #[test]
    fn test_drive_partial_allowed() {
        init();
        let config = XorConfig { pattern: vec![0x05, 0x06] };
        let output = transform::<Xor>(&[0x01, 0x02, 0x03], false, config);
        assert_eq!(output, Ok(vec![0x04, 0x04]));
    }
}
