#![doc = r#"
Fixed width and variable length integer encodings used by MIDI files.

# Big-endian integers

Chunk lengths, header fields and tempo values are stored most significant byte
first, in a fixed number of bytes. A value that does not fit in that many bytes
is an [`EncodeError::Overflow`]; high bits are never dropped.

# Variable length quantities

Delta times are stored as a variable length quantity (VLQ). The value is split
into 7-bit groups, most significant group first. Every byte but the last has
its high bit (`0x80`) set to mark that another byte follows.

```text
0x00000000 -> 00
0x0000007F -> 7F
0x00000080 -> 81 00
0x00004000 -> 81 80 00
0x0FFFFFFF -> FF FF FF 7F
```

MIDI files allow at most four groups, so the largest encodable value is
[`VLQ_MAX`].
"#]

use crate::{EncodeError, EncodeResult, Field};
use alloc::vec::Vec;

/// The largest value a four byte variable length quantity can hold.
pub const VLQ_MAX: u32 = 0x0FFF_FFFF;

/// Packs `value` into `byte_count` bytes, most significant byte first.
///
/// `byte_count` must be between 1 and 8.
///
/// # Example
/// ```rust
/// # use smfwrite::{bytes::encode_big_endian, EncodeError};
/// assert_eq!(encode_big_endian(0x010203, 3).unwrap(), vec![0x01, 0x02, 0x03]);
/// assert!(matches!(encode_big_endian(256, 1), Err(EncodeError::Overflow { .. })));
/// ```
pub fn encode_big_endian(value: u64, byte_count: usize) -> EncodeResult<Vec<u8>> {
    let mut out = Vec::with_capacity(byte_count);
    write_big_endian(value, byte_count, &mut out)?;
    Ok(out)
}

/// Same as [`encode_big_endian`], appending to `out`.
///
/// Nothing is written if the value is rejected.
pub fn write_big_endian(value: u64, byte_count: usize, out: &mut Vec<u8>) -> EncodeResult<()> {
    EncodeError::check(Field::ByteCount, byte_count as i64, 1, 8)?;

    if byte_count < 8 && value >> (8 * byte_count) != 0 {
        return Err(EncodeError::Overflow { value, byte_count });
    }

    out.extend_from_slice(&value.to_be_bytes()[8 - byte_count..]);
    Ok(())
}

/// Encodes `value` as a variable length quantity.
///
/// Negative values and values above [`VLQ_MAX`] are rejected with
/// [`EncodeError::InvalidRange`].
///
/// # Example
/// ```rust
/// # use smfwrite::bytes::encode_variable_length;
/// assert_eq!(encode_variable_length(0).unwrap(), vec![0x00]);
/// assert_eq!(encode_variable_length(480).unwrap(), vec![0x83, 0x60]);
/// ```
pub fn encode_variable_length(value: i64) -> EncodeResult<Vec<u8>> {
    let mut out = Vec::with_capacity(4);
    write_variable_length(value, &mut out)?;
    Ok(out)
}

/// Same as [`encode_variable_length`], appending to `out`.
pub fn write_variable_length(value: i64, out: &mut Vec<u8>) -> EncodeResult<()> {
    EncodeError::check(Field::DeltaTime, value, 0, VLQ_MAX as i64)?;

    // least significant group first
    let mut groups = [0u8; 4];
    let mut len = 0;
    let mut rest = value as u32;
    loop {
        groups[len] = (rest & 0x7F) as u8;
        len += 1;
        rest >>= 7;
        if rest == 0 {
            break;
        }
    }

    for i in (0..len).rev() {
        let continuation = if i == 0 { 0x00 } else { 0x80 };
        out.push(groups[i] | continuation);
    }
    Ok(())
}
