#![doc = r#"
Chunk framing

MIDI files are organized into chunks, each identified by a 4-character ASCII
type identifier followed by a 32-bit big-endian length and then the chunk data.

```text
[Header Chunk: "MThd" 00 00 00 06 <6 bytes>]
[Track Chunk 1: "MTrk" <length> <events>]
...
[Track Chunk N: "MTrk" <length> <events>]
```

The declared length is always exactly the number of payload bytes; chunks are
never padded.
"#]

use crate::{EncodeResult, bytes::encode_big_endian};
use alloc::vec::Vec;

/// Identifies the header chunk
pub const HEADER_ID: [u8; 4] = *b"MThd";

/// Identifies a track chunk
pub const TRACK_ID: [u8; 4] = *b"MTrk";

/// Size of a chunk id plus its length field.
pub const CHUNK_PREFIX_LEN: usize = 8;

/// Frames `payload` as a chunk and appends it to `out`.
///
/// Fails with [`EncodeError::Overflow`](crate::EncodeError::Overflow) if the
/// payload is longer than a 32-bit length can describe.
pub fn write_chunk(id: [u8; 4], payload: &[u8], out: &mut Vec<u8>) -> EncodeResult<()> {
    let len = encode_big_endian(payload.len() as u64, 4)?;
    out.reserve(CHUNK_PREFIX_LEN + payload.len());
    out.extend_from_slice(&id);
    out.extend_from_slice(&len);
    out.extend_from_slice(payload);
    Ok(())
}

#[test]
fn frames_payload() {
    let mut out = Vec::new();
    write_chunk(TRACK_ID, &[0x00, 0xFF, 0x2F, 0x00], &mut out).unwrap();
    assert_eq!(
        out,
        [b'M', b'T', b'r', b'k', 0, 0, 0, 4, 0x00, 0xFF, 0x2F, 0x00]
    );
}

#[test]
fn empty_payload() {
    let mut out = Vec::new();
    write_chunk(*b"XYZW", &[], &mut out).unwrap();
    assert_eq!(out, b"XYZW\0\0\0\0");
}
