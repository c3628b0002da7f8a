use super::{
    TicksPerQuarterNote,
    chunk::{HEADER_ID, write_chunk},
};
use crate::{EncodeError, EncodeResult, Field};
use alloc::vec::Vec;

/// Format 1: simultaneous tracks sharing one timeline.
pub const FORMAT: u16 = 1;

/// The header payload is always six bytes long.
pub const HEADER_LEN: usize = 6;

/// The header chunk including its id and length.
pub const HEADER_CHUNK_LEN: usize = super::chunk::CHUNK_PREFIX_LEN + HEADER_LEN;

#[doc = r#"
Encodes the `MThd` chunk for a format 1 file with `num_tracks` tracks.

```text
"MThd" 00 00 00 06 00 01 <num tracks: 2 bytes> <division: 2 bytes>
```
"#]
pub fn header_chunk(num_tracks: usize, timing: TicksPerQuarterNote) -> EncodeResult<Vec<u8>> {
    let mut out = Vec::with_capacity(HEADER_CHUNK_LEN);
    write_header(num_tracks, timing, &mut out)?;
    Ok(out)
}

pub(crate) fn write_header(
    num_tracks: usize,
    timing: TicksPerQuarterNote,
    out: &mut Vec<u8>,
) -> EncodeResult<()> {
    let num_tracks = u16::try_from(num_tracks).map_err(|_| {
        EncodeError::range(Field::TrackCount, num_tracks as i64, 0, u16::MAX as i64)
    })?;

    let mut payload = [0u8; HEADER_LEN];
    payload[0..2].copy_from_slice(&FORMAT.to_be_bytes());
    payload[2..4].copy_from_slice(&num_tracks.to_be_bytes());
    payload[4..6].copy_from_slice(&timing.to_be_bytes());

    write_chunk(HEADER_ID, &payload, out)
}

#[test]
fn header_layout() {
    let header = header_chunk(3, TicksPerQuarterNote::DEFAULT).unwrap();
    assert_eq!(
        header,
        [b'M', b'T', b'h', b'd', 0, 0, 0, 6, 0, 1, 0, 3, 0x01, 0xE0]
    );
}

#[test]
fn too_many_tracks() {
    assert_eq!(
        header_chunk(65_536, TicksPerQuarterNote::DEFAULT),
        Err(EncodeError::range(Field::TrackCount, 65_536, 0, 65_535))
    );
    assert!(header_chunk(65_535, TicksPerQuarterNote::DEFAULT).is_ok());
}
