#![doc = r#"
Rusty representation of a [`MidiFile`] and its encoding.

A file is a header chunk followed by one chunk per track:

```text
"MThd" 00 00 00 06 00 01 <num tracks> <division>
"MTrk" <length> <events> 00 FF 2F 00
...
```

Encoding is all or nothing: if any track fails, no bytes are returned.
"#]

mod builder;
pub use builder::*;

pub mod chunk;

mod header;
pub use header::*;

#[cfg(feature = "parallel")]
mod parallel;

mod timing;
pub use timing::*;

mod track;
pub use track::*;

use crate::FileError;
use alloc::vec::Vec;

#[doc = r#"
A format 1 MIDI file: a tick resolution and a list of tracks that play
simultaneously.

Build one with [`MidiFileBuilder`].
"#]
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MidiFile {
    timing: TicksPerQuarterNote,
    tracks: Vec<Track>,
}

impl MidiFile {
    /// Returns the tick resolution of the file
    pub fn timing(&self) -> TicksPerQuarterNote {
        self.timing
    }

    /// Returns the tracks of the file, in order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// The number of tracks
    pub fn num_tracks(&self) -> usize {
        self.tracks.len()
    }

    /// Encodes the whole file.
    pub fn to_bytes(&self) -> Result<Vec<u8>, FileError> {
        assemble(&self.tracks, self.timing, encode_chunks)
    }

    /// Same as [`MidiFile::to_bytes`], encoding tracks on several threads.
    ///
    /// The output is identical to the sequential version.
    #[cfg(feature = "parallel")]
    pub fn to_bytes_parallel(&self) -> Result<Vec<u8>, FileError> {
        assemble(&self.tracks, self.timing, parallel::encode_chunks)
    }

    /// Consumes the file, returning its tracks
    pub fn into_tracks(self) -> Vec<Track> {
        self.tracks
    }
}

#[doc = r#"
Encodes `tracks` as a format 1 file with the given ticks per quarter note.

`480` is the conventional division (see [`TicksPerQuarterNote::DEFAULT`]).

# Example
```rust
# use smfwrite::prelude::*;
let bytes = build_file(&[Track::default()], 480).unwrap();
assert_eq!(
    &bytes[..14],
    &[b'M', b'T', b'h', b'd', 0, 0, 0, 6, 0, 1, 0, 1, 0x01, 0xE0]
);
```
"#]
pub fn build_file(tracks: &[Track], ticks_per_quarter: u16) -> Result<Vec<u8>, FileError> {
    let timing = TicksPerQuarterNote::new(ticks_per_quarter).map_err(FileError::Header)?;
    assemble(tracks, timing, encode_chunks)
}

fn assemble(
    tracks: &[Track],
    timing: TicksPerQuarterNote,
    encode: impl FnOnce(&[Track]) -> Result<Vec<Vec<u8>>, FileError>,
) -> Result<Vec<u8>, FileError> {
    let result = header_chunk(tracks.len(), timing)
        .map_err(FileError::Header)
        .and_then(|header| {
            let chunks = encode(tracks)?;
            let len = header.len() + chunks.iter().map(Vec::len).sum::<usize>();

            let mut bytes = Vec::with_capacity(len);
            bytes.extend_from_slice(&header);
            for chunk in &chunks {
                bytes.extend_from_slice(chunk);
            }
            Ok(bytes)
        });

    match &result {
        Ok(bytes) => log::debug!(
            "encoded {} tracks at {} tpqn into {} bytes",
            tracks.len(),
            timing.ticks_per_quarter_note(),
            bytes.len()
        ),
        Err(e) => log::warn!("midi file encoding aborted: {e}"),
    }
    result
}

pub(crate) fn encode_chunks(tracks: &[Track]) -> Result<Vec<Vec<u8>>, FileError> {
    tracks
        .iter()
        .enumerate()
        .map(|(index, track)| {
            let chunk = track.to_chunk().map_err(|e| FileError::track(index, e))?;
            log::trace!("track {index}: {} byte chunk", chunk.len());
            Ok(chunk)
        })
        .collect()
}
