#![doc = r#"
Byte-exact Standard MIDI File encoding.

`smfwrite` turns an ordered list of note and tempo events into the bytes of a
format 1 MIDI file. Encoding is a linear pipeline:

```text
bytes (big-endian / VLQ) -> Event::encode -> build_track ("MTrk") -> build_file ("MThd" + tracks)
```

Every stage validates its input. Values are never masked into range: an out of
range channel, note, velocity, tempo or delta time is reported as an
[`EncodeError`] and no bytes are returned.

# Example
```rust
use smfwrite::prelude::*;

let melody = Track::new(vec![
    Event::note_on(0, 60, 100),
    Event::note_off(0, 60, 100).delayed(480),
]);

let bytes = MidiFileBuilder::default()
    .ticks_per_quarter_note(480)
    .track(melody)
    .build()
    .unwrap()
    .to_bytes()
    .unwrap();

assert_eq!(&bytes[0..4], b"MThd");
assert_eq!(bytes.len(), 35);
```
"#]
#![no_std]
#![warn(missing_docs)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod bytes;

mod error;
pub use error::*;

pub mod event;

pub mod file;

mod tempo;
pub use tempo::*;

/// Commonly used types
pub mod prelude {
    pub use crate::{
        EncodeError, EncodeResult, Field, FileError, Tempo,
        event::Event,
        file::{MidiFile, MidiFileBuilder, TicksPerQuarterNote, Track, build_file, build_track},
    };
}
