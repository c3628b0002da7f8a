#![doc = r#"
Track events and their byte encoding.

Every event is written as a delta time (a variable length quantity, in ticks
since the previous event of the same track) followed by its status and data
bytes:

```text
NoteOn      <delta> 9n kk vv
NoteOff     <delta> 8n kk vv
SetTempo    <delta> FF 51 03 tt tt tt
EndOfTrack  00 FF 2F 00
```

`n` is the channel, `kk` the note and `vv` the velocity. Fields are checked
against their bit widths before anything is written.
"#]

use crate::{
    EncodeError, EncodeResult, Field, Tempo,
    bytes::{VLQ_MAX, write_big_endian, write_variable_length},
};
use alloc::vec::Vec;
use num_enum::IntoPrimitive;

/// The encoded end of track meta event, including its zero delta time.
pub const END_OF_TRACK: [u8; 4] = [0x00, 0xFF, 0x2F, 0x00];

/// Status bytes of the events this crate writes.
///
/// Channel voice statuses carry the channel in their low nibble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive)]
#[repr(u8)]
pub enum Status {
    /// `0x8n`
    NoteOff = 0x80,
    /// `0x9n`
    NoteOn = 0x90,
    /// Meta events (file only)
    Meta = 0xFF,
}

/// Type byte following [`Status::Meta`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive)]
#[repr(u8)]
pub enum MetaType {
    /// `FF 2F 00`
    EndOfTrack = 0x2F,
    /// `FF 51 03 tttttt`
    SetTempo = 0x51,
}

#[doc = r#"
A single event of a track.

Fields hold the raw values supplied by the caller; they are validated when the
event is encoded. `delta_time` is the number of ticks since the previous event
of the same track, never an absolute time.

# Example
```rust
# use smfwrite::prelude::*;
let event = Event::note_off(0, 60, 100).delayed(480);
assert_eq!(event.encode().unwrap(), vec![0x83, 0x60, 0x80, 0x3C, 0x64]);
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// A key was pressed
    NoteOn {
        /// 0-15
        channel: u8,
        /// 0-127
        note: u8,
        /// 0-127
        velocity: u8,
        /// Ticks since the previous event
        delta_time: i64,
    },
    /// A key was released
    NoteOff {
        /// 0-15
        channel: u8,
        /// 0-127
        note: u8,
        /// 0-127
        velocity: u8,
        /// Ticks since the previous event
        delta_time: i64,
    },
    /// Changes the tempo from this point on
    SetTempo {
        /// 0 to 2^24 - 1
        microseconds_per_quarter: u32,
        /// Ticks since the previous event
        delta_time: i64,
    },
    /// Terminates a track. Always fires at delta 0.
    ///
    /// Tracks append this themselves; see [`build_track`](crate::file::build_track).
    EndOfTrack,
}

impl Event {
    /// A note on with no delay
    pub const fn note_on(channel: u8, note: u8, velocity: u8) -> Self {
        Self::NoteOn {
            channel,
            note,
            velocity,
            delta_time: 0,
        }
    }

    /// A note off with no delay
    pub const fn note_off(channel: u8, note: u8, velocity: u8) -> Self {
        Self::NoteOff {
            channel,
            note,
            velocity,
            delta_time: 0,
        }
    }

    /// A tempo change with no delay
    pub const fn set_tempo(tempo: Tempo) -> Self {
        Self::SetTempo {
            microseconds_per_quarter: tempo.micros_per_quarter(),
            delta_time: 0,
        }
    }

    /// Returns the event with its delta time replaced by `ticks`.
    ///
    /// [`Event::EndOfTrack`] has no delta time and is returned unchanged.
    pub const fn delayed(self, ticks: i64) -> Self {
        match self {
            Self::NoteOn {
                channel,
                note,
                velocity,
                ..
            } => Self::NoteOn {
                channel,
                note,
                velocity,
                delta_time: ticks,
            },
            Self::NoteOff {
                channel,
                note,
                velocity,
                ..
            } => Self::NoteOff {
                channel,
                note,
                velocity,
                delta_time: ticks,
            },
            Self::SetTempo {
                microseconds_per_quarter,
                ..
            } => Self::SetTempo {
                microseconds_per_quarter,
                delta_time: ticks,
            },
            Self::EndOfTrack => Self::EndOfTrack,
        }
    }

    /// Ticks since the previous event. Zero for [`Event::EndOfTrack`].
    pub const fn delta_time(&self) -> i64 {
        match self {
            Self::NoteOn { delta_time, .. }
            | Self::NoteOff { delta_time, .. }
            | Self::SetTempo { delta_time, .. } => *delta_time,
            Self::EndOfTrack => 0,
        }
    }

    /// True for [`Event::EndOfTrack`]
    pub const fn is_end_of_track(&self) -> bool {
        matches!(self, Self::EndOfTrack)
    }

    /// Checks every field against its bit width.
    pub fn validate(&self) -> EncodeResult<()> {
        match *self {
            Self::NoteOn {
                channel,
                note,
                velocity,
                delta_time,
            }
            | Self::NoteOff {
                channel,
                note,
                velocity,
                delta_time,
            } => {
                check_delta(delta_time)?;
                EncodeError::check(Field::Channel, channel as i64, 0, 0x0F)?;
                EncodeError::check(Field::Note, note as i64, 0, 0x7F)?;
                EncodeError::check(Field::Velocity, velocity as i64, 0, 0x7F)
            }
            Self::SetTempo {
                microseconds_per_quarter,
                delta_time,
            } => {
                check_delta(delta_time)?;
                Tempo::new(microseconds_per_quarter).map(|_| ())
            }
            Self::EndOfTrack => Ok(()),
        }
    }

    /// Encodes the event, delta time first.
    pub fn encode(&self) -> EncodeResult<Vec<u8>> {
        let mut out = Vec::with_capacity(8);
        self.encode_into(&mut out)?;
        Ok(out)
    }

    /// Same as [`Event::encode`], appending to `out`.
    ///
    /// Nothing is written if the event is rejected.
    pub fn encode_into(&self, out: &mut Vec<u8>) -> EncodeResult<()> {
        self.validate()?;
        match *self {
            Self::NoteOn {
                channel,
                note,
                velocity,
                delta_time,
            } => {
                write_variable_length(delta_time, out)?;
                out.extend_from_slice(&[u8::from(Status::NoteOn) | channel, note, velocity]);
            }
            Self::NoteOff {
                channel,
                note,
                velocity,
                delta_time,
            } => {
                write_variable_length(delta_time, out)?;
                out.extend_from_slice(&[u8::from(Status::NoteOff) | channel, note, velocity]);
            }
            Self::SetTempo {
                microseconds_per_quarter,
                delta_time,
            } => {
                write_variable_length(delta_time, out)?;
                out.extend_from_slice(&[
                    u8::from(Status::Meta),
                    u8::from(MetaType::SetTempo),
                    0x03,
                ]);
                write_big_endian(microseconds_per_quarter as u64, 3, out)?;
            }
            Self::EndOfTrack => out.extend_from_slice(&END_OF_TRACK),
        }
        Ok(())
    }
}

fn check_delta(delta_time: i64) -> EncodeResult<()> {
    if delta_time < 0 {
        return Err(EncodeError::NegativeDuration(delta_time));
    }
    EncodeError::check(Field::DeltaTime, delta_time, 0, VLQ_MAX as i64)
}
