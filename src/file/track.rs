use super::chunk::{TRACK_ID, write_chunk};
use crate::{
    EncodeError, EncodeResult,
    event::{END_OF_TRACK, Event},
};
use alloc::vec::Vec;

#[doc = r#"
An ordered list of events that becomes one `MTrk` chunk.

A track never holds its own terminator: the end of track event is appended
when the track is encoded.

# Example
```rust
# use smfwrite::prelude::*;
let track: Track = [Event::note_on(0, 64, 90), Event::note_off(0, 64, 0).delayed(240)]
    .into_iter()
    .collect();
assert_eq!(track.len(), 2);

let chunk = track.to_chunk().unwrap();
assert_eq!(&chunk[0..4], b"MTrk");
```
"#]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Track {
    events: Vec<Event>,
}

impl Track {
    /// Create a new track from events in playing order
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// Returns the events of the track, without the trailing end of track
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// The number of events in the track
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True if the track has no events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Sum of all delta times, i.e. the tick at which the track ends.
    ///
    /// Returns `None` if the sum does not fit in an `i64`. Deltas are not
    /// validated until the track is encoded.
    pub fn duration_ticks(&self) -> Option<i64> {
        self.events
            .iter()
            .try_fold(0i64, |acc, event| acc.checked_add(event.delta_time()))
    }

    /// Encodes the events followed by the end of track event, without chunk framing.
    pub fn encode_payload(&self) -> EncodeResult<Vec<u8>> {
        track_payload(&self.events)
    }

    /// Encodes the complete `MTrk` chunk. See [`build_track`].
    pub fn to_chunk(&self) -> EncodeResult<Vec<u8>> {
        build_track(&self.events)
    }
}

impl From<Vec<Event>> for Track {
    fn from(events: Vec<Event>) -> Self {
        Self::new(events)
    }
}

impl FromIterator<Event> for Track {
    fn from_iter<T: IntoIterator<Item = Event>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[doc = r#"
Encodes `events` as a complete `MTrk` chunk.

Events are written in the given order and an end of track event is appended.
`events` must not contain an [`Event::EndOfTrack`] itself; one anywhere in the
list is rejected with [`EncodeError::DuplicateTerminator`].

```text
"MTrk" <payload length: 4 bytes> <event>... 00 FF 2F 00
```
"#]
pub fn build_track(events: &[Event]) -> EncodeResult<Vec<u8>> {
    let payload = track_payload(events)?;
    let mut chunk = Vec::new();
    write_chunk(TRACK_ID, &payload, &mut chunk)?;
    Ok(chunk)
}

fn track_payload(events: &[Event]) -> EncodeResult<Vec<u8>> {
    let mut payload = Vec::with_capacity(events.len() * 4 + END_OF_TRACK.len());
    for (index, event) in events.iter().enumerate() {
        if event.is_end_of_track() {
            return Err(EncodeError::DuplicateTerminator { index });
        }
        event.encode_into(&mut payload)?;
    }
    payload.extend_from_slice(&END_OF_TRACK);
    Ok(payload)
}
