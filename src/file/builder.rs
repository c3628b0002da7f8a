use super::{MidiFile, TicksPerQuarterNote, Track};
use crate::{EncodeError, Field, FileError};
use alloc::vec::Vec;

/// A builder used to create a new [`MidiFile`].
///
/// Unless set, the file uses [`TicksPerQuarterNote::DEFAULT`] (480 ticks per
/// quarter note).
#[derive(Debug, Clone, Default)]
pub struct MidiFileBuilder {
    ticks_per_quarter_note: Option<u16>,
    tracks: Vec<Track>,
}

impl MidiFileBuilder {
    /// Sets the time resolution of every track in the file.
    pub fn ticks_per_quarter_note(mut self, tpqn: u16) -> Self {
        self.ticks_per_quarter_note = Some(tpqn);
        self
    }

    /// Appends a track. Tracks are written in the order they are added.
    pub fn track(mut self, track: impl Into<Track>) -> Self {
        self.tracks.push(track.into());
        self
    }

    /// Appends several tracks.
    pub fn tracks<I>(mut self, tracks: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Track>,
    {
        self.tracks.extend(tracks.into_iter().map(Into::into));
        self
    }

    /// Attempts to finish the midifile.
    ///
    /// Checks the division and the track count. Events are checked when the
    /// file is encoded.
    pub fn build(self) -> Result<MidiFile, FileError> {
        let timing = match self.ticks_per_quarter_note {
            Some(tpqn) => TicksPerQuarterNote::new(tpqn).map_err(FileError::Header)?,
            None => TicksPerQuarterNote::DEFAULT,
        };

        if self.tracks.len() > u16::MAX as usize {
            return Err(FileError::Header(EncodeError::range(
                Field::TrackCount,
                self.tracks.len() as i64,
                0,
                u16::MAX as i64,
            )));
        }

        Ok(MidiFile {
            timing,
            tracks: self.tracks,
        })
    }
}
