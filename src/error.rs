use core::fmt;
use thiserror::Error;

/// Identifies the value that failed validation in an [`EncodeError::InvalidRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// A channel number (4 bits)
    Channel,
    /// A note number (7 bits)
    Note,
    /// A note velocity (7 bits)
    Velocity,
    /// Microseconds per quarter note (24 bits)
    Tempo,
    /// A delta time (at most four 7-bit groups)
    DeltaTime,
    /// The number of tracks in the header (16 bits)
    TrackCount,
    /// The ticks per quarter note division of the header
    Division,
    /// The width requested from [`encode_big_endian`](crate::bytes::encode_big_endian)
    ByteCount,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Field::*;
        let name = match self {
            Channel => "channel",
            Note => "note",
            Velocity => "velocity",
            Tempo => "tempo",
            DeltaTime => "delta time",
            TrackCount => "track count",
            Division => "division",
            ByteCount => "byte count",
        };
        f.write_str(name)
    }
}

#[doc = r#"
The set of errors that can occur while encoding events, tracks and headers.

None of these are transient: the same input always produces the same error.
"#]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// A value is outside the bit width of its field.
    #[error("{field} {value} is out of range {min}..={max}")]
    InvalidRange {
        /// The offending field
        field: Field,
        /// The value that was provided
        value: i64,
        /// Smallest accepted value
        min: i64,
        /// Largest accepted value
        max: i64,
    },
    /// A delta time was negative.
    #[error("delta time {0} is negative")]
    NegativeDuration(i64),
    /// A value does not fit in the requested number of bytes.
    #[error("{value} does not fit in {byte_count} byte(s)")]
    Overflow {
        /// The value that was provided
        value: u64,
        /// The requested width
        byte_count: usize,
    },
    /// The event list handed to a track already contains an end of track event.
    #[error("event {index} is an end of track event, which is appended automatically")]
    DuplicateTerminator {
        /// Position of the end of track event in the list
        index: usize,
    },
}

impl EncodeError {
    pub(crate) const fn range(field: Field, value: i64, min: i64, max: i64) -> Self {
        Self::InvalidRange {
            field,
            value,
            min,
            max,
        }
    }

    /// Checks that `value` lies in `min..=max`.
    pub(crate) fn check(field: Field, value: i64, min: i64, max: i64) -> EncodeResult<()> {
        if (min..=max).contains(&value) {
            Ok(())
        } else {
            Err(Self::range(field, value, min, max))
        }
    }
}

/// The Encode Result type (see [`EncodeError`])
pub type EncodeResult<T> = Result<T, EncodeError>;

/// An [`EncodeError`] raised while assembling a whole file, tagged with where it happened.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FileError {
    /// The header could not be encoded (track count or division out of range).
    #[error("Encoding header, {0}")]
    Header(EncodeError),
    /// A track could not be encoded.
    #[error("Encoding track {track}, {kind}")]
    Track {
        /// Index of the track in the order it was supplied
        track: usize,
        /// What went wrong
        kind: EncodeError,
    },
}

impl FileError {
    /// Create a track error from a track index and kind
    pub const fn track(track: usize, kind: EncodeError) -> Self {
        Self::Track { track, kind }
    }

    /// Returns the underlying encoding error.
    pub fn kind(&self) -> &EncodeError {
        match self {
            Self::Header(kind) | Self::Track { kind, .. } => kind,
        }
    }

    /// Returns the index of the failing track, if the error came from a track.
    pub fn track_index(&self) -> Option<usize> {
        match self {
            Self::Header(_) => None,
            Self::Track { track, .. } => Some(*track),
        }
    }
}

#[test]
fn range_message_names_field() {
    let err = EncodeError::range(Field::Channel, 16, 0, 15);
    assert_eq!(alloc::format!("{err}"), "channel 16 is out of range 0..=15");
}

#[test]
fn file_error_exposes_kind() {
    let err = FileError::track(2, EncodeError::NegativeDuration(-1));
    assert_eq!(err.kind(), &EncodeError::NegativeDuration(-1));
    assert_eq!(err.track_index(), Some(2));
    assert_eq!(
        alloc::format!("{err}"),
        "Encoding track 2, delta time -1 is negative"
    );
}
