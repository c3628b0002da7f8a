use crate::{EncodeError, EncodeResult, Field};

/// A representation of the `tpqn` timing for a MIDI file
///
/// Any non-zero 16-bit value is written as given. Readers take a division word
/// with its leading bit set as SMPTE timing, so values above
/// [`TicksPerQuarterNote::SMPTE_BIT`] are accepted but logged as a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TicksPerQuarterNote(u16);

impl TicksPerQuarterNote {
    /// 480 ticks per quarter note.
    pub const DEFAULT: Self = Self(480);
    /// Leading bit of the division word, which selects SMPTE timing when read back.
    pub const SMPTE_BIT: u16 = 0x8000;

    /// The tickrate per quarter note defines what a "quarter note" means.
    pub fn new(tpqn: u16) -> EncodeResult<Self> {
        EncodeError::check(Field::Division, tpqn as i64, 1, u16::MAX as i64)?;
        if tpqn & Self::SMPTE_BIT != 0 {
            log::warn!("division {tpqn} has its leading bit set and reads back as SMPTE timing");
        }
        Ok(Self(tpqn))
    }

    /// Returns the ticks per quarter note for the file.
    pub const fn ticks_per_quarter_note(&self) -> u16 {
        self.0
    }

    /// True if readers will interpret the division word as SMPTE timing.
    pub const fn reads_as_smpte(&self) -> bool {
        self.0 & Self::SMPTE_BIT != 0
    }

    /// The division word as it is written in the header.
    pub const fn to_be_bytes(&self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl Default for TicksPerQuarterNote {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[test]
fn division_bounds() {
    assert_eq!(TicksPerQuarterNote::new(96).unwrap().to_be_bytes(), [0x00, 0x60]);
    assert!(!TicksPerQuarterNote::new(0x7FFF).unwrap().reads_as_smpte());
    assert_eq!(
        TicksPerQuarterNote::new(0),
        Err(EncodeError::range(Field::Division, 0, 1, 0xFFFF))
    );
}

#[test]
fn full_sixteen_bit_division() {
    for tpqn in [0x8000, 40_000, u16::MAX] {
        let timing = TicksPerQuarterNote::new(tpqn).unwrap();
        assert_eq!(timing.to_be_bytes(), tpqn.to_be_bytes());
        assert!(timing.reads_as_smpte());
    }
}
