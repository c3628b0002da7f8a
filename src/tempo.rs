use crate::{EncodeError, EncodeResult, Field};

const MICROS_PER_MINUTE: f64 = 60_000_000.;

#[doc = r#"
Tempo, as microseconds per quarter note.

The set tempo meta event stores this in three bytes, so the value is limited to
24 bits.

# Example
```rust
# use smfwrite::Tempo;
let tempo = Tempo::from_bpm(120.).unwrap();
assert_eq!(tempo, Tempo::DEFAULT);
assert_eq!(tempo.micros_per_quarter(), 500_000);
```
"#]
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tempo(u32);

impl Tempo {
    /// 120 beats per minute.
    pub const DEFAULT: Self = Self(500_000);
    /// The largest tempo value that fits in a set tempo event.
    pub const MAX: Self = Self(0x00FF_FFFF);

    /// Creates a tempo from microseconds per quarter note.
    pub fn new(micros_per_quarter: u32) -> EncodeResult<Self> {
        EncodeError::check(
            Field::Tempo,
            micros_per_quarter as i64,
            0,
            Self::MAX.0 as i64,
        )?;
        Ok(Self(micros_per_quarter))
    }

    /// Creates a tempo from beats (quarter notes) per minute, rounding to the
    /// nearest microsecond.
    pub fn from_bpm(bpm: f64) -> EncodeResult<Self> {
        let micros = MICROS_PER_MINUTE / bpm;
        // `as` saturates, so infinities land outside the accepted range
        let rounded = (micros + 0.5) as i64;
        if !(bpm > 0.) {
            return Err(EncodeError::range(Field::Tempo, rounded, 0, Self::MAX.0 as i64));
        }
        EncodeError::check(Field::Tempo, rounded, 0, Self::MAX.0 as i64)?;
        Ok(Self(rounded as u32))
    }

    /// Returns microseconds per quarter note
    #[inline]
    pub const fn micros_per_quarter(&self) -> u32 {
        self.0
    }

    /// Returns beats per minute
    pub fn bpm(&self) -> f64 {
        MICROS_PER_MINUTE / self.0 as f64
    }
}

impl Default for Tempo {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for Tempo {
    type Error = EncodeError;
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[test]
fn tempo_from_bpm() {
    assert_eq!(Tempo::from_bpm(60.).unwrap().micros_per_quarter(), 1_000_000);
    assert_eq!(Tempo::from_bpm(90.).unwrap().micros_per_quarter(), 666_667);
    assert_eq!(Tempo::default().bpm(), 120.);
}

#[test]
fn tempo_limits() {
    assert!(Tempo::new(0x00FF_FFFF).is_ok());
    assert!(matches!(
        Tempo::new(0x0100_0000),
        Err(EncodeError::InvalidRange {
            field: Field::Tempo,
            ..
        })
    ));
    // 60_000_000 / 3 is larger than 24 bits allow
    assert!(Tempo::from_bpm(3.).is_err());
    assert!(Tempo::from_bpm(0.).is_err());
    assert!(Tempo::from_bpm(-120.).is_err());
    assert!(Tempo::from_bpm(f64::NAN).is_err());
}
