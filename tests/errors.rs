use smfwrite::{bytes::encode_big_endian, prelude::*};

#[test]
fn negative_delta_time() {
    let track = Track::new(vec![Event::note_on(0, 60, 100).delayed(-1)]);
    let err = build_file(&[track], 480).unwrap_err();
    assert_eq!(err.kind(), &EncodeError::NegativeDuration(-1));
    assert_eq!(err.track_index(), Some(0));
}

#[test]
fn channel_out_of_range() {
    let err = Event::note_on(16, 60, 100).encode().unwrap_err();
    assert_eq!(
        err,
        EncodeError::InvalidRange {
            field: Field::Channel,
            value: 16,
            min: 0,
            max: 15,
        }
    );
}

#[test]
fn explicit_end_of_track() {
    let track = Track::new(vec![Event::note_on(0, 60, 100), Event::EndOfTrack]);
    assert_eq!(
        track.to_chunk(),
        Err(EncodeError::DuplicateTerminator { index: 1 })
    );

    let err = build_file(&[Track::default(), track], 480).unwrap_err();
    assert_eq!(
        err,
        FileError::Track {
            track: 1,
            kind: EncodeError::DuplicateTerminator { index: 1 },
        }
    );
}

#[test]
fn overflowing_big_endian() {
    assert_eq!(
        encode_big_endian(256, 1),
        Err(EncodeError::Overflow {
            value: 256,
            byte_count: 1,
        })
    );
}

#[test]
fn out_of_range_tempo_event() {
    let event = Event::SetTempo {
        microseconds_per_quarter: 1 << 24,
        delta_time: 0,
    };
    let err = build_file(&[Track::new(vec![event])], 480).unwrap_err();
    assert!(matches!(
        err.kind(),
        EncodeError::InvalidRange {
            field: Field::Tempo,
            ..
        }
    ));
}

#[test]
fn division_out_of_range() {
    let err = build_file(&[], 0).unwrap_err();
    assert_eq!(
        err,
        FileError::Header(EncodeError::InvalidRange {
            field: Field::Division,
            value: 0,
            min: 1,
            max: 65_535,
        })
    );
}

#[test]
fn any_nonzero_division_is_accepted() {
    for tpqn in [1, 0x7FFF, 0x8000, 40_000, u16::MAX] {
        let bytes = build_file(&[Track::default()], tpqn).unwrap();
        assert_eq!(&bytes[12..14], &tpqn.to_be_bytes(), "{tpqn}");
    }
}

#[test]
fn errors_are_readable() {
    let err = build_file(&[Track::new(vec![Event::note_off(0, 200, 0)])], 480).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Encoding track 0, note 200 is out of range 0..=127"
    );
}
