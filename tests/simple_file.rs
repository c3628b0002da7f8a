use pretty_assertions::assert_eq;
use smfwrite::prelude::*;

fn melody() -> Track {
    Track::new(vec![
        Event::note_on(0, 60, 100),
        Event::note_off(0, 60, 100).delayed(480),
    ])
}

#[test]
fn one_note_file() {
    let bytes = build_file(&[melody()], 480).unwrap();

    assert_eq!(bytes.len(), 35);
    assert_eq!(&bytes[0..14], b"MThd\x00\x00\x00\x06\x00\x01\x00\x01\x01\xE0");
    assert_eq!(&bytes[14..22], b"MTrk\x00\x00\x00\x0D");
    assert_eq!(
        &bytes[22..],
        &[
            0x00, 0x90, 0x3C, 0x64, // note on
            0x83, 0x60, 0x80, 0x3C, 0x64, // note off after 480 ticks
            0x00, 0xFF, 0x2F, 0x00, // end of track
        ]
    );
}

#[test]
fn builder_matches_build_file() {
    let file = MidiFileBuilder::default().track(melody()).build().unwrap();
    assert_eq!(file.to_bytes().unwrap(), build_file(&[melody()], 480).unwrap());
}

#[test]
fn tempo_track_and_melody() {
    // conductor track first, as format 1 players expect
    let conductor = Track::new(vec![Event::set_tempo(Tempo::from_bpm(90.).unwrap())]);
    let notes: Track = [79u8, 78, 63, 69, 68, 76, 80, 84]
        .into_iter()
        .enumerate()
        .flat_map(|(i, note)| {
            let gap = if i == 0 { 0 } else { 40 };
            [
                Event::note_on(0, note, 127).delayed(gap),
                Event::note_off(0, note, 0).delayed(100),
            ]
        })
        .collect();
    assert_eq!(notes.duration_ticks(), Some(7 * 40 + 8 * 100));

    let bytes = MidiFileBuilder::default()
        .ticks_per_quarter_note(240)
        .tracks([conductor, notes])
        .build()
        .unwrap()
        .to_bytes()
        .unwrap();

    assert_eq!(&bytes[10..14], &[0x00, 0x02, 0x00, 0xF0]);

    // 666_667 us per quarter note
    let conductor_chunk = &bytes[14..14 + 8 + 11];
    assert_eq!(
        conductor_chunk,
        b"MTrk\x00\x00\x00\x0B\x00\xFF\x51\x03\x0A\x2C\x2B\x00\xFF\x2F\x00"
    );

    let notes_chunk = &bytes[14 + 19..];
    assert_eq!(&notes_chunk[0..4], b"MTrk");
    // every event here has a one byte delta
    let payload_len = 16 * 4 + 4;
    assert_eq!(&notes_chunk[4..8], &(payload_len as u32).to_be_bytes());
    assert_eq!(notes_chunk.len(), 8 + payload_len);
    assert!(notes_chunk.ends_with(&[0x00, 0xFF, 0x2F, 0x00]));
}
