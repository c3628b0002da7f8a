use proptest::prelude::*;
use smfwrite::{
    bytes::{VLQ_MAX, encode_variable_length},
    prelude::*,
};

/// Reads one variable length quantity, returning it and the bytes consumed.
fn decode_vlq(bytes: &[u8]) -> (u32, usize) {
    let mut value = 0u32;
    for (i, byte) in bytes.iter().enumerate() {
        value = (value << 7) | (byte & 0x7F) as u32;
        if byte & 0x80 == 0 {
            return (value, i + 1);
        }
    }
    panic!("unterminated vlq {bytes:02X?}");
}

/// Splits a file into its chunks as `(id, declared length, payload)`.
fn chunks(mut bytes: &[u8]) -> Vec<([u8; 4], u32, &[u8])> {
    let mut out = Vec::new();
    while !bytes.is_empty() {
        let id = bytes[0..4].try_into().unwrap();
        let len = u32::from_be_bytes(bytes[4..8].try_into().unwrap());
        let end = (8 + len as usize).min(bytes.len());
        out.push((id, len, &bytes[8..end]));
        bytes = &bytes[end..];
    }
    out
}

fn event() -> impl Strategy<Value = Event> {
    prop_oneof![
        (0u8..16, 0u8..128, 0u8..128, 0i64..=VLQ_MAX as i64).prop_map(|(c, n, v, dt)| {
            Event::NoteOn {
                channel: c,
                note: n,
                velocity: v,
                delta_time: dt,
            }
        }),
        (0u8..16, 0u8..128, 0u8..128, 0i64..100_000).prop_map(|(c, n, v, dt)| {
            Event::NoteOff {
                channel: c,
                note: n,
                velocity: v,
                delta_time: dt,
            }
        }),
        (0u32..0x0100_0000, 0i64..1_000).prop_map(|(us, dt)| Event::SetTempo {
            microseconds_per_quarter: us,
            delta_time: dt,
        }),
    ]
}

fn tracks() -> impl Strategy<Value = Vec<Track>> {
    prop::collection::vec(
        prop::collection::vec(event(), 0..20).prop_map(Track::new),
        0..6,
    )
}

proptest! {
    #[test]
    fn vlq_round_trip(n in 0..=VLQ_MAX) {
        let bytes = encode_variable_length(n as i64).unwrap();
        prop_assert!(!bytes.is_empty() && bytes.len() <= 4);
        prop_assert_eq!(decode_vlq(&bytes), (n, bytes.len()));
    }

    #[test]
    fn events_start_with_their_delta(event in event()) {
        let bytes = event.encode().unwrap();
        let (delta, used) = decode_vlq(&bytes);
        prop_assert_eq!(delta as i64, event.delta_time());
        prop_assert!(bytes[used] & 0x80 != 0);
    }

    #[test]
    fn file_layout_invariants(tracks in tracks(), tpqn in 1u16..=u16::MAX) {
        let bytes = build_file(&tracks, tpqn).unwrap();

        let mut expected_header = b"MThd\x00\x00\x00\x06\x00\x01".to_vec();
        expected_header.extend_from_slice(&(tracks.len() as u16).to_be_bytes());
        expected_header.extend_from_slice(&tpqn.to_be_bytes());
        prop_assert_eq!(&bytes[0..14], expected_header.as_slice());

        let found = chunks(&bytes[14..]);
        prop_assert_eq!(found.len(), tracks.len());

        let mut expected_len = 14;
        for ((id, len, payload), track) in found.iter().zip(&tracks) {
            prop_assert_eq!(id, b"MTrk");
            prop_assert_eq!(*len as usize, payload.len());
            prop_assert_eq!(payload.to_vec(), track.encode_payload().unwrap());
            prop_assert!(payload.ends_with(&[0x00, 0xFF, 0x2F, 0x00]));
            expected_len += 8 + payload.len();
        }
        prop_assert_eq!(bytes.len(), expected_len);
    }
}
