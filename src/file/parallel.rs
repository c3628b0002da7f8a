use super::Track;
use crate::{EncodeResult, FileError};
use alloc::vec::Vec;
use core::num::NonZeroUsize;

/// Encodes every track chunk on a pool of scoped worker threads.
///
/// Worker `w` encodes tracks `w`, `w + workers`, ... and sends back
/// `(index, chunk)` pairs. Results are put back into caller order before
/// anything is reported, so the returned error is always the one from the
/// lowest failing track index, as in the sequential path.
pub(crate) fn encode_chunks(tracks: &[Track]) -> Result<Vec<Vec<u8>>, FileError> {
    let workers = std::thread::available_parallelism()
        .map_or(1, NonZeroUsize::get)
        .min(tracks.len());
    if workers <= 1 {
        return super::encode_chunks(tracks);
    }

    log::trace!("encoding {} tracks on {workers} threads", tracks.len());

    let (result_tx, result_rx) = crossbeam_channel::unbounded::<(usize, EncodeResult<Vec<u8>>)>();
    std::thread::scope(|scope| {
        for worker in 0..workers {
            let results = result_tx.clone();
            scope.spawn(move || {
                for index in (worker..tracks.len()).step_by(workers) {
                    if results.send((index, tracks[index].to_chunk())).is_err() {
                        break;
                    }
                }
            });
        }
    });
    drop(result_tx);

    let mut slots: Vec<Option<EncodeResult<Vec<u8>>>> = (0..tracks.len()).map(|_| None).collect();
    for (index, chunk) in result_rx.try_iter() {
        slots[index] = Some(chunk);
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(index, slot)| {
            let chunk = match slot {
                Some(chunk) => chunk,
                None => {
                    log::warn!("track {index} missing from worker results, encoding inline");
                    tracks[index].to_chunk()
                }
            };
            let chunk = chunk.map_err(|e| FileError::track(index, e))?;
            log::trace!("track {index}: {} byte chunk", chunk.len());
            Ok(chunk)
        })
        .collect()
}
