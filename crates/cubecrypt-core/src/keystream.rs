//! Keystream derivation.

use tracing::debug;

use crate::{cube::CubeState, error::CubeError, moves::MoveSequence};

/// Derive `length` keystream bytes from a key over a `dimension` cube.
///
/// A fresh key-seeded [`CubeState`] and a fresh [`MoveSequence`] are built on
/// every call. The schedule is replayed cyclically from index 0; after each
/// move the turned face is sampled row-major and appended, until at least
/// `length` bytes exist, then the buffer is truncated to exactly `length`.
///
/// The result depends only on `(key, dimension, length)`. A `length` of 0
/// yields an empty keystream without applying any move.
pub fn keystream(key: &[u8], dimension: usize, length: usize) -> Result<Vec<u8>, CubeError> {
    let mut cube = CubeState::seeded(dimension, key)?;
    if length == 0 {
        return Ok(Vec::new());
    }

    let schedule = MoveSequence::from_key(key);
    let mut buffer = Vec::with_capacity(length + dimension * dimension);
    let mut index = 0usize;
    while buffer.len() < length {
        let mv = schedule.cyclic(index);
        cube.apply_move(mv);
        buffer.extend_from_slice(cube.face(mv.face));
        index += 1;
    }

    debug!(dimension, length, moves = index, "derived keystream");
    buffer.truncate(length);
    Ok(buffer)
}
