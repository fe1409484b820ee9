//! Move values and the key-derived move schedule.

use rand::Rng;

use crate::{
    cube::{FACE_COUNT, Face},
    seed,
};

/// Number of moves in a key schedule.
pub const SEQUENCE_LENGTH: usize = 64;

/// Sense of a quarter turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Positive sense (+1)
    Clockwise,
    /// Negative sense (-1)
    CounterClockwise,
}

impl Direction {
    /// The opposite sense.
    pub fn inverse(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// Signed representation: +1 clockwise, -1 counterclockwise.
    pub fn signum(self) -> i8 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }
}

/// One atomic cube instruction. Immutable once generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// Face to turn
    pub face: Face,
    /// Turn sense
    pub direction: Direction,
    /// Quarter-turn repetitions, 1 to 3
    pub rotations: u8,
}

impl Move {
    /// The move undoing this one: same face and repetitions, opposite sense.
    pub fn inverse(self) -> Self {
        Self { direction: self.direction.inverse(), ..self }
    }
}

/// Fixed-length move schedule derived from a key, replayed cyclically during
/// keystream derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveSequence {
    moves: Vec<Move>,
}

impl MoveSequence {
    /// Generate the 64-move schedule for a key.
    ///
    /// Per-move draw order is a pinned contract: face index in `[0, 6)`, then
    /// direction (one `[0, 2)` draw, 0 counterclockwise, 1 clockwise), then
    /// rotations in `[1, 4)`, all from a single freshly seeded stream.
    /// Regeneration re-seeds from scratch, so the schedule is a pure function
    /// of the key.
    pub fn from_key(key: &[u8]) -> Self {
        let mut rng = seed::keyed_rng(key);
        let mut moves = Vec::with_capacity(SEQUENCE_LENGTH);
        for _ in 0..SEQUENCE_LENGTH {
            let face = Face::ALL[rng.gen_range(0..FACE_COUNT)];
            let direction = if rng.gen_range(0..2u8) == 0 {
                Direction::CounterClockwise
            } else {
                Direction::Clockwise
            };
            let rotations = rng.gen_range(1..4u8);
            moves.push(Move { face, direction, rotations });
        }
        Self { moves }
    }

    /// Moves in generation order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Move at `index` modulo the schedule length.
    pub fn cyclic(&self, index: usize) -> Move {
        self.moves[index % self.moves.len()]
    }

    /// Reversed schedule with every move inverted.
    ///
    /// Undoes the forward schedule when applied to the same cube state. Used
    /// only to animate state transitions backward; keystream derivation
    /// always replays the forward schedule.
    pub fn inverted(&self) -> Self {
        Self { moves: self.moves.iter().rev().map(|mv| mv.inverse()).collect() }
    }
}
