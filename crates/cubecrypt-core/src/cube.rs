//! Cube state model and rotation mechanics.
//!
//! A [`CubeState`] is six square byte grids. A move turns one face's grid in
//! place and cycles a fixed ring of four borders on the neighboring faces.
//! The adjacency ring per face is static data ([`ADJACENT`]); the cycle
//! itself is a plain 4-rotation computed from a single "before" snapshot, so
//! no partial update ever aliases another.

use std::fmt;

use rand::Rng;

use crate::{
    error::CubeError,
    moves::{Direction, Move},
    seed,
};

/// Smallest supported cube dimension.
pub const MIN_DIMENSION: usize = 2;

/// Number of faces on the cube.
pub const FACE_COUNT: usize = 6;

/// One of the six fixed faces.
///
/// Indices are part of the keystream contract: 0=Front, 1=Top, 2=Right,
/// 3=Back, 4=Bottom, 5=Left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    /// Face 0
    Front,
    /// Face 1
    Top,
    /// Face 2
    Right,
    /// Face 3
    Back,
    /// Face 4
    Bottom,
    /// Face 5
    Left,
}

impl Face {
    /// All faces in index order.
    pub const ALL: [Face; FACE_COUNT] =
        [Face::Front, Face::Top, Face::Right, Face::Back, Face::Bottom, Face::Left];

    /// Fixed index of this face.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Face for an index, or `None` if out of range.
    pub fn from_index(index: usize) -> Option<Face> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Face::Front => "Front",
            Face::Top => "Top",
            Face::Right => "Right",
            Face::Back => "Back",
            Face::Bottom => "Bottom",
            Face::Left => "Left",
        };
        write!(f, "{name}")
    }
}

/// One full row or column of a face, with its traversal order.
///
/// Reversed variants traverse right-to-left; columns are always traversed
/// top-to-bottom. Traversal order matters because borders are copied
/// elementwise between faces.
#[derive(Debug, Clone, Copy)]
enum Border {
    FirstRow,
    FirstRowRev,
    LastRow,
    LastRowRev,
    FirstCol,
    LastCol,
}

impl Border {
    /// (row, col) of the i-th cell along this border on an n×n face.
    fn cell(self, i: usize, n: usize) -> (usize, usize) {
        match self {
            Border::FirstRow => (0, i),
            Border::FirstRowRev => (0, n - 1 - i),
            Border::LastRow => (n - 1, i),
            Border::LastRowRev => (n - 1, n - 1 - i),
            Border::FirstCol => (i, 0),
            Border::LastCol => (i, n - 1),
        }
    }
}

/// Border ring cycled when each face is turned.
///
/// Entry order within a ring is the cyclic order of the rotation. This table
/// is the keystream contract; a changed selector changes every ciphertext.
const ADJACENT: [[(Face, Border); 4]; FACE_COUNT] = [
    // Front
    [
        (Face::Top, Border::LastCol),
        (Face::Right, Border::FirstCol),
        (Face::Bottom, Border::FirstRow),
        (Face::Left, Border::LastCol),
    ],
    // Top
    [
        (Face::Front, Border::FirstRow),
        (Face::Left, Border::FirstCol),
        (Face::Back, Border::FirstRowRev),
        (Face::Right, Border::FirstRow),
    ],
    // Right
    [
        (Face::Front, Border::LastCol),
        (Face::Top, Border::LastRow),
        (Face::Back, Border::FirstCol),
        (Face::Bottom, Border::FirstRowRev),
    ],
    // Back
    [
        (Face::Top, Border::LastRowRev),
        (Face::Right, Border::LastCol),
        (Face::Bottom, Border::LastRowRev),
        (Face::Left, Border::FirstCol),
    ],
    // Bottom
    [
        (Face::Front, Border::LastRow),
        (Face::Right, Border::LastRowRev),
        (Face::Back, Border::LastRow),
        (Face::Left, Border::LastRow),
    ],
    // Left
    [
        (Face::Front, Border::FirstCol),
        (Face::Top, Border::FirstCol),
        (Face::Back, Border::LastCol),
        (Face::Bottom, Border::LastCol),
    ],
];

/// Six square byte grids plus their shared dimension.
///
/// A value type with no identity beyond its contents. Keystream derivation
/// builds a fresh one per call and discards it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeState {
    dimension: usize,
    faces: [Vec<u8>; FACE_COUNT],
}

impl CubeState {
    /// Cube with face `i` filled entirely with value `i` (the solved state).
    pub fn labeled(dimension: usize) -> Result<Self, CubeError> {
        check_dimension(dimension)?;
        let mut faces: [Vec<u8>; FACE_COUNT] = Default::default();
        for (i, face) in faces.iter_mut().enumerate() {
            *face = vec![i as u8; dimension * dimension];
        }
        Ok(Self { dimension, faces })
    }

    /// Cube filled from the key's seeded generator.
    ///
    /// Fill order is part of the keystream contract: all of face 0's cells
    /// row-major, then face 1's, through face 5's, one uniform `[0, 256)`
    /// draw per cell from a single freshly seeded stream.
    pub fn seeded(dimension: usize, key: &[u8]) -> Result<Self, CubeError> {
        check_dimension(dimension)?;
        let mut rng = seed::keyed_rng(key);
        let mut faces: [Vec<u8>; FACE_COUNT] = Default::default();
        for face in &mut faces {
            *face = (0..dimension * dimension).map(|_| rng.gen_range(0..=u8::MAX)).collect();
        }
        Ok(Self { dimension, faces })
    }

    /// Side length of each face.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Cells of one face in row-major order.
    pub fn face(&self, face: Face) -> &[u8] {
        &self.faces[face.index()]
    }

    /// True iff every cell of face `i` equals `i`, for all six faces.
    pub fn is_solved(&self) -> bool {
        self.faces.iter().enumerate().all(|(i, cells)| cells.iter().all(|&cell| cell == i as u8))
    }

    /// Apply one move: `rotations` repetitions of a face turn plus its
    /// adjacent-border cycle.
    pub fn apply_move(&mut self, mv: Move) {
        for _ in 0..mv.rotations {
            self.rotate_face(mv.face, mv.direction);
            self.rotate_adjacent_borders(mv.face, mv.direction);
        }
    }

    /// Apply moves in sequence order.
    pub fn apply_moves(&mut self, moves: &[Move]) {
        for &mv in moves {
            self.apply_move(mv);
        }
    }

    /// Rotate one face's grid in place by 90°.
    ///
    /// Pure 2D rotation of the grid; neighboring faces are untouched.
    pub(crate) fn rotate_face(&mut self, face: Face, direction: Direction) {
        let n = self.dimension;
        let before = self.faces[face.index()].clone();
        let grid = &mut self.faces[face.index()];
        for r in 0..n {
            for c in 0..n {
                grid[r * n + c] = match direction {
                    Direction::Clockwise => before[(n - 1 - c) * n + r],
                    Direction::CounterClockwise => before[c * n + (n - 1 - r)],
                };
            }
        }
    }

    /// Cycle the four neighbor borders of `face` by one position.
    ///
    /// Clockwise shifts the ring backward (position i receives position i-1,
    /// position 0 receives position 3); counterclockwise is the exact
    /// inverse. All four writes come from one pre-rotation snapshot.
    pub(crate) fn rotate_adjacent_borders(&mut self, face: Face, direction: Direction) {
        let ring = &ADJACENT[face.index()];
        let snapshot: [Vec<u8>; 4] =
            std::array::from_fn(|i| self.read_border(ring[i].0, ring[i].1));
        for (i, &(neighbor, border)) in ring.iter().enumerate() {
            let src = match direction {
                Direction::Clockwise => (i + 3) % 4,
                Direction::CounterClockwise => (i + 1) % 4,
            };
            self.write_border(neighbor, border, &snapshot[src]);
        }
    }

    fn read_border(&self, face: Face, border: Border) -> Vec<u8> {
        let n = self.dimension;
        let cells = &self.faces[face.index()];
        (0..n)
            .map(|i| {
                let (r, c) = border.cell(i, n);
                cells[r * n + c]
            })
            .collect()
    }

    fn write_border(&mut self, face: Face, border: Border, values: &[u8]) {
        let n = self.dimension;
        let cells = &mut self.faces[face.index()];
        for (i, &value) in values.iter().enumerate() {
            let (r, c) = border.cell(i, n);
            cells[r * n + c] = value;
        }
    }
}

impl fmt::Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cells) in self.faces.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let rows: Vec<&[u8]> = cells.chunks(self.dimension).collect();
            write!(f, "Face {i}: {rows:?}")?;
        }
        Ok(())
    }
}

fn check_dimension(dimension: usize) -> Result<(), CubeError> {
    if dimension < MIN_DIMENSION {
        return Err(CubeError::InvalidDimension { dimension });
    }
    Ok(())
}
