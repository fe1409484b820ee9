//! Cubecrypt Keystream Core
//!
//! Deterministic keystream derivation driven by move simulation on an N×N
//! generalized Rubik's cube. Pure functions of the key with no I/O; callers
//! own all state.
//!
//! # Derivation Pipeline
//!
//! For each derivation a fresh cube and a fresh move schedule are built from
//! the key, replayed, and discarded. Nothing is cached or shared between
//! derivations, so two derivations never interact through generator state.
//!
//! ```text
//! Key
//!  │
//!  ├─ SHA-256 → 32-bit seed ──► seeded fill ──► CubeState
//!  │                                                │
//!  └─ SHA-256 → 32-bit seed ──► MoveSequence ──► apply moves cyclically
//!                                                   │
//!                                sample turned face ▼
//!                                              keystream bytes
//! ```
//!
//! # Determinism
//!
//! Seeding and draw order are a pinned contract: the generator is a
//! `ChaCha8Rng` seeded from the first four digest bytes read big-endian, the
//! cube fill draws face 0 through face 5 row-major, and the schedule draws
//! (face, direction, rotations) per move. Changing any of these breaks
//! compatibility with previously produced ciphertexts.
//!
//! This is not a cryptographically secure construction. The guarantee is
//! bit-for-bit reproducibility, nothing more.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod cube;
pub mod error;
pub mod keystream;
pub mod moves;
mod seed;

pub use cube::{CubeState, Face, MIN_DIMENSION};
pub use error::CubeError;
pub use keystream::keystream;
pub use moves::{Direction, Move, MoveSequence, SEQUENCE_LENGTH};
