//! Cubecrypt Stream Cipher
//!
//! Symmetric stream cipher whose keystream comes from simulating moves on an
//! N×N generalized Rubik's cube, seeded deterministically from a text key.
//! The combiner is modular addition per character, the ciphertext surface is
//! base64 ASCII text.
//!
//! ```text
//! key ──► cubecrypt-core ──► keystream bytes
//!                                  │
//! message chars ── (code + byte) mod 256 ──► base64 ──► ciphertext
//! ciphertext ── base64 decode ── (byte - byte) mod 256 ──► message
//! ```
//!
//! Encrypt and decrypt are inverse because they consume the identical forward
//! keystream with inverse modular operations; no move is ever reversed.
//!
//! # Example
//!
//! ```
//! use cubecrypt::CubeCipher;
//!
//! let cipher = CubeCipher::with_default_dimension("test_key_123")?;
//! let ciphertext = cipher.encrypt("Hello, World!")?;
//! assert_eq!(cipher.decrypt(&ciphertext)?, "Hello, World!");
//! # Ok::<(), cubecrypt::CipherError>(())
//! ```
//!
//! # Security
//!
//! This is NOT a cryptographically secure cipher: the keystream comes from a
//! non-cryptographic seeded generator and the combiner is plain modular
//! addition, with no integrity or authentication. Decrypting with a wrong key
//! silently yields garbage. The design goal is bit-for-bit reproducibility.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod cipher;
pub mod error;

pub use cipher::{CubeCipher, DEFAULT_DIMENSION, MAX_MESSAGE_LENGTH};
pub use error::CipherError;

// Re-exported so animation callers can hold and drive cube state themselves.
pub use cubecrypt_core::{CubeState, Direction, Face, Move, MoveSequence};
