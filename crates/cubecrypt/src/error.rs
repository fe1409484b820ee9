//! Error types for the cipher surface.
//!
//! All errors are raised before any keystream work begins; a failed call has
//! no partial side effects. Decrypting with a wrong key is deliberately not
//! an error (the cipher carries no integrity check).

use base64::DecodeError;
use cubecrypt_core::CubeError;
use thiserror::Error;

/// Errors surfaced by [`CubeCipher`](crate::CubeCipher).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// Invalid cube configuration from the core
    #[error(transparent)]
    Cube(#[from] CubeError),

    /// Key longer than the configured maximum, rejected at construction
    #[error("key length {length} exceeds maximum allowed length of {max}")]
    KeyTooLong {
        /// Rejected key length in characters
        length: usize,
        /// Configured maximum
        max: usize,
    },

    /// Message longer than the configured maximum
    #[error("message length {length} exceeds maximum allowed length of {max}")]
    MessageTooLong {
        /// Rejected message length in characters
        length: usize,
        /// Configured maximum
        max: usize,
    },

    /// Decoded ciphertext longer than the configured maximum
    #[error("ciphertext length {length} exceeds maximum allowed length of {max}")]
    CiphertextTooLong {
        /// Rejected decoded length in bytes
        length: usize,
        /// Configured maximum
        max: usize,
    },

    /// Ciphertext is not valid base64
    #[error("ciphertext is not valid base64")]
    MalformedCiphertext {
        /// Decoder failure detail
        #[source]
        source: DecodeError,
    },
}
