//! The cube stream cipher.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use cubecrypt_core::{CubeError, MIN_DIMENSION, MoveSequence, keystream};
use tracing::{debug, info};

use crate::error::CipherError;

/// Longest accepted key, message, or decoded ciphertext.
///
/// Measured in characters for keys and messages, bytes for decoded
/// ciphertext. One unit of keystream is consumed per unit of input, so this
/// also bounds the work of a single call.
pub const MAX_MESSAGE_LENGTH: usize = 1_000_000;

/// Cube dimension used when none is specified.
pub const DEFAULT_DIMENSION: usize = 4;

/// Symmetric stream cipher driven by cube move simulation.
///
/// Holds only the key and the cube dimension. Every `encrypt` and `decrypt`
/// call derives its own cube, schedule, and keystream from scratch, so cipher
/// instances never interact through shared state and a single instance may be
/// reused freely.
#[derive(Debug, Clone)]
pub struct CubeCipher {
    key: String,
    dimension: usize,
}

impl CubeCipher {
    /// Create a cipher over a `dimension` cube.
    ///
    /// # Errors
    ///
    /// - `KeyTooLong`: key exceeds [`MAX_MESSAGE_LENGTH`] characters
    /// - `Cube`: dimension is below 2
    pub fn new(key: impl Into<String>, dimension: usize) -> Result<Self, CipherError> {
        let key = key.into();
        let key_length = key.chars().count();
        if key_length > MAX_MESSAGE_LENGTH {
            return Err(CipherError::KeyTooLong { length: key_length, max: MAX_MESSAGE_LENGTH });
        }
        if dimension < MIN_DIMENSION {
            return Err(CubeError::InvalidDimension { dimension }.into());
        }
        info!(dimension, "initialized cube cipher");
        Ok(Self { key, dimension })
    }

    /// Create a cipher over the default 4×4 cube.
    pub fn with_default_dimension(key: impl Into<String>) -> Result<Self, CipherError> {
        Self::new(key, DEFAULT_DIMENSION)
    }

    /// Cube dimension in use.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The key's 64-move schedule.
    ///
    /// Exposed so a caller can animate an externally held
    /// [`CubeState`](cubecrypt_core::CubeState) one move at a time. Not
    /// needed for encrypt or decrypt correctness.
    pub fn move_sequence(&self) -> MoveSequence {
        MoveSequence::from_key(self.key.as_bytes())
    }

    /// Encrypt a message to base64 ASCII text.
    ///
    /// Each character's code point is combined with one keystream byte as
    /// `(code + byte) mod 256`; code points above U+00FF are reduced mod 256,
    /// so the round-trip guarantee holds for Latin-1 messages.
    ///
    /// # Errors
    ///
    /// - `MessageTooLong`: more than [`MAX_MESSAGE_LENGTH`] characters,
    ///   rejected before any keystream work
    pub fn encrypt(&self, message: &str) -> Result<String, CipherError> {
        let length = message.chars().count();
        if length > MAX_MESSAGE_LENGTH {
            return Err(CipherError::MessageTooLong { length, max: MAX_MESSAGE_LENGTH });
        }
        debug!(length, "encrypting message");

        let stream = keystream(self.key.as_bytes(), self.dimension, length)?;
        let combined: Vec<u8> = message
            .chars()
            .zip(&stream)
            .map(|(ch, &byte)| (ch as u32 as u8).wrapping_add(byte))
            .collect();
        Ok(BASE64.encode(combined))
    }

    /// Decrypt base64 ASCII ciphertext back to text.
    ///
    /// Each decoded byte is combined with one keystream byte as
    /// `(byte - key_byte) mod 256`; every result is one U+00 to U+FF
    /// character. A wrong key silently yields garbage text.
    ///
    /// # Errors
    ///
    /// - `MalformedCiphertext`: input is not valid base64
    /// - `CiphertextTooLong`: decoded length exceeds [`MAX_MESSAGE_LENGTH`]
    pub fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        let decoded = BASE64
            .decode(ciphertext)
            .map_err(|source| CipherError::MalformedCiphertext { source })?;
        if decoded.len() > MAX_MESSAGE_LENGTH {
            return Err(CipherError::CiphertextTooLong {
                length: decoded.len(),
                max: MAX_MESSAGE_LENGTH,
            });
        }
        debug!(length = decoded.len(), "decrypting ciphertext");

        let stream = keystream(self.key.as_bytes(), self.dimension, decoded.len())?;
        Ok(decoded
            .iter()
            .zip(&stream)
            .map(|(&byte, &key_byte)| char::from(byte.wrapping_sub(key_byte)))
            .collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn encrypt_decrypt_roundtrip() {
        let cipher = CubeCipher::with_default_dimension("test_key_123").unwrap();
        let message = "Hello, World! This is a test message.";

        let ciphertext = cipher.encrypt(message).unwrap();
        assert_ne!(ciphertext, message);
        assert!(ciphertext.is_ascii());

        assert_eq!(cipher.decrypt(&ciphertext).unwrap(), message);
    }

    #[test]
    fn empty_message_roundtrip() {
        let cipher = CubeCipher::with_default_dimension("test_key_123").unwrap();
        assert_eq!(cipher.encrypt("").unwrap(), "");
        assert_eq!(cipher.decrypt("").unwrap(), "");
    }

    #[test]
    fn long_message_roundtrip() {
        let cipher = CubeCipher::with_default_dimension("test_key_123").unwrap();
        let message = "A".repeat(10_000);
        let ciphertext = cipher.encrypt(&message).unwrap();
        assert_eq!(cipher.decrypt(&ciphertext).unwrap(), message);
    }

    #[test]
    fn non_default_dimension_roundtrip() {
        for dimension in [2, 3, 5, 7] {
            let cipher = CubeCipher::new("dimensional", dimension).unwrap();
            let message = "Cube sizes beyond 3x3 need no physical legality.";
            let ciphertext = cipher.encrypt(message).unwrap();
            assert_eq!(cipher.decrypt(&ciphertext).unwrap(), message, "dimension {dimension}");
        }
    }

    #[test]
    fn different_keys_produce_different_ciphertexts() {
        let message = "Secret message";
        let first = CubeCipher::with_default_dimension("key1").unwrap();
        let second = CubeCipher::with_default_dimension("key2").unwrap();

        let ciphertext1 = first.encrypt(message).unwrap();
        let ciphertext2 = second.encrypt(message).unwrap();
        assert_ne!(ciphertext1, ciphertext2);

        // Each key still decrypts its own ciphertext.
        assert_eq!(first.decrypt(&ciphertext1).unwrap(), message);
        assert_eq!(second.decrypt(&ciphertext2).unwrap(), message);
    }

    #[test]
    fn wrong_key_silently_produces_garbage() {
        let message = "This is a secret message";
        let cipher = CubeCipher::with_default_dimension("test_key_456").unwrap();
        let ciphertext = cipher.encrypt(message).unwrap();

        let wrong = CubeCipher::with_default_dimension("wrong_key").unwrap();
        let decrypted = wrong.decrypt(&ciphertext).unwrap();
        assert_ne!(decrypted, message, "wrong key must not recover the message");
    }

    #[test]
    fn tampered_ciphertext_changes_the_output() {
        let message = "Message to be tampered with";
        let cipher = CubeCipher::with_default_dimension("test_key_456").unwrap();
        let ciphertext = cipher.encrypt(message).unwrap();

        let mut raw = BASE64.decode(&ciphertext).unwrap();
        let last = raw.len() - 1;
        raw[last] ^= 0x01;
        let tampered = BASE64.encode(raw);

        // No integrity check: decryption succeeds but the text differs.
        let decrypted = cipher.decrypt(&tampered).unwrap();
        assert_ne!(decrypted, message);
    }

    #[test]
    fn malformed_base64_is_rejected() {
        let cipher = CubeCipher::with_default_dimension("test_key_456").unwrap();
        let result = cipher.decrypt("not_a_valid_base64_string");
        assert!(matches!(result, Err(CipherError::MalformedCiphertext { .. })));
    }

    #[test]
    fn oversized_message_is_rejected() {
        let cipher = CubeCipher::with_default_dimension("test_key_123").unwrap();
        let message = "A".repeat(MAX_MESSAGE_LENGTH + 1);
        assert!(matches!(
            cipher.encrypt(&message),
            Err(CipherError::MessageTooLong { length, max })
                if length == MAX_MESSAGE_LENGTH + 1 && max == MAX_MESSAGE_LENGTH
        ));
    }

    #[test]
    fn oversized_ciphertext_is_rejected() {
        let cipher = CubeCipher::with_default_dimension("test_key_123").unwrap();
        let oversized = BASE64.encode(vec![0u8; MAX_MESSAGE_LENGTH + 1]);
        assert!(matches!(
            cipher.decrypt(&oversized),
            Err(CipherError::CiphertextTooLong { length, max })
                if length == MAX_MESSAGE_LENGTH + 1 && max == MAX_MESSAGE_LENGTH
        ));
    }

    #[test]
    fn oversized_key_is_rejected_at_construction() {
        let key = "k".repeat(MAX_MESSAGE_LENGTH + 1);
        assert!(matches!(
            CubeCipher::with_default_dimension(key),
            Err(CipherError::KeyTooLong { .. })
        ));
    }

    #[test]
    fn invalid_dimension_is_rejected_at_construction() {
        assert!(matches!(
            CubeCipher::new("key", 1),
            Err(CipherError::Cube(CubeError::InvalidDimension { dimension: 1 }))
        ));
    }

    #[test]
    fn move_sequence_is_stable_per_key() {
        let cipher = CubeCipher::with_default_dimension("animate").unwrap();
        let first = cipher.move_sequence();
        let second = cipher.move_sequence();
        assert_eq!(first, second);
        assert_eq!(first.moves().len(), 64);
    }

    #[test]
    fn encryption_is_not_involutive() {
        // encrypt(encrypt(m)) must not be decrypt's inverse path; the two
        // directions differ by the sign of the combiner only.
        let cipher = CubeCipher::with_default_dimension("sign_check").unwrap();
        let message = "asymmetric combiner";
        let once = cipher.encrypt(message).unwrap();
        let twice = cipher.encrypt(&once).unwrap();
        assert_ne!(cipher.decrypt(&twice).unwrap(), message);
    }
}
