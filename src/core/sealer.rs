//! Sealed-box encryption of secret values.
//!
//! A sealed box encrypts a message to a recipient's public key without a
//! sender identity:
//!
//! 1. A fresh ephemeral X25519 keypair is generated for every message
//! 2. X25519 key exchange with the recipient key derives the shared key
//! 3. The nonce is `BLAKE2b-24(ephemeral_pk || recipient_pk)`
//! 4. XSalsa20-Poly1305 encrypts and authenticates the message
//! 5. The ephemeral public key is prepended to the ciphertext
//!
//! This is libsodium's `crypto_box_seal`, the format the GitHub secrets API
//! expects for `encrypted_value`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use crypto_box::PublicKey;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::key::RecipientKey;
use crate::error::{CipherError, Result};

/// Opaque identifier of the key a secret was sealed with.
pub type KeyId = String;

/// Sealed secret, ready to hand to the secrets API.
///
/// Serializes as `{"key_id":"…","encrypted_value":"…"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SealedSecret {
    pub key_id: KeyId,
    /// Standard base64 of the sealed box.
    pub encrypted_value: String,
}

impl SealedSecret {
    /// Single-line JSON form.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Raw sealed-box bytes.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::EncryptionFailed` if `encrypted_value` is not
    /// valid base64, which can only happen for a hand-built value.
    pub fn ciphertext(&self) -> Result<Vec<u8>> {
        STANDARD.decode(&self.encrypted_value).map_err(|e| {
            CipherError::EncryptionFailed(format!("encrypted value is not base64: {}", e)).into()
        })
    }
}

/// Seals plaintexts for one recipient key.
#[derive(Debug, Clone)]
pub struct Sealer {
    key: RecipientKey,
    key_id: KeyId,
}

impl Sealer {
    pub fn new(key: RecipientKey, key_id: impl Into<KeyId>) -> Self {
        Self {
            key,
            key_id: key_id.into(),
        }
    }

    pub fn key(&self) -> &RecipientKey {
        &self.key
    }

    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    /// Seal `plaintext` using the operating system's CSPRNG.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::EncryptionFailed` if the primitive fails (in
    /// practice only when no randomness is available).
    pub fn seal(&self, plaintext: &[u8]) -> Result<SealedSecret> {
        self.seal_with_rng(plaintext, &mut OsRng)
    }

    /// Seal `plaintext`, drawing the ephemeral keypair from `rng`.
    ///
    /// The ephemeral key is the only randomness in a sealed box, so the same
    /// seeded RNG yields the same ciphertext.
    pub fn seal_with_rng(
        &self,
        plaintext: &[u8],
        rng: &mut (impl CryptoRng + RngCore),
    ) -> Result<SealedSecret> {
        trace!(plaintext_len = plaintext.len(), "sealing");

        let recipient = PublicKey::from(*self.key.as_bytes());
        let sealed = recipient
            .seal(rng, plaintext)
            .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;

        trace!(ciphertext_len = sealed.len(), "sealed");

        Ok(SealedSecret {
            key_id: self.key_id.clone(),
            encrypted_value: STANDARD.encode(sealed),
        })
    }
}

/// Seal `plaintext` for `key`, labelled with `key_id`.
///
/// Convenience wrapper around [`Sealer::seal`].
pub fn seal(key: &RecipientKey, key_id: &str, plaintext: &[u8]) -> Result<SealedSecret> {
    Sealer::new(*key, key_id).seal(plaintext)
}
