//! Recipient public key handling.
//!
//! Keys arrive base64-encoded (the form the GitHub public-key endpoint
//! returns) and must decode to exactly 32 bytes.

use std::fmt;

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::Engine;
use tracing::trace;

use crate::core::constants::KEY_SIZE;
use crate::error::{KeyError, Result};

/// Standard padded alphabet that tolerates non-zero trailing bits in the
/// last symbol, as Go's `base64.StdEncoding` does.
const KEY_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// A recipient's X25519 public key.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RecipientKey([u8; KEY_SIZE]);

impl RecipientKey {
    /// Wrap raw key bytes.
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Decode a key from standard padded base64.
    ///
    /// Line breaks are ignored, so a value exported with a trailing newline
    /// still decodes, and so does a final symbol with stray low bits. A
    /// decoded length other than 32 bytes is rejected
    /// instead of being padded or truncated.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::InvalidBase64` if the text is not base64, or
    /// `KeyError::InvalidLength` if it does not decode to 32 bytes.
    pub fn from_base64(encoded: &str) -> Result<Self> {
        let cleaned: String = encoded
            .chars()
            .filter(|c| *c != '\r' && *c != '\n')
            .collect();

        let decoded = KEY_ENGINE.decode(cleaned).map_err(KeyError::from)?;
        trace!(decoded_len = decoded.len(), "decoded recipient key");

        let bytes: [u8; KEY_SIZE] = decoded.as_slice().try_into().map_err(|_| {
            KeyError::InvalidLength {
                expected: KEY_SIZE,
                actual: decoded.len(),
            }
        })?;

        Ok(Self(bytes))
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }

    /// Standard base64 form of the key.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.0)
    }
}

impl From<[u8; KEY_SIZE]> for RecipientKey {
    fn from(bytes: [u8; KEY_SIZE]) -> Self {
        Self::from_bytes(bytes)
    }
}

// Public key material, so printing it is harmless.
impl fmt::Debug for RecipientKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RecipientKey").field(&self.to_base64()).finish()
    }
}

impl fmt::Display for RecipientKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base64())
    }
}
