//! Core library components.
//!
//! Key decoding, configuration, plaintext input and the sealer itself. None
//! of this touches process control, so it can be driven directly from tests.

pub mod config;
pub mod constants;
pub mod input;
pub mod key;
pub mod sealer;

pub use config::{Config, EnvNames, Environment, ProcessEnv};
pub use input::PlaintextSource;
pub use key::RecipientKey;
pub use sealer::{seal, KeyId, SealedSecret, Sealer};
