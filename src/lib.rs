//! ghsecret - seal a secret for the GitHub secrets API.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── mod           # clap definitions and dispatch
//! │   ├── seal          # collect inputs, seal, print JSON
//! │   ├── completions   # Shell completions
//! │   └── output        # stderr diagnostics
//! └── core/             # Core library components
//!     ├── config        # env var names and loaded config
//!     ├── key           # base64 recipient key decoding
//!     ├── input         # stdin / env var plaintext
//!     ├── sealer        # sealed-box encryption
//!     └── constants     # defaults and sizes
//! ```
//!
//! # Example
//!
//! ```
//! use ghsecret::core::{seal, RecipientKey};
//!
//! let key = RecipientKey::from_base64("CQAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=").unwrap();
//! let sealed = seal(&key, "abc123", b"hello").unwrap();
//! assert_eq!(sealed.key_id, "abc123");
//! ```

pub mod cli;
pub mod core;
pub mod error;
