//! cardwall - an in-memory card wall editor.
//!
//! The binary loads a board from configuration and drives it with scripted
//! interaction messages. This library half holds the pieces the binary and
//! its integration tests share.

pub mod cli;
pub mod init;
pub mod logging;
pub mod replay;

pub use init::init_config;
pub use replay::{Snapshot, replay};
