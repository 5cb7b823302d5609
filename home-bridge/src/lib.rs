//! Home-Chain Bridge Contract
//!
//! The home half of the bridge protocol:
//!
//! - escrows the real token on deposit and sends a deposit-finalization
//!   message to the foreign bridge,
//! - releases escrow when a withdrawal-finalization message arrives; if the
//!   release fails the inbound message is NOT rejected - the bridge emits a
//!   failure event and sends a compensating re-mint back to the foreign
//!   chain (the u-turn), so value is never stranded or destroyed,
//! - acts as a pure multiplier oracle/relay for rebases,
//! - issues upgrade directives to the foreign bridge and can swap its own
//!   implementation when it holds the upgrade authority over itself.

pub mod contract;
pub mod error;
mod execute;
pub mod state;

pub use crate::error::ContractError;
