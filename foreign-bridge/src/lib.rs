//! Foreign-Chain Bridge Contract
//!
//! The foreign half of the bridge protocol:
//!
//! - receives deposit-finalization messages from the home bridge and mints
//!   the rebasing token,
//! - burns locally on withdraw and sends a finalize-withdrawal message home,
//! - relays rebase and upgrade instructions originating on the home chain.
//!
//! Every inbound privileged entry point authenticates the messenger and the
//! x-domain sender before touching any state. Cross-domain amounts travel in
//! wire units (reported x sender-side multiplier) so both chains speak in
//! home-chain absolute units.

pub mod contract;
pub mod error;
mod execute;
pub mod state;

pub use crate::error::ContractError;
