//! Common - Shared Types for the Rebase Bridge Contracts
//!
//! This package holds the public message types of every contract in the
//! workspace plus the cross-domain messenger interface. Keeping all message
//! types in one crate guarantees that both sides of the bridge encode and
//! decode the identical JSON payloads - the wire format is a versioned
//! contract between the two chains and must never drift.

pub mod foreign_bridge;
pub mod home_bridge;
pub mod home_token;
pub mod messenger;
pub mod scale;
pub mod token;
pub mod upgrade;

#[cfg(feature = "testing")]
pub mod testing;

pub use crate::messenger::{authenticate_cross_domain, CrossDomainError};
pub use crate::scale::{scale_down, scale_down_ceil, scale_up};
pub use crate::upgrade::{assert_upgrade_authority, UpgradeError};
