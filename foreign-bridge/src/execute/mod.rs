//! Execute message handlers for the foreign-chain bridge.

mod admin;
mod incoming;
mod withdraw;

pub use admin::execute_set_token;
pub use incoming::{
    execute_finalize_deposit, execute_rebase, execute_upgrade_self, execute_upgrade_token,
};
pub use withdraw::execute_withdraw;
