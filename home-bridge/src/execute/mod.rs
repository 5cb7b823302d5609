//! Execute message handlers for the home-chain bridge.

mod deposit;
mod relay;
mod withdrawal;

pub use deposit::execute_deposit;
pub use relay::{
    execute_rebase, execute_upgrade_foreign_bridge, execute_upgrade_foreign_token,
    execute_upgrade_self,
};
pub use withdrawal::{execute_finalize_withdrawal, reply_release};
