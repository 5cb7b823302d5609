//! In-memory test doubles for cw-multi-test integration tests.
//!
//! The real messenger and home token live outside this workspace; tests need
//! fakes that control delivery timing and origin spoofing explicitly, the
//! same way the production contracts are exercised against mocked
//! collaborators on chain.

pub mod home_token;
pub mod messenger;
