//! Two-stage test harness: build an [`AppState`], then an Actix test service.
//!
//! [`AppState`]: crate::state::app_state::AppState

pub mod app_builder;
pub mod auth;
pub mod logging;
pub mod state;
pub mod txn;

// Re-export only what tests actually import
pub use app_builder::create_test_app;
pub use state::{build_test_state, build_test_state_with_game};
