//! Domain services. Construction takes a [`GameConfig`](crate::config::game::GameConfig)
//! where limits apply; none of them touch the environment or HTTP types.

pub mod players;
pub mod rules;
pub mod state;
pub mod tasks;
