pub mod players;
pub mod rules;
pub mod tasks;

pub use players::Entity as Players;
pub use players::Model as Player;
pub use rules::Entity as Rules;
pub use rules::Model as Rule;
pub use tasks::Entity as Tasks;
pub use tasks::Model as Task;
