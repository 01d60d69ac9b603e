pub mod add_transaction;
pub mod auth;
pub mod budgets;
pub mod cards;
pub mod connections;
pub mod dashboard;

pub use add_transaction::*;
pub use auth::*;
pub use budgets::*;
pub use cards::*;
pub use connections::*;
pub use dashboard::*;
