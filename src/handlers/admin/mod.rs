pub mod activity;
pub mod goals;
pub mod me;
pub mod stats;
pub mod transactions;
pub mod users;

// Re-export handler functions for use in routing
pub use activity::activity_get;
pub use goals::goals_get;
pub use me::me_get;
pub use stats::stats_get;
pub use transactions::transactions_get;
pub use users::users_get;
