pub mod activity;
pub mod goal;
pub mod stats;
pub mod transaction;
pub mod user;

pub use activity::ActivityRecord;
pub use goal::GoalRecord;
pub use stats::StatsOverview;
pub use transaction::TransactionRecord;
pub use user::UserSummary;
