//! Data models exchanged with the library service

pub mod book;
pub mod enums;
pub mod lending;
pub mod stats;
pub mod user;

// Re-export commonly used types
pub use book::{available_only, Book, BookPatch, BookStats, NewBook};
pub use enums::{Category, GrowthTrend, LendingStatus, Role};
pub use lending::{due_date_param, Lending, LendingPatch, NewLending};
pub use stats::{
    CategoryStats, Dashboard, DepartmentStats, GrowthStats, MonthlyStats, OverviewStats,
    PopularBooks, StatisticsReport,
};
pub use user::{NewUser, User, UserPatch};
