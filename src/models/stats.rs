//! Statistics result shapes
//!
//! Every statistics endpoint returns its own shape. Counters the service
//! leaves out or sends as null decode as zero.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use super::book::BookStats;
use super::enums::GrowthTrend;

/// `/statistics/overview`
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverviewStats {
    #[serde_as(as = "DefaultOnNull")]
    pub this_month_borrowed: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub active_users: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub avg_borrow_days: f64,
    /// Percentage of lendings currently overdue
    #[serde_as(as = "DefaultOnNull")]
    pub overdue_rate: f64,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MonthlyEntry {
    /// Month label, as formatted by the service
    #[serde_as(as = "DefaultOnNull")]
    pub month: String,
    #[serde_as(as = "DefaultOnNull")]
    pub borrowed: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub returned: i64,
}

/// `/statistics/monthly`
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MonthlyStats {
    #[serde_as(as = "DefaultOnNull")]
    pub monthly_stats: Vec<MonthlyEntry>,
}

impl MonthlyStats {
    pub fn max_borrowed(&self) -> i64 {
        self.monthly_stats.iter().map(|m| m.borrowed).max().unwrap_or(0)
    }

    pub fn max_returned(&self) -> i64 {
        self.monthly_stats.iter().map(|m| m.returned).max().unwrap_or(0)
    }
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PopularBook {
    #[serde_as(as = "DefaultOnNull")]
    pub book_id: Option<i64>,
    #[serde_as(as = "DefaultOnNull")]
    pub title: String,
    #[serde_as(as = "DefaultOnNull")]
    pub author: String,
    #[serde_as(as = "DefaultOnNull")]
    pub borrow_count: i64,
}

/// `/statistics/popular-books`
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PopularBooks {
    #[serde_as(as = "DefaultOnNull")]
    pub popular_books: Vec<PopularBook>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryEntry {
    /// Category label. Kept as text since the service may aggregate
    /// books whose category is outside the known set.
    #[serde_as(as = "DefaultOnNull")]
    pub category: String,
    #[serde_as(as = "DefaultOnNull")]
    pub borrowed: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub total: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub percentage: f64,
}

/// `/statistics/category-stats`
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryStats {
    #[serde_as(as = "DefaultOnNull")]
    pub category_stats: Vec<CategoryEntry>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DepartmentEntry {
    #[serde_as(as = "DefaultOnNull")]
    pub department: String,
    /// Registered users in the department
    #[serde_as(as = "DefaultOnNull")]
    pub users: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub borrowed: i64,
}

/// `/statistics/department-stats`
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DepartmentStats {
    #[serde_as(as = "DefaultOnNull")]
    pub department_stats: Vec<DepartmentEntry>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookGrowth {
    #[serde_as(as = "DefaultOnNull")]
    pub total_books: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub available_books: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub utilization_rate: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub new_books_this_month: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub book_growth_rate: f64,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserGrowth {
    #[serde_as(as = "DefaultOnNull")]
    pub total_users: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub active_users: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub activation_rate: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub new_users_this_month: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub user_growth_rate: f64,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LendingGrowth {
    #[serde_as(as = "DefaultOnNull")]
    pub current_month_borrowed: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub previous_month_borrowed: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub borrow_growth_rate: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub current_month_returned: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub previous_month_returned: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub return_growth_rate: f64,
}

/// `/statistics/growth-stats`
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GrowthStats {
    #[serde_as(as = "DefaultOnNull")]
    pub book_stats: BookGrowth,
    #[serde_as(as = "DefaultOnNull")]
    pub user_stats: UserGrowth,
    #[serde_as(as = "DefaultOnNull")]
    pub lending_stats: LendingGrowth,
}

impl GrowthStats {
    pub fn book_trend(&self) -> GrowthTrend {
        GrowthTrend::from_rate(self.book_stats.book_growth_rate)
    }

    pub fn user_trend(&self) -> GrowthTrend {
        GrowthTrend::from_rate(self.user_stats.user_growth_rate)
    }

    pub fn borrow_trend(&self) -> GrowthTrend {
        GrowthTrend::from_rate(self.lending_stats.borrow_growth_rate)
    }

    pub fn return_trend(&self) -> GrowthTrend {
        GrowthTrend::from_rate(self.lending_stats.return_growth_rate)
    }
}

/// All six statistics queries, joined
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsReport {
    pub overview: OverviewStats,
    pub monthly: MonthlyStats,
    pub popular_books: PopularBooks,
    pub categories: CategoryStats,
    pub departments: DepartmentStats,
    pub growth: GrowthStats,
}

/// Home page summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub book_stats: BookStats,
    pub user_count: usize,
}
