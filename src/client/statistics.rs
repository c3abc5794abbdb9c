//! Statistics queries and the fan-out compositions built on them

use crate::{
    error::ClientResult,
    models::{
        CategoryStats, Dashboard, DepartmentStats, GrowthStats, MonthlyStats, OverviewStats,
        PopularBooks, StatisticsReport,
    },
    transport::{ApiRequest, Transport},
};

use super::ApiClient;

impl<T: Transport> ApiClient<T> {
    pub async fn overview_stats(&self) -> ClientResult<OverviewStats> {
        self.fetch(ApiRequest::get(&["statistics", "overview"])).await
    }

    pub async fn monthly_stats(&self) -> ClientResult<MonthlyStats> {
        self.fetch(ApiRequest::get(&["statistics", "monthly"])).await
    }

    pub async fn popular_books(&self) -> ClientResult<PopularBooks> {
        self.fetch(ApiRequest::get(&["statistics", "popular-books"])).await
    }

    pub async fn category_stats(&self) -> ClientResult<CategoryStats> {
        self.fetch(ApiRequest::get(&["statistics", "category-stats"])).await
    }

    pub async fn department_stats(&self) -> ClientResult<DepartmentStats> {
        self.fetch(ApiRequest::get(&["statistics", "department-stats"])).await
    }

    pub async fn growth_stats(&self) -> ClientResult<GrowthStats> {
        self.fetch(ApiRequest::get(&["statistics", "growth-stats"])).await
    }

    /// All six statistics queries at once. The first failure fails the
    /// report; no partial report is returned.
    pub async fn statistics_report(&self) -> ClientResult<StatisticsReport> {
        let (overview, monthly, popular_books, categories, departments, growth) = tokio::try_join!(
            self.overview_stats(),
            self.monthly_stats(),
            self.popular_books(),
            self.category_stats(),
            self.department_stats(),
            self.growth_stats(),
        )?;

        Ok(StatisticsReport {
            overview,
            monthly,
            popular_books,
            categories,
            departments,
            growth,
        })
    }

    /// Book counters plus the number of registered users
    pub async fn dashboard(&self) -> ClientResult<Dashboard> {
        let (book_stats, users) = tokio::try_join!(self.book_stats(), self.list_users())?;
        Ok(Dashboard {
            book_stats,
            user_count: users.len(),
        })
    }
}
