//! Client-side list filters
//!
//! These run over lists already fetched from the service and never issue
//! requests of their own.

use std::str::FromStr;

use crate::models::{Lending, LendingStatus, User};

/// Status selector for the lending list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LendingStatusFilter {
    #[default]
    All,
    Only(LendingStatus),
}

impl FromStr for LendingStatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(LendingStatusFilter::All);
        }
        s.parse().map(LendingStatusFilter::Only)
    }
}

#[derive(Debug, Clone, Default)]
pub struct LendingFilter {
    pub search: String,
    pub status: LendingStatusFilter,
}

impl LendingFilter {
    /// Search matches book title or user name ignoring case, or the book id
    /// as text. Status compares against what the service reported.
    pub fn matches(&self, lending: &Lending) -> bool {
        let needle = self.search.trim().to_lowercase();
        let matches_search = needle.is_empty()
            || lending.book_title.to_lowercase().contains(&needle)
            || lending.user_name.to_lowercase().contains(&needle)
            || lending.book_id.to_string().contains(&needle);

        let matches_status = match self.status {
            LendingStatusFilter::All => true,
            LendingStatusFilter::Only(status) => lending.status == status,
        };

        matches_search && matches_status
    }

    pub fn apply<'a>(&self, lendings: &'a [Lending]) -> Vec<&'a Lending> {
        lendings.iter().filter(|l| self.matches(l)).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserStatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl FromStr for UserStatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(UserStatusFilter::All),
            "active" => Ok(UserStatusFilter::Active),
            "inactive" => Ok(UserStatusFilter::Inactive),
            _ => Err(format!("Invalid user status filter: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub search: String,
    pub status: UserStatusFilter,
}

impl UserFilter {
    pub fn matches(&self, user: &User) -> bool {
        let needle = self.search.trim().to_lowercase();
        let matches_search = needle.is_empty()
            || user.username.to_lowercase().contains(&needle)
            || user.name.to_lowercase().contains(&needle)
            || user.email.to_lowercase().contains(&needle);

        let matches_status = match self.status {
            UserStatusFilter::All => true,
            UserStatusFilter::Active => user.active,
            UserStatusFilter::Inactive => !user.active,
        };

        matches_search && matches_status
    }

    pub fn apply<'a>(&self, users: &'a [User]) -> Vec<&'a User> {
        users.iter().filter(|u| self.matches(u)).collect()
    }
}
