//! Lending (loan) model and related types

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_with::skip_serializing_none;

use super::enums::LendingStatus;
use crate::error::{ClientError, ClientResult};

/// Time-of-day appended to a calendar due date
pub const END_OF_DAY: &str = "23:59:59";

/// Loan period used when no due date is picked
pub const DEFAULT_LOAN_DAYS: u64 = 14;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Lending record as returned by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lending {
    pub id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub book_id: i64,
    pub book_title: String,
    pub borrowed_at: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub due_date: NaiveDateTime,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub returned_at: Option<NaiveDateTime>,
    /// Server-derived; may lag behind the due date
    pub status: LendingStatus,
    pub created_at: String,
    pub updated_at: String,
}

impl Lending {
    /// Whole days until the due date, rounded up. Negative once overdue.
    pub fn days_until_due(&self, now: NaiveDateTime) -> i64 {
        let millis = (self.due_date - now).num_milliseconds() as f64;
        (millis / MILLIS_PER_DAY).ceil() as i64
    }

    /// The server status wins when it already says OVERDUE. Otherwise an
    /// unreturned lending past its due date is treated as overdue, which
    /// covers a BORROWED status the server has not refreshed yet.
    pub fn is_overdue_at(&self, now: NaiveDateTime) -> bool {
        if self.status == LendingStatus::Overdue {
            return true;
        }
        self.returned_at.is_none() && self.due_date < now
    }

    /// Status to show, with the overdue fallback applied
    pub fn display_status(&self, now: NaiveDateTime) -> LendingStatus {
        if self.is_overdue_at(now) {
            LendingStatus::Overdue
        } else {
            self.status
        }
    }

    /// Days past due, zero when not overdue
    pub fn overdue_days(&self, now: NaiveDateTime) -> i64 {
        if self.is_overdue_at(now) {
            self.days_until_due(now).min(0).abs()
        } else {
            0
        }
    }

    pub fn is_returned(&self) -> bool {
        self.returned_at.is_some() || self.status.is_terminal()
    }
}

/// Create lending request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLending {
    pub book_id: i64,
    pub user_id: i64,
    #[serde(serialize_with = "serialize_due_date")]
    pub due_date: NaiveDate,
}

impl NewLending {
    pub fn new(book_id: i64, user_id: i64, due_date: NaiveDate) -> Self {
        Self {
            book_id,
            user_id,
            due_date,
        }
    }

    /// Due at the end of the day `DEFAULT_LOAN_DAYS` after `today`
    pub fn with_default_due(book_id: i64, user_id: i64, today: NaiveDate) -> Self {
        Self::new(book_id, user_id, today + Days::new(DEFAULT_LOAN_DAYS))
    }

    pub fn check(&self) -> ClientResult<()> {
        if self.book_id <= 0 || self.user_id <= 0 {
            return Err(ClientError::Validation(
                "Both a book and a user must be selected".to_string(),
            ));
        }
        Ok(())
    }
}

/// Encode a due date as the date followed by the end-of-day marker
pub fn due_date_param(date: NaiveDate) -> String {
    format!("{}T{}", date.format("%Y-%m-%d"), END_OF_DAY)
}

fn serialize_due_date<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&due_date_param(*date))
}

/// Parse an ISO-8601 date-time with or without an offset. Offset forms
/// keep their wall-clock time.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.naive_local())
        .or_else(|_| value.parse::<NaiveDateTime>())
        .ok()
}

fn deserialize_timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<NaiveDateTime, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", raw)))
}

fn deserialize_optional_timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<NaiveDateTime>, D::Error> {
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_timestamp(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", raw))),
        None => Ok(None),
    }
}

/// Partial lending update
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LendingPatch {
    pub user_id: Option<i64>,
    pub book_id: Option<i64>,
    pub due_date: Option<NaiveDateTime>,
    pub returned_at: Option<NaiveDateTime>,
    pub status: Option<LendingStatus>,
}
