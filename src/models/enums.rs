//! Shared domain enums

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Book category. Serialized with the labels the service stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "프로그래밍")]
    Programming,
    #[serde(rename = "데이터베이스")]
    Database,
    #[serde(rename = "네트워크")]
    Network,
    #[serde(rename = "운영체제")]
    OperatingSystem,
    #[serde(rename = "알고리즘")]
    Algorithm,
    #[serde(rename = "웹개발")]
    WebDevelopment,
    #[serde(rename = "모바일개발")]
    MobileDevelopment,
    #[serde(rename = "인공지능")]
    ArtificialIntelligence,
    #[serde(rename = "기타")]
    Other,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Programming,
        Category::Database,
        Category::Network,
        Category::OperatingSystem,
        Category::Algorithm,
        Category::WebDevelopment,
        Category::MobileDevelopment,
        Category::ArtificialIntelligence,
        Category::Other,
    ];

    /// Label used on the wire and in URL paths
    pub fn label(&self) -> &'static str {
        match self {
            Category::Programming => "프로그래밍",
            Category::Database => "데이터베이스",
            Category::Network => "네트워크",
            Category::OperatingSystem => "운영체제",
            Category::Algorithm => "알고리즘",
            Category::WebDevelopment => "웹개발",
            Category::MobileDevelopment => "모바일개발",
            Category::ArtificialIntelligence => "인공지능",
            Category::Other => "기타",
        }
    }

    /// ASCII identifier, handy on the command line
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Programming => "programming",
            Category::Database => "database",
            Category::Network => "network",
            Category::OperatingSystem => "operating-system",
            Category::Algorithm => "algorithm",
            Category::WebDevelopment => "web-development",
            Category::MobileDevelopment => "mobile-development",
            Category::ArtificialIntelligence => "artificial-intelligence",
            Category::Other => "other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    /// Accepts either the wire label or the ASCII slug
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.label() == needle || c.slug() == needle)
            .ok_or_else(|| format!("Invalid category: {}", s))
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    User,
    Admin,
    Librarian,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
            Role::Librarian => "LIBRARIAN",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USER" => Ok(Role::User),
            "ADMIN" => Ok(Role::Admin),
            "LIBRARIAN" => Ok(Role::Librarian),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

// ---------------------------------------------------------------------------
// LendingStatus
// ---------------------------------------------------------------------------

/// Lending status as reported by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LendingStatus {
    Borrowed,
    Returned,
    Overdue,
}

impl LendingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LendingStatus::Borrowed => "BORROWED",
            LendingStatus::Returned => "RETURNED",
            LendingStatus::Overdue => "OVERDUE",
        }
    }

    /// RETURNED is the only terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, LendingStatus::Returned)
    }
}

impl std::fmt::Display for LendingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LendingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BORROWED" => Ok(LendingStatus::Borrowed),
            "RETURNED" => Ok(LendingStatus::Returned),
            "OVERDUE" => Ok(LendingStatus::Overdue),
            _ => Err(format!("Invalid lending status: {}", s)),
        }
    }
}

// ---------------------------------------------------------------------------
// GrowthTrend
// ---------------------------------------------------------------------------

/// Direction of a growth rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthTrend {
    Up,
    Down,
    Flat,
}

impl GrowthTrend {
    pub fn from_rate(rate: f64) -> Self {
        if rate > 0.0 {
            GrowthTrend::Up
        } else if rate < 0.0 {
            GrowthTrend::Down
        } else {
            GrowthTrend::Flat
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_uses_service_labels_on_the_wire() {
        let json = serde_json::to_string(&Category::WebDevelopment).unwrap();
        assert_eq!(json, "\"웹개발\"");
        let parsed: Category = serde_json::from_str("\"기타\"").unwrap();
        assert_eq!(parsed, Category::Other);
    }

    #[test]
    fn category_parses_label_or_slug() {
        assert_eq!("데이터베이스".parse::<Category>(), Ok(Category::Database));
        assert_eq!("Operating-System".parse::<Category>(), Ok(Category::OperatingSystem));
        assert!("cooking".parse::<Category>().is_err());
    }

    #[test]
    fn unknown_category_is_rejected_when_decoding() {
        assert!(serde_json::from_str::<Category>("\"요리\"").is_err());
    }

    #[test]
    fn role_and_status_are_screaming_case() {
        assert_eq!(serde_json::to_string(&Role::Librarian).unwrap(), "\"LIBRARIAN\"");
        let status: LendingStatus = serde_json::from_str("\"OVERDUE\"").unwrap();
        assert_eq!(status, LendingStatus::Overdue);
        assert_eq!("returned".parse::<LendingStatus>(), Ok(LendingStatus::Returned));
    }

    #[test]
    fn only_returned_is_terminal() {
        assert!(LendingStatus::Returned.is_terminal());
        assert!(!LendingStatus::Borrowed.is_terminal());
        assert!(!LendingStatus::Overdue.is_terminal());
    }

    #[test]
    fn growth_trend_follows_sign() {
        assert_eq!(GrowthTrend::from_rate(12.5), GrowthTrend::Up);
        assert_eq!(GrowthTrend::from_rate(-0.1), GrowthTrend::Down);
        assert_eq!(GrowthTrend::from_rate(0.0), GrowthTrend::Flat);
    }
}
