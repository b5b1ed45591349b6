use serde::{Deserialize, Serialize};

/// Hourly rate applied when a tutor record has no rate set.
pub const DEFAULT_HOURLY_RATE: f64 = 35.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Tutor,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Tutor => "tutor",
            Role::Admin => "admin",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "student" => Some(Role::Student),
            "tutor" => Some(Role::Tutor),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Academic level of a tutoring session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    #[serde(rename = "KS3")]
    Ks3,
    #[serde(rename = "GCSE")]
    Gcse,
    #[serde(rename = "A-Level")]
    ALevel,
    #[serde(rename = "University")]
    University,
    #[serde(rename = "Other")]
    Other,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Ks3 => "KS3",
            Level::Gcse => "GCSE",
            Level::ALevel => "A-Level",
            Level::University => "University",
            Level::Other => "Other",
        }
    }
}

/// Academic level of a learning resource. Unlike session levels, resources
/// may target every level at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceLevel {
    #[serde(rename = "KS3")]
    Ks3,
    #[serde(rename = "GCSE")]
    Gcse,
    #[serde(rename = "A-Level")]
    ALevel,
    #[serde(rename = "All")]
    All,
}

impl ResourceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceLevel::Ks3 => "KS3",
            ResourceLevel::Gcse => "GCSE",
            ResourceLevel::ALevel => "A-Level",
            ResourceLevel::All => "All",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionType {
    #[serde(rename = "online")]
    Online,
    #[serde(rename = "in-person")]
    InPerson,
}

impl SessionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionType::Online => "online",
            SessionType::InPerson => "in-person",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Refunded => "refunded",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Pdf,
    Video,
    Document,
    Link,
}

impl FileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Pdf => "pdf",
            FileType::Video => "video",
            FileType::Document => "document",
            FileType::Link => "link",
        }
    }
}

/// Session length. Only four durations are bookable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum SessionDuration {
    HalfHour,
    OneHour,
    NinetyMinutes,
    TwoHours,
}

impl SessionDuration {
    pub fn minutes(&self) -> i32 {
        match self {
            SessionDuration::HalfHour => 30,
            SessionDuration::OneHour => 60,
            SessionDuration::NinetyMinutes => 90,
            SessionDuration::TwoHours => 120,
        }
    }
}

impl TryFrom<i32> for SessionDuration {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            30 => Ok(SessionDuration::HalfHour),
            60 => Ok(SessionDuration::OneHour),
            90 => Ok(SessionDuration::NinetyMinutes),
            120 => Ok(SessionDuration::TwoHours),
            other => Err(format!(
                "Duration must be one of 30, 60, 90 or 120 minutes, got {}",
                other
            )),
        }
    }
}

impl From<SessionDuration> for i32 {
    fn from(value: SessionDuration) -> Self {
        value.minutes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_serializes_with_display_names() {
        assert_eq!(serde_json::to_string(&Level::ALevel).unwrap(), "\"A-Level\"");
        assert_eq!(
            serde_json::from_str::<Level>("\"KS3\"").unwrap(),
            Level::Ks3
        );
    }

    #[test]
    fn session_type_uses_kebab_case_wire_format() {
        assert_eq!(
            serde_json::from_str::<SessionType>("\"in-person\"").unwrap(),
            SessionType::InPerson
        );
        assert_eq!(SessionType::InPerson.as_str(), "in-person");
    }

    #[test]
    fn duration_accepts_only_allowed_minute_values() {
        assert_eq!(
            serde_json::from_str::<SessionDuration>("90").unwrap(),
            SessionDuration::NinetyMinutes
        );
        assert!(serde_json::from_str::<SessionDuration>("45").is_err());
        assert_eq!(serde_json::to_string(&SessionDuration::TwoHours).unwrap(), "120");
    }

    #[test]
    fn role_round_trips_through_lowercase() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("superuser"), None);
        assert_eq!(serde_json::to_string(&Role::Tutor).unwrap(), "\"tutor\"");
    }
}
