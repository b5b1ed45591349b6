use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use common::domain::{BookingStatus, Level, PaymentStatus, SessionDuration, SessionType};
use db::models::booking::Booking;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    /// Explicit student account; used only when the request is not
    /// authenticated as a student.
    pub student_id: Option<Uuid>,
    #[serde(default)]
    pub student_name: String,
    #[serde(default)]
    pub student_email: String,
    pub student_phone: Option<String>,
    pub tutor: Uuid,
    pub subject: String,
    pub level: Level,
    #[serde(deserialize_with = "deserialize_session_date")]
    pub session_date: NaiveDateTime,
    pub session_time: String,
    pub duration: SessionDuration,
    pub session_type: SessionType,
    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateBookingRequest {
    pub status: Option<BookingStatus>,
    pub payment_status: Option<PaymentStatus>,
    #[serde(default, deserialize_with = "deserialize_opt_session_date")]
    pub session_date: Option<NaiveDateTime>,
    pub session_time: Option<String>,
    pub duration: Option<SessionDuration>,
    pub notes: Option<String>,
}

/// Both parameters are required; the handler rejects the request when either
/// is missing rather than returning an empty result.
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub tutor: Option<String>,
    pub date: Option<String>,
}

/// The created booking enriched with the tutor's display name. The name is
/// attached to the response only, never persisted.
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    #[serde(flatten)]
    pub booking: Booking,
    pub tutor_name: String,
}

/// Accepts the datetime shapes browsers actually send: full ISO-8601 with or
/// without fractional seconds or a trailing `Z`, `datetime-local` values
/// without seconds, and bare dates.
pub fn parse_session_date(value: &str) -> Result<NaiveDateTime, String> {
    let value = value.trim().trim_end_matches('Z');
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(datetime);
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M") {
        return Ok(datetime);
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    Err(format!("Invalid session date: {}", value))
}

fn deserialize_session_date<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_session_date(&value).map_err(serde::de::Error::custom)
}

fn deserialize_opt_session_date<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    value
        .map(|raw| parse_session_date(&raw).map_err(serde::de::Error::custom))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_date_accepts_browser_formats() {
        assert!(parse_session_date("2024-06-01T14:00:00").is_ok());
        assert!(parse_session_date("2024-06-01T14:00:00.000Z").is_ok());
        assert!(parse_session_date("2024-06-01T14:00").is_ok());
        assert_eq!(
            parse_session_date("2024-06-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 1)
                .unwrap()
                .and_time(NaiveTime::MIN)
        );
        assert!(parse_session_date("June 1st").is_err());
    }

    #[test]
    fn create_request_rejects_bad_duration() {
        let body = serde_json::json!({
            "student_name": "Jamie",
            "student_email": "jamie@example.com",
            "tutor": Uuid::new_v4(),
            "subject": "Maths",
            "level": "GCSE",
            "session_date": "2024-06-01T14:00:00",
            "session_time": "14:00",
            "duration": 45,
            "session_type": "online"
        });
        let parsed = serde_json::from_value::<CreateBookingRequest>(body);
        assert!(parsed.is_err());
    }

    #[test]
    fn create_request_parses_complete_payload() {
        let body = serde_json::json!({
            "student_name": "Jamie",
            "student_email": "jamie@example.com",
            "student_phone": "07700900000",
            "tutor": Uuid::new_v4(),
            "subject": "Physics",
            "level": "A-Level",
            "session_date": "2024-06-01T14:00",
            "session_time": "14:00",
            "duration": 90,
            "session_type": "in-person",
            "notes": "Focus on mechanics"
        });
        let parsed = serde_json::from_value::<CreateBookingRequest>(body).unwrap();
        assert_eq!(parsed.duration, SessionDuration::NinetyMinutes);
        assert_eq!(parsed.level, Level::ALevel);
        assert_eq!(parsed.session_type, SessionType::InPerson);
    }
}
