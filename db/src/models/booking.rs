use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub student_id: Uuid,
    pub tutor_id: Uuid,
    pub student_name: String,
    pub student_email: String,
    pub student_phone: Option<String>,
    pub subject: String,
    pub level: String,
    /// May carry a time-of-day component; availability matching buckets it
    /// into a calendar day.
    pub session_date: NaiveDateTime,
    /// Wall-clock slot, `HH:MM`.
    pub session_time: String,
    pub duration_minutes: i32,
    pub session_type: String,
    pub status: String,
    pub payment_status: String,
    pub amount: f64,
    pub notes: Option<String>,
    pub booking_reference: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A booking joined with the tutor's public identity, for list and detail
/// responses.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct BookingWithTutor {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub booking: Booking,
    pub tutor_name: String,
    pub tutor_email: String,
}
