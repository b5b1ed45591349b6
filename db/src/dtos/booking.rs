use chrono::NaiveDateTime;
use uuid::Uuid;

pub struct BookingCreate {
    pub student_id: Uuid,
    pub tutor_id: Uuid,
    pub student_name: String,
    pub student_email: String,
    pub student_phone: Option<String>,
    pub subject: String,
    pub level: String,
    pub session_date: NaiveDateTime,
    pub session_time: String,
    pub duration_minutes: i32,
    pub session_type: String,
    pub amount: f64,
    pub notes: Option<String>,
    pub booking_reference: String,
}

/// Partial update; `None` fields keep their stored value.
#[derive(Default)]
pub struct BookingUpdate {
    pub status: Option<String>,
    pub payment_status: Option<String>,
    pub session_date: Option<NaiveDateTime>,
    pub session_time: Option<String>,
    pub duration_minutes: Option<i32>,
    pub notes: Option<String>,
}
