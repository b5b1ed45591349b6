use chrono::NaiveDateTime;
use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{
    dtos::booking::{BookingCreate, BookingUpdate},
    models::booking::{Booking, BookingWithTutor},
};

/// Unique index guarding one session per tutor, day and start time.
const SLOT_CONSTRAINT: &str = "bookings_slot_key";
/// Unique index on the human-readable booking reference.
const REFERENCE_CONSTRAINT: &str = "bookings_booking_reference_key";

/// Outcome of a write that can collide with one of the booking uniqueness
/// constraints. Callers retry on `DuplicateReference` and surface `SlotTaken`
/// as a client error.
#[derive(Debug)]
pub enum BookingWriteError {
    SlotTaken,
    DuplicateReference,
    Other(AppError),
}

impl From<sqlx::Error> for BookingWriteError {
    fn from(error: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_error) = &error {
            match db_error.constraint() {
                Some(SLOT_CONSTRAINT) => return BookingWriteError::SlotTaken,
                Some(REFERENCE_CONSTRAINT) => return BookingWriteError::DuplicateReference,
                _ => {}
            }
        }
        BookingWriteError::Other(AppError::from(error))
    }
}

pub async fn insert_booking<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: &BookingCreate,
) -> Result<Booking, BookingWriteError> {
    sqlx::query_as::<_, Booking>(
        r#"
        INSERT INTO bookings (
            student_id, tutor_id, student_name, student_email, student_phone,
            subject, level, session_date, session_time, duration_minutes,
            session_type, amount, notes, booking_reference
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
        RETURNING *
        "#,
    )
    .bind(data.student_id)
    .bind(data.tutor_id)
    .bind(&data.student_name)
    .bind(&data.student_email)
    .bind(&data.student_phone)
    .bind(&data.subject)
    .bind(&data.level)
    .bind(data.session_date)
    .bind(&data.session_time)
    .bind(data.duration_minutes)
    .bind(&data.session_type)
    .bind(data.amount)
    .bind(&data.notes)
    .bind(&data.booking_reference)
    .fetch_one(executor)
    .await
    .map_err(BookingWriteError::from)
}

/// All session times booked for a tutor inside `[from, to)`, in storage
/// order. Status is intentionally not filtered: cancelled bookings keep
/// their slot occupied.
pub async fn booked_times<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    tutor_id: Uuid,
    from: NaiveDateTime,
    to: NaiveDateTime,
) -> Res<Vec<String>> {
    sqlx::query_scalar::<_, String>(
        "SELECT session_time FROM bookings WHERE tutor_id = $1 AND session_date >= $2 AND session_date < $3",
    )
    .bind(tutor_id)
    .bind(from)
    .bind(to)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

pub async fn list_for_student<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    student_id: Uuid,
) -> Res<Vec<BookingWithTutor>> {
    sqlx::query_as::<_, BookingWithTutor>(
        r#"
        SELECT b.*, t.name AS tutor_name, t.email AS tutor_email
        FROM bookings b
        JOIN users t ON t.id = b.tutor_id
        WHERE b.student_id = $1
        ORDER BY b.created_at DESC
        "#,
    )
    .bind(student_id)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

pub async fn list_for_tutor<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    tutor_id: Uuid,
) -> Res<Vec<Booking>> {
    sqlx::query_as::<_, Booking>(
        "SELECT * FROM bookings WHERE tutor_id = $1 ORDER BY session_date DESC",
    )
    .bind(tutor_id)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

pub async fn list_all<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
) -> Res<Vec<BookingWithTutor>> {
    sqlx::query_as::<_, BookingWithTutor>(
        r#"
        SELECT b.*, t.name AS tutor_name, t.email AS tutor_email
        FROM bookings b
        JOIN users t ON t.id = b.tutor_id
        ORDER BY b.created_at DESC
        "#,
    )
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

pub async fn get_booking<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    booking_id: Uuid,
) -> Res<Option<BookingWithTutor>> {
    sqlx::query_as::<_, BookingWithTutor>(
        r#"
        SELECT b.*, t.name AS tutor_name, t.email AS tutor_email
        FROM bookings b
        JOIN users t ON t.id = b.tutor_id
        WHERE b.id = $1
        "#,
    )
    .bind(booking_id)
    .fetch_optional(executor)
    .await
    .map_err(AppError::from)
}

pub async fn update_booking<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    booking_id: Uuid,
    data: &BookingUpdate,
) -> Result<Option<Booking>, BookingWriteError> {
    sqlx::query_as::<_, Booking>(
        r#"
        UPDATE bookings
        SET status = COALESCE($2, status),
            payment_status = COALESCE($3, payment_status),
            session_date = COALESCE($4, session_date),
            session_time = COALESCE($5, session_time),
            duration_minutes = COALESCE($6, duration_minutes),
            notes = COALESCE($7, notes),
            updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(booking_id)
    .bind(&data.status)
    .bind(&data.payment_status)
    .bind(data.session_date)
    .bind(&data.session_time)
    .bind(data.duration_minutes)
    .bind(&data.notes)
    .fetch_optional(executor)
    .await
    .map_err(BookingWriteError::from)
}

pub async fn set_payment_status<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    booking_id: Uuid,
    payment_status: &str,
) -> Res<Option<Booking>> {
    sqlx::query_as::<_, Booking>(
        "UPDATE bookings SET payment_status = $2, updated_at = now() WHERE id = $1 RETURNING *",
    )
    .bind(booking_id)
    .bind(payment_status)
    .fetch_optional(executor)
    .await
    .map_err(AppError::from)
}

pub async fn delete_booking<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    booking_id: Uuid,
) -> Res<bool> {
    sqlx::query("DELETE FROM bookings WHERE id = $1")
        .bind(booking_id)
        .execute(executor)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(AppError::from)
}
