use actix_web::{Responder, delete, get, post, put, web};
use api_auth::{AuthedUser, MaybeAuthed, RequireAdmin, RequireTutor};
use chrono::NaiveDate;
use common::env_config::Config;
use common::error::{AppError, Res};
use common::http::Success;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::dtos::booking::{
    AvailabilityQuery, BookingResponse, CreateBookingRequest, UpdateBookingRequest,
};
use crate::services;

/// Creates a new booking. Public: an attached bearer token is consumed
/// opportunistically, and an invalid or absent one degrades to the guest
/// flow instead of failing the request.
///
/// # Input
/// - `req`: JSON payload with contact fields, tutor id, subject, level,
///   session date/time, duration (30/60/90/120) and session type
/// - optional `Authorization: Bearer <token>` identifying the student
///
/// # Output
/// - Success: 201 Created with the booking, enriched with `tutor_name`
/// - Error: 400 Bad Request for an invalid tutor/student account, a missing
///   field, or an already-taken slot
///
/// # Frontend Example
/// ```javascript
/// const response = await fetch('/api/bookings', {
///   method: 'POST',
///   headers: { 'Content-Type': 'application/json' },
///   body: JSON.stringify({
///     student_name: 'Jamie Smith',
///     student_email: 'jamie@example.com',
///     tutor: tutorId,
///     subject: 'Maths',
///     level: 'GCSE',
///     session_date: '2024-06-01T14:00',
///     session_time: '14:00',
///     duration: 60,
///     session_type: 'online'
///   })
/// });
///
/// if (response.ok) {
///   const { data } = await response.json();
///   showConfirmation(data.booking_reference);
/// }
/// ```
#[post("")]
async fn post_booking(
    auth: MaybeAuthed,
    req: web::Json<CreateBookingRequest>,
    pool: web::Data<Arc<sqlx::PgPool>>,
    config: web::Data<Arc<Config>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let (booking, tutor_name) =
        services::booking::create_booking(pg_pool, &config, auth.0, req.into_inner()).await?;
    Success::created(BookingResponse {
        booking,
        tutor_name,
    })
}

/// Occupied time slots for a tutor on a calendar day. Public, so the booking
/// form can grey out taken times before submitting.
///
/// # Input
/// - `tutor`: tutor id (required)
/// - `date`: calendar day, `YYYY-MM-DD` (required)
///
/// # Output
/// - Success: `{ success, data: ["14:00", ...] }` in storage order; treat as
///   a membership set
/// - Error: 400 when either parameter is missing or unparseable
#[get("/availability")]
async fn get_availability(
    query: web::Query<AvailabilityQuery>,
    pool: web::Data<Arc<sqlx::PgPool>>,
) -> Res<impl Responder> {
    let query = query.into_inner();
    let (tutor, date) = match (
        query.tutor.filter(|t| !t.is_empty()),
        query.date.filter(|d| !d.is_empty()),
    ) {
        (Some(tutor), Some(date)) => (tutor, date),
        _ => {
            return Err(AppError::BadRequest(
                "Tutor and date are required".to_string(),
            ));
        }
    };

    let tutor_id = Uuid::parse_str(&tutor)
        .map_err(|_| AppError::BadRequest("Invalid tutor selected".to_string()))?;
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("Invalid date: {}", date)))?;

    let pg_pool: &PgPool = &**pool;
    let booked_times = services::availability::booked_times(pg_pool, tutor_id, date).await?;
    Success::ok(booked_times)
}

/// The caller's own bookings as a student, newest first.
#[get("")]
async fn get_my_bookings(
    auth: AuthedUser,
    pool: web::Data<Arc<sqlx::PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let bookings = db::booking::list_for_student(pg_pool, auth.0.user_id).await?;
    let count = bookings.len();
    Success::ok_with_count(bookings, count)
}

/// The caller's sessions as a tutor, most recent session date first.
#[get("/my-sessions")]
async fn get_my_sessions(
    tutor: RequireTutor,
    pool: web::Data<Arc<sqlx::PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let bookings = db::booking::list_for_tutor(pg_pool, tutor.0.user_id).await?;
    let count = bookings.len();
    Success::ok_with_count(bookings, count)
}

/// Every booking on the platform. Admin only.
#[get("/all")]
async fn get_all_bookings(
    _admin: RequireAdmin,
    pool: web::Data<Arc<sqlx::PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let bookings = db::booking::list_all(pg_pool).await?;
    let count = bookings.len();
    Success::ok_with_count(bookings, count)
}

/// A single booking with the tutor's identity attached.
#[get("/{id}")]
async fn get_booking(
    _auth: AuthedUser,
    path: web::Path<Uuid>,
    pool: web::Data<Arc<sqlx::PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let booking = db::booking::get_booking(pg_pool, path.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;
    Success::ok(booking)
}

/// Partial update of a booking: lifecycle status, payment status, session
/// date/time, duration or notes. The amount is computed at creation and is
/// deliberately not recalculated here.
#[put("/{id}")]
async fn put_booking(
    _auth: AuthedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateBookingRequest>,
    pool: web::Data<Arc<sqlx::PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let booking = services::booking::update_booking(pg_pool, path.into_inner(), &req.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;
    Success::ok(booking)
}

/// Removes a booking entirely, freeing its slot.
#[delete("/{id}")]
async fn delete_booking(
    _auth: AuthedUser,
    path: web::Path<Uuid>,
    pool: web::Data<Arc<sqlx::PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let deleted = db::booking::delete_booking(pg_pool, path.into_inner()).await?;
    if !deleted {
        return Err(AppError::NotFound("Booking not found".to_string()));
    }
    Success::ok(serde_json::json!({}))
}
