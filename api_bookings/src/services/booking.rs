use common::{
    domain::{DEFAULT_HOURLY_RATE, Role},
    env_config::Config,
    error::{AppError, Res},
    jwt::JwtClaims,
};
use db::{
    booking::BookingWriteError,
    dtos::booking::{BookingCreate, BookingUpdate},
    models::{booking::Booking, user::User},
};
use rand::Rng;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dtos::booking::{CreateBookingRequest, UpdateBookingRequest};

/// Prefix carried by every booking reference.
pub const REFERENCE_PREFIX: &str = "TH-";
const REFERENCE_LENGTH: usize = 6;
const REFERENCE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
/// References live in a 36^6 space, so a collision is already a freak event;
/// more than a couple of retries means something else is wrong.
const MAX_REFERENCE_ATTEMPTS: u32 = 3;

/// Session price: the tutor's hourly rate prorated over the booked minutes,
/// rounded to currency precision. Computed once at creation and never
/// recalculated afterwards.
pub fn compute_amount(hourly_rate: f64, duration_minutes: i32) -> f64 {
    ((hourly_rate / 60.0) * duration_minutes as f64 * 100.0).round() / 100.0
}

/// `TH-` followed by 6 uppercase alphanumerics.
pub fn generate_reference() -> String {
    let mut rng = rand::rng();
    let mut reference = String::with_capacity(REFERENCE_PREFIX.len() + REFERENCE_LENGTH);
    reference.push_str(REFERENCE_PREFIX);
    for _ in 0..REFERENCE_LENGTH {
        let index = rng.random_range(0..REFERENCE_CHARSET.len());
        reference.push(REFERENCE_CHARSET[index] as char);
    }
    reference
}

/// Creates a booking and returns it together with the tutor's display name.
///
/// Resolution and validation happen in a fixed order: contact fields,
/// acting student, tutor, price, reference, insert, confirmation email.
/// The email is best-effort; a delivery failure never fails the booking.
pub async fn create_booking(
    pool: &PgPool,
    config: &Config,
    auth: Option<JwtClaims>,
    req: CreateBookingRequest,
) -> Res<(Booking, String)> {
    if req.student_name.trim().is_empty() {
        return Err(AppError::BadRequest("Student name is required".to_string()));
    }
    if req.student_email.trim().is_empty() {
        return Err(AppError::BadRequest("Email is required".to_string()));
    }

    let student = resolve_student(pool, config, auth, req.student_id).await?;

    let tutor = db::user::get_user_by_id(pool, req.tutor)
        .await?
        .filter(|user| user.role == Role::Tutor.as_str())
        .ok_or_else(|| AppError::BadRequest("Invalid tutor selected".to_string()))?;

    let hourly_rate = tutor.hourly_rate.unwrap_or(DEFAULT_HOURLY_RATE);
    let amount = compute_amount(hourly_rate, req.duration.minutes());

    let mut data = BookingCreate {
        student_id: student.id,
        tutor_id: tutor.id,
        student_name: req.student_name,
        student_email: req.student_email,
        student_phone: req.student_phone,
        subject: req.subject,
        level: req.level.as_str().to_string(),
        session_date: req.session_date,
        session_time: req.session_time,
        duration_minutes: req.duration.minutes(),
        session_type: req.session_type.as_str().to_string(),
        amount,
        notes: req.notes,
        booking_reference: generate_reference(),
    };

    let mut attempts = 0;
    let booking = loop {
        match db::booking::insert_booking(pool, &data).await {
            Ok(booking) => break booking,
            Err(BookingWriteError::SlotTaken) => {
                return Err(AppError::BadRequest(
                    "This time slot is no longer available. Please pick another time.".to_string(),
                ));
            }
            Err(BookingWriteError::DuplicateReference) => {
                attempts += 1;
                if attempts >= MAX_REFERENCE_ATTEMPTS {
                    return Err(AppError::Internal(
                        "Could not allocate a unique booking reference".to_string(),
                    ));
                }
                log::warn!(
                    "Booking reference collision on {}, regenerating",
                    data.booking_reference
                );
                data.booking_reference = generate_reference();
            }
            Err(BookingWriteError::Other(error)) => return Err(error),
        }
    };

    send_confirmation(config, &booking, &tutor.name).await;

    Ok((booking, tutor.name))
}

pub async fn update_booking(
    pool: &PgPool,
    booking_id: Uuid,
    req: &UpdateBookingRequest,
) -> Res<Option<Booking>> {
    let data = BookingUpdate {
        status: req.status.map(|status| status.as_str().to_string()),
        payment_status: req
            .payment_status
            .map(|status| status.as_str().to_string()),
        session_date: req.session_date,
        session_time: req.session_time.clone(),
        duration_minutes: req.duration.map(|duration| duration.minutes()),
        notes: req.notes.clone(),
    };

    match db::booking::update_booking(pool, booking_id, &data).await {
        Ok(booking) => Ok(booking),
        Err(BookingWriteError::SlotTaken) => Err(AppError::BadRequest(
            "This time slot is no longer available. Please pick another time.".to_string(),
        )),
        // The reference is never updated here, so a reference collision is a bug.
        Err(BookingWriteError::DuplicateReference) => Err(AppError::Internal(
            "Unexpected booking reference conflict on update".to_string(),
        )),
        Err(BookingWriteError::Other(error)) => Err(error),
    }
}

/// Acting student, by priority: authenticated student session, explicit
/// student account, the provisioned system account. The system account is
/// only looked up; provisioning happens once at boot in the seed step.
async fn resolve_student(
    pool: &PgPool,
    config: &Config,
    auth: Option<JwtClaims>,
    explicit: Option<Uuid>,
) -> Res<User> {
    if let Some(claims) = auth {
        if claims.role == Role::Student {
            if let Some(user) = db::user::get_user_by_id(pool, claims.user_id).await? {
                return Ok(user);
            }
        }
    }

    if let Some(student_id) = explicit {
        return db::user::get_user_by_id(pool, student_id)
            .await?
            .filter(|user| user.role == Role::Student.as_str())
            .ok_or_else(|| AppError::BadRequest("Invalid student account".to_string()));
    }

    db::user::get_user_by_email(pool, &config.system_account.email.to_lowercase())
        .await?
        .ok_or_else(|| {
            AppError::Internal(
                "System account is not provisioned; the boot seed has not run".to_string(),
            )
        })
}

/// Best-effort confirmation email. Failures are logged and swallowed; the
/// booking has already been persisted and must not be rolled back.
async fn send_confirmation(config: &Config, booking: &Booking, tutor_name: &str) {
    let Some(smtp) = &config.smtp else {
        log::debug!("SMTP not configured, skipping booking confirmation email");
        return;
    };

    let details = mailer::BookingConfirmation {
        booking_reference: booking.booking_reference.clone(),
        student_name: booking.student_name.clone(),
        student_email: booking.student_email.clone(),
        tutor_name: tutor_name.to_string(),
        subject: booking.subject.clone(),
        level: booking.level.clone(),
        session_date: booking.session_date,
        session_time: booking.session_time.clone(),
        duration_minutes: booking.duration_minutes,
        session_type: booking.session_type.clone(),
        amount: booking.amount,
        notes: booking.notes.clone(),
    };

    if let Err(error) = mailer::send_booking_confirmation(smtp, &details).await {
        log::error!("Failed to send confirmation email: {}", error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_is_rate_prorated_over_duration() {
        // hourly rate 40, 90 minutes -> 60.00
        assert_eq!(compute_amount(40.0, 90), 60.0);
        assert_eq!(compute_amount(35.0, 60), 35.0);
        assert_eq!(compute_amount(35.0, 30), 17.5);
    }

    #[test]
    fn amount_rounds_to_currency_precision() {
        // 40/60 * 90 is 59.999999999999996 in raw f64; rounding to pence
        // recovers the exact price.
        assert_eq!(compute_amount(35.0, 90), 52.5);
        assert_eq!(compute_amount(37.0, 90), 55.5);
        assert_eq!(compute_amount(45.5, 60), 45.5);
    }

    #[test]
    fn reference_matches_fixed_prefix_and_charset() {
        for _ in 0..100 {
            let reference = generate_reference();
            let suffix = reference.strip_prefix(REFERENCE_PREFIX).unwrap();
            assert_eq!(suffix.len(), REFERENCE_LENGTH);
            assert!(
                suffix
                    .chars()
                    .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
            );
        }
    }

    #[test]
    fn references_are_not_constant() {
        let first = generate_reference();
        let distinct = (0..20).any(|_| generate_reference() != first);
        assert!(distinct);
    }
}
