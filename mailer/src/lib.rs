//! Outbound email: booking confirmations and contact-form relays over SMTP.
//!
//! Delivery is always best-effort from the caller's point of view; whether a
//! failure is swallowed (booking confirmation) or surfaced (contact form,
//! where the send is the whole point) is the caller's decision.

use chrono::NaiveDateTime;
use common::env_config::SmtpConfig;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};

pub mod templates;

pub const SENDER_NAME: &str = "TutorHub";

#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

/// Everything the confirmation email needs, captured at booking time.
/// A view over the booking record, not the record itself.
#[derive(Debug, Clone)]
pub struct BookingConfirmation {
    pub booking_reference: String,
    pub student_name: String,
    pub student_email: String,
    pub tutor_name: String,
    pub subject: String,
    pub level: String,
    pub session_date: NaiveDateTime,
    pub session_time: String,
    pub duration_minutes: i32,
    pub session_type: String,
    pub amount: f64,
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

/// Sends the booking confirmation to the student.
pub async fn send_booking_confirmation(
    smtp: &SmtpConfig,
    details: &BookingConfirmation,
) -> Result<(), EmailError> {
    let email = Message::builder()
        .from(sender(smtp)?)
        .to(details.student_email.parse()?)
        .subject(format!(
            "Booking Confirmation - {}",
            details.booking_reference
        ))
        .header(ContentType::TEXT_HTML)
        .body(templates::render_booking_confirmation(details))
        .map_err(|e| EmailError::Build(e.to_string()))?;

    send(smtp, email).await?;
    log::info!(
        "Booking confirmation email sent to {} ({})",
        details.student_email,
        details.booking_reference
    );
    Ok(())
}

/// Relays a contact-form message to the configured inbox, with the sender
/// set as reply-to.
pub async fn send_contact_message(
    smtp: &SmtpConfig,
    message: &ContactMessage,
) -> Result<(), EmailError> {
    let subject = message
        .subject
        .clone()
        .unwrap_or_else(|| "New Message".to_string());

    let email = Message::builder()
        .from(sender(smtp)?)
        .reply_to(message.email.parse()?)
        .to(smtp.contact_inbox.parse()?)
        .subject(format!("Contact Form: {}", subject))
        .header(ContentType::TEXT_HTML)
        .body(templates::render_contact_message(message))
        .map_err(|e| EmailError::Build(e.to_string()))?;

    send(smtp, email).await
}

fn sender(smtp: &SmtpConfig) -> Result<Mailbox, EmailError> {
    Ok(format!("{} <{}>", SENDER_NAME, smtp.from_address).parse()?)
}

async fn send(smtp: &SmtpConfig, email: Message) -> Result<(), EmailError> {
    let mut builder =
        AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp.host)?.port(smtp.port);

    if let (Some(user), Some(pass)) = (&smtp.username, &smtp.password) {
        builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
    }

    builder.build().send(email).await?;
    Ok(())
}
