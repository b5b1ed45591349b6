use actix_web::{Responder, post, web};
use common::env_config::Config;
use common::error::{AppError, Res};
use common::http::Success;
use std::sync::Arc;

use crate::dtos::auth::ContactRequest;

/// Relays a contact-form message to the configured inbox.
///
/// Unlike the booking confirmation, the send here *is* the operation, so a
/// delivery failure is surfaced to the caller instead of being swallowed.
#[post("")]
async fn post_contact(
    req: web::Json<ContactRequest>,
    config: web::Data<Arc<Config>>,
) -> Res<impl Responder> {
    let req = req.into_inner();
    if req.name.trim().is_empty() || req.email.trim().is_empty() || req.message.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Please provide name, email, and message".to_string(),
        ));
    }

    let smtp = config
        .smtp
        .as_ref()
        .ok_or_else(|| AppError::Internal("Email delivery is not configured".to_string()))?;

    mailer::send_contact_message(
        smtp,
        &mailer::ContactMessage {
            name: req.name,
            email: req.email,
            subject: req.subject,
            message: req.message,
        },
    )
    .await
    .map_err(|e| {
        log::error!("Failed to relay contact message: {}", e);
        AppError::Internal("Failed to send message. Please try again later.".to_string())
    })?;

    Success::message("Message sent successfully")
}
