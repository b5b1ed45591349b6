use actix_web::{Responder, get, post, web};
use api_auth::AuthedUser;
use common::env_config::Config;
use common::error::{AppError, Res};
use common::http::Success;
use common::stripe;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::dtos::pay::{CheckoutSessionResponse, CreateCheckoutSessionRequest, SessionDetails};
use crate::services;

/// Creates a Stripe Checkout session for a booking.
///
/// The booking must already exist; a gateway failure is surfaced as a
/// distinct error response and never touches the stored booking. When Stripe
/// is not configured the endpoint returns a demo session so the flow can be
/// exercised end to end in development.
///
/// # Input
/// - `req`: JSON payload with `booking_id`
///
/// # Output
/// - Success: `{ session_id, url }` to redirect the browser to
/// - Error: 404 for an unknown booking, 500 for a gateway failure
///
/// # Frontend Example
/// ```javascript
/// const response = await fetch('/api/payments/create-checkout-session', {
///   method: 'POST',
///   headers: {
///     'Content-Type': 'application/json',
///     'Authorization': `Bearer ${localStorage.getItem('authToken')}`
///   },
///   body: JSON.stringify({ booking_id: bookingId })
/// });
///
/// if (response.ok) {
///   const { data } = await response.json();
///   window.location.href = data.url;
/// }
/// ```
#[post("/create-checkout-session")]
async fn post_checkout_session(
    auth: AuthedUser,
    req: web::Json<CreateCheckoutSessionRequest>,
    pool: web::Data<Arc<sqlx::PgPool>>,
    config: web::Data<Arc<Config>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let booking = db::booking::get_booking(pg_pool, req.booking_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

    // Demo mode: without a Stripe key the flow still completes, with a fake
    // session pointing straight at the confirmation page.
    if config.stripe_secret_key.is_empty() {
        log::warn!("Stripe not configured, returning demo checkout session");
        return Success::ok(CheckoutSessionResponse {
            session_id: format!("mock_session_{}", Uuid::new_v4().simple()),
            url: format!(
                "{}/confirmation.html?bookingId={}&payment=demo",
                config.frontend_url, booking.booking.id
            ),
            message: Some("Demo mode - Stripe not configured".to_string()),
        });
    }

    let client = stripe::create_client(&config.stripe_secret_key);
    let session = services::pay::create_booking_checkout_session(
        &client,
        &booking,
        auth.0.user_id,
        &config.frontend_url,
    )
    .await?;

    let url = session
        .url
        .ok_or_else(|| AppError::Internal("Checkout session has no redirect URL".to_string()))?;

    Success::ok(CheckoutSessionResponse {
        session_id: session.id.to_string(),
        url,
        message: None,
    })
}

/// Handles Stripe webhook events for payment processing.
///
/// # Note
/// This endpoint is not called by the frontend; Stripe's servers call it
/// when events occur. Configure the URL and obtain the signing secret in the
/// Stripe Dashboard under Webhooks, then set `STRIPE_WEBHOOK_SECRET`.
///
/// # Output
/// - Success: 200 OK once the event is processed
/// - Error: 400 Bad Request for a missing or invalid signature
#[post("/webhook")]
async fn post_webhook(
    payload: String,
    req: actix_web::HttpRequest,
    pool: web::Data<Arc<sqlx::PgPool>>,
    config: web::Data<Arc<Config>>,
) -> Res<impl Responder> {
    if config.stripe_webhook_secret.is_empty() {
        return Err(AppError::BadRequest(
            "Webhook secret not configured".to_string(),
        ));
    }

    let signature = match req.headers().get("stripe-signature") {
        Some(signature) => signature.to_str().unwrap_or(""),
        None => return Err(AppError::BadRequest("Stripe signature missing".to_string())),
    };

    let event = services::pay::construct_event(&payload, signature, &config.stripe_webhook_secret)?;

    let pg_pool: &PgPool = &**pool;
    services::pay::process_webhook_event(pg_pool, event).await?;

    Success::message("Webhook processed successfully")
}

/// Retrieves payment session details for the confirmation page.
#[get("/session/{session_id}")]
async fn get_session(
    _auth: AuthedUser,
    path: web::Path<String>,
    config: web::Data<Arc<Config>>,
) -> Res<impl Responder> {
    let session_id = path.into_inner();

    // Demo sessions are resolved locally, mirroring the demo checkout flow.
    if config.stripe_secret_key.is_empty() || session_id.starts_with("mock_") {
        return Success::ok(SessionDetails {
            id: session_id,
            payment_status: "paid".to_string(),
            amount_total: None,
            currency: Some("gbp".to_string()),
            metadata: Default::default(),
        });
    }

    let client = stripe::create_client(&config.stripe_secret_key);
    let session = services::pay::retrieve_session(&client, &session_id).await?;

    Success::ok(SessionDetails {
        id: session.id.to_string(),
        payment_status: session.payment_status.to_string(),
        amount_total: session.amount_total,
        currency: session.currency.map(|currency| currency.to_string()),
        metadata: session.metadata.clone().unwrap_or_default(),
    })
}
