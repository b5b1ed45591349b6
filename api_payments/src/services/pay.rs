use std::collections::HashMap;

use common::domain::PaymentStatus;
use common::error::{AppError, Res};
use db::models::booking::BookingWithTutor;
use sqlx::PgPool;
use stripe::{
    CheckoutSession, CheckoutSessionId, CheckoutSessionMode, Client, CreateCheckoutSession,
    Currency, Event, EventObject, EventType, Webhook,
};
use uuid::Uuid;

/// Creates a one-off Checkout session for a booking.
///
/// The booking's computed amount is charged in pence; the booking and user
/// ids travel in the session metadata so the webhook can attribute the
/// payment later.
pub async fn create_booking_checkout_session(
    client: &Client,
    booking: &BookingWithTutor,
    user_id: Uuid,
    frontend_url: &str,
) -> Res<CheckoutSession> {
    let unit_amount = (booking.booking.amount * 100.0).round() as i64;
    let success_url = format!(
        "{}/confirmation.html?bookingId={}&session_id={{CHECKOUT_SESSION_ID}}",
        frontend_url, booking.booking.id
    );
    let cancel_url = format!("{}/book.html?cancelled=true", frontend_url);

    let mut metadata = HashMap::new();
    metadata.insert("booking_id".to_string(), booking.booking.id.to_string());
    metadata.insert("user_id".to_string(), user_id.to_string());

    let params = CreateCheckoutSession {
        payment_method_types: Some(vec![stripe::CreateCheckoutSessionPaymentMethodTypes::Card]),
        line_items: Some(vec![stripe::CreateCheckoutSessionLineItems {
            price_data: Some(stripe::CreateCheckoutSessionLineItemsPriceData {
                currency: Currency::GBP,
                product_data: Some(stripe::CreateCheckoutSessionLineItemsPriceDataProductData {
                    name: format!("{} Tutoring Session", booking.booking.subject),
                    description: Some(format!(
                        "Session with {} on {}",
                        booking.tutor_name,
                        booking.booking.session_date.format("%Y-%m-%d")
                    )),
                    ..Default::default()
                }),
                unit_amount: Some(unit_amount),
                ..Default::default()
            }),
            quantity: Some(1),
            ..Default::default()
        }]),
        mode: Some(CheckoutSessionMode::Payment),
        success_url: Some(success_url.as_str()),
        cancel_url: Some(cancel_url.as_str()),
        metadata: Some(metadata),
        ..Default::default()
    };

    CheckoutSession::create(client, params)
        .await
        .map_err(AppError::from)
}

/// Creates an event for the webhook based on the request payload and signature.
/// Requires a webhook secret key.
pub fn construct_event(payload: &str, signature: &str, webhook_secret: &str) -> Res<Event> {
    match Webhook::construct_event(payload, signature, webhook_secret) {
        Ok(event) => Ok(event),
        Err(e) => {
            log::error!("Error constructing webhook event: {}", e);
            Err(AppError::BadRequest(format!("Webhook Error: {}", e)))
        }
    }
}

/// Processes the webhook event. A completed checkout session marks the
/// booking it references as paid; everything else is logged and acknowledged.
pub async fn process_webhook_event(pool: &PgPool, event: Event) -> Res<()> {
    log::info!("Processing webhook event: {}", event.type_);

    match event.type_ {
        EventType::CheckoutSessionCompleted => {
            if let EventObject::CheckoutSession(session) = event.data.object {
                let booking_id = session
                    .metadata
                    .as_ref()
                    .and_then(|metadata| metadata.get("booking_id"))
                    .and_then(|raw| Uuid::parse_str(raw).ok());

                match booking_id {
                    Some(booking_id) => {
                        let updated = db::booking::set_payment_status(
                            pool,
                            booking_id,
                            PaymentStatus::Paid.as_str(),
                        )
                        .await?;
                        match updated {
                            Some(booking) => log::info!(
                                "Payment confirmed for booking {} via session {}",
                                booking.booking_reference,
                                session.id
                            ),
                            None => log::warn!(
                                "Checkout session {} references unknown booking {}",
                                session.id,
                                booking_id
                            ),
                        }
                    }
                    None => log::warn!(
                        "Checkout session {} completed without booking metadata",
                        session.id
                    ),
                }
            }
        }
        EventType::PaymentIntentPaymentFailed => {
            if let EventObject::PaymentIntent(payment_intent) = event.data.object {
                log::warn!("Payment failed: {}", payment_intent.id);
            }
        }
        other => {
            log::info!("Unhandled event type: {}", other);
        }
    }

    Ok(())
}

/// Retrieves a checkout session from Stripe.
pub async fn retrieve_session(client: &Client, session_id: &str) -> Res<CheckoutSession> {
    let id = session_id
        .parse::<CheckoutSessionId>()
        .map_err(|e| AppError::BadRequest(format!("Invalid session id: {}", e)))?;
    CheckoutSession::retrieve(client, &id, &[])
        .await
        .map_err(AppError::from)
}
