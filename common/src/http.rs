use actix_web::{HttpResponse, Responder};
use serde::Serialize;

use super::error::Res;

/// Response envelope shared by every endpoint:
/// `{ success, data?, count?, message? }`.
#[derive(Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub struct Success;
impl Success {
    pub fn created<T: Serialize>(body: T) -> Res<impl Responder> {
        Result::Ok(HttpResponse::Created().json(Envelope {
            success: true,
            data: Some(body),
            count: None,
            message: None,
        }))
    }
    pub fn ok<T: Serialize>(body: T) -> Res<impl Responder> {
        Result::Ok(HttpResponse::Ok().json(Envelope {
            success: true,
            data: Some(body),
            count: None,
            message: None,
        }))
    }
    /// List responses carry the item count alongside the data.
    pub fn ok_with_count<T: Serialize>(body: T, count: usize) -> Res<impl Responder> {
        Result::Ok(HttpResponse::Ok().json(Envelope {
            success: true,
            data: Some(body),
            count: Some(count),
            message: None,
        }))
    }
    pub fn message(message: &str) -> Res<impl Responder> {
        Result::Ok(HttpResponse::Ok().json(Envelope::<()> {
            success: true,
            data: None,
            count: None,
            message: Some(message.to_string()),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_skips_absent_fields() {
        let body = serde_json::to_value(Envelope {
            success: true,
            data: Some(vec!["14:00"]),
            count: None,
            message: None,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "success": true, "data": ["14:00"] }));
    }

    #[test]
    fn envelope_carries_count_for_lists() {
        let body = serde_json::to_value(Envelope {
            success: true,
            data: Some(Vec::<String>::new()),
            count: Some(0),
            message: None,
        })
        .unwrap();
        assert_eq!(body["count"], 0);
    }
}
