//! Request guards for the bearer-token auth gate.
//!
//! Authorization is expressed at the type level: a handler that takes
//! [`AuthedUser`] requires a valid token, one that takes [`RequireAdmin`] or
//! [`RequireTutor`] additionally requires the role from the guard's allowed
//! set, and [`MaybeAuthed`] consumes the token opportunistically without ever
//! failing the request. Role checks live here and nowhere else.

use std::sync::Arc;

use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload, web};
use common::{
    domain::Role,
    env_config::Config,
    error::AppError,
    jwt::{self, JwtClaims},
};
use futures::future::{Ready, ready};

fn claims_from_request(req: &HttpRequest) -> Result<JwtClaims, AppError> {
    let config = req
        .app_data::<web::Data<Arc<Config>>>()
        .ok_or_else(|| AppError::Internal("Server configuration is not available".to_string()))?;

    let header = req
        .headers()
        .get("Authorization")
        .and_then(|header| header.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("No authorization token provided".to_string()))?;

    let token = jwt::bearer_token(header)
        .ok_or_else(|| AppError::Unauthorized("No authorization token provided".to_string()))?;

    let claims = jwt::validate_jwt(token, &config.jwt_config.secret)
        .map_err(|_| AppError::Unauthorized("Invalid or expired token".to_string()))?;

    // Expose the identity to the request-logging middleware.
    req.extensions_mut().insert(claims.clone());

    Ok(claims)
}

fn require_role(
    req: &HttpRequest,
    allowed: &[Role],
    denial: &str,
) -> Result<JwtClaims, AppError> {
    let claims = claims_from_request(req)?;
    if allowed.contains(&claims.role) {
        Ok(claims)
    } else {
        Err(AppError::Forbidden(denial.to_string()))
    }
}

/// Any authenticated caller.
pub struct AuthedUser(pub JwtClaims);

impl FromRequest for AuthedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(claims_from_request(req).map(AuthedUser))
    }
}

/// Opportunistic authentication: a missing or invalid token degrades to
/// `None` instead of failing the request. Used by the public booking flow.
pub struct MaybeAuthed(pub Option<JwtClaims>);

impl FromRequest for MaybeAuthed {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(MaybeAuthed(claims_from_request(req).ok())))
    }
}

/// Admin-only guard.
pub struct RequireAdmin(pub JwtClaims);

impl RequireAdmin {
    pub const ALLOWED: &'static [Role] = &[Role::Admin];
    const DENIAL: &'static str = "Access denied. Admin only.";
}

impl FromRequest for RequireAdmin {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(require_role(req, Self::ALLOWED, Self::DENIAL).map(RequireAdmin))
    }
}

/// Tutor-only guard.
pub struct RequireTutor(pub JwtClaims);

impl RequireTutor {
    pub const ALLOWED: &'static [Role] = &[Role::Tutor];
    const DENIAL: &'static str = "Access denied. Tutors only.";
}

impl FromRequest for RequireTutor {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(require_role(req, Self::ALLOWED, Self::DENIAL).map(RequireTutor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_sets_are_disjoint_and_explicit() {
        assert_eq!(RequireAdmin::ALLOWED, &[Role::Admin]);
        assert_eq!(RequireTutor::ALLOWED, &[Role::Tutor]);
        assert!(!RequireAdmin::ALLOWED.contains(&Role::Tutor));
        assert!(!RequireTutor::ALLOWED.contains(&Role::Student));
    }
}
