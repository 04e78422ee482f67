use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::application::domain::entities::{Requester, UserId};
use crate::auth::application::ports::outgoing::token_verifier::TokenVerifier;
use crate::shared::api::ApiResponse;

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

/// Resolves the caller's identity. Requests without an `Authorization`
/// header are guests; a header carrying a bad token is rejected.
impl FromRequest for Requester {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => return ready(Ok(Requester::guest())),
        };

        let verifier = match req.app_data::<web::Data<Arc<dyn TokenVerifier + Send + Sync>>>() {
            Some(verifier) => verifier,
            None => {
                tracing::error!("Token verifier is not registered in app data");
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        match verifier.verify_access_token(&token) {
            Ok(claims) => ready(Ok(Requester::new(UserId::from(claims.sub)))),
            Err(e) => {
                tracing::debug!("Rejecting request with invalid token: {}", e);
                ready(Err(create_api_error(ApiResponse::unauthorized(
                    "INVALID_TOKEN",
                    "Invalid or expired token",
                ))))
            }
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
