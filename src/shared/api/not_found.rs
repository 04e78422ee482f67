use actix_web::HttpResponse;

use super::ApiResponse;

/// Generic "no such page" response shared by the default service and by
/// listing routes that reject their input.
pub fn not_found_response() -> HttpResponse {
    ApiResponse::not_found("NOT_FOUND", "Page not found")
}

pub async fn not_found_handler() -> HttpResponse {
    not_found_response()
}
