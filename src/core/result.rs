use actix_web::HttpResponse;
use serde::Serialize;

/// Outcome of a service operation.
///
/// Services report every expected business outcome through this type;
/// controllers match on it to pick the HTTP status. Nothing here is an
/// error in the `Result`/panic sense — callers branch exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceResult<T> {
    /// Operation completed (HTTP 200 OK)
    Ok(T),
    /// Resource created (HTTP 201 Created)
    Created(T),
    /// Validation failed or invalid input (HTTP 400 Bad Request)
    BadRequest(String),
    /// Referenced resource does not exist (HTTP 404 Not Found)
    NotFound(String),
    /// Duplicate resource or state conflict (HTTP 409 Conflict)
    Conflict(String),
}

impl<T> ServiceResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ServiceResult::Ok(_) | ServiceResult::Created(_))
    }

    /// Map the success payload, leaving failure variants untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ServiceResult<U> {
        match self {
            ServiceResult::Ok(data) => ServiceResult::Ok(f(data)),
            ServiceResult::Created(data) => ServiceResult::Created(f(data)),
            ServiceResult::BadRequest(msg) => ServiceResult::BadRequest(msg),
            ServiceResult::NotFound(msg) => ServiceResult::NotFound(msg),
            ServiceResult::Conflict(msg) => ServiceResult::Conflict(msg),
        }
    }
}

impl<T: Serialize> ServiceResult<T> {
    /// Translate the outcome into a transport response.
    ///
    /// Success payloads are serialized as-is; failures carry a
    /// `{"message": ...}` body.
    pub fn into_http_response(self) -> HttpResponse {
        match self {
            ServiceResult::Ok(data) => HttpResponse::Ok().json(data),
            ServiceResult::Created(data) => HttpResponse::Created().json(data),
            ServiceResult::BadRequest(msg) => {
                HttpResponse::BadRequest().json(serde_json::json!({ "message": msg }))
            }
            ServiceResult::NotFound(msg) => {
                HttpResponse::NotFound().json(serde_json::json!({ "message": msg }))
            }
            ServiceResult::Conflict(msg) => {
                HttpResponse::Conflict().json(serde_json::json!({ "message": msg }))
            }
        }
    }
}
