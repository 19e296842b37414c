use crate::models::ErrorResponse;
use log::{error, warn};
use rocket::http::Status;
use rocket::{catch, Request};

#[catch(400)]
pub fn bad_request(req: &Request) -> ErrorResponse {
    warn!("Malformed request: {} {}", req.method(), req.uri());
    ErrorResponse::bad_request("Malformed request")
}

/// Also reached by `POST /analyze` without a JSON content type.
#[catch(404)]
pub fn not_found(req: &Request) -> ErrorResponse {
    ErrorResponse::not_found(format!("No route for {} {}", req.method(), req.uri().path()))
}

#[catch(422)]
pub fn unprocessable_entity(req: &Request) -> ErrorResponse {
    warn!("Undecodable body for {} {}", req.method(), req.uri());
    ErrorResponse::new(
        Status::UnprocessableEntity,
        "Request body must be a JSON object with a string field 'video_url'",
    )
}

#[catch(500)]
pub fn internal_error(req: &Request) -> ErrorResponse {
    error!("Request {} {} failed inside the server", req.method(), req.uri());
    ErrorResponse::internal("unexpected failure")
}

#[catch(default)]
pub fn default_catcher(status: Status, _req: &Request) -> ErrorResponse {
    ErrorResponse::new(status, status.reason_lossy())
}
