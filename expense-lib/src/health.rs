use actix_web::{HttpResponse, Responder};

/// Liveness probe. Never touches storage.
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().content_type("text/plain").body("ok")
}
