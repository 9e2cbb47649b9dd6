use actix_web::HttpRequest;
use std::future::{ready, Ready};

/// Accepts exactly the configured token as the `Authorization` header value.
pub fn static_token_validator(
    token: String,
) -> impl Fn(String, HttpRequest) -> Ready<Result<bool, anyhow::Error>> + Clone + Send + Sync + 'static
{
    move |credential: String, _req: HttpRequest| ready(Ok(credential == token))
}
