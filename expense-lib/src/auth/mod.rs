use crate::error::HandlerError;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::{Error, HttpRequest};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use std::future::Future;
use std::rc::Rc;
use std::sync::Arc;
use tracing::warn;

mod token;

pub use token::static_token_validator;

/// Middleware that only lets a request through when the `Authorization` header is accepted by
/// the validator it was built with.
///
/// The validator receives the raw header value and the request, and resolves to
/// - `Ok(true)`: the wrapped service is called
/// - `Ok(false)`: 401 Unauthorized
/// - `Err(_)`: 400 Bad Request
///
/// A missing or empty header is answered with 400 without calling the validator. Any other value
/// is handed over as is, with bytes that are not UTF-8 replaced by U+FFFD.
pub struct Authorization<F> {
    validator: Arc<F>,
}

impl<F, O> Authorization<F>
where
    F: Fn(String, HttpRequest) -> O,
    O: Future<Output = Result<bool, anyhow::Error>>,
{
    pub fn new(validator: F) -> Authorization<F> {
        Authorization {
            validator: Arc::new(validator),
        }
    }
}

impl<F> Clone for Authorization<F> {
    fn clone(&self) -> Self {
        Authorization {
            validator: Arc::clone(&self.validator),
        }
    }
}

impl<S, B, F, O> Transform<S, ServiceRequest> for Authorization<F>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    F: Fn(String, HttpRequest) -> O + 'static,
    O: Future<Output = Result<bool, anyhow::Error>> + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthorizationMiddleware<S, F>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthorizationMiddleware {
            service: Rc::new(service),
            validator: Arc::clone(&self.validator),
        }))
    }
}

pub struct AuthorizationMiddleware<S, F> {
    service: Rc<S>,
    validator: Arc<F>,
}

impl<S, B, F, O> Service<ServiceRequest> for AuthorizationMiddleware<S, F>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    F: Fn(String, HttpRequest) -> O + 'static,
    O: Future<Output = Result<bool, anyhow::Error>> + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let credential = match read_credential(&req) {
            Ok(credential) => credential,
            Err(err) => return Box::pin(ready(Ok(req.error_response(err).map_into_right_body()))),
        };

        let validation = (*self.validator)(credential, req.request().clone());
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            match validation.await {
                Ok(true) => {}
                Ok(false) => {
                    return Ok(req
                        .error_response(HandlerError::Unauthorized)
                        .map_into_right_body());
                }
                Err(err) => {
                    warn!(err = %err, "credential validator failed");
                    return Ok(req
                        .error_response(HandlerError::InvalidCredential)
                        .map_into_right_body());
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

fn read_credential(req: &ServiceRequest) -> Result<String, HandlerError> {
    let Some(value) = req.headers().get(header::AUTHORIZATION) else {
        return Err(HandlerError::MissingCredential);
    };
    if value.is_empty() {
        return Err(HandlerError::MissingCredential);
    }
    Ok(String::from_utf8_lossy(value.as_bytes()).into_owned())
}
