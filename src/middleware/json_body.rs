// src/middleware/json_body.rs

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{self, Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    web::BytesMut,
    Error, HttpMessage, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use futures_util::StreamExt;

use crate::utils::types::ApiResponse;

/// Decodes JSON request bodies up front, the way the auth layer buffers
/// payloads. A parsed `serde_json::Value` lands in the request extensions;
/// a body that claims to be JSON but isn't gets a 400 before routing.
pub struct JsonBody;

impl<S, B> Transform<S, ServiceRequest> for JsonBody
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JsonBodyMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JsonBodyMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct JsonBodyMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JsonBodyMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    dev::forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            if declares_json(&req) {
                // --- buffer the payload --------------------------------
                let mut payload = req.take_payload();
                let mut body = BytesMut::new();

                while let Some(chunk) = payload.next().await {
                    let chunk = chunk.map_err(Error::from)?;
                    body.extend_from_slice(&chunk);
                }

                // An empty body stays absent, like any non-JSON request.
                if !body.is_empty() {
                    match serde_json::from_slice::<serde_json::Value>(&body) {
                        Ok(value) => {
                            req.extensions_mut().insert(value);
                        }
                        Err(e) => {
                            let resp = HttpResponse::BadRequest().json(ApiResponse::<()> {
                                success: false,
                                message: Some(format!("invalid JSON body: {}", e)),
                                data: None,
                            });
                            return Ok(req.into_response(resp).map_into_right_body());
                        }
                    }
                }
            }

            service
                .call(req)
                .await
                .map(|res| res.map_into_left_body())
        })
    }
}

fn declares_json(req: &ServiceRequest) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| {
            ct.trim()
                .to_ascii_lowercase()
                .starts_with("application/json")
        })
        .unwrap_or(false)
}
