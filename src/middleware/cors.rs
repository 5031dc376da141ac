// src/middleware/cors.rs

use std::future::{ready, Ready};

use actix_web::{
    body::EitherBody,
    dev::{self, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{self, HeaderValue},
    http::Method,
    Error, HttpResponse,
};
use futures_util::future::LocalBoxFuture;

const ALLOW_METHODS: &str = "GET,HEAD,PUT,PATCH,POST,DELETE";

/// Permissive cross-origin middleware. Stamps `Access-Control-Allow-Origin: *`
/// on every outgoing response and answers preflights itself. Register it last
/// so it wraps the other stages and their early rejections get headers too.
pub struct Cors;

impl<S, B> Transform<S, ServiceRequest> for Cors
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = CorsMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CorsMiddleware { service }))
    }
}

pub struct CorsMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for CorsMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    dev::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Preflights never reach the router; answer them here.
        if req.method() == Method::OPTIONS {
            let mut builder = HttpResponse::NoContent();
            builder.insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"));
            builder.insert_header((header::ACCESS_CONTROL_ALLOW_METHODS, ALLOW_METHODS));
            if let Some(requested) = req.headers().get(header::ACCESS_CONTROL_REQUEST_HEADERS) {
                builder.insert_header((header::ACCESS_CONTROL_ALLOW_HEADERS, requested.clone()));
            }

            let res = req.into_response(builder.finish()).map_into_right_body();
            return Box::pin(async move { Ok(res) });
        }

        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?;
            res.headers_mut().insert(
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                HeaderValue::from_static("*"),
            );
            Ok(res.map_into_left_body())
        })
    }
}
