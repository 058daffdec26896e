use axum::{
    body::Body,
    extract::{ConnectInfo, FromRequestParts},
    http::{Method, Request},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::TypedHeader;
use headers::UserAgent;
use std::net::SocketAddr;
use std::time::Instant;
use tracing::info;

/// Logs method, path, client IP, user-agent, response status and latency for
/// each HTTP request. CORS preflight `OPTIONS` requests pass through unlogged.
///
/// ### Usage:
/// ```ignore
/// use axum::Router;
/// use axum::middleware::from_fn;
/// use api::middleware::log_request;
///
/// let app = Router::new().layer(from_fn(log_request));
/// ```
///
/// The client IP comes from `ConnectInfo`, which only exists when the server
/// is started with `into_make_service_with_connect_info`; otherwise it is
/// logged as `unknown`.
pub async fn log_request(req: Request<Body>, next: Next) -> Response {
    let (mut parts, body) = req.into_parts();

    if parts.method == Method::OPTIONS {
        return next.run(Request::from_parts(parts, body)).await;
    }

    let ip = parts
        .extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".into());

    let user_agent = TypedHeader::<UserAgent>::from_request_parts(&mut parts, &())
        .await
        .ok()
        .map(|TypedHeader(ua)| ua.to_string())
        .unwrap_or_else(|| "unknown".into());

    let method = parts.method.clone();
    let path = parts.uri.path().to_owned();
    let started = Instant::now();

    let response = next.run(Request::from_parts(parts, body)).await;

    info!(
        method = %method,
        path = %path,
        ip = %ip,
        user_agent = %user_agent,
        status = response.status().as_u16(),
        latency_ms = started.elapsed().as_millis() as u64,
        "Handled request"
    );

    response
}
