use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use http::{HeaderMap, Method, StatusCode, header};
use vas_core::{Reported, VasError};

/// Render routing `405` responses as `UNSUPPORTED_METHOD` errors
///
/// axum answers a known path with an unknown method with an empty `405`
/// and an `Allow` header. This replaces that response with the uniform
/// error body, listing the allowed methods in header order. A `405` that a
/// handler already rendered from a `VasError` carries [`Reported`] and is
/// passed through unchanged.
pub async fn unsupported_method_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let response = next.run(request).await;

    if response.status() != StatusCode::METHOD_NOT_ALLOWED
        || response.extensions().get::<Reported>().is_some()
    {
        return response;
    }

    let allowed = allowed_methods(response.headers());
    VasError::unsupported_method(&method, &allowed).into_response()
}

/// Methods listed in the `Allow` header, in order
fn allowed_methods(headers: &HeaderMap) -> Vec<Method> {
    headers
        .get_all(header::ALLOW)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|method| !method.is_empty())
        .filter_map(|method| Method::from_bytes(method.as_bytes()).ok())
        .collect()
}
