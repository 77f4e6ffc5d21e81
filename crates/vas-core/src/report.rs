//! Rendering of [`VasError`] values to clients and operators
//!
//! The client gets the JSON [`ClientError`](crate::ClientError) view in the
//! response body. The operator log gets everything, including the internal
//! diagnostic.

use std::io::{self, Write};

use http::header::{self, HeaderMap, HeaderValue};
use http::StatusCode;

use crate::VasError;

/// Destination for a rendered error response
///
/// The body is written through [`Write`]; status and headers are set
/// before the body.
pub trait ResponseSink: Write {
    /// Response headers
    fn headers_mut(&mut self) -> &mut HeaderMap;

    /// Set the response status
    fn set_status(&mut self, status: StatusCode);
}

/// In-memory response collected by [`report`]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BufferedResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl ResponseSink for BufferedResponse {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }
}

impl Write for BufferedResponse {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.body.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Write `error` to `sink` and log it
///
/// Does nothing when `error` is `None`. Otherwise sets a JSON content type
/// and the error status, writes the client view as the body in a single
/// write, then logs id, name, description and internal diagnostic. If the
/// body cannot be encoded or written, the failure is logged and nothing
/// else happens; status and headers are already set at that point.
///
/// Must be called at most once per response.
pub fn report<S: ResponseSink + ?Sized>(sink: &mut S, error: Option<&VasError>) {
    let Some(error) = error else {
        return;
    };

    let view = error.client_view();

    sink.headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    sink.set_status(error.status());

    let written = serde_json::to_vec(&view)
        .map_err(io::Error::from)
        .and_then(|body| sink.write_all(&body));

    if let Err(e) = written {
        tracing::error!(error = %e, "[ERROR] Encoding JSON: {e}");
        return;
    }

    for line in log_lines(error) {
        tracing::error!(
            status = error.status().as_u16(),
            error_id = error.id().as_str(),
            "{line}"
        );
    }
}

/// Operator log lines for `error`, in emission order
pub fn log_lines(error: &VasError) -> Vec<String> {
    let mut lines = vec![
        format!("[ERROR] [{}] {}", error.status().as_u16(), error.id()),
        error.name().to_owned(),
    ];

    if let Some(description) = error.description() {
        lines.push(description.to_owned());
    }

    if let Some(internal) = error.internal() {
        lines.push(format!("caused by: {internal:#}"));
    }

    lines
}

/// Response extension marking a body already rendered by [`report`]
///
/// Middleware that post-processes responses must leave these alone so the
/// reporter runs once per response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reported;

#[cfg(feature = "http")]
mod axum_impl {
    use axum::body::Body;
    use axum::response::{IntoResponse, Response};

    use super::{BufferedResponse, Reported, report};
    use crate::VasError;

    impl IntoResponse for BufferedResponse {
        fn into_response(self) -> Response {
            let mut response = Response::new(Body::from(self.body));
            *response.status_mut() = self.status;
            *response.headers_mut() = self.headers;
            response
        }
    }

    impl IntoResponse for VasError {
        fn into_response(self) -> Response {
            let mut sink = BufferedResponse::default();
            report(&mut sink, Some(&self));

            let mut response = sink.into_response();
            response.extensions_mut().insert(Reported);
            response
        }
    }
}
