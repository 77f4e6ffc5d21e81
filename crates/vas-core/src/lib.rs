//! Uniform error values for the VAS HTTP service
//!
//! Every failure a handler can surface is a [`VasError`]: a stable
//! [`ErrorId`] clients branch on, a display name, an optional description,
//! an HTTP status and an optional internal diagnostic that only operators
//! ever see. [`report`] renders one to a response sink and the log.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod catalog;
mod id;
pub mod report;
mod value;

pub use id::ErrorId;
pub use report::{BufferedResponse, Reported, ResponseSink, report};
pub use value::{ClientError, VasError};
