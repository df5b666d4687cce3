//! HTTP client types for Deliverit API communication.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`DeliveritClient`]: The caller-facing client with the three read operations
//! - [`HttpClient`]: The transport that sends one request and follows its redirects
//! - [`HttpRequest`]: A GET request to be sent to the API
//! - [`DeliveritError`]: The classified error returned by every operation
//! - [`TransportError`]: Why no response was obtained
//!
//! # Redirects
//!
//! Redirects are followed by the transport itself. Whenever a hop would go
//! out without an `Authorization` header, the header from the first request
//! of the call is copied onto it (see [`reattach_authorization`]).
//!
//! # Retry Behavior
//!
//! None. Every operation makes a single attempt; callers that want retries
//! re-invoke the operation.

mod client;
mod errors;
mod http_client;
mod http_request;
mod http_response;
mod redirect;

pub use client::DeliveritClient;
pub use errors::{DeliveritError, TransportError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpRequest, HttpRequestBuilder};
pub use http_response::{check_status, decode_body, decode_response};
pub use redirect::reattach_authorization;
