//! Authentication for the Deliverit API.
//!
//! # Overview
//!
//! - [`SessionCredential`]: The key/token/account triple issued by the login exchange
//! - [`auth_request`]: Builds the HTTP Basic login request
//! - [`basic_auth_value`]: Encodes a username and password for HTTP Basic auth
//!
//! A credential is obtained once with
//! [`DeliveritClient::authenticate`](crate::DeliveritClient::authenticate) and
//! then passed to every subsequent call. The library never refreshes or
//! stores it; when the upstream starts rejecting it, authenticate again.
//!
//! # Example
//!
//! ```rust,ignore
//! use deliverit_api::DeliveritClient;
//!
//! let client = DeliveritClient::new()?;
//! let credential = client.authenticate("user", "secret").await?;
//! println!("Signed in to {}", credential.account_name);
//! ```

mod basic;
pub mod session;

pub use basic::{auth_request, basic_auth_value};
pub use session::SessionCredential;
