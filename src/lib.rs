//! Typed Rust client for the W-API messaging HTTP API.
//!
//! The crate follows a layered design: a domain layer of validated types, a transport layer
//! for the JSON wire format, and a small client layer that sends requests through one
//! shared executor. Async methods live on [`WapiClient`]; [`blocking`] wraps them for
//! synchronous callers.
//!
//! ```rust,no_run
//! use wapi::{AccessToken, InstanceId, MessageRequest, WapiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = WapiClient::new();
//!     let token = AccessToken::new("...")?;
//!     let instance = InstanceId::new("...")?;
//!     let request = MessageRequest::text("5511999999999", "hello")?;
//!     let _resp = client
//!         .messages()
//!         .send_text_message(&token, &instance, request)
//!         .await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod blocking;
pub mod client;
pub mod domain;
mod transport;

pub use client::{
    DEFAULT_BASE_URL, InstanceService, MessageService, Params, WapiClient, WapiClientBuilder,
    WapiError,
};
pub use domain::{
    AccessToken, DelayMessage, InstanceId, InstanceResponse, MessageKind, MessagePayload,
    MessageRequest, MessageResponse, Phone, ValidationError, ValidationErrors,
};
