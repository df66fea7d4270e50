//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod instance;
mod message;

pub use instance::decode_instance_json_response;
pub use message::{decode_message_json_response, encode_message_json_body};

#[cfg(test)]
pub(crate) use instance::FULL_INSTANCE_JSON;
