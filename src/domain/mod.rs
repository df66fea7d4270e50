//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{MessageKind, MessagePayload, MessageRequest};
pub use response::{InstanceResponse, MessageResponse};
pub use validation::{ValidationError, ValidationErrors};
pub use value::{AccessToken, DelayMessage, InstanceId, Phone};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_token_rejects_empty() {
        assert!(matches!(
            AccessToken::new("   "),
            Err(ValidationError::Empty {
                field: AccessToken::FIELD
            })
        ));
    }

    #[test]
    fn every_kind_builds_from_its_constructor() {
        let phone = "5511999999999";
        let requests = [
            MessageRequest::text(phone, "hi").unwrap(),
            MessageRequest::image(phone, "https://cdn.example/p.png").unwrap(),
            MessageRequest::audio(phone, "https://cdn.example/a.ogg").unwrap(),
            MessageRequest::video(phone, "https://cdn.example/v.mp4").unwrap(),
            MessageRequest::document(phone, "https://cdn.example/d.pdf", "pdf").unwrap(),
        ];
        let kinds = requests.each_ref().map(MessageRequest::kind);
        assert_eq!(kinds, MessageKind::ALL);
    }

    #[test]
    fn instance_is_not_connected_without_flag() {
        let instance = InstanceResponse::default();
        assert!(!instance.is_connected());

        let instance = InstanceResponse {
            connected: Some(true),
            ..Default::default()
        };
        assert!(instance.is_connected());
    }
}
