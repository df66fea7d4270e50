use std::fmt;

use crate::domain::validation::{ValidationError, ValidationErrors};
use crate::domain::value::{DelayMessage, Phone};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Content type of an outgoing message; selects the payload shape and endpoint.
pub enum MessageKind {
    Text,
    Image,
    Audio,
    Video,
    Document,
}

impl MessageKind {
    pub const ALL: [MessageKind; 5] = [
        Self::Text,
        Self::Image,
        Self::Audio,
        Self::Video,
        Self::Document,
    ];

    /// Endpoint path relative to the API base URL.
    pub fn path(self) -> &'static str {
        match self {
            Self::Text => "/message/send-text",
            Self::Image => "/message/send-image",
            Self::Audio => "/message/send-audio",
            Self::Video => "/message/send-video",
            Self::Document => "/message/send-document",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Audio => "audio",
            Self::Video => "video",
            Self::Document => "document",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Kind-specific part of a [`MessageRequest`].
///
/// Media values are passed through as given (URL or base64 data).
pub enum MessagePayload {
    Text { message: String },
    Image { image: String },
    Audio { audio: String },
    Video { video: String },
    Document { document: String, extension: String },
}

impl MessagePayload {
    pub fn kind(&self) -> MessageKind {
        match self {
            Self::Text { .. } => MessageKind::Text,
            Self::Image { .. } => MessageKind::Image,
            Self::Audio { .. } => MessageKind::Audio,
            Self::Video { .. } => MessageKind::Video,
            Self::Document { .. } => MessageKind::Document,
        }
    }

    fn collect_errors(&self, errors: &mut Vec<ValidationError>) {
        match self {
            Self::Text { message } => require("message", message, errors),
            Self::Image { image } => require("image", image, errors),
            Self::Audio { audio } => require("audio", audio, errors),
            Self::Video { video } => require("video", video, errors),
            Self::Document {
                document,
                extension,
            } => {
                require("document", document, errors);
                require("extension", extension, errors);
            }
        }
    }
}

fn require(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) {
    if value.trim().is_empty() {
        errors.push(ValidationError::Empty { field });
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A validated outgoing message: the common envelope plus one payload.
///
/// Constructors check every field and report all failures together. Payload fields must
/// contain a non-whitespace character, so a value like `" "` is rejected as empty even
/// though it has non-zero length.
pub struct MessageRequest {
    phone: Phone,
    delay_message: Option<DelayMessage>,
    payload: MessagePayload,
}

impl MessageRequest {
    /// Build a request from raw parts, validating the phone and payload fields.
    pub fn new(phone: impl Into<String>, payload: MessagePayload) -> Result<Self, ValidationErrors> {
        let phone = Phone::new(phone);
        let mut errors = Vec::new();
        if let Err(err) = &phone {
            errors.push(err.clone());
        }
        payload.collect_errors(&mut errors);
        ValidationErrors::check(errors)?;

        Ok(Self {
            phone: phone?,
            delay_message: None,
            payload,
        })
    }

    pub fn text(
        phone: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, ValidationErrors> {
        Self::new(
            phone,
            MessagePayload::Text {
                message: message.into(),
            },
        )
    }

    pub fn image(
        phone: impl Into<String>,
        image: impl Into<String>,
    ) -> Result<Self, ValidationErrors> {
        Self::new(
            phone,
            MessagePayload::Image {
                image: image.into(),
            },
        )
    }

    pub fn audio(
        phone: impl Into<String>,
        audio: impl Into<String>,
    ) -> Result<Self, ValidationErrors> {
        Self::new(
            phone,
            MessagePayload::Audio {
                audio: audio.into(),
            },
        )
    }

    pub fn video(
        phone: impl Into<String>,
        video: impl Into<String>,
    ) -> Result<Self, ValidationErrors> {
        Self::new(
            phone,
            MessagePayload::Video {
                video: video.into(),
            },
        )
    }

    /// Document requests need both the file (`document`) and its `extension`, e.g. `pdf`.
    pub fn document(
        phone: impl Into<String>,
        document: impl Into<String>,
        extension: impl Into<String>,
    ) -> Result<Self, ValidationErrors> {
        Self::new(
            phone,
            MessagePayload::Document {
                document: document.into(),
                extension: extension.into(),
            },
        )
    }

    /// Ask W-API to wait before dispatching the message.
    pub fn with_delay_message(mut self, delay: DelayMessage) -> Self {
        self.delay_message = Some(delay);
        self
    }

    /// Re-check every field constraint.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();
        if let Err(err) = Phone::new(self.phone.as_str()) {
            errors.push(err);
        }
        self.payload.collect_errors(&mut errors);
        ValidationErrors::check(errors)
    }

    /// Validate and additionally require a specific kind.
    pub fn validate_as(&self, expected: MessageKind) -> Result<(), ValidationErrors> {
        let actual = self.kind();
        if actual != expected {
            return Err(ValidationError::KindMismatch { expected, actual }.into());
        }
        self.validate()
    }

    pub fn kind(&self) -> MessageKind {
        self.payload.kind()
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn delay_message(&self) -> Option<DelayMessage> {
        self.delay_message
    }

    pub fn payload(&self) -> &MessagePayload {
        &self.payload
    }
}
