use serde::{Deserialize, Serialize};

use crate::domain::{MessagePayload, MessageRequest, MessageResponse};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct MessageJsonBody<'a> {
    phone: &'a str,
    #[serde(rename = "delayMessage", skip_serializing_if = "Option::is_none")]
    delay_message: Option<u32>,
    #[serde(flatten)]
    payload: PayloadJson<'a>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum PayloadJson<'a> {
    Text {
        message: &'a str,
    },
    Image {
        image: &'a str,
    },
    Audio {
        audio: &'a str,
    },
    Video {
        video: &'a str,
    },
    Document {
        document: &'a str,
        extension: &'a str,
    },
}

impl<'a> From<&'a MessagePayload> for PayloadJson<'a> {
    fn from(value: &'a MessagePayload) -> Self {
        match value {
            MessagePayload::Text { message } => Self::Text { message },
            MessagePayload::Image { image } => Self::Image { image },
            MessagePayload::Audio { audio } => Self::Audio { audio },
            MessagePayload::Video { video } => Self::Video { video },
            MessagePayload::Document {
                document,
                extension,
            } => Self::Document {
                document,
                extension,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessageJsonResponse {
    #[serde(default)]
    instance_id: Option<String>,
    #[serde(default)]
    message_id: Option<String>,
    #[serde(default)]
    inserted_id: Option<String>,
}

pub fn encode_message_json_body(request: &MessageRequest) -> Result<String, serde_json::Error> {
    let body = MessageJsonBody {
        phone: request.phone().as_str(),
        delay_message: request.delay_message().map(|delay| delay.value()),
        payload: request.payload().into(),
    };
    serde_json::to_string(&body)
}

pub fn decode_message_json_response(json: &str) -> Result<MessageResponse, TransportError> {
    let parsed: MessageJsonResponse = serde_json::from_str(json)?;
    Ok(MessageResponse {
        instance_id: parsed.instance_id,
        message_id: parsed.message_id,
        inserted_id: parsed.inserted_id,
    })
}
