use serde::Deserialize;

use super::message::TransportError;
use crate::domain::InstanceResponse;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InstanceJsonResponse {
    #[serde(default)]
    instance_id: Option<String>,
    #[serde(default)]
    instance_name: Option<String>,
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    connected: Option<bool>,
    #[serde(default)]
    connected_phone: Option<String>,
    #[serde(default)]
    contacts: Option<i64>,
    #[serde(default)]
    chats: Option<i64>,
    #[serde(default)]
    messages_sent: Option<i64>,
    #[serde(default)]
    messages_received: Option<i64>,
    #[serde(default)]
    webhook_connected_url: Option<String>,
    #[serde(default)]
    webhook_delivery_url: Option<String>,
    #[serde(default)]
    webhook_disconnected_url: Option<String>,
    #[serde(default)]
    webhook_status_url: Option<String>,
    #[serde(default)]
    webhook_presence_url: Option<String>,
    #[serde(default)]
    webhook_received_url: Option<String>,
    #[serde(default)]
    automatic_reading: Option<bool>,
    #[serde(default)]
    reject_calls: Option<bool>,
    #[serde(default)]
    call_message: Option<String>,
    #[serde(default)]
    created: Option<i64>,
    #[serde(default)]
    is_trial: Option<bool>,
    #[serde(default)]
    payment_status: Option<String>,
    #[serde(default)]
    expires: Option<i64>,
}

impl From<InstanceJsonResponse> for InstanceResponse {
    fn from(value: InstanceJsonResponse) -> Self {
        Self {
            instance_id: value.instance_id,
            instance_name: value.instance_name,
            token: value.token,
            connected: value.connected,
            connected_phone: value.connected_phone,
            contacts: value.contacts,
            chats: value.chats,
            messages_sent: value.messages_sent,
            messages_received: value.messages_received,
            webhook_connected_url: value.webhook_connected_url,
            webhook_delivery_url: value.webhook_delivery_url,
            webhook_disconnected_url: value.webhook_disconnected_url,
            webhook_status_url: value.webhook_status_url,
            webhook_presence_url: value.webhook_presence_url,
            webhook_received_url: value.webhook_received_url,
            automatic_reading: value.automatic_reading,
            reject_calls: value.reject_calls,
            call_message: value.call_message,
            created: value.created,
            is_trial: value.is_trial,
            payment_status: value.payment_status,
            expires: value.expires,
        }
    }
}

pub fn decode_instance_json_response(json: &str) -> Result<InstanceResponse, TransportError> {
    let parsed: InstanceJsonResponse = serde_json::from_str(json)?;
    Ok(parsed.into())
}

#[cfg(test)]
pub(crate) const FULL_INSTANCE_JSON: &str = r#"
{
  "instanceId": "LITE-ABC123",
  "instanceName": "support",
  "token": "tok-1",
  "connected": true,
  "connectedPhone": "5511999999999",
  "contacts": 1520,
  "chats": 87,
  "messagesSent": 90210,
  "messagesReceived": 4096,
  "webhookConnectedUrl": "https://hooks.example/connected",
  "webhookDeliveryUrl": "https://hooks.example/delivery",
  "webhookDisconnectedUrl": "https://hooks.example/disconnected",
  "webhookStatusUrl": "https://hooks.example/status",
  "webhookPresenceUrl": "https://hooks.example/presence",
  "webhookReceivedUrl": "https://hooks.example/received",
  "automaticReading": false,
  "rejectCalls": true,
  "callMessage": "Calls are not answered here",
  "created": 1717171717000,
  "isTrial": false,
  "paymentStatus": "paid",
  "expires": 1748707717000
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_full_instance_payload() {
        let instance = decode_instance_json_response(FULL_INSTANCE_JSON).unwrap();

        assert_eq!(
            instance,
            InstanceResponse {
                instance_id: Some("LITE-ABC123".to_owned()),
                instance_name: Some("support".to_owned()),
                token: Some("tok-1".to_owned()),
                connected: Some(true),
                connected_phone: Some("5511999999999".to_owned()),
                contacts: Some(1520),
                chats: Some(87),
                messages_sent: Some(90210),
                messages_received: Some(4096),
                webhook_connected_url: Some("https://hooks.example/connected".to_owned()),
                webhook_delivery_url: Some("https://hooks.example/delivery".to_owned()),
                webhook_disconnected_url: Some("https://hooks.example/disconnected".to_owned()),
                webhook_status_url: Some("https://hooks.example/status".to_owned()),
                webhook_presence_url: Some("https://hooks.example/presence".to_owned()),
                webhook_received_url: Some("https://hooks.example/received".to_owned()),
                automatic_reading: Some(false),
                reject_calls: Some(true),
                call_message: Some("Calls are not answered here".to_owned()),
                created: Some(1_717_171_717_000),
                is_trial: Some(false),
                payment_status: Some("paid".to_owned()),
                expires: Some(1_748_707_717_000),
            }
        );
    }

    #[test]
    fn decode_accepts_nulls_and_missing_keys() {
        let instance =
            decode_instance_json_response(r#"{"instanceId":"X","connected":null}"#).unwrap();
        assert_eq!(instance.instance_id.as_deref(), Some("X"));
        assert_eq!(instance.connected, None);
        assert_eq!(instance.webhook_status_url, None);
    }

    #[test]
    fn decode_rejects_mistyped_counters() {
        assert!(decode_instance_json_response(r#"{"contacts":"many"}"#).is_err());
    }
}
