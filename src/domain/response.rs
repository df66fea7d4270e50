#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Snapshot of a W-API instance as returned by `instance/fetch-instance`.
///
/// Every field is optional; W-API omits what does not apply. Timestamps are epoch values
/// as sent by the server.
pub struct InstanceResponse {
    pub instance_id: Option<String>,
    pub instance_name: Option<String>,
    pub token: Option<String>,
    pub connected: Option<bool>,
    pub connected_phone: Option<String>,
    pub contacts: Option<i64>,
    pub chats: Option<i64>,
    pub messages_sent: Option<i64>,
    pub messages_received: Option<i64>,
    pub webhook_connected_url: Option<String>,
    pub webhook_delivery_url: Option<String>,
    pub webhook_disconnected_url: Option<String>,
    pub webhook_status_url: Option<String>,
    pub webhook_presence_url: Option<String>,
    pub webhook_received_url: Option<String>,
    pub automatic_reading: Option<bool>,
    pub reject_calls: Option<bool>,
    pub call_message: Option<String>,
    pub created: Option<i64>,
    pub is_trial: Option<bool>,
    pub payment_status: Option<String>,
    pub expires: Option<i64>,
}

impl InstanceResponse {
    /// `true` only when the server reported the instance as connected.
    pub fn is_connected(&self) -> bool {
        self.connected.unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Acknowledgement of a send operation.
pub struct MessageResponse {
    pub instance_id: Option<String>,
    pub message_id: Option<String>,
    pub inserted_id: Option<String>,
}
