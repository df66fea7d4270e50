use std::io;

use tracing_subscriber::EnvFilter;
use wapi::{AccessToken, DelayMessage, InstanceId, MessageRequest, WapiClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let token = required_env("WAPI_TOKEN")?;
    let instance_id = required_env("WAPI_INSTANCE_ID")?;
    let phone = required_env("WAPI_PHONE")?;
    let message = std::env::var("WAPI_MESSAGE")
        .unwrap_or_else(|_| "Hello from the wapi example.".to_owned());

    let mut request = MessageRequest::text(phone, message)?;
    if let Ok(delay) = std::env::var("WAPI_DELAY") {
        request = request.with_delay_message(DelayMessage::new(delay.parse()?));
    }

    let client = WapiClient::new();
    let response = client
        .messages()
        .send_text_message(
            &AccessToken::new(token)?,
            &InstanceId::new(instance_id)?,
            request,
        )
        .await?;
    println!(
        "message_id: {:?}, inserted_id: {:?}",
        response.message_id, response.inserted_id
    );

    Ok(())
}

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}
