use std::io;
use std::time::Duration;

use tracing_subscriber::EnvFilter;
use wapi::{AccessToken, InstanceId, MessageRequest, WapiClient, blocking};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let token = required_env("WAPI_TOKEN")?;
    let instance_id = required_env("WAPI_INSTANCE_ID")?;
    let phone = required_env("WAPI_PHONE")?;

    let inner = WapiClient::builder()
        .timeout(Duration::from_secs(30))
        .user_agent("wapi-demos")
        .build()?;
    let client = blocking::WapiClient::from_async(inner)?;

    let response = client.messages().send_text_message(
        &AccessToken::new(token)?,
        &InstanceId::new(instance_id)?,
        MessageRequest::text(phone, "Hello from the blocking wapi example.")?,
    )?;
    println!("message_id: {:?}", response.message_id);

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
