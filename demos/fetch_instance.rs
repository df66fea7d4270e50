use std::io;

use tracing_subscriber::EnvFilter;
use wapi::{AccessToken, InstanceId, WapiClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let token = required_env("WAPI_TOKEN")?;
    let instance_id = required_env("WAPI_INSTANCE_ID")?;

    let client = WapiClient::new();
    let instance = client
        .instances()
        .find_by_id(&AccessToken::new(token)?, &InstanceId::new(instance_id)?)
        .await?;

    println!(
        "instance: {:?}, connected: {}, phone: {:?}, sent: {:?}, received: {:?}",
        instance.instance_name,
        instance.is_connected(),
        instance.connected_phone,
        instance.messages_sent,
        instance.messages_received
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
