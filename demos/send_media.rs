use std::io;

use tracing_subscriber::EnvFilter;
use wapi::{AccessToken, InstanceId, MessageRequest, WapiClient};

/// Sends `WAPI_MEDIA` (URL or base64) as the kind named by `WAPI_KIND`:
/// `image`, `audio`, `video` or `document` (the latter also needs `WAPI_EXTENSION`).
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let token = AccessToken::new(required_env("WAPI_TOKEN")?)?;
    let instance_id = InstanceId::new(required_env("WAPI_INSTANCE_ID")?)?;
    let phone = required_env("WAPI_PHONE")?;
    let media = required_env("WAPI_MEDIA")?;
    let kind = required_env("WAPI_KIND")?;

    let request = match kind.as_str() {
        "image" => MessageRequest::image(phone, media)?,
        "audio" => MessageRequest::audio(phone, media)?,
        "video" => MessageRequest::video(phone, media)?,
        "document" => MessageRequest::document(phone, media, required_env("WAPI_EXTENSION")?)?,
        other => {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("unsupported WAPI_KIND: {other}"),
            )
            .into());
        }
    };

    let client = WapiClient::new();
    let response = client
        .messages()
        .send_message(&token, &instance_id, request)
        .await?;
    println!(
        "kind: {kind}, message_id: {:?}, inserted_id: {:?}",
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
