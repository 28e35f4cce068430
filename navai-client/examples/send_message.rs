//! Send a message to the assistant and print the reply.
//!
//! Run with: NAVAI_API_KEY=... cargo run --example send_message -- "your message"
//!
//! Set NAVAI_SHARED_SECRET to exercise request signing; the example signs
//! the message the way an application backend would.

use navai_client::{ClientConfig, NavigableAi, SendMessageOptions};
use navai_core::sign_payload;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let api_key = std::env::var("NAVAI_API_KEY")?;
    let shared_secret = std::env::var("NAVAI_SHARED_SECRET").ok();
    let message = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "What can you help me with?".to_string());

    let mut config = ClientConfig::new(api_key)?;
    if let Some(secret) = &shared_secret {
        config = config.with_shared_secret_key(secret);
    }
    let client = NavigableAi::from_config(config)?;

    client.register_action_handler("redirect", |action, identifier| {
        println!("assistant suggested '{action}' for user {identifier}");
        Ok(())
    });

    let options = SendMessageOptions {
        identifier: Some("example-user".to_string()),
        markdown: Some(false),
        signature: shared_secret
            .as_deref()
            .map(|secret| sign_payload(secret, &message)),
        ..Default::default()
    };

    println!("Sending: {message}");
    let res = client.send_message(&message, options).await?;

    println!("Assistant: {}", res.data.assistant_message);
    if let Some(action) = &res.data.action {
        println!("Action: {action}");
    }

    Ok(())
}
