use serde::Serialize;
use std::time::Duration;
use zeebe_commands::{Client, VariablesCommand};

#[derive(Serialize)]
struct Payment {
    #[serde(rename = "total-charged")]
    pub total_charged: f32,
}

#[tokio::main]
async fn main() -> Result<(), zeebe_commands::Error> {
    let client = Client::builder()
        .gateway_address("127.0.0.1:26500")
        .use_plaintext(true)
        .from_env()
        .connect()
        .await?;

    let payment = Payment {
        total_charged: 25.95,
    };

    client
        .new_publish_message_command()
        .message_name("payment-confirmed")
        .correlation_key("10")
        .message_id("messageId")
        .time_to_live(Duration::from_secs(10))
        .variables_from_object(&payment)?
        .send()
        .await?;
    println!("published message");
    Ok(())
}
