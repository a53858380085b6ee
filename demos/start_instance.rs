use serde::Serialize;
use zeebe_commands::{Client, VariablesCommand};

#[derive(Serialize)]
struct PlaceOrder {
    #[serde(rename = "orderId")]
    pub order_id: i32,
}

#[tokio::main]
async fn main() -> Result<(), zeebe_commands::Error> {
    let client = Client::builder()
        .gateway_address("127.0.0.1:26500")
        .use_plaintext(true)
        .from_env()
        .connect()
        .await?;

    let place_order = PlaceOrder { order_id: 10 };

    let result = client
        .new_create_instance_command()
        .bpmn_process_id("simple-process")
        .latest_version()
        .variables_from_object(&place_order)?
        .send()
        .await;

    println!("create workflow result: {:?}", result);
    Ok(())
}
