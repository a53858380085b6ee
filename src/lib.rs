//! Fluent command builders for the [zeebe](https://zeebe.io/) gateway.
//!
//! A [`Client`] hands out one builder per gateway RPC. Each builder is a short chain of steps
//! that fills in the protobuf request, and `send` dispatches it with the client's request timeout
//! and retry predicate. Responses are the gateway's protobuf messages, returned as received.
//!
//! ```no_run
//! # async fn run() -> Result<(), zeebe_commands::Error> {
//! use zeebe_commands::{Client, VariablesCommand};
//!
//! let client = Client::builder()
//!     .gateway_address("127.0.0.1:26500")
//!     .use_plaintext(true)
//!     .connect()
//!     .await?;
//!
//! let instance = client
//!     .new_create_instance_command()
//!     .workflow_key(2251799813685249)
//!     .variables_from_string(r#"{"orderId":10}"#)?
//!     .with_result()
//!     .fetch_variables(["total"])
//!     .send()
//!     .await?;
//! println!("{}", instance.variables);
//! # Ok(())
//! # }
//! ```

mod client;
mod commands;
mod error;
mod gateway;
#[cfg(test)]
mod gateway_mock;

pub mod proto {
    #[allow(clippy::all)]
    pub mod gateway_protocol;
}

pub use client::*;
pub use commands::*;
pub use error::Error;
pub use gateway::{Gateway, GatewayFuture};
pub use proto::gateway_protocol;
