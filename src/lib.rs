//! # SQS Tail
//!
//! Tails an AWS SQS queue from the terminal: resolves the queue by name,
//! long-polls it, and prints each message as it is drained.
//!
//! ## Features
//!
//! - Queue lookup by name prefix, refusing ambiguous matches
//! - Unwrapping of SNS notification envelopes
//! - Pretty-printed, optionally colored JSON with raw-text fallback
//! - Truncation of selected (nested) string fields
//! - Every received message is deleted, whether or not it rendered
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sqs_tail::{client::create_sqs_client_from_env, receiver::{SqsTail, TailConfig}, render::Renderer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = create_sqs_client_from_env().await;
//!     let renderer = Renderer::new(true, None);
//!
//!     let tail = SqsTail::connect(client, "orders", TailConfig::default(), renderer).await?;
//!     tail.run(&mut std::io::stdout()).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod client;
pub mod decoder;
pub mod errors;
pub mod logging;
pub mod queue;
pub mod receiver;
pub mod render;
pub mod resolver;
pub mod truncate;
