use async_trait::async_trait;
use aws_sdk_sqs::error::DisplayErrorContext;

use crate::errors::SqsTailError;

/// A single delivery returned by a receive call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawMessage {
    /// The message body, if the service returned one.
    pub body: Option<String>,

    /// Token authorizing exactly one delete of this delivery.
    pub receipt_handle: Option<String>,
}

impl RawMessage {
    pub fn new(body: Option<&str>, receipt_handle: &str) -> Self {
        RawMessage {
            body: body.map(str::to_string),
            receipt_handle: Some(receipt_handle.to_string()),
        }
    }
}

/// The three queue operations the tail depends on.
///
/// Implemented for [`aws_sdk_sqs::Client`]; tests substitute an in-memory
/// queue.
#[async_trait]
pub trait QueueService: Send + Sync {
    /// Lists at most `max_results` queue URLs whose name starts with `prefix`.
    ///
    /// Only the first page is returned.
    async fn list_queue_urls(
        &self,
        prefix: &str,
        max_results: i32,
    ) -> Result<Vec<String>, SqsTailError>;

    /// Receives up to `max_messages` messages, long-polling for
    /// `wait_time_seconds` when the queue is empty.
    async fn receive_batch(
        &self,
        queue_url: &str,
        max_messages: i32,
        wait_time_seconds: i32,
    ) -> Result<Vec<RawMessage>, SqsTailError>;

    /// Deletes one delivery by its receipt handle.
    async fn delete(&self, queue_url: &str, receipt_handle: &str) -> Result<(), SqsTailError>;
}

#[async_trait]
impl QueueService for aws_sdk_sqs::Client {
    async fn list_queue_urls(
        &self,
        prefix: &str,
        max_results: i32,
    ) -> Result<Vec<String>, SqsTailError> {
        let output = self
            .list_queues()
            .queue_name_prefix(prefix)
            .max_results(max_results)
            .send()
            .await
            .map_err(|e| SqsTailError::transport("list queues", DisplayErrorContext(e).to_string()))?;

        Ok(output.queue_urls.unwrap_or_default())
    }

    async fn receive_batch(
        &self,
        queue_url: &str,
        max_messages: i32,
        wait_time_seconds: i32,
    ) -> Result<Vec<RawMessage>, SqsTailError> {
        let output = self
            .receive_message()
            .queue_url(queue_url)
            .max_number_of_messages(max_messages)
            .wait_time_seconds(wait_time_seconds)
            .send()
            .await
            .map_err(|e| SqsTailError::transport("poll", DisplayErrorContext(e).to_string()))?;

        Ok(output
            .messages
            .unwrap_or_default()
            .into_iter()
            .map(|message| RawMessage {
                body: message.body,
                receipt_handle: message.receipt_handle,
            })
            .collect())
    }

    async fn delete(&self, queue_url: &str, receipt_handle: &str) -> Result<(), SqsTailError> {
        self.delete_message()
            .queue_url(queue_url)
            .receipt_handle(receipt_handle)
            .send()
            .await
            .map_err(|e| {
                SqsTailError::transport("delete message", DisplayErrorContext(e).to_string())
            })?;

        Ok(())
    }
}
