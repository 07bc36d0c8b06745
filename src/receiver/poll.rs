use std::convert::Infallible;
use std::io;

use tracing::{debug, warn};

use super::SqsTail;
use crate::decoder::decode;
use crate::errors::SqsTailError;
use crate::queue::{QueueService, RawMessage};

/// What happened to one received batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Messages returned by the receive call.
    pub received: usize,

    /// Messages with a body that were written to the output.
    pub rendered: usize,

    /// Messages whose delete call succeeded.
    pub deleted: usize,
}

impl<Q> SqsTail<Q>
where
    Q: QueueService,
{
    /// Polls the queue until a receive call fails.
    ///
    /// Never returns `Ok`; the loop only ends on a receive error or when the
    /// future is dropped.
    pub async fn run<W>(&self, out: &mut W) -> Result<Infallible, SqsTailError>
    where
        W: io::Write + ?Sized,
    {
        loop {
            self.poll_once(out).await?;
        }
    }

    /// Receives one batch, renders every message with a body, and deletes
    /// every message in delivery order.
    ///
    /// Only the receive call can fail. Render and delete failures are logged
    /// and the batch carries on.
    pub async fn poll_once<W>(&self, out: &mut W) -> Result<BatchReport, SqsTailError>
    where
        W: io::Write + ?Sized,
    {
        let messages = self
            .queue
            .receive_batch(
                &self.queue_url,
                self.config.max_number_of_messages,
                self.config.wait_time_seconds,
            )
            .await?;

        let mut report = BatchReport {
            received: messages.len(),
            ..BatchReport::default()
        };

        for message in &messages {
            if let Some(body) = message.body.as_deref() {
                let decoded = decode(body);
                if let Err(e) = self.renderer.render(&decoded, out) {
                    warn!("Error writing message: {}", e);
                }
                report.rendered += 1;
            }

            if self.acknowledge(message).await {
                report.deleted += 1;
            }
        }

        if report.received > 0 {
            debug!(
                "batch done: received={} rendered={} deleted={}",
                report.received, report.rendered, report.deleted
            );
        }

        Ok(report)
    }

    async fn acknowledge(&self, message: &RawMessage) -> bool {
        let Some(receipt_handle) = message.receipt_handle.as_deref() else {
            warn!("Received a message with no receipt handle, it cannot be deleted");
            return false;
        };

        match self.queue.delete(&self.queue_url, receipt_handle).await {
            Ok(()) => true,
            Err(e) => {
                warn!("Error deleting message: {}", e);
                false
            }
        }
    }
}
