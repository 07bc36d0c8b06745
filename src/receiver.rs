use tracing::info;

use crate::errors::SqsTailError;
use crate::queue::QueueService;
use crate::render::Renderer;
use crate::resolver::resolve_queue;

mod config;
mod poll;

pub use config::TailConfig;
pub use poll::BatchReport;

/// Tails a single resolved queue.
///
/// Built with [`SqsTail::connect`], which resolves the queue name once. The
/// resolved URL is kept for the lifetime of the tail.
pub struct SqsTail<Q>
where
    Q: QueueService,
{
    /// The queue service used for receive and delete calls.
    queue: Q,

    /// URL of the resolved queue.
    queue_url: String,

    config: TailConfig,

    renderer: Renderer,
}

impl<Q> SqsTail<Q>
where
    Q: QueueService,
{
    /// Resolves `queue_name` and returns a tail ready to poll it.
    ///
    /// Fails with [`SqsTailError::NotFound`], [`SqsTailError::Ambiguous`], or
    /// [`SqsTailError::Transport`] when the name does not resolve to exactly
    /// one queue.
    pub async fn connect(
        queue: Q,
        queue_name: &str,
        config: TailConfig,
        renderer: Renderer,
    ) -> Result<Self, SqsTailError> {
        let queue_url = resolve_queue(&queue, queue_name, config.list_queues_limit).await?;
        info!("Resolved '{}' to {}", queue_name, queue_url);

        Ok(SqsTail::new(queue, &queue_url, config, renderer))
    }

    /// Creates a tail for an already known queue URL.
    pub fn new(queue: Q, queue_url: &str, config: TailConfig, renderer: Renderer) -> Self {
        SqsTail {
            queue,
            queue_url: queue_url.to_string(),
            config,
            renderer,
        }
    }

    pub fn queue_url(&self) -> &str {
        &self.queue_url
    }

    pub fn config(&self) -> &TailConfig {
        &self.config
    }
}
