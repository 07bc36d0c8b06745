use tracing::{debug, warn};

use crate::errors::SqsTailError;
use crate::queue::QueueService;

/// Default cap on the number of queue URLs requested while resolving.
pub const LIST_QUEUES_LIMIT: i32 = 20;

/// Resolves a queue name (or name prefix) to exactly one queue URL.
///
/// Only the first page of the listing is inspected, capped at `limit`.
/// When several queues match, every candidate is logged before returning
/// [`SqsTailError::Ambiguous`].
pub async fn resolve_queue<Q>(queue: &Q, prefix: &str, limit: i32) -> Result<String, SqsTailError>
where
    Q: QueueService + ?Sized,
{
    let mut urls = queue.list_queue_urls(prefix, limit).await?;
    debug!("listing for '{}' returned {} queue(s)", prefix, urls.len());

    match urls.len() {
        0 => Err(SqsTailError::NotFound {
            prefix: prefix.to_string(),
        }),
        1 => Ok(urls.swap_remove(0)),
        count => {
            warn!("Found {} queues matching '{}':", count, prefix);
            for url in &urls {
                warn!("\t{}", url);
            }

            let limit_reached = i32::try_from(count).is_ok_and(|count| count >= limit);
            if limit_reached {
                warn!("There may be more than this, the listing hit its limit of {}", limit);
            }

            Err(SqsTailError::Ambiguous {
                prefix: prefix.to_string(),
                candidates: urls,
                limit_reached,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::queue::RawMessage;

    struct Listing(Vec<String>);

    impl Listing {
        fn of(count: usize) -> Self {
            Listing(
                (0..count)
                    .map(|i| format!("https://sqs.eu-west-1.amazonaws.com/123456789012/orders-{i}"))
                    .collect(),
            )
        }
    }

    #[async_trait]
    impl QueueService for Listing {
        async fn list_queue_urls(
            &self,
            _prefix: &str,
            max_results: i32,
        ) -> Result<Vec<String>, SqsTailError> {
            let max_results = usize::try_from(max_results).unwrap();
            Ok(self.0.iter().take(max_results).cloned().collect())
        }

        async fn receive_batch(
            &self,
            _queue_url: &str,
            _max_messages: i32,
            _wait_time_seconds: i32,
        ) -> Result<Vec<RawMessage>, SqsTailError> {
            Ok(Vec::new())
        }

        async fn delete(&self, _queue_url: &str, _receipt_handle: &str) -> Result<(), SqsTailError> {
            Ok(())
        }
    }

    struct Unreachable;

    #[async_trait]
    impl QueueService for Unreachable {
        async fn list_queue_urls(&self, _: &str, _: i32) -> Result<Vec<String>, SqsTailError> {
            Err(SqsTailError::transport("list queues", "connection refused"))
        }

        async fn receive_batch(&self, _: &str, _: i32, _: i32) -> Result<Vec<RawMessage>, SqsTailError> {
            unreachable!()
        }

        async fn delete(&self, _: &str, _: &str) -> Result<(), SqsTailError> {
            unreachable!()
        }
    }

    #[tokio::test]
    async fn no_match_is_not_found() {
        let err = resolve_queue(&Listing::of(0), "orders", LIST_QUEUES_LIMIT)
            .await
            .unwrap_err();

        assert!(matches!(err, SqsTailError::NotFound { ref prefix } if prefix == "orders"));
    }

    #[tokio::test]
    async fn single_match_resolves() {
        let url = resolve_queue(&Listing::of(1), "orders", LIST_QUEUES_LIMIT)
            .await
            .unwrap();

        assert_eq!(url, "https://sqs.eu-west-1.amazonaws.com/123456789012/orders-0");
    }

    #[tokio::test]
    async fn several_matches_are_ambiguous() {
        let err = resolve_queue(&Listing::of(3), "orders", LIST_QUEUES_LIMIT)
            .await
            .unwrap_err();

        match err {
            SqsTailError::Ambiguous {
                candidates,
                limit_reached,
                ..
            } => {
                assert_eq!(candidates, Listing::of(3).0);
                assert!(!limit_reached);
            }
            other => panic!("expected Ambiguous, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn matches_at_the_cap_flag_possible_overflow() {
        let err = resolve_queue(&Listing::of(35), "orders", LIST_QUEUES_LIMIT)
            .await
            .unwrap_err();

        match err {
            SqsTailError::Ambiguous {
                candidates,
                limit_reached,
                ..
            } => {
                assert_eq!(candidates.len(), 20);
                assert!(limit_reached);
            }
            other => panic!("expected Ambiguous, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn listing_failure_propagates() {
        let err = resolve_queue(&Unreachable, "orders", LIST_QUEUES_LIMIT)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "failed to list queues: connection refused");
    }
}
