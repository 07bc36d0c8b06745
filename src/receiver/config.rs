use crate::resolver::LIST_QUEUES_LIMIT;

/// Configuration for tailing a queue.
///
/// This struct defines the parameters for receiving messages from an SQS queue,
/// including the maximum number of messages to receive and the wait time for long polling.
///
/// # Fields
/// - `max_number_of_messages`: The maximum number of messages to receive in a single request.
/// - `wait_time_seconds`: The wait time for long polling, in seconds.
/// - `list_queues_limit`: How many queue URLs to inspect when resolving the queue name.
#[derive(Debug, Clone)]
pub struct TailConfig {
    /// The maximum number of messages to receive in a single request.
    pub max_number_of_messages: i32,

    /// The wait time for long polling, in seconds.
    pub wait_time_seconds: i32,

    /// The cap on queue URLs listed during resolution.
    pub list_queues_limit: i32,
}

impl Default for TailConfig {
    fn default() -> Self {
        TailConfig {
            max_number_of_messages: 10,
            wait_time_seconds: 10,
            list_queues_limit: LIST_QUEUES_LIMIT,
        }
    }
}
