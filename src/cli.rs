use std::io::IsTerminal;
use std::num::NonZeroUsize;

use clap::{ArgAction, Parser};

use crate::receiver::TailConfig;
use crate::resolver::LIST_QUEUES_LIMIT;
use crate::truncate::TruncationSpec;

/// Continuously drains an SQS queue and prints each message.
///
/// SNS notification envelopes are unwrapped and JSON bodies are
/// pretty-printed. Every received message is deleted from the queue.
#[derive(Debug, Parser)]
#[command(name = "sqs-tail", version)]
pub struct Args {
    /// Name of the queue you want to listen to (a unique name prefix is enough)
    #[arg(long, env = "SQS_TAIL_QUEUE")]
    pub queue: String,

    /// Comma-separated field names to truncate in the output; use `.` for
    /// nested fields (e.g. `details.event`)
    #[arg(long, value_name = "FIELDS")]
    pub truncate: Option<String>,

    /// Truncate listed string fields longer than this many characters
    #[arg(long = "truncateAt", visible_alias = "truncate-at", default_value = "36")]
    pub truncate_at: NonZeroUsize,

    /// Long-poll wait for each receive call, in seconds
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(i32).range(0..=20))]
    pub wait_time: i32,

    /// Maximum number of messages per receive call
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(i32).range(1..=10))]
    pub max_messages: i32,

    /// AWS region, overriding the environment and profile
    #[arg(long)]
    pub region: Option<String>,

    /// Custom SQS endpoint, e.g. http://localhost:4566 for LocalStack
    #[arg(long)]
    pub endpoint_url: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn truncation_spec(&self) -> Option<TruncationSpec> {
        self.truncate
            .as_deref()
            .and_then(|fields| TruncationSpec::parse(fields, self.truncate_at))
    }

    pub fn tail_config(&self) -> TailConfig {
        TailConfig {
            max_number_of_messages: self.max_messages,
            wait_time_seconds: self.wait_time,
            list_queues_limit: LIST_QUEUES_LIMIT,
        }
    }

    /// Color is used only when stdout is a terminal.
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}
