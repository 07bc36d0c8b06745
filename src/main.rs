use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use sqs_tail::cli::Args;
use sqs_tail::receiver::SqsTail;
use sqs_tail::render::Renderer;
use sqs_tail::{client, logging};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let client =
        client::create_sqs_client(args.region.as_deref(), args.endpoint_url.as_deref()).await;
    let renderer = Renderer::new(args.use_color(), args.truncation_spec());

    let tail = SqsTail::connect(client, &args.queue, args.tail_config(), renderer)
        .await
        .context("unable to find queue")?;

    info!("Polling {}, press CTRL-C to exit", tail.queue_url());

    let mut stdout = std::io::stdout();
    tokio::select! {
        result = tail.run(&mut stdout) => match result {
            Ok(never) => match never {},
            Err(e) => Err(anyhow::Error::new(e).context("unable to poll")),
        },
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, exiting");
            Ok(())
        }
    }
}
