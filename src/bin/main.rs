use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "movies-api-server")]
#[command(about = "Read-only HTTP API over a movie catalog", long_about = None)]
struct Args {
    /// YAML config file; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<String>,
    #[arg(short, long)]
    debug: bool,
    /// Emit logs as JSON lines.
    #[arg(long)]
    json_logs: bool,
}

// One thread of control; requests interleave only while awaiting the store.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    let default_filter = if args.debug {
        "movies_api=debug,tower_http=debug"
    } else {
        "movies_api=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(args.json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!args.json_logs).then(|| tracing_subscriber::fmt::layer()))
        .init();

    if let Err(e) = movies_api::run(args.config.as_deref(), args.debug).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
