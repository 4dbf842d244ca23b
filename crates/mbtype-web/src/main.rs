use clap::Parser;
use mbtype_classifiers::{ModelSet, TextNormalizer, TypeAggregator};
use mbtype_web::{run_server, AppState, Cli};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let normalizer = TextNormalizer::new()?;

    // All four models or nothing: a missing artifact keeps the service
    // from becoming ready.
    let models = ModelSet::load(&cli.models_dir)?;
    let aggregator = TypeAggregator::new(models);

    let state = AppState::new(normalizer, aggregator);
    let addr: SocketAddr = format!("{}:{}", cli.address, cli.port).parse()?;

    println!();
    println!("  MBType");
    println!("  MBTI type prediction from posts");
    println!("  Models:  {}", cli.models_dir.display());
    println!("  Open http://{} in your browser", addr);
    println!();

    run_server(state, addr).await
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "mbtype_web=debug,mbtype_classifiers=debug,tower_http=debug"
    } else {
        "mbtype_web=info,mbtype_classifiers=info,tower_http=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
