use anyhow::Result;
use clap::Parser;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use resume_tailor::cli::{self, Cli};
use resume_tailor::environment::EnvironmentConfig;
use resume_tailor::workflow::TailorWorkflow;

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr so command output stays pipeable.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = EnvironmentConfig::load()?;
    let workflow = TailorWorkflow::new(config)?;

    cli::run(cli, workflow).await
}
