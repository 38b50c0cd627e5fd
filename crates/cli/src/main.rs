use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = fabricator::Cli::parse();
    let code = fabricator::run_pipeline(&cli)?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
