use clap::Parser;
use oasreport::{
    cli::{Cli, Commands},
    commands, telemetry, Result,
};

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Report { input, output } => {
            commands::execute_report(&input, output.as_deref())?;
        }
        Commands::Validate { input, rules, json } => {
            commands::execute_validate(&input, rules.as_deref(), json)?;
        }
        Commands::Batch {
            requests,
            output,
            insecure,
        } => {
            commands::execute_batch(&requests, &output, insecure).await?;
        }
    }

    Ok(())
}
