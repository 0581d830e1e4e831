use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();
    let config_path = args.config.clone();

    match args.get_command() {
        cli::Commands::Start => {
            commands::start::execute(config_path).await?;
        }
        cli::Commands::Test => {
            commands::test::execute(&config_path)?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&config_path)?,
            cli::ConfigCommands::Validate => commands::config::validate(&config_path)?,
        },
        cli::Commands::Quote { service } => match service {
            cli::QuoteCommands::CreditFarm {
                tier,
                amount,
                exclude_own_boosters,
            } => commands::quote::credit_farm(tier, amount, exclude_own_boosters),
            cli::QuoteCommands::Powerleveling { class } => commands::quote::powerleveling(class),
        },
        cli::Commands::Version => {
            println!("Boost Desk v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
