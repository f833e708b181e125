use clap::Parser;
use courtside::cli::{self, Cli, Commands};
use courtside::error::Result;

mod main_runtime;

use main_runtime::{init_logging, load_config};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli.config);
    init_logging(&config.logging);

    let service = cli::build_service(&config, cli.fixtures.as_deref())?;

    match &cli.command {
        Commands::Ask { query } => {
            let outcome = service.handle_query(&query.join(" ")).await;
            cli::print_json(&outcome)?;
        }
        Commands::Interpret { query } => {
            let interpretation = service.interpret(&query.join(" ")).await;
            cli::print_json(&interpretation)?;
        }
        Commands::Project { player, opponent } => {
            let outcome = service.project_player(player, opponent.as_deref()).await;
            cli::print_json(&outcome)?;
        }
        Commands::Compare {
            first,
            second,
            opponent,
        } => {
            let outcome = service
                .compare_players(first, second, opponent.as_deref())
                .await;
            cli::print_json(&outcome)?;
        }
    }

    Ok(())
}
