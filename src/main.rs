use std::path::Path;

use anyhow::{Context as _, Result};
use clap::Parser;
use colored::Colorize;

use graft::cli::{Cli, Commands};
use graft::config::GraftConfig;
use graft::graphql::{build_schema, run_server};
use graft::logging;
use graft::rest::RestClient;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = GraftConfig::load(cli.config.as_deref().map(Path::new))
        .context("Failed to load configuration")?;
    if let Some(url) = cli.backend_url {
        config.backend.base_url = url;
    }

    match cli.command {
        Commands::Serve { port, log_file } => {
            logging::init(cli.verbose, log_file.map(Into::into));

            let port = port.unwrap_or(config.server.port);
            let client = RestClient::new(&config.backend)
                .context("Failed to construct the REST client")?;
            let schema = build_schema(client);

            println!(
                "{} GraphQL server on {}",
                "Starting".green(),
                graft::graphql::endpoint_url(port)
            );
            println!("Backend: {}", config.backend.base_url.cyan());

            tokio::runtime::Runtime::new()?.block_on(run_server(schema, port))?;
            Ok(())
        }
        Commands::Query { document } => {
            logging::init(cli.verbose, None);

            let client = RestClient::new(&config.backend)
                .context("Failed to construct the REST client")?;
            let schema = build_schema(client);

            let response =
                tokio::runtime::Runtime::new()?
                    .block_on(async { schema.execute(document.as_str()).await });
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Commands::Sdl => {
            let client = RestClient::new(&config.backend)
                .context("Failed to construct the REST client")?;
            let schema = build_schema(client);
            println!("{}", schema.sdl());
            Ok(())
        }
    }
}
