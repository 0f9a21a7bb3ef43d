use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "graft")]
#[command(
    author,
    version,
    about = "A GraphQL gateway that grafts a typed graph onto a plain REST backend"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (defaults to graft.yml in the working directory)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Base URL of the REST backend (overrides config)
    #[arg(long, global = true, env = "GRAFT_BACKEND_URL")]
    pub backend_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the GraphQL HTTP server
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Write structured logs to this file in addition to stderr
        #[arg(long)]
        log_file: Option<String>,
    },

    /// Execute a single query or mutation document and print the result envelope
    #[command(visible_alias = "q")]
    Query {
        /// The GraphQL document to execute
        document: String,
    },

    /// Print the schema in SDL form
    Sdl,
}
