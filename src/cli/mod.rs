use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod availability;
pub mod serve;

#[derive(Subcommand)]
enum Command {
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "8000")]
        port: String,
    },
    /// Print open slots for the configured event type
    Availability {
        /// First day to search, e.g. 2024-01-01
        #[arg(long)]
        start_date: String,

        /// Last day to search (inclusive)
        #[arg(long)]
        end_date: String,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Handle each sub command
    match args.command {
        Some(Command::Serve { host, port }) => {
            serve::run(host, port).await?;
        }
        Some(Command::Availability {
            start_date,
            end_date,
        }) => {
            availability::run(&start_date, &end_date).await?;
        }
        None => {}
    }

    Ok(())
}
