use clap::{Parser, Subcommand};

use mimalloc::MiMalloc;

use crate::{describe::DescribeArgs, generate::GenerateSubcommands, trace::TraceArgs};

mod describe;
mod file_utils;
mod generate;
mod parsers;
mod trace;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Timestamped trace of a route, one sample per point
    Trace {
        #[command(flatten)]
        args: TraceArgs,
    },
    /// Turn by turn maneuvers of a route
    #[command(visible_alias = "d")]
    Describe {
        #[command(flatten)]
        args: DescribeArgs,
    },
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::Trace { args }) => trace::run(args)?,
        Some(Commands::Describe { args }) => describe::run(args)?,
        Some(Commands::Generate { commands }) => generate::run(commands)?,
        None => {
            // Handle no command provided
        }
    }

    Ok(())
}
