use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use groundwork_utils::groundwork_version;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

mod commands;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::Completion { shell } = cli.command {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            env!("CARGO_BIN_NAME"),
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    init_tracing();

    let paths = if cli.config.is_empty() {
        vec![PathBuf::from(groundwork_config::DEFAULT_CONFIG_PATH)]
    } else {
        cli.config
    };
    let config = groundwork_config::load(&paths).context("Failed to load config")?;

    match cli.command {
        Command::Submit(command) => command.invoke(config).await?,
        Command::Catalog => {
            for service in groundwork_content::services() {
                println!("{}: {}", service.title, service.summary);
            }
            println!("{}: anything not covered above", groundwork_content::OTHER_SERVICE);
        }
        Command::CheckConfig { verbose } => {
            verbose.then(|| println!("{config:#?}"));
        }
        Command::Completion { .. } => unreachable!(),
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version = groundwork_version())]
struct Cli {
    /// Config file paths; later files override earlier ones
    #[arg(short, long, global = true, env = "GROUNDWORK_CONFIG")]
    config: Vec<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Submit an enquiry through the delivery gateway
    #[command(aliases(["send", "s"]))]
    Submit(commands::submit::SubmitCommand),
    /// List the service catalog offered on the enquiry form
    Catalog,
    /// Validate configuration
    CheckConfig {
        /// Print a debug representation of the config
        #[arg(short, long)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(EnvFilter::from_default_env()))
        .init();
}
