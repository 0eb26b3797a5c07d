use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use sendcli::cli::{
    config_summary, encode_input, handle_init, handle_send_command, history_lines, unlock_vault,
    OutputFormat, Response, SendCommands,
};
use sendcli::config::{SendPaths, Settings};
use sendcli::crypto::{KeyDerivationParams, SecureString};
use sendcli::error::EditError;
use sendcli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "sendcli",
    author = "Kaylee Beyene",
    version,
    about = "Edit encrypted, shareable Sends from the terminal",
    long_about = "send-cli keeps end-to-end encrypted Sends in a local vault. \
                  Edits arrive as base64-encoded JSON, are merged into the stored \
                  Send, re-encrypted and saved."
)]
struct Cli {
    /// Output format for responses
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    output: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Vault passphrase (prompted for when not given)
    #[arg(long, global = true, env = "SEND_CLI_PASSPHRASE", hide_env_values = true)]
    passphrase: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the vault key and account settings
    Init {
        /// Mark the account as premium (allows editing file sends)
        #[arg(long)]
        premium: bool,
    },

    /// Show current configuration and paths
    Config,

    /// Base64-encode stdin for use with 'send edit'
    Encode,

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Send commands
    #[command(subcommand)]
    Send(SendCommands),
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = SendPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    let passphrase = cli.passphrase.map(SecureString::from);

    let result = match cli.command {
        Commands::Init { premium } => handle_init(
            &paths,
            &mut settings,
            &storage,
            passphrase,
            KeyDerivationParams::new(),
            premium,
        )
        .map_err(EditError::from),
        Commands::Config => config_summary(&storage, &settings).map_err(EditError::from),
        Commands::Encode => {
            println!("{}", encode_input(io::stdin().lock())?);
            return Ok(ExitCode::SUCCESS);
        }
        Commands::History { limit } => history_lines(&storage, limit).map_err(EditError::from),
        Commands::Send(cmd) => handle_send_command(
            &storage,
            &settings,
            || unlock_vault(&settings, passphrase),
            cmd,
        ),
    };

    let succeeded = result.is_ok();
    let response = Response::from_result(result);
    println!("{}", response.render(cli.output, cli.pretty)?);

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
