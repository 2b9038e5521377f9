use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;

use driftwood::app::{App, Outcome};
use driftwood::config;
use driftwood::core::parse_command;
use driftwood::domain::AddressValidator;
use driftwood::infrastructure::ethereum::{ClientFactory, NoWallet, RpcWallet, Wallet};
use driftwood::logs::init_logs;
use driftwood::Inspector;

#[derive(Debug, Parser)]
#[command(
    name = "driftwood",
    version,
    about = "Driftwood: a read-only inspector for Base and Base Sepolia"
)]
struct Args {
    /// Config file (default: $XDG_CONFIG_HOME/driftwood/config.toml)
    #[arg(long, env = "DRIFTWOOD_CONFIG")]
    config: Option<PathBuf>,

    /// Wallet JSON-RPC endpoint (e.g. http://127.0.0.1:1248)
    #[arg(long, env = "DRIFTWOOD_WALLET_RPC")]
    wallet_rpc: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    /// Run a single command and exit (e.g. `probe 0x…`); interactive otherwise
    #[arg(trailing_var_arg = true)]
    command: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logs(args.log_json);

    let mut config = config::load(args.config.as_deref())?;
    if let Some(rpc) = args.wallet_rpc {
        config.wallet.rpc = Some(rpc);
    }

    let registry = config.registry()?;
    let wallet: Arc<dyn Wallet> = match config.wallet_url()? {
        Some(url) => {
            info!(endpoint = %url, "using JSON-RPC wallet");
            Arc::new(RpcWallet::http(url))
        }
        None => Arc::new(NoWallet),
    };

    let inspector = Inspector::new(
        ClientFactory::http(registry),
        AddressValidator::new(config.strict_checksum),
        wallet,
    );
    let app = App::new(inspector);

    if !args.command.is_empty() {
        if let Outcome::Render(report) = app.execute(parse_command(&args.command.join(" "))).await {
            println!("{}", report);
        }
        return Ok(());
    }

    run_repl(&app).await
}

async fn run_repl(app: &App) -> Result<()> {
    println!("{}", app.inspector().ready());

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await.context("reading stdin")? else {
            break;
        };

        match app.execute(parse_command(&line)).await {
            Outcome::Render(report) => {
                if !report.title().is_empty() {
                    println!("{}", report);
                }
            }
            Outcome::Quit => break,
        }
    }

    Ok(())
}
