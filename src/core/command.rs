//! Command parser for operator input

/// Parsed operator command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Connect,
    Toggle,
    Snapshot,
    /// Raw operator text; validated by the core, not here
    Probe(String),
    Erc20 { token: String, holder: String },
    Status,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

/// Parse one input line
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let mut parts = input.split_whitespace();
    let Some(cmd) = parts.next() else {
        return Command::Empty;
    };
    let mut arg = || parts.next().unwrap_or("").to_string();

    match cmd.to_lowercase().as_str() {
        "connect" | "conn" => Command::Connect,
        "toggle" | "switch" => Command::Toggle,
        "snapshot" | "snap" => Command::Snapshot,
        "probe" | "addr" | "address" => Command::Probe(arg()),
        "erc20" | "token" => {
            let token = arg();
            let holder = arg();
            Command::Erc20 { token, holder }
        }
        "status" | "ready" => Command::Status,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => Command::Unknown(input.to_string()),
    }
}

pub const HELP: &[&str] = &[
    "Commands",
    "connect                  request wallet account and show its balance",
    "toggle                   switch between Base Sepolia and Base Mainnet",
    "snapshot                 block number, gas price and latest block",
    "probe <address>          balance, nonce and code presence",
    "erc20 <token> <holder>   token metadata, supply and holder balance",
    "status                   active network",
    "quit                     leave",
];
