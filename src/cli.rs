use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::qr::{AuthenticationType, ConnectionSecurity, IncomingProtocol};

#[derive(Debug, Parser)]
#[command(
    name = "mailqr",
    version,
    about = "Encode email account settings as QR code import payloads"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        default_value = "default",
        help = "Profile name to use"
    )]
    pub profile: String,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Encode(EncodeArgs),
    Split(SplitArgs),
    Account(AccountArgs),
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
pub struct EncodeArgs {
    #[arg(help = "Account files (JSON record or array); reads stdin when empty or `-`")]
    pub files: Vec<PathBuf>,
    #[arg(long, default_value_t = 1, help = "1-based position of this code in the sequence")]
    pub position: u32,
    #[arg(long, default_value_t = 1, help = "Total number of codes in the sequence")]
    pub total: u32,
}

#[derive(Debug, Args)]
pub struct SplitArgs {
    #[arg(help = "Account files (JSON record or array); reads stdin when empty or `-`")]
    pub files: Vec<PathBuf>,
    #[arg(long, default_value_t = 1, help = "Maximum accounts per code")]
    pub per_code: usize,
}

#[derive(Debug, Args)]
pub struct AccountArgs {
    #[arg(long, help = "Email address of the identity")]
    pub email: String,
    #[arg(long, help = "Display name used in outgoing messages")]
    pub display_name: Option<String>,
    #[arg(long, help = "Account name; an empty value keeps the default name")]
    pub account_name: Option<String>,
    #[arg(long, help = "Incoming server password (needs --account-name)")]
    pub password: Option<String>,
    #[arg(long, value_enum, help = "Incoming protocol")]
    pub incoming_protocol: Option<IncomingProtocol>,
    #[arg(long, help = "Incoming server host name")]
    pub incoming_host: Option<String>,
    #[arg(long, help = "Incoming server port")]
    pub incoming_port: Option<u16>,
    #[arg(long, value_enum, help = "Incoming connection security")]
    pub incoming_security: Option<ConnectionSecurity>,
    #[arg(long, value_enum, help = "Incoming authentication type")]
    pub incoming_auth: Option<AuthenticationType>,
    #[arg(long, help = "Incoming username (defaults to --email)")]
    pub incoming_username: Option<String>,
    #[arg(long, help = "Outgoing server host name")]
    pub outgoing_host: Option<String>,
    #[arg(long, help = "Outgoing server port")]
    pub outgoing_port: Option<u16>,
    #[arg(long, value_enum, help = "Outgoing connection security")]
    pub outgoing_security: Option<ConnectionSecurity>,
    #[arg(long, value_enum, help = "Outgoing authentication type")]
    pub outgoing_auth: Option<AuthenticationType>,
    #[arg(long, help = "Outgoing username (defaults to --email)")]
    pub outgoing_username: Option<String>,
    #[arg(long, help = "Outgoing server password")]
    pub outgoing_password: Option<String>,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    Path,
    Show,
}
