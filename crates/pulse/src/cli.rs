//! Clap derive structures for the `pulse` CLI.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// pulse -- online player count for an osu! server
#[derive(Debug, Parser)]
#[command(
    name = "pulse",
    version,
    about = "Show the online player count of an osu! server",
    long_about = "Fetches the online player count once from the server's \
        get_player_count API and renders it with thousands separators.\n\n\
        The API base comes from --api-base, PULSE_API_BASE, or the config file.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// API base URL, e.g. https://osu.example.com/api (overrides config)
    #[arg(long, short = 'a', env = "PULSE_API_BASE", global = true)]
    pub api_base: Option<String>,

    /// Page region the widget is bound to
    #[arg(long, env = "PULSE_MOUNT", global = true)]
    pub mount: Option<String>,

    /// Output format [default: from config, else table]
    #[arg(long, short = 'o', env = "PULSE_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: from config, else auto]
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "PULSE_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds [default: from config, else 30]
    #[arg(long, env = "PULSE_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, formatted value only (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the online player count once and display it
    #[command(alias = "c")]
    Count(CountArgs),

    /// Group numbers with thousands separators
    #[command(alias = "fmt")]
    Format(FormatArgs),

    /// Compute the API base URL for a page location
    ApiUrl(ApiUrlArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Count ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CountArgs {
    /// Render through a template instead, e.g. "<% addCommas(online_users) %> online"
    #[arg(long, short = 't')]
    pub template: Option<String>,

    /// Fail with the underlying error instead of showing the default count
    #[arg(long)]
    pub strict: bool,
}

// ── Format ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct FormatArgs {
    /// Numbers (or numeric strings) to format
    #[arg(required = true, allow_hyphen_values = true)]
    pub values: Vec<String>,
}

// ── Api URL ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ApiUrlArgs {
    /// Page protocol as a browser reports it, including the colon
    #[arg(long, default_value = "https:")]
    pub protocol: String,

    /// Page hostname (without the osu. prefix)
    #[arg(long)]
    pub hostname: String,

    /// Page port; empty for the scheme's default
    #[arg(long, default_value = "")]
    pub port: String,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file path
    Path,

    /// Show the effective configuration
    Show,

    /// Write a new config file (uses --api-base, or a page location)
    Init {
        /// Page protocol, used with --hostname
        #[arg(long, default_value = "https:")]
        protocol: String,

        /// Page hostname to derive the API base from
        #[arg(long)]
        hostname: Option<String>,

        /// Page port, used with --hostname
        #[arg(long, default_value = "")]
        port: String,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
