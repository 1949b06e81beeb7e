//! Clap derive structures for the `campus` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// campus -- manage school assets from the command line
#[derive(Debug, Parser)]
#[command(
    name = "campus",
    version,
    about = "Manage school assets from the command line",
    long_about = "Manage school assets from the command line: network devices,\n\
        rentable equipment, user accounts, and IP assignments.",
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
    /// Server profile to use
    #[arg(long, short = 'p', env = "CAMPUS_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Backend base URL (overrides profile)
    #[arg(long, short = 's', env = "CAMPUS_SERVER", global = true)]
    pub server: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "CAMPUS_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Request timeout in seconds
    #[arg(long, env = "CAMPUS_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// Plain text, one identifier per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
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
    /// Log in and store the session token
    Login(LoginArgs),

    /// End the session and clear the stored token
    Logout,

    /// Manage network devices
    #[command(alias = "dev", alias = "d")]
    Devices(DevicesArgs),

    /// Manage rentable equipment
    #[command(alias = "eq", alias = "e")]
    Equipment(EquipmentArgs),

    /// Manage user accounts
    #[command(alias = "u")]
    Users(UsersArgs),

    /// Manage IP assignments
    Ip(IpArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Shared List Arguments ────────────────────────────────────────────

/// Shared search and pagination arguments for all list commands.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Search text, matched across all searchable fields
    #[arg(long, short = 'f')]
    pub search: Option<String>,

    /// Restrict the search to one field (e.g. "name", "mac")
    #[arg(long, requires = "search")]
    pub field: Option<String>,

    /// Narrow the fetched list client-side, without a search request.
    /// Rejected on server-paginated endpoints; use --search there
    #[arg(long, conflicts_with = "search")]
    pub live_filter: Option<String>,

    /// Page to fetch (server-paginated endpoints)
    #[arg(long, default_value = "1")]
    pub page: usize,

    /// Results per page
    #[arg(long, short = 'l')]
    pub page_size: Option<usize>,
}

// ── Login ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Username (prompted if omitted)
    #[arg(long, short = 'u', env = "CAMPUS_USERNAME")]
    pub username: Option<String>,
}

// ── Devices ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct DevicesArgs {
    #[command(subcommand)]
    pub command: DevicesCommand,
}

#[derive(Debug, Subcommand)]
pub enum DevicesCommand {
    /// List devices
    #[command(alias = "ls")]
    List(ListArgs),

    /// Delete devices
    #[command(alias = "rm")]
    Delete {
        /// Device ids
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Activate devices
    Activate {
        /// Device ids
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Deactivate devices
    Deactivate {
        /// Device ids
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

// ── Equipment ────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct EquipmentArgs {
    #[command(subcommand)]
    pub command: EquipmentCommand,
}

#[derive(Debug, Subcommand)]
pub enum EquipmentCommand {
    /// List equipment
    #[command(alias = "ls")]
    List(ListArgs),

    /// Delete equipment
    #[command(alias = "rm")]
    Delete {
        /// Equipment ids
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Change equipment lifecycle status
    SetStatus {
        /// Target status
        #[arg(long, value_enum)]
        status: StatusArg,

        /// Renter username (required for rented)
        #[arg(long)]
        user: Option<String>,

        /// Equipment ids
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusArg {
    Available,
    Rented,
    Maintenance,
    Retired,
}

// ── Users ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub command: UsersCommand,
}

#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    /// List user accounts
    #[command(alias = "ls")]
    List(ListArgs),

    /// Delete user accounts
    #[command(alias = "rm")]
    Delete {
        /// Account ids
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Activate user accounts
    Activate {
        /// Account ids
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Deactivate user accounts
    Deactivate {
        /// Account ids
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

// ── IP assignments ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct IpArgs {
    #[command(subcommand)]
    pub command: IpCommand,
}

#[derive(Debug, Subcommand)]
pub enum IpCommand {
    /// List IP assignments
    #[command(alias = "ls")]
    List(ListArgs),

    /// Release leases (deletes the assignments)
    Release {
        /// Assignment ids
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Blacklist addresses
    Blacklist {
        /// Assignment ids
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Remove addresses from the blacklist
    Unblacklist {
        /// Assignment ids
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Display current resolved configuration
    Show,

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },

    /// Print the config file path
    Path,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
