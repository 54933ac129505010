use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "wifikeys",
    about = "View saved Wi-Fi credentials from the OS credential store",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output as JSON instead of a formatted table
    #[arg(long, global = true)]
    pub json: bool,

    /// Use this config file instead of ~/.config/wifikeys/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Log in and list saved Wi-Fi profiles with their keys
    List {
        /// Keep only profiles whose SSID contains this text (case-insensitive)
        #[arg(short, long, value_name = "QUERY")]
        search: Option<String>,
    },

    /// Create an account
    Signup,

    /// Reset a forgotten password (recovery by username + email)
    ResetPassword,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for (auto-detected if omitted)
        shell: Option<Shell>,
    },
}

/// Print shell completions to stdout.
pub fn print_completions(shell: Option<Shell>) {
    let shell = shell.or_else(Shell::from_env).unwrap_or_else(|| {
        eprintln!(
            "Could not detect shell. Specify one: wifikeys completions bash|zsh|fish|elvish|powershell"
        );
        std::process::exit(1);
    });
    clap_complete::generate(shell, &mut Cli::command(), "wifikeys", &mut std::io::stdout());
}
