use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use wifikeys::auth::store::UserStore;
use wifikeys::auth::{self, NewUser};
use wifikeys::cli::{Cli, Command};
use wifikeys::config::WifikeysConfig;
use wifikeys::platform::Platform;
use wifikeys::{extract, output, query};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = wifikeys::config::load(cli.config.as_ref());

    match cli.command {
        Command::List { search } => cmd_list(&config, search.as_deref(), cli.json)?,
        Command::Signup => cmd_signup(&config)?,
        Command::ResetPassword => cmd_reset_password(&config)?,
        Command::Completions { shell } => wifikeys::cli::print_completions(shell),
    }

    Ok(())
}

/// Open the user store once; every gate operation borrows it.
fn open_store(config: &WifikeysConfig) -> Result<UserStore> {
    let path = config
        .store
        .path
        .clone()
        .unwrap_or_else(UserStore::default_path);
    Ok(UserStore::open(path)?)
}

fn cmd_list(config: &WifikeysConfig, search: Option<&str>, json: bool) -> Result<()> {
    let store = open_store(config)?;

    let username = prompt("Username: ")?;
    let password = prompt("Password: ")?;
    let Some(identity) = auth::login(&store, &username, &password)? else {
        anyhow::bail!("invalid username or password");
    };

    if !json {
        println!(
            "{} {} {}",
            "Welcome,".bold(),
            identity.first_name,
            identity.last_name
        );
        println!();
    }

    let platform = Platform::detect()?;

    #[cfg(unix)]
    if platform == Platform::Linux && !nix::unistd::geteuid().is_root() {
        eprintln!("warning: not running as root; NetworkManager files are usually root-only");
    }

    let profiles = extract::extract(platform)?;
    let profiles = query::filter(profiles, search);

    if json {
        output::print_json(&profiles);
    } else {
        output::print_table(&profiles, config.output.redact_keys);
    }

    Ok(())
}

fn cmd_signup(config: &WifikeysConfig) -> Result<()> {
    let store = open_store(config)?;

    println!("{}", "Create an account".bold());
    let new = NewUser {
        first_name: prompt("First name: ")?,
        last_name: prompt("Last name: ")?,
        email: prompt("Email: ")?,
        username: prompt("Username (letters, numbers, and a symbol): ")?,
        password: prompt("Password (at least 8 characters): ")?,
        confirm_password: prompt("Confirm password: ")?,
    };

    auth::sign_up(&store, &new)?;
    println!("{}", "Account created. You can now run `wifikeys list`.".green());
    Ok(())
}

fn cmd_reset_password(config: &WifikeysConfig) -> Result<()> {
    let store = open_store(config)?;

    println!("{}", "Reset password".bold());
    let username = prompt("Username: ")?;
    let email = prompt("Email: ")?;
    let new_password = prompt("New password (at least 8 characters): ")?;
    let confirm = prompt("Confirm new password: ")?;

    auth::reset_password(&store, &username, &email, &new_password, &confirm)?;
    println!("{}", "Password reset. You can now log in.".green());
    Ok(())
}

// Prompts go to stderr so `--json` output on stdout stays parseable.
fn prompt(label: &str) -> Result<String> {
    eprint!("{}", label);
    std::io::Write::flush(&mut std::io::stderr())?;
    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}
