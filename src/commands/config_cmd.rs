use anyhow::{Context, Result};
use std::process::Command;

use crate::config::Config;
use crate::session::Session;

pub async fn show_config() -> Result<()> {
    let config = Config::load()?;
    let config_file = Config::config_file()?;

    println!("# {}", config_file.display());
    println!();
    print!("{}", toml::to_string_pretty(&config)?);
    println!();
    println!(
        "# Login state is kept separately in {}",
        Session::default_path()?.display()
    );

    Ok(())
}

pub async fn edit_config() -> Result<()> {
    let config_file = Config::config_file()?;

    if !config_file.exists() {
        Config::default().save()?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vim".to_string());
    let status = Command::new(&editor)
        .arg(&config_file)
        .status()
        .with_context(|| format!("Failed to launch editor '{}'", editor))?;

    if !status.success() {
        anyhow::bail!("Editor exited with {}", status);
    }

    // Re-parse so a broken edit surfaces now, not on the next command
    let config = Config::load()?;
    println!("✓ Config OK. API endpoint: {}", config.api.base_url);

    Ok(())
}

pub async fn init_config(force: bool) -> Result<()> {
    let config_file = Config::config_file()?;

    if config_file.exists() && !force {
        println!("{} already exists.", config_file.display());
        println!("Use --force to overwrite it with the defaults.");
        return Ok(());
    }

    Config::default().save()?;

    println!("✓ Wrote default settings to {}", config_file.display());
    println!();
    println!("Point it at your server with: fitdesk config edit");

    Ok(())
}
