//! Profile command implementation.

use crate::cli::{ProfileAction, ProfileArgs};
use crate::config::{Config, Profile};
use crate::error::Result;
use crate::output::Formatter;
use std::path::Path;
use vouch_sdk::DEFAULT_TIMEOUT_SECS;

/// Execute the profile command, saving changes to `config_path`.
pub fn execute_profile(
    args: ProfileArgs,
    config: &mut Config,
    config_path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ProfileAction::List => list_profiles(config, formatter),
        ProfileAction::Show => show_active_profile(config, formatter),
        ProfileAction::Switch { name } => {
            switch_profile(config, name, formatter)?;
            config.save_to(config_path)
        }
        ProfileAction::Set {
            name,
            url,
            api_key,
            timeout,
        } => {
            set_profile(config, name, url, api_key, timeout, formatter);
            config.save_to(config_path)
        }
        ProfileAction::Delete { name } => {
            delete_profile(config, &name, formatter)?;
            config.save_to(config_path)
        }
    }
}

/// List all profiles.
fn list_profiles(config: &Config, formatter: &Formatter) -> Result<()> {
    if config.profiles.is_empty() {
        println!("{}", formatter.info("No profiles configured"));
        return Ok(());
    }

    println!("Available profiles:");
    for (name, profile) in &config.profiles {
        if name == &config.active_profile {
            println!("* {}", formatter.success(name));
        } else {
            println!("  {}", name);
        }
        print_profile(profile, "    ");
    }

    Ok(())
}

/// Show the active profile.
fn show_active_profile(config: &Config, formatter: &Formatter) -> Result<()> {
    let profile = config.get_active_profile()?;
    println!("Active profile: {}", formatter.success(&config.active_profile));
    print_profile(profile, "  ");
    Ok(())
}

fn print_profile(profile: &Profile, indent: &str) {
    println!("{}URL: {}", indent, profile.registry_url);
    println!(
        "{}API key: {}",
        indent,
        if profile.api_key.is_some() { "set" } else { "none" }
    );
    println!("{}Timeout: {}s", indent, profile.timeout_secs);
}

/// Switch to a different profile.
fn switch_profile(config: &mut Config, name: String, formatter: &Formatter) -> Result<()> {
    config.switch_profile(name.clone())?;
    println!(
        "{}",
        formatter.success(&format!("Switched to profile '{}'", name))
    );
    Ok(())
}

/// Create or update a profile.
fn set_profile(
    config: &mut Config,
    name: String,
    url: String,
    api_key: Option<String>,
    timeout: Option<u64>,
    formatter: &Formatter,
) {
    let existing = config.profiles.get(&name);
    let action = if existing.is_some() { "Updated" } else { "Created" };

    // Unspecified fields keep their previous values
    let profile = Profile {
        registry_url: url,
        api_key: api_key.or_else(|| existing.and_then(|p| p.api_key.clone())),
        timeout_secs: timeout
            .or_else(|| existing.map(|p| p.timeout_secs))
            .unwrap_or(DEFAULT_TIMEOUT_SECS),
    };

    config.set_profile(name.clone(), profile);
    println!(
        "{}",
        formatter.success(&format!("{} profile '{}'", action, name))
    );
}

/// Delete a profile.
fn delete_profile(config: &mut Config, name: &str, formatter: &Formatter) -> Result<()> {
    config.remove_profile(name)?;
    println!(
        "{}",
        formatter.success(&format!("Deleted profile '{}'", name))
    );
    Ok(())
}
