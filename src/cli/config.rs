//
//  starr
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI configuration commands
//!
//! Register, list and remove service instances, and read or change the
//! top-level settings (`default_instance`, `log.max_body`).

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use console::style;

use crate::api::common::App;
use crate::config::{default_port, Config, InstanceConfig};
use crate::output::{OutputFormat, OutputWriter, TableBuilder};

use super::GlobalOptions;

/// Valid top-level configuration keys
const VALID_KEYS: &[&str] = &["default_instance", "log.max_body"];

/// Manage CLI configuration
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Register or replace an instance
    Add(AddArgs),

    /// Remove an instance
    #[command(visible_alias = "rm")]
    Remove(RemoveArgs),

    /// List instances and settings
    #[command(visible_alias = "ls")]
    List,

    /// Get a configuration value
    Get(GetArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// Show configuration file path
    Path,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Name to refer to the instance by
    pub name: String,

    /// Which service it is (sonarr, radarr, lidarr, readarr, prowlarr)
    #[arg(long, value_parser = parse_app)]
    pub app: App,

    /// Base URL (defaults to localhost on the service's usual port)
    #[arg(long)]
    pub url: Option<String>,

    /// API key, from Settings > General in the service's web UI
    #[arg(long, env = "STARR_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Skip TLS certificate verification
    #[arg(long)]
    pub insecure: bool,

    /// Make this the default instance
    #[arg(long)]
    pub default: bool,
}

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Instance name
    pub name: String,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Configuration key
    pub key: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key
    pub key: String,

    /// Configuration value
    pub value: String,
}

fn parse_app(s: &str) -> std::result::Result<App, String> {
    s.parse().map_err(|e: crate::Error| e.to_string())
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Add(args) => self.add(args, global),
            ConfigSubcommand::Remove(args) => self.remove(args, global),
            ConfigSubcommand::List => self.list(global),
            ConfigSubcommand::Get(args) => self.get(args, global),
            ConfigSubcommand::Set(args) => self.set(args, global),
            ConfigSubcommand::Path => self.path(global),
        }
    }

    fn add(&self, args: &AddArgs, global: &GlobalOptions) -> Result<()> {
        let mut config = global.load_config()?;

        let url = args
            .url
            .clone()
            .unwrap_or_else(|| format!("http://localhost:{}", default_port(args.app)));
        let mut instance = InstanceConfig::new(args.app, &url, args.api_key.clone());
        instance.timeout_secs = args.timeout;
        instance.valid_ssl = !args.insecure;

        // Validates the URL before anything is written.
        instance.client_config(&config.log, false).build()?;

        config.set_instance(args.name.clone(), instance.clone());
        if args.default {
            config.default_instance = Some(args.name.clone());
        }
        config.save(global.config.as_deref())?;

        let writer = OutputWriter::new(OutputFormat::from_flag(global.json));
        if writer.is_json() {
            let result = serde_json::json!({
                "success": true,
                "name": args.name,
                "app": instance.app,
                "url": instance.url,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            writer.write_success(&format!(
                "Added {} ({} at {})",
                style(&args.name).cyan(),
                instance.app,
                instance.url
            ));
        }
        Ok(())
    }

    fn remove(&self, args: &RemoveArgs, global: &GlobalOptions) -> Result<()> {
        let mut config = global.load_config()?;
        if config.remove_instance(&args.name).is_none() {
            bail!("Unknown instance '{}'", args.name);
        }
        config.save(global.config.as_deref())?;

        if global.json {
            let result = serde_json::json!({ "success": true, "name": args.name });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{} Removed {}", style("✓").green(), style(&args.name).cyan());
        }
        Ok(())
    }

    fn list(&self, global: &GlobalOptions) -> Result<()> {
        let config = global.load_config()?;

        if global.json {
            let instances: serde_json::Map<String, serde_json::Value> = config
                .instances
                .iter()
                .map(|(name, i)| {
                    let entry = serde_json::json!({
                        "app": i.app,
                        "url": i.url,
                        "timeout_secs": i.timeout_secs,
                        "valid_ssl": i.valid_ssl,
                    });
                    (name.clone(), entry)
                })
                .collect();
            let result = serde_json::json!({
                "default_instance": config.default_instance,
                "instances": instances,
                "log": { "max_body": config.log.max_body },
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        if config.instances.is_empty() {
            println!("No instances configured. Add one with 'starr config add'.");
            return Ok(());
        }

        let default = config.default_instance.as_deref();
        let rows = config.instances.iter().map(|(name, i)| {
            let marker = if Some(name.as_str()) == default { "*" } else { "" };
            vec![
                format!("{name}{marker}"),
                i.app.to_string(),
                i.url.clone(),
                i.timeout_secs.map(|t| format!("{t}s")).unwrap_or_default(),
                if i.valid_ssl { "verify" } else { "skip" }.to_string(),
            ]
        });
        TableBuilder::new()
            .headers(["Name", "App", "URL", "Timeout", "TLS"])
            .rows(rows)
            .print();
        println!("log.max_body = {}", config.log.max_body);
        Ok(())
    }

    fn get(&self, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
        if !VALID_KEYS.contains(&args.key.as_str()) {
            bail!(
                "Unknown configuration key '{}'. Valid keys: {}",
                args.key,
                VALID_KEYS.join(", ")
            );
        }
        let config = global.load_config()?;
        let value = config.get(&args.key);

        if global.json {
            let result = serde_json::json!({ "key": args.key, "value": value });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else if let Some(v) = value {
            println!("{}", v);
        }
        Ok(())
    }

    fn set(&self, args: &SetArgs, global: &GlobalOptions) -> Result<()> {
        let mut config = global.load_config()?;
        if !config.set(&args.key, args.value.clone())? {
            bail!(
                "Unknown configuration key '{}'. Valid keys: {}",
                args.key,
                VALID_KEYS.join(", ")
            );
        }
        config.save(global.config.as_deref())?;

        if global.json {
            let result = serde_json::json!({
                "success": true,
                "key": args.key,
                "value": args.value,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!(
                "{} Set {} = {}",
                style("✓").green(),
                style(&args.key).cyan(),
                args.value
            );
        }
        Ok(())
    }

    fn path(&self, global: &GlobalOptions) -> Result<()> {
        let path = match &global.config {
            Some(path) => path.clone(),
            None => Config::config_path()?,
        };
        if global.json {
            let result = serde_json::json!({ "path": path });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{}", path.display());
        }
        Ok(())
    }
}
