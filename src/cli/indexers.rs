//
//  starr
//  cli/indexers.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Indexer commands
//!
//! ## Examples
//!
//! ```bash
//! # Indexers of the default instance
//! starr indexers list
//!
//! # Copy every indexer from one Sonarr to another, keeping tag IDs
//! starr indexers copy --from tv --to tv4k --keep-tags
//!
//! # Preview copying two indexers into Radarr
//! starr indexers copy --from tv --to movies --name NZBgeek --name DrunkenSlug --dry-run
//! ```

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::api::common::{copy_indexers, App, Protocol};
use crate::api::prowlarr::{self, Prowlarr};
use crate::api::servarr::{IndexerInput, IndexerOutput, MediaServarr};
use crate::output::{format_bool, OutputFormat, OutputWriter, TableBuilder, TableOutput};

use super::{Connection, GlobalOptions};

/// List or copy indexers
#[derive(Args, Debug)]
pub struct IndexersCommand {
    #[command(subcommand)]
    pub command: IndexersSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum IndexersSubcommand {
    /// List indexers of an instance
    #[command(visible_alias = "ls")]
    List,

    /// Copy indexers from one instance to another
    Copy(CopyArgs),
}

#[derive(Args, Debug)]
pub struct CopyArgs {
    /// Instance to copy from
    #[arg(long)]
    pub from: String,

    /// Instance to copy to
    #[arg(long)]
    pub to: String,

    /// Only copy indexers with these names (repeatable)
    #[arg(long = "name", action = clap::ArgAction::Append)]
    pub names: Vec<String>,

    /// Keep tag IDs (only meaningful when both instances share tags)
    #[arg(long)]
    pub keep_tags: bool,

    /// Show what would be copied without adding anything
    #[arg(long)]
    pub dry_run: bool,
}

/// One indexer, flattened for display.
#[derive(Debug, Serialize)]
struct IndexerRow {
    id: i64,
    name: String,
    implementation: String,
    protocol: Protocol,
    enabled: bool,
    priority: i64,
}

impl From<&IndexerOutput> for IndexerRow {
    fn from(indexer: &IndexerOutput) -> Self {
        Self {
            id: indexer.id,
            name: indexer.name.clone(),
            implementation: indexer.implementation.clone(),
            protocol: indexer.protocol,
            enabled: indexer.enable_rss || indexer.enable_automatic_search || indexer.enable_interactive_search,
            priority: indexer.priority,
        }
    }
}

impl From<&prowlarr::IndexerOutput> for IndexerRow {
    fn from(indexer: &prowlarr::IndexerOutput) -> Self {
        Self {
            id: indexer.id,
            name: indexer.name.clone(),
            implementation: indexer.implementation.clone(),
            protocol: indexer.protocol,
            enabled: indexer.enable,
            priority: indexer.priority,
        }
    }
}

impl TableOutput for [IndexerRow] {
    fn print_table(&self, color: bool) {
        let rows = self.iter().map(|i| {
            vec![
                i.id.to_string(),
                i.name.clone(),
                i.implementation.clone(),
                format!("{:?}", i.protocol).to_lowercase(),
                format_bool(i.enabled, color),
                i.priority.to_string(),
            ]
        });
        TableBuilder::new()
            .color(color)
            .headers(["ID", "Name", "Implementation", "Protocol", "Enabled", "Priority"])
            .rows(rows)
            .print();
    }
}

impl IndexersCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            IndexersSubcommand::List => self.list(global).await,
            IndexersSubcommand::Copy(args) => self.copy(args, global).await,
        }
    }

    async fn list(&self, global: &GlobalOptions) -> Result<()> {
        let writer = OutputWriter::new(OutputFormat::from_flag(global.json));
        let conn = Connection::open(global, None)?;

        let rows: Vec<IndexerRow> = match conn.media()? {
            Some(media) => media.get_indexers().await?.iter().map(IndexerRow::from).collect(),
            None => Prowlarr::with_api(conn.client()?)
                .get_indexers()
                .await?
                .iter()
                .map(IndexerRow::from)
                .collect(),
        };
        writer.write(rows.as_slice())
    }

    async fn copy(&self, args: &CopyArgs, global: &GlobalOptions) -> Result<()> {
        let writer = OutputWriter::new(OutputFormat::from_flag(global.json));
        let from = Connection::open(global, Some(&args.from))?;
        let to = Connection::open(global, Some(&args.to))?;

        let copied = match (from.app(), to.app()) {
            (App::Prowlarr, App::Prowlarr) => copy_prowlarr(&from, &to, args).await?,
            (App::Prowlarr, _) | (_, App::Prowlarr) => {
                bail!("Prowlarr indexers can only be copied to another Prowlarr")
            }
            _ => copy_media(&from, &to, args).await?,
        };

        if writer.is_json() {
            return writer.write(copied.as_slice());
        }
        let verb = if args.dry_run { "Would copy" } else { "Copied" };
        for row in &copied {
            writer.write_success(&format!("{verb} '{}' to {}", row.name, to.name));
        }
        if copied.is_empty() {
            writer.write_warning("No indexers matched");
        }
        Ok(())
    }
}

fn wanted(args: &CopyArgs, name: &str) -> bool {
    args.names.is_empty() || args.names.iter().any(|n| n.eq_ignore_ascii_case(name))
}

async fn copy_media(from: &Connection, to: &Connection, args: &CopyArgs) -> Result<Vec<IndexerRow>> {
    let (Some(source), Some(dest)) = (from.media()?, to.media()?) else {
        bail!("Both instances must be media services");
    };

    let outputs: Vec<IndexerOutput> = source
        .get_indexers()
        .await
        .with_context(|| format!("Failed to list indexers of '{}'", from.name))?
        .into_iter()
        .filter(|i| wanted(args, &i.name))
        .collect();

    let mut inputs: Vec<IndexerInput> = Vec::with_capacity(outputs.len());
    copy_indexers(&outputs, &mut inputs, args.keep_tags)?;

    let mut rows = Vec::with_capacity(inputs.len());
    for input in inputs {
        if args.dry_run {
            rows.push(IndexerRow::from(&preview(&input)));
            continue;
        }
        let added = dest
            .add_indexer(&input)
            .await
            .with_context(|| format!("Failed to add '{}' to '{}'", input.name, to.name))?;
        rows.push(IndexerRow::from(&added));
    }
    Ok(rows)
}

async fn copy_prowlarr(from: &Connection, to: &Connection, args: &CopyArgs) -> Result<Vec<IndexerRow>> {
    let source = Prowlarr::with_api(from.client()?);
    let dest = Prowlarr::with_api(to.client()?);

    let outputs: Vec<prowlarr::IndexerOutput> = source
        .get_indexers()
        .await
        .with_context(|| format!("Failed to list indexers of '{}'", from.name))?
        .into_iter()
        .filter(|i| wanted(args, &i.name))
        .collect();

    let mut inputs: Vec<prowlarr::IndexerInput> = Vec::with_capacity(outputs.len());
    copy_indexers(&outputs, &mut inputs, args.keep_tags)?;

    let mut rows = Vec::with_capacity(inputs.len());
    for input in inputs {
        if args.dry_run {
            rows.push(IndexerRow {
                id: 0,
                name: input.name.clone(),
                implementation: input.implementation.clone(),
                protocol: input.protocol,
                enabled: input.enable,
                priority: input.priority,
            });
            continue;
        }
        let added = dest
            .add_indexer(&input)
            .await
            .with_context(|| format!("Failed to add '{}' to '{}'", input.name, to.name))?;
        rows.push(IndexerRow::from(&added));
    }
    Ok(rows)
}

/// What an input would look like once added.
fn preview(input: &IndexerInput) -> IndexerOutput {
    IndexerOutput {
        id: input.id,
        name: input.name.clone(),
        implementation: input.implementation.clone(),
        protocol: input.protocol,
        enable_rss: input.enable_rss,
        enable_automatic_search: input.enable_automatic_search,
        enable_interactive_search: input.enable_interactive_search,
        priority: input.priority,
        ..IndexerOutput::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(names: &[&str]) -> CopyArgs {
        CopyArgs {
            from: "a".to_string(),
            to: "b".to_string(),
            names: names.iter().map(|n| n.to_string()).collect(),
            keep_tags: false,
            dry_run: true,
        }
    }

    #[test]
    fn test_name_filter() {
        assert!(wanted(&args(&[]), "anything"));
        assert!(wanted(&args(&["NZBgeek"]), "nzbgeek"));
        assert!(!wanted(&args(&["NZBgeek"]), "DrunkenSlug"));
    }

    #[test]
    fn test_preview_keeps_header() {
        let input = IndexerInput {
            name: "NZBgeek".to_string(),
            enable_rss: true,
            priority: 10,
            protocol: Protocol::Usenet,
            ..IndexerInput::default()
        };
        let row = IndexerRow::from(&preview(&input));
        assert_eq!(row.id, 0);
        assert!(row.enabled);
        assert_eq!(row.priority, 10);
    }
}
