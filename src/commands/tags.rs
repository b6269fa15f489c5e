//! @acp:module "Tags Command"
//! @acp:summary "List and change hierarchical tag filters"
//! @acp:domain cli
//! @acp:layer handler

use std::collections::BTreeMap;

use anyhow::Result;
use console::style;
use serde::Serialize;

use super::session::Session;
use crate::config::Config;
use crate::selection::{has_subtag, TagUsage};

/// Tags subcommands
#[derive(Debug, Clone)]
pub enum TagsSubcommand {
    List { json: bool },
    Set { tag: String, usage: TagUsage },
    Toggle { tag: String },
}

#[derive(Debug, Serialize)]
struct TagRow {
    tag: String,
    usage: TagUsage,
    generators: usize,
}

/// Execute the tags command
pub fn execute_tags(subcommand: TagsSubcommand, config: Config) -> Result<()> {
    let mut session = Session::open(config, None)?;

    match subcommand {
        TagsSubcommand::List { json } => list_tags(&session, json),
        TagsSubcommand::Set { tag, usage } => set_tag(&mut session, tag, usage),
        TagsSubcommand::Toggle { tag } => {
            let usage = session.engine.tag_usage(&tag).cycled();
            set_tag(&mut session, tag, usage)
        }
    }
}

fn set_tag(session: &mut Session, tag: String, usage: TagUsage) -> Result<()> {
    if !session.engine.tags().contains(&tag) {
        tracing::warn!("Tag not carried by any loaded generator: {}", tag);
    }

    let before = session.engine.active_generator_count();
    session.engine.set_tag_usage(tag.clone(), usage);
    session.preferences.set_tag(tag.clone(), usage);
    session.save_preferences()?;

    println!(
        "{} {} set to {}",
        style("✓").green(),
        style(&tag).bold(),
        usage_style(usage)
    );
    println!(
        "  Active generators: {} → {}",
        before,
        session.engine.active_generator_count()
    );
    Ok(())
}

fn list_tags(session: &Session, json: bool) -> Result<()> {
    // Generators carrying each tag, directly or through a subtag
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for entry in session.engine.catalog().iter() {
        for tag in entry.generator.tags() {
            *counts.entry(tag.as_str()).or_default() += 1;
            if let Some(parent) = crate::selection::parent_of(tag) {
                *counts.entry(parent).or_default() += 1;
            }
        }
    }

    let tags = session.engine.tags();
    let rows: Vec<TagRow> = tags
        .iter()
        .map(|(tag, usage)| TagRow {
            tag: tag.to_string(),
            usage,
            generators: counts.get(tag).copied().unwrap_or(0),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No tags found.");
        return Ok(());
    }

    println!(
        "Tags ({} active of {} generators):\n",
        session.engine.active_generator_count(),
        session.engine.catalog().len()
    );
    for row in rows.iter().filter(|r| !has_subtag(&r.tag)) {
        print_row(row, 0);
        for child in tags.children_of(&row.tag) {
            if let Some(child_row) = rows.iter().find(|r| r.tag == child) {
                print_row(child_row, 1);
            }
        }
    }

    Ok(())
}

fn print_row(row: &TagRow, depth: usize) {
    let label = match depth {
        0 => row.tag.clone(),
        _ => crate::selection::child_of(&row.tag)
            .unwrap_or(&row.tag)
            .to_string(),
    };
    println!(
        "  {}{:<24} {:<6} {}",
        "  ".repeat(depth),
        label,
        usage_style(row.usage),
        style(format!("({})", row.generators)).dim()
    );
}

fn usage_style(usage: TagUsage) -> console::StyledObject<&'static str> {
    match usage {
        TagUsage::None => style(usage.as_str()).red(),
        TagUsage::Some => style(usage.as_str()),
        TagUsage::All => style(usage.as_str()).green(),
    }
}
