//! Terminal rendering of the chain document
//!
//! Two views of the same list: one block per chain (the card view), and
//! per-capability sections with counts and a chain table (the grouped
//! view). Each has a JSON twin for machine consumption.

use anyhow::Result;
use chainscope_core::{Capability, Chain, ChainList};
use colored::Colorize;

/// Print one block per chain: display name, enum token, id, icon, tags
pub fn print_chains(list: &ChainList) {
    println!(
        "{} ({})",
        "Supported Chains".bold(),
        list.chains.len()
    );

    for chain in &list.chains {
        println!();
        println!(
            "{}  {}",
            chain.display_name().bold(),
            format!("Chains.{}", chain.enum_token()).cyan()
        );
        println!("  id:   {}", chain.chain_id);
        println!("  icon: {}", chain.icon_url());
        if !chain.tags.is_empty() {
            println!("  tags: {}", chain.tags.join(", "));
        }
        if let Some(note) = chain_note(chain) {
            println!("  {} {}", "note:".yellow(), note);
        }
    }
}

/// Print the chain list as pretty JSON records
pub fn print_chains_json(list: &ChainList) -> Result<()> {
    let records: Vec<ChainRecord> = list.chains.iter().map(ChainRecord::from).collect();
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}

/// Print per-capability sections with counts and a chain table
pub fn print_capabilities(list: &ChainList, filter: Option<Capability>) {
    for capability in selected(filter) {
        let chains = list.supporting(capability);
        println!("{} ({})", capability.title().bold(), chains.len());
        println!("  docs: {}", capability.doc_path());
        if chains.is_empty() {
            println!("  no supported chains");
        }
        for chain in chains {
            println!(
                "  {:<28} {:>10}  {}",
                chain.name,
                chain.chain_id,
                chain.tags.join(", ")
            );
        }
        println!();
    }
}

/// Print the capability grouping as pretty JSON
pub fn print_capabilities_json(list: &ChainList, filter: Option<Capability>) -> Result<()> {
    let mut out = serde_json::Map::new();
    for capability in selected(filter) {
        let chains = list.supporting(capability);
        out.insert(
            capability.as_str().to_string(),
            serde_json::json!({
                "count": chains.len(),
                "doc_path": capability.doc_path(),
                "chains": chains.iter().map(|chain| chain.name.as_str()).collect::<Vec<_>>(),
            }),
        );
    }
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::Value::Object(out))?
    );
    Ok(())
}

fn selected(filter: Option<Capability>) -> Vec<Capability> {
    match filter {
        Some(capability) => vec![capability],
        None => Capability::ALL.to_vec(),
    }
}

/// Per-chain caveats worth surfacing next to the listing
fn chain_note(chain: &Chain) -> Option<&'static str> {
    match chain.enum_token().as_str() {
        "Arbitrum" | "ArbitrumOne" => {
            Some("pre-Nitro blocks (< 22,207,818) are not supported")
        }
        _ => None,
    }
}

#[derive(serde::Serialize)]
struct ChainRecord<'a> {
    name: &'a str,
    display_name: String,
    enum_token: String,
    chain_id: u64,
    icon: String,
    icon_url: String,
    tags: &'a [String],
}

impl<'a> From<&'a Chain> for ChainRecord<'a> {
    fn from(chain: &'a Chain) -> Self {
        ChainRecord {
            name: &chain.name,
            display_name: chain.display_name(),
            enum_token: chain.enum_token(),
            chain_id: chain.chain_id,
            icon: chain.icon().as_str().to_string(),
            icon_url: chain.icon_url(),
            tags: &chain.tags,
        }
    }
}
