//! Custom assertions over the CLI's JSON envelopes.
//!
//! Every JSON document has `generated_at` and `content`; report commands
//! also carry `date_range`.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert that the board lane `lane` holds exactly `expected`, in order.
pub fn assert_lane_ids(json: &Value, lane: &str, expected: &[&str]) -> Result<()> {
    let lanes = json["content"]["board"]["lanes"]
        .as_array()
        .context("Expected 'content.board.lanes' array in JSON")?;

    let column = lanes
        .iter()
        .find(|l| l["lane"] == lane)
        .with_context(|| format!("Lane '{}' missing from board", lane))?;

    let ids: Vec<&str> = column["cards"]
        .as_array()
        .with_context(|| format!("Lane '{}' has no cards array", lane))?
        .iter()
        .filter_map(|c| c["id"].as_str())
        .collect();

    if ids != expected {
        anyhow::bail!("Lane '{}' holds {:?}, expected {:?}", lane, ids, expected);
    }

    Ok(())
}

/// Assert that the roster (`content.agents`) has `expected` entries.
pub fn assert_agent_count(json: &Value, expected: usize) -> Result<()> {
    let agents = json["content"]["agents"]
        .as_array()
        .context("Expected 'content.agents' array in JSON")?;

    if agents.len() != expected {
        anyhow::bail!("Expected {} agents, got {}", expected, agents.len());
    }

    Ok(())
}

/// Assert the report envelope names the given inclusive range.
pub fn assert_date_range(json: &Value, start: &str, end: &str) -> Result<()> {
    let range = &json["date_range"];
    if range.is_null() {
        anyhow::bail!("Expected 'date_range' in JSON envelope");
    }

    if range["start"] != start || range["end"] != end {
        anyhow::bail!(
            "Date range is {} to {}, expected {} to {}",
            range["start"],
            range["end"],
            start,
            end
        );
    }

    Ok(())
}

/// Look up one agent row by name inside `content.<key>`.
pub fn find_agent<'a>(json: &'a Value, key: &str, name: &str) -> Result<&'a Value> {
    json["content"][key]
        .as_array()
        .with_context(|| format!("Expected 'content.{}' array in JSON", key))?
        .iter()
        .find(|row| row["agent_name"] == name || row["name"] == name)
        .with_context(|| format!("Agent '{}' missing from 'content.{}'", name, key))
}
