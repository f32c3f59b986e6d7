//! Assertions over the `--format json` output envelope.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert the badge outcome (`done`, `unchanged`, `below_minimum`, ...).
pub fn assert_outcome(json: &Value, expected: &str) -> Result<()> {
    let outcome = json["badge"]["outcome"]
        .as_str()
        .context("Expected 'badge.outcome' string in JSON")?;

    if outcome != expected {
        anyhow::bail!("Expected outcome {}, got {}", expected, outcome);
    }

    Ok(())
}

/// Assert that the campaign list has `expected` rows.
pub fn assert_campaign_count(json: &Value, expected: usize) -> Result<()> {
    let campaigns = json["content"]["campaigns"]
        .as_array()
        .context("Expected 'content.campaigns' array in JSON")?;

    if campaigns.len() != expected {
        anyhow::bail!("Expected {} campaigns, got {}", expected, campaigns.len());
    }

    Ok(())
}

/// Assert that a campaign row with `id` is present and return it.
pub fn find_campaign<'a>(json: &'a Value, id: &str) -> Result<&'a Value> {
    json["content"]["campaigns"]
        .as_array()
        .context("Expected 'content.campaigns' array in JSON")?
        .iter()
        .find(|c| c["id"].as_str() == Some(id))
        .with_context(|| format!("Campaign {} not found", id))
}

/// Assert that the row with `id` exposes `action` among its controls.
pub fn assert_campaign_allows(json: &Value, id: &str, action: &str) -> Result<()> {
    let campaign = find_campaign(json, id)?;
    let actions: Vec<&str> = campaign["actions"]
        .as_array()
        .with_context(|| format!("Campaign {} has no 'actions' array", id))?
        .iter()
        .filter_map(|a| a.as_str())
        .collect();

    if !actions.contains(&action) {
        anyhow::bail!("Campaign {} does not allow {}: {:?}", id, action, actions);
    }

    Ok(())
}
