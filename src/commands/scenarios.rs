//! Built-in sample scenarios.
//!
//! Sample event pairs owned by the CLI layer; the core pipeline never
//! depends on them.

use super::check::run_texts;
use anyhow::Result;
use log::info;
use std::path::Path;

/// A named pair of event snapshots
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    /// CLI name used to select the scenario
    pub name: &'static str,

    /// One-line description
    pub label: &'static str,

    /// Raw v1 snapshot text
    pub v1: &'static str,

    /// Raw v2 snapshot text
    pub v2: &'static str,
}

/// Built-in scenarios
pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "scenario1",
        label: "Partner + promo drift",
        v1: r#"{
  "partnerId": "PartnerA",
  "tier": "Gold",
  "segment": "HighValue",
  "promoCode": "SPRING10",
  "campaignId": "CAMP123",
  "score": 82,
  "spend": 120,
  "currency": "USD",
  "category": "Electronics"
}"#,
        v2: r#"{
  "partnerId": "partner-a",
  "tier": "Platinum",
  "segment": "HighValue",
  "promoCode": "SPRING20",
  "campaignId": "CAMP123",
  "score": 76,
  "spend": 120,
  "currency": "USD",
  "category": "Electronics-Devices"
}"#,
    },
    Scenario {
        name: "scenario2",
        label: "Tier + category drift, milder",
        v1: r#"{
  "partnerId": "PartnerB",
  "tier": "Silver",
  "segment": "New",
  "promoCode": "WELCOME5",
  "campaignId": "CAMP200",
  "score": 60,
  "spend": 45,
  "currency": "USD",
  "category": "Grocery"
}"#,
        v2: r#"{
  "partnerId": "PartnerB",
  "tier": "Gold",
  "segment": "New",
  "promoCode": "WELCOME5",
  "campaignId": "CAMP200",
  "score": 68,
  "spend": 45,
  "currency": "USD",
  "category": "Grocery-Fresh"
}"#,
    },
];

/// Look up a scenario by CLI name
pub fn find_scenario(name: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.name == name)
}

/// Execute the scenario command: run a drift check over a built-in pair
pub fn execute_scenario(name: &str, output: Option<&Path>) -> Result<()> {
    let scenario = find_scenario(name).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown scenario: {} (use `promo-drift scenarios` to list them)",
            name
        )
    })?;

    info!("Running scenario {}", scenario.name);

    run_texts(scenario.v1, scenario.v2, output)
}
