//! Stable Matching - Binary Entry Point
//!
//! Runs the engine on the built-in sample data set and prints the matching
//! together with its receipt.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use stable_matching::{Participants, Settings, Side, StableMatcher};

fn sample_participants() -> Participants {
    Participants::new(
        Side::new("side_A")
            .with_member("abc", ["123", "451", "912"])
            .with_member("asd", ["123", "912", "451"])
            .with_member("pqq", ["123", "451", "912"]),
        Side::new("side_B")
            .with_member("123", ["pqq", "asd", "abc"])
            .with_member("451", ["asd", "pqq", "abc"])
            .with_member("912", ["pqq", "asd", "abc"]),
    )
}

fn init_logging(settings: &Settings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if settings.logging.format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

fn main() -> anyhow::Result<()> {
    // Optional first argument: path to a settings file
    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_from(&path)
            .with_context(|| format!("failed to load configuration from {path}"))?,
        None => Settings::load().context("failed to load configuration")?,
    };
    init_logging(&settings);

    let matcher = StableMatcher::new(settings.matching);
    let participants = sample_participants();
    info!(
        first = %participants.first.label,
        second = %participants.second.label,
        proposing = ?matcher.settings().proposing,
        "running sample matching"
    );

    let result = matcher
        .run(&participants)
        .context("sample matching failed")?;

    println!("===========================================");
    println!("  Stable Matching - {} proposing", result.matching.proposing);
    println!("===========================================");
    for pair in &result.matching {
        println!("  {} - {}", pair.proposer, pair.receiver);
    }
    println!();
    println!("  Proposals: {}", result.receipt.proposals);
    println!("  Rounds:    {}", result.receipt.rounds);
    println!("  Digest:    {}", result.receipt.digest_hex());
    println!();
    println!("{}", serde_json::to_string_pretty(&result.matching)?);

    Ok(())
}
