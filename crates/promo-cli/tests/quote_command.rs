//! Quote & Forecast Tests
//!
//! Drafts go through the same form logic the page uses; these tests check
//! the derived lines and the bid minimums as seen from the command line.

use anyhow::Result;
use promo_testing::TestWorld;
use promo_testing::assertions::assert_outcome;

const DRAFT: [&str; 8] = [
    "--start", "5/1/2013", "--end", "5/4/2013", "--bid", "50", "--cpm", "250",
];

fn args<'a>(command: &'a str, extra: &[&'a str]) -> Vec<&'a str> {
    let mut args = vec![command];
    args.extend(DRAFT);
    args.extend(extra);
    args
}

#[test]
fn test_quote_prints_derived_lines() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&args("quote", &[]))?;

    assert!(result.success(), "quote failed: {}", result.stderr());
    assert!(result.stdout().contains("3 days"));
    assert!(result.stdout().contains("20,000 impressions"));
    assert!(result.stdout().contains("$2.50 per 1000 impressions"));
    assert!(result.stdout().contains("Bid accepted"));
    Ok(())
}

#[test]
fn test_quote_json_reports_accepted_bid() -> Result<()> {
    let world = TestWorld::new().json();

    let json = world.run(&args("quote", &[]))?.json()?;

    assert_outcome(&json, "done")?;
    assert_eq!(json["content"]["days"], 3);
    assert_eq!(json["content"]["accepted"], true);
    assert_eq!(json["content"]["minimum_total"], "$20");
    Ok(())
}

#[test]
fn test_targeted_bid_needs_higher_daily_minimum() -> Result<()> {
    let world = TestWorld::new().json();

    let sitewide = world
        .run(&["quote", "--start", "5/1/2013", "--end", "5/4/2013", "--bid", "20"])?
        .json()?;
    assert_eq!(sitewide["content"]["accepted"], true);

    let targeted = world
        .run(&[
            "quote", "--start", "5/1/2013", "--end", "5/4/2013", "--bid", "20", "--target",
            "pics",
        ])?
        .json()?;
    assert_outcome(&targeted, "below_minimum")?;
    assert_eq!(targeted["content"]["accepted"], false);
    assert_eq!(targeted["content"]["targeting"], "pics");
    assert_eq!(targeted["content"]["minimum_total"], "$22.5");
    Ok(())
}

#[test]
fn test_empty_target_still_uses_targeted_minimum() -> Result<()> {
    let world = TestWorld::new().json();

    let json = world
        .run(&[
            "quote", "--start", "5/1/2013", "--end", "5/4/2013", "--bid", "21", "--target", "",
        ])?
        .json()?;

    assert_outcome(&json, "below_minimum")?;
    assert_eq!(json["content"]["accepted"], false);
    assert_eq!(json["content"]["minimum_total"], "$22.5");
    let problems = json["content"]["problems"].to_string();
    assert!(problems.contains("targeted campaigns"), "problems: {}", problems);
    Ok(())
}

#[test]
fn test_low_bid_is_reported_not_failed() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["quote", "--start", "5/1/2013", "--end", "5/4/2013", "--bid", "10"])?;

    assert!(result.success());
    assert!(result.stdout().contains("Bid below minimum"));
    assert!(result.stdout().contains("the minimum spend is $20"));
    Ok(())
}

#[test]
fn test_forecast_warns_when_inventory_is_short() -> Result<()> {
    let world = TestWorld::new().json();

    let json = world
        .run(&args("forecast", &["--daily-impressions", "1000"]))?
        .json()?;

    assert_outcome(&json, "short_inventory")?;
    assert_eq!(json["content"]["requested"], 20000);
    assert_eq!(json["content"]["predicted"], 3000);
    assert_eq!(json["content"]["oversold_dates"].as_array().map(Vec::len), Some(3));
    let warning = json["content"]["warning"].as_str().unwrap_or_default();
    assert!(warning.contains("3,000"), "unexpected warning: {}", warning);
    Ok(())
}

#[test]
fn test_forecast_without_backend_needs_daily_count() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&args("forecast", &[]))?;

    assert!(!result.success());
    assert!(result.stderr().contains("--daily-impressions"));
    Ok(())
}
