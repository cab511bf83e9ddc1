//! Basic usage example for the Tempo library.
//!
//! This example demonstrates the high-level API for date math and display
//! strings.
//!
//! Run with: cargo run --example basic_usage

use chrono::{TimeDelta, Utc, Weekday};
use libtempo::Tempo;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Tempo Library - Basic Usage Example\n");

    let tempo = Tempo::builder()
        .week_start(Weekday::Mon)
        .zone("Asia/Singapore")
        .build()?;

    let now = Utc::now();
    println!("✓ Epoch seconds now: {}\n", libtempo::epoch::to_epoch_seconds(&now));

    // Relative display strings
    let three_hours_ago = now - TimeDelta::hours(3) - TimeDelta::minutes(12);
    println!("3h12m ago renders as: {}", tempo.relative(&three_hours_ago));

    let last_month = now - TimeDelta::days(20);
    println!("20 days ago renders as: {}\n", tempo.relative(&last_month));

    // Calendar boundaries
    println!("Month starts: {}", tempo.start_of_month(&now).date_naive());
    println!("Month ends:   {}", tempo.end_of_month(&now).date_naive());
    println!("Week starts:  {}", tempo.start_of_week(&now).date_naive());
    println!("Week ends:    {}\n", tempo.end_of_week(&now).date_naive());

    // Day-by-day iteration
    let week_start = tempo.start_of_week(&now);
    let week_end = tempo.end_of_week(&now);
    println!("Days of this week:");
    for day in tempo.days_between(&week_start, &week_end) {
        println!("  - {}", day.date_naive());
    }
    println!();

    // Time-zone conversion
    println!("Local time in Singapore: {}", tempo.to_local(&now));
    println!(
        "Local time in New York:  {}",
        tempo.to_zone(&now, "America/New_York")?
    );

    Ok(())
}
