//! Countdown Widget Entry Point
//!
//! Terminal host for the countdown engine: fetches the presale end time
//! (or the built-in fallback) and renders the remaining days/hours/
//! minutes/seconds once per second until the sale starts.

use std::env;
use std::io::Write;
use std::time::Duration;

use countdown::{CountdownDisplay, CountdownWidget, TimeParts, fetch_end_time};
use tracing_subscriber::{EnvFilter, fmt};

/// Default presale time endpoint
const PRESALE_TIME_URL: &str = "https://funs-coin-timer-dashboard-backend.vercel.app/api/presale";

/// Renders the countdown fields on a single terminal line
struct TerminalDisplay;

impl CountdownDisplay for TerminalDisplay {
    fn show(&mut self, parts: TimeParts) {
        print!(
            "\r{:>3}d {:02}h {:02}m {:02}s",
            parts.days, parts.hours, parts.minutes, parts.seconds
        );
        let _ = std::io::stdout().flush();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let url = env::var("PRESALE_TIME_URL").unwrap_or_else(|_| PRESALE_TIME_URL.to_string());

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()?;

    let target_ms = fetch_end_time(&client, &url).await;

    CountdownWidget::new(target_ms, TerminalDisplay).run().await;

    println!();
    Ok(())
}
