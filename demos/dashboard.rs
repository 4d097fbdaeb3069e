//! Full dashboard cycle: fetch the seven series, render every panel.
//!
//! Usage: `cargo run --example dashboard [START END] [--json]`
//! Dates are `YYYY-MM-DD`; the default window is the last 180 days.

use austral::{Dashboard, DateRange, PanelKind};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let as_json = args.iter().any(|a| a == "--json");
    let dates: Vec<&String> = args.iter().filter(|a| !a.starts_with("--")).collect();

    let range = match dates.as_slice() {
        [start, end] => DateRange::parse(start, end)?,
        [] => {
            let today = chrono::Utc::now().date_naive();
            DateRange::new(today - chrono::Days::new(180), today)
        }
        _ => {
            eprintln!("usage: dashboard [START END] [--json]");
            std::process::exit(2);
        }
    };

    let dashboard = Dashboard::new()?;
    let view = dashboard.render(&range).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let (desde, hasta) = view.range.as_query();
    println!("Monitor financiero — {desde} a {hasta}");
    for warning in &view.warnings {
        eprintln!("⚠ [{}] {}", warning.source, warning.message);
    }

    for kind in [
        PanelKind::Inflation,
        PanelKind::PolicyRate,
        PanelKind::Reserves,
        PanelKind::ExchangeRates,
        PanelKind::CrossRate,
        PanelKind::EquityIndexUsd,
        PanelKind::CedearBasket,
    ] {
        match view.panel(kind).and_then(|p| p.chart.as_ref()) {
            Some(chart) => {
                let points: usize = chart.traces.iter().map(|t| t.points.len()).sum();
                println!(
                    "{:<40} {:<18} {} points",
                    chart.title,
                    chart.headline.as_deref().unwrap_or("-"),
                    points
                );
            }
            None => println!("{:<40} (no data)", kind.source_label()),
        }
    }

    println!("Actualizado el {}", view.generated_on.format("%d/%m/%Y"));
    Ok(())
}
