//! Official vs. parallel USD rate, outer-joined on date.
//!
//! Usage: `cargo run --example exchange_rates START END`

use austral::bcra::BcraClient;
use austral::blue::BluelyticsClient;
use austral::series::outer_join;
use austral::DateRange;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [start, end] = args.as_slice() else {
        eprintln!("usage: exchange_rates START END");
        std::process::exit(2);
    };
    let range = DateRange::parse(start, end)?;

    let bcra = BcraClient::new()?;
    let blue = BluelyticsClient::new()?;

    let official = bcra.get_official_rate(&range).await?;
    let parallel = blue.get_parallel_rate().await?.window(&range);
    let table = outer_join(&[official, parallel]);

    println!("{:<12} {:>12} {:>12}", "fecha", "oficial", "blue");
    for row in table.rows().iter().rev().take(15).rev() {
        let cell = |v: Option<f64>| v.map_or("-".to_string(), |v| format!("{v:.1}"));
        println!(
            "{:<12} {:>12} {:>12}",
            row.date.to_string(),
            cell(row.values[0]),
            cell(row.values[1])
        );
    }
    Ok(())
}
