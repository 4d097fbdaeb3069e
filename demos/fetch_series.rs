//! Fetch a single BCRA monetary series and print its tail.
//!
//! Usage: `cargo run --example fetch_series VARIABLE_ID START END`
//! e.g. `cargo run --example fetch_series 27 2024-01-01 2024-06-30`

use austral::bcra::BcraClient;
use austral::DateRange;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [variable_id, start, end] = args.as_slice() else {
        eprintln!("usage: fetch_series VARIABLE_ID START END");
        std::process::exit(2);
    };

    let variable_id: u32 = variable_id.parse()?;
    let range = DateRange::parse(start, end)?;

    let client = BcraClient::new()?;
    let series = client.get_monetary_series(variable_id, &range).await?;

    println!("{}: {} observations", series.name(), series.len());
    for obs in series.observations().iter().rev().take(10).rev() {
        match obs.value {
            Some(value) => println!("{}  {value}", obs.date),
            None => println!("{}  -", obs.date),
        }
    }
    Ok(())
}
