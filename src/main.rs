use std::{env, error::Error};

use clap::Parser;
use daily_winner::{Config, WinnerService};
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

const DEFAULT_SYMBOLS: &[&str] = &[
    "AAPL", "MSFT", "GOOGL", "META", "NVDA", "TSLA", "AMD", "NFLX", "ADBE", "CRM", "ORCL", "INTC",
    "CSCO", "AVGO", "QCOM", "TXN", "AMAT", "MU", "LRCX", "KLAC", "SNPS", "CDNS", "MRVL", "FTNT",
    "PANW", "CRWD", "ZS", "DDOG", "NET", "SNOW",
];

#[derive(Debug, Parser)]
#[command(about = "Finds the day's top-performing tech stock")]
struct Args {
    /// Ticker symbols to rank instead of the built-in tech universe
    #[arg(short, long, value_delimiter = ',')]
    symbols: Option<Vec<String>>,

    /// Print the full record as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("daily_winner=info")),
        )
        .init();

    let args = Args::parse();
    let api_key = env::var("FINNHUB_API_KEY").expect("Missing FINNHUB_API_KEY in environment");

    let symbols: Vec<String> = args
        .symbols
        .unwrap_or_else(|| DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect());

    let service = WinnerService::new(Config::new(api_key));
    let winner = service.resolve(&symbols).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&winner)?);
        return Ok(());
    }

    println!(
        "Winner of the day: {} ({}%)",
        winner.symbol(),
        winner.quote().change_percent()
    );
    if let Some(name) = winner.profile().name() {
        println!("  {}", name);
    }
    println!(
        "  Price: {}  Change: {}",
        winner.quote().price(),
        winner.quote().change()
    );
    for item in winner.news() {
        println!("  - {} ({})", item.headline(), item.source());
    }
    println!("  {} daily bars of history", winner.history().len());

    Ok(())
}
