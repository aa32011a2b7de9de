use std::process::ExitCode;

use flight_compare::dataset::{DatasetClient, DatasetConfig};
use flight_compare::domain::Iata;
use flight_compare::query::{self, CommonDestinationRow, QueryOutcome, filter_by_max_difference};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (first, second, max_difference) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("Usage: flight-compare <AIRPORT1> <AIRPORT2> [max-difference-minutes]");
            return ExitCode::FAILURE;
        }
    };

    let mut config = DatasetConfig::new();
    if let Ok(url) = std::env::var("ROUTES_URL") {
        config = config.with_url(url);
    }
    let client = match DatasetClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to create dataset client: {e}");
            return ExitCode::FAILURE;
        }
    };

    match query::run_query(&client, &first, &second).await {
        Ok(QueryOutcome::Rows(rows)) => {
            let rows = match max_difference {
                Some(max) => filter_by_max_difference(rows, max),
                None => rows,
            };
            if rows.is_empty() {
                println!(
                    "No common destinations between {first} and {second} within the requested difference."
                );
            } else {
                render_table(&first, &second, rows);
            }
            ExitCode::SUCCESS
        }
        Ok(QueryOutcome::NoRoutesFrom(airport)) => {
            println!("No route data for {airport}.");
            ExitCode::SUCCESS
        }
        Ok(QueryOutcome::NoCommonDestinations) => {
            println!("No common destinations between {first} and {second}.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Could not load route data: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Parse the two airport codes and optional difference threshold.
fn parse_args(args: &[String]) -> Result<(Iata, Iata, Option<u32>), String> {
    let (first, second, threshold) = match args {
        [first, second] => (first, second, None),
        [first, second, threshold] => (first, second, Some(threshold)),
        _ => return Err("Expected two airport codes.".to_string()),
    };

    // Accept lowercase input; codes are uppercase on the wire
    let first = Iata::parse(&first.to_uppercase())
        .map_err(|e| format!("Invalid airport code {first:?}: {e}"))?;
    let second = Iata::parse(&second.to_uppercase())
        .map_err(|e| format!("Invalid airport code {second:?}: {e}"))?;

    let max_difference = match threshold {
        Some(raw) => Some(
            raw.parse::<u32>()
                .map_err(|_| format!("Invalid difference threshold {raw:?}: expected minutes"))?,
        ),
        None => None,
    };

    Ok((first, second, max_difference))
}

/// Print the comparison rows as a fixed-width table, sorted by
/// destination code for stable output.
fn render_table(first: &Iata, second: &Iata, mut rows: Vec<CommonDestinationRow>) {
    rows.sort_by_key(|row| row.destination.as_str().to_string());

    println!("Common destinations for {first} and {second}:");
    println!();
    println!(
        "{:<6} {:<44} {:>10} {:>10} {:>10}",
        "Code",
        "Airport",
        format!("From {first}"),
        format!("From {second}"),
        "Diff"
    );

    for row in rows {
        let name = match (&row.display_name, &row.location) {
            (Some(name), Some(location)) => format!("{name} ({location})"),
            (Some(name), None) => name.clone(),
            (None, _) => "-".to_string(),
        };

        println!(
            "{:<6} {:<44} {:>10} {:>10} {:>10}",
            row.destination.as_str(),
            name,
            fmt_minutes(row.duration_from_first),
            fmt_minutes(row.duration_from_second),
            fmt_minutes(row.duration_difference),
        );
    }
}

fn fmt_minutes(minutes: Option<u32>) -> String {
    match minutes {
        Some(m) => format!("{m} min"),
        None => "-".to_string(),
    }
}
