use tracing_subscriber::EnvFilter;
use weather_summary::{generate_daily_summary, generate_summary, Error, WeatherDataset};

fn summarise(file: &str) -> Result<(String, String), Error> {
    let dataset = WeatherDataset::load(file)?;
    Ok((
        generate_summary(&dataset)?,
        generate_daily_summary(&dataset)?,
    ))
}

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let file = std::env::args()
        .nth(1)
        .ok_or_else(|| miette::miette!("Missing filename"))?;
    println!("opening {file}");

    // Nothing is printed unless both summaries succeed
    let (overview, daily) = summarise(&file)?;
    println!("{overview}");
    print!("{daily}");

    Ok(())
}
