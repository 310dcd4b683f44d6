use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use meteorite_landings::{Client, CountryTable, OfflineGeocoder};
use meteorite_landings::{clean, enrich, stats, storage};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "meteorites",
    version,
    about = "Fetch, clean & country-enrich NASA meteorite landings"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the full pipeline (and optionally save and print stats).
    Get(GetArgs),
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct GetArgs {
    /// Socrata app token. Falls back to the APP_TOKEN environment variable
    /// (a .env file is honored); without one, requests are throttled.
    #[arg(long)]
    app_token: Option<String>,
    /// Country reference CSV. Defaults to the copy shipped with the crate.
    #[arg(long)]
    countries: Option<PathBuf>,
    /// Save results to file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
    /// Print per-country statistics to stdout.
    #[arg(long, default_value_t = false)]
    stats: bool,
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => {
            // Format up to 1 decimal, then trim trailing zeros and trailing dot.
            let s = format!("{:.1}", x);
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
        _ => "NA".to_string(),
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Get(args) => cmd_get(args),
    }
}

fn cmd_get(args: GetArgs) -> Result<()> {
    let app_token = args
        .app_token
        .or_else(|| std::env::var("APP_TOKEN").ok());
    let client = Client::new(app_token);

    let raw = client.fetch_all()?;
    let (landings, _summary) = clean::clean(raw)?;

    let countries = match args.countries.as_ref() {
        Some(path) => CountryTable::from_path(path)?,
        None => CountryTable::embedded()?,
    };
    let geocoder = OfflineGeocoder::new();
    let rows = enrich::enrich(landings, &geocoder, &countries)?;

    if let Some(path) = args.out.as_ref() {
        let fmt = match args.format {
            Some(OutFormat::Csv) => "csv",
            Some(OutFormat::Json) => "json",
            None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
        }
        .to_ascii_lowercase();
        match fmt.as_str() {
            "csv" => storage::save_csv(&rows, path)?,
            "json" => storage::save_json(&rows, path)?,
            other => anyhow::bail!("unsupported format: {}", other),
        }
        eprintln!("Saved {} rows to {}", rows.len(), path.display());
    }

    if args.stats {
        let summaries = stats::by_country(&rows);
        for s in summaries {
            println!(
                "{} {}  count={} falls={} finds={}  mass min={} max={} mean={} median={}",
                s.country_iso3,
                s.country_name,
                s.count,
                s.falls,
                s.finds,
                fmt_opt(s.min_mass),
                fmt_opt(s.max_mass),
                fmt_opt(s.mean_mass),
                fmt_opt(s.median_mass)
            );
        }
    }

    Ok(())
}
