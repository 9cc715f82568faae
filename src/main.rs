mod cli;

use agrometeo::config::Config;
use agrometeo::models::{Crop, FruitCrop, WeatherBundle};
use agrometeo::report::{build_report, AgroReport};
use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands, OutputFormat};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = Config::load_or_default(cli.config.clone())?;

    match cli.command {
        Commands::Report {
            input,
            crop,
            fruit,
            format,
        } => run_report(&config, &input, crop.as_deref(), fruit.as_deref(), format),
        Commands::Crops => {
            print_crops();
            Ok(())
        }
    }
}

fn run_report(
    config: &Config,
    input: &Path,
    crop_override: Option<&str>,
    fruit_override: Option<&str>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let crop = match crop_override {
        Some(name) => {
            Crop::from_str(name).with_context(|| format!("unknown crop '{}'", name))?
        }
        None => config.farm.crop()?,
    };
    let fruit = match fruit_override {
        Some(name) => {
            FruitCrop::from_str(name).with_context(|| format!("unknown fruit crop '{}'", name))?
        }
        None => config.farm.fruit_crop()?,
    };

    let raw = std::fs::read_to_string(input)
        .with_context(|| format!("reading weather export {}", input.display()))?;
    let bundle: WeatherBundle =
        serde_json::from_str(&raw).context("parsing weather export")?;

    let report = build_report(&bundle, crop, fruit, &config.thresholds, &config.analysis)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => render_text(&report),
    }

    Ok(())
}

fn render_text(report: &AgroReport) {
    println!("== Gradi giorno ({}) ==", report.gdd.crop);
    println!(
        "  accumulo: {:.1} GDD su {} giorni (Tbase {:.0}°C)",
        report.gdd.cumulative_gdd, report.gdd.days_observed, report.gdd.base_temperature_c
    );
    println!(
        "  media giornaliera: {:.1} GDD, maturazione {:.0} GDD ({:.0}%)",
        report.gdd.avg_daily_gdd, report.gdd.maturity_gdd, report.gdd.progress_pct
    );
    match report.gdd.estimated_days_to_maturity {
        Some(days) => println!("  stima giorni alla maturazione: {}", days),
        None => println!("  stima giorni alla maturazione: n/d (crescita ferma)"),
    }

    println!();
    println!("== Ore di freddo ({}) ==", report.chill.fruit);
    println!(
        "  {:.0} ore accumulate / fabbisogno {:.0}-{:.0} ore ({:.0}%)",
        report.chill.chilling_hours,
        report.chill.requirement.min_hours,
        report.chill.requirement.max_hours,
        report.chill.progress_pct
    );
    println!("  chill units (Utah): {:.1}", report.chill.chill_units);

    println!();
    println!(
        "== Rischio malattie (finestra {}h, bagnatura {}h, T media {:.1}°C, UR media {:.0}%) ==",
        report.disease.window_hours,
        report.disease.wetness_hours,
        report.disease.avg_temperature_c,
        report.disease.avg_humidity_pct
    );
    for risk in &report.disease.risks {
        println!(
            "  {:<12} {:<10} ({})",
            risk.pathogen,
            risk.risk.as_str(),
            risk.conditions
        );
    }
    println!("  rischio complessivo: {}", report.disease.overall);

    println!();
    println!(
        "== Finestre di trattamento (prossime {}h) ==",
        report.spray.hours_evaluated
    );
    if report.spray.windows.is_empty() {
        println!("  nessuna finestra ideale");
    } else {
        for window in &report.spray.windows {
            println!(
                "  {} - {} ({}h)",
                window.start.format("%a %d %H:%M"),
                window.end.format("%H:%M"),
                window.duration_hours
            );
        }
    }

    println!();
    println!("== Evapotraspirazione (ET0) ==");
    match (report.irrigation.today_et0_mm, report.irrigation.today_tier) {
        (Some(et0), Some(tier)) => {
            println!("  oggi: {:.1} mm, fabbisogno {}", et0, tier);
            println!("  {}", tier.advice());
        }
        _ => println!("  nessun dato"),
    }
    println!(
        "  periodo: media {:.1} mm/giorno, totale {:.1} mm",
        report.irrigation.period.average_mm, report.irrigation.period.total_mm
    );

    if !report.alerts.frost_days.is_empty() {
        println!();
        println!("== Attenzione: rischio gelate ==");
        for day in &report.alerts.frost_days {
            println!("  {}: {:.1}°C", day.date.format("%a %d %b"), day.tmin_c);
        }
    }

    if let Some(level) = report.alerts.worst_wind {
        println!();
        println!("== Attenzione: vento {} ==", level);
        for day in &report.alerts.windy_days {
            println!(
                "  {}: {:.0} km/h ({})",
                day.date.format("%a %d %b"),
                day.wind_speed_kmh,
                day.level
            );
        }
        println!("  {}", level.advice());
    }
}

fn print_crops() {
    println!("Colture (GDD):");
    for crop in Crop::ALL {
        let profile = crop.thermal_profile();
        println!(
            "  {:<10} Tbase {:>4.1}°C  maturazione {:>6.0} GDD",
            crop.as_str(),
            profile.base_temperature_c,
            profile.maturity_gdd
        );
    }

    println!();
    println!("Colture da frutto (ore di freddo):");
    for fruit in FruitCrop::ALL {
        let req = fruit.chill_requirement();
        println!(
            "  {:<10} {:>5.0}-{:.0} ore",
            fruit.as_str(),
            req.min_hours,
            req.max_hours
        );
    }
}
