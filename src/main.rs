use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use who_bmi::invariants;
use who_bmi::request::{self, Outcome, Request};
use who_bmi::simulator;
use who_bmi::{BmiCategory, Locale, Unit};

#[derive(Parser)]
#[command(name = "who-bmi", version, about = "WHO Body Mass Index calculator")]
struct Cli {
    /// Display language (en, id)
    #[arg(long, global = true, default_value = "en")]
    locale: Locale,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (pretty, json)
    #[arg(long, global = true, default_value = "pretty")]
    log_format: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// BMI from kilograms and meters
    Calc {
        #[arg(long)]
        weight: f64,
        #[arg(long)]
        height: f64,
    },
    /// BMI from pounds, feet and inches
    Imperial {
        #[arg(long)]
        pounds: f64,
        #[arg(long)]
        feet: f64,
        #[arg(long, default_value_t = 0.0)]
        inches: f64,
    },
    /// Convert a single measurement to metric
    Convert {
        #[command(subcommand)]
        unit: ConvertUnit,
    },
    /// List supported locales and check their tables
    Locales,
    /// Randomized invariant sweep over calculator requests
    Sweep {
        #[arg(long, default_value_t = 10000)]
        max_samples: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Subcommand)]
enum ConvertUnit {
    /// Centimeters to meters
    Cm { value: f64 },
    /// Pounds to kilograms
    Lbs { value: f64 },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(&cli.log_format, cli.verbose)?;

    let locale = cli.locale;
    match cli.command {
        Command::Calc { weight, height } => run_request(
            Request::Metric {
                weight,
                height,
                locale: Some(locale),
            },
            cli.json,
        ),
        Command::Imperial {
            pounds,
            feet,
            inches,
        } => run_request(
            Request::Imperial {
                weight_lbs: pounds,
                feet,
                inches,
                locale,
            },
            cli.json,
        ),
        Command::Convert { unit } => {
            let req = match unit {
                ConvertUnit::Cm { value } => Request::Centimeters { cm: value, locale },
                ConvertUnit::Lbs { value } => Request::Pounds { lbs: value, locale },
            };
            run_request(req, cli.json)
        }
        Command::Locales => list_locales(cli.json),
        Command::Sweep { max_samples, seed } => {
            let seed = seed.unwrap_or_else(|| {
                std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .map(|d| d.as_nanos() as u64)
                    .unwrap_or_default()
            });
            tracing::info!(max_samples, seed, "starting sweep");
            println!("Checking invariants:");
            for (name, _) in invariants::ALL_INVARIANTS {
                println!("  - {}", name);
            }
            let result = simulator::run_sweep(max_samples, seed, cli.verbose);
            println!("{}", result);
            if !result.is_ok() {
                anyhow::bail!("sweep found a violation");
            }
            Ok(())
        }
    }
}

fn run_request(req: Request, json: bool) -> Result<()> {
    let outcome = request::evaluate(&req)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    let units = &req.locale().data().units;
    match (&req, &outcome) {
        (Request::Metric { weight, height, .. }, Outcome::Bmi(result)) => {
            println!(
                "{} {}, {} {}",
                weight,
                units.label(Unit::Kg),
                height,
                units.label(Unit::M)
            );
            println!("{}", result);
        }
        (
            Request::Imperial {
                weight_lbs,
                feet,
                inches,
                ..
            },
            Outcome::Bmi(result),
        ) => {
            println!(
                "{} {}, {} {} {} {}",
                weight_lbs,
                units.label(Unit::Lbs),
                feet,
                units.label(Unit::Feet),
                inches,
                units.label(Unit::Inches)
            );
            println!("{}", result);
        }
        (Request::Centimeters { cm, .. }, Outcome::Meters(m)) => {
            println!("{} {} = {} {}", cm, units.label(Unit::Cm), m, units.label(Unit::M));
        }
        (Request::Pounds { lbs, .. }, Outcome::Kilograms(kg)) => {
            println!("{} {} = {} {}", lbs, units.label(Unit::Lbs), kg, units.label(Unit::Kg));
        }
        (_, other) => println!("{}", other),
    }
    Ok(())
}

fn list_locales(json: bool) -> Result<()> {
    for locale in who_bmi::supported_locales() {
        invariants::check_locale(*locale)
            .map_err(|entry| anyhow::anyhow!("locale bundle incomplete: {}", entry))?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&who_bmi::supported_locale_codes())?);
        return Ok(());
    }

    for locale in who_bmi::supported_locales() {
        println!("{}:", locale);
        let categories = &locale.data().categories;
        for category in BmiCategory::ALL {
            let text = categories.get(category);
            println!("  {:<16} {} ({})", category.key(), text.name, text.range);
        }
    }
    Ok(())
}

fn setup_tracing(format: &str, verbose: bool) -> Result<()> {
    let default_filter = if verbose { "who_bmi=debug" } else { "who_bmi=info" };
    let env_filter = tracing_subscriber::EnvFilter::new(default_filter);

    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .try_init()?;
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
                .try_init()?;
        }
    }

    Ok(())
}
