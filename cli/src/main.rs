//! `delivery-map` command line
//!
//! Thin front end over the core: estimate a delivery cost, classify a
//! metric, or emit isochrone rings as JSON. Set `RUST_LOG=debug` to see the
//! intermediate values the core logs.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use delivery_map_core_rs::geometry::{DEFAULT_CIRCLE_STEPS, DEFAULT_ISOCHRONE_MINUTES};
use delivery_map_core_rs::{
    classify_cost, classify_penetration, estimate_breakdown, isochrone_rings,
    CostParameters, GeoPoint, SphericalGeometry,
};

#[derive(Parser)]
#[command(name = "delivery-map")]
#[command(about = "Delivery cost and zone classification for the market map")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the cost of one delivery stop
    Estimate {
        /// Trip distance from the depot in kilometres
        #[arg(allow_negative_numbers = true)]
        distance_km: f64,

        #[command(flatten)]
        params: ParamArgs,

        /// Print the full breakdown as JSON
        #[arg(long)]
        json: bool,
    },
    /// Classify a metric value into a severity bucket
    Classify {
        metric: Metric,
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Print static isochrone rings around a point as JSON
    Isochrones {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Travel-time bands in minutes
        #[arg(long, value_delimiter = ',')]
        minutes: Option<Vec<f64>>,

        /// Points per ring
        #[arg(long, default_value_t = DEFAULT_CIRCLE_STEPS)]
        steps: usize,

        #[command(flatten)]
        params: ParamArgs,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Metric {
    Penetration,
    Cost,
}

/// Cost parameters: optional JSON file, then per-field overrides
#[derive(Args, Default)]
struct ParamArgs {
    /// JSON file with driverWage / vehicleCostPerKm / avgServiceMin / avgSpeedKmph
    #[arg(long)]
    params: Option<PathBuf>,

    #[arg(long)]
    driver_wage: Option<f64>,

    #[arg(long)]
    vehicle_cost_per_km: Option<f64>,

    #[arg(long)]
    avg_service_min: Option<f64>,

    #[arg(long)]
    avg_speed_kmph: Option<f64>,
}

impl ParamArgs {
    fn resolve(&self) -> Result<CostParameters> {
        let mut params = match &self.params {
            Some(path) => CostParameters::from_path(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => CostParameters::default(),
        };

        if let Some(v) = self.driver_wage {
            params.driver_wage = v;
        }
        if let Some(v) = self.vehicle_cost_per_km {
            params.vehicle_cost_per_km = v;
        }
        if let Some(v) = self.avg_service_min {
            params.avg_service_min = v;
        }
        if let Some(v) = self.avg_speed_kmph {
            params.avg_speed_kmph = v;
        }

        params.validate()?;
        tracing::debug!(?params, "resolved cost parameters");
        Ok(params)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Estimate {
            distance_km,
            params,
            json,
        } => {
            let params = params.resolve()?;
            let breakdown = estimate_breakdown(distance_km, &params)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&breakdown)?);
            } else {
                println!("Distance: {:.1} km", breakdown.distance_km);
                println!("Estimated cost: ${:.2}", breakdown.total);
                println!("Cost bucket: {}", classify_cost(breakdown.total)?);
            }
        }
        Commands::Classify { metric, value } => {
            let bucket = match metric {
                Metric::Penetration => classify_penetration(value)?,
                Metric::Cost => classify_cost(value)?,
            };
            println!("{}", bucket);
        }
        Commands::Isochrones {
            lat,
            lon,
            minutes,
            steps,
            params,
        } => {
            let params = params.resolve()?;
            let center = GeoPoint::new(lat, lon)?;
            let minutes = minutes.unwrap_or_else(|| DEFAULT_ISOCHRONE_MINUTES.to_vec());
            let rings = isochrone_rings(center, &minutes, &params, &SphericalGeometry::default(), steps)?;
            println!("{}", serde_json::to_string_pretty(&rings)?);
        }
    }

    Ok(())
}
