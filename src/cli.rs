use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use geochain_core::{
    entities::{Address, AddressInput},
    normalize::normalize_address,
    usecases::{
        parse_provider_list, resolve_address_with_report, search_text, AttemptOutcome,
        FallbackReport, GeocodingContext,
    },
};
use geochain_gateways::{provider_registry, ReqwestTransportFactory};

use crate::config::Config;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration file
    #[arg(short, long, env = "GEOCHAIN_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Geocode an address and print the record as JSON
    Resolve {
        /// Providers in priority order, e.g. "google_maps,nominatim"
        #[arg(long, env = "GEOCODING_PROVIDERS")]
        providers: Option<String>,

        /// HTTP transport: default-http or socket-http
        #[arg(long, env = "GEOCODING_ADAPTER")]
        adapter: Option<String>,

        /// Print what every provider answered
        #[arg(short, long)]
        verbose: bool,

        #[command(flatten)]
        address: AddressArgs,
    },
    /// Print the normalized address text
    Normalize {
        #[command(flatten)]
        address: AddressArgs,
    },
    /// List the known providers and their settings
    Providers,
}

#[derive(Args)]
struct AddressArgs {
    /// The address as free text
    #[arg(conflicts_with_all = ["addr1", "addr2", "city", "state", "postcode"])]
    text: Option<String>,
    #[arg(long)]
    addr1: Option<String>,
    #[arg(long)]
    addr2: Option<String>,
    #[arg(long)]
    city: Option<String>,
    #[arg(long)]
    state: Option<String>,
    #[arg(long)]
    postcode: Option<String>,
}

impl From<AddressArgs> for AddressInput {
    fn from(from: AddressArgs) -> Self {
        let AddressArgs {
            text,
            addr1,
            addr2,
            city,
            state,
            postcode,
        } = from;
        match text {
            Some(text) => Self::Text(text),
            None => Self::Structured(Address {
                addr1,
                addr2,
                city,
                state,
                postcode,
            }),
        }
    }
}

pub fn run() -> Result<()> {
    let Cli { config, command } = Cli::parse();
    let cfg = Config::try_load_from_file_or_default(config.as_deref())?;
    match command {
        Command::Resolve {
            providers,
            adapter,
            verbose,
            address,
        } => resolve(&cfg, providers, adapter, verbose, address.into()),
        Command::Normalize { address } => {
            println!("{}", normalize_address(&address.into()));
            Ok(())
        }
        Command::Providers => {
            list_providers(&cfg);
            Ok(())
        }
    }
}

fn resolve(
    cfg: &Config,
    providers: Option<String>,
    adapter: Option<String>,
    verbose: bool,
    input: AddressInput,
) -> Result<()> {
    let mut request = cfg.geocode_request();
    if let Some(providers) = providers {
        request.providers = parse_provider_list(&providers);
    }
    if adapter.is_some() {
        request.adapter = adapter;
    }
    let registry = provider_registry();
    let transports = ReqwestTransportFactory::new(cfg.http.timeout, cfg.http.user_agent.clone());
    let ctx = GeocodingContext {
        registry: &registry,
        settings: &cfg.settings,
        transports: &transports,
    };
    let (record, report) = resolve_address_with_report(ctx, &request, input)?;
    if verbose {
        print_report(&report);
        eprintln!("search text: {:?}", search_text(&record));
    }
    let record = geochain_boundary::GeocodeRecord::from(record);
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

fn print_report(report: &FallbackReport) {
    for attempt in &report.attempts {
        let outcome = match &attempt.outcome {
            AttemptOutcome::Found(pos) => format!("found {pos}"),
            AttemptOutcome::NoResult => "no result".to_owned(),
            AttemptOutcome::Failed(reason) => format!("failed: {reason}"),
        };
        eprintln!("{:<22}{outcome}", attempt.provider.name());
    }
}

fn list_providers(cfg: &Config) {
    let registry = provider_registry();
    for descriptor in registry.iter() {
        println!("{}", descriptor.name());
        for key in descriptor.config_keys() {
            let state = if cfg.settings.contains_key(&key) {
                "set"
            } else {
                "-"
            };
            println!("  {key:<36}{state}");
        }
    }
}
