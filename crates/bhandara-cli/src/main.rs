mod explore;
mod query;
mod render;

use std::sync::Arc;

use bhandara_core::{AppConfig, Category, Coordinates, RegistrationForm, Session};
use bhandara_locate::{request_position_once, FixedPosition, IpGeolocator, Unsupported};
use clap::{Args, Parser, Subcommand};
use tokio::sync::oneshot;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "bhandara-cli")]
#[command(about = "Find free community meals (bhandaras, langars) near you")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List locations whose name, city or country contains QUERY
    Search {
        /// Case-insensitive text; omit to list everything
        query: Option<String>,
    },
    /// Show one location with a directions link
    Show {
        /// Location id as printed by `search`
        id: u32,
    },
    /// List map points, highlighted when a query is given
    Pins { query: Option<String> },
    /// Suggest locations within 100 km of a position
    Nearby {
        #[command(flatten)]
        position: PositionArgs,
        /// Look the position up from your public IP address
        #[arg(long, conflicts_with_all = ["lat", "lng"])]
        locate: bool,
    },
    /// Compose a registration email for a new location
    Register(RegisterArgs),
    /// Browse interactively
    Explore {
        #[command(flatten)]
        position: PositionArgs,
        /// Skip the automatic IP-based position lookup
        #[arg(long)]
        no_locate: bool,
    },
}

#[derive(Debug, Args)]
struct PositionArgs {
    /// Latitude in degrees
    #[arg(long, requires = "lng", allow_negative_numbers = true)]
    lat: Option<f64>,
    /// Longitude in degrees
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lng: Option<f64>,
}

impl PositionArgs {
    fn coordinates(&self) -> Option<Coordinates> {
        self.lat.zip(self.lng).map(|(lat, lng)| Coordinates::new(lat, lng))
    }
}

#[derive(Debug, Args)]
struct RegisterArgs {
    /// Name of the bhandara
    #[arg(long)]
    name: String,
    /// Street or area
    #[arg(long)]
    location: String,
    #[arg(long)]
    city: String,
    /// When food is served, e.g. "Sundays 12 PM"
    #[arg(long)]
    timing: String,
    #[arg(long)]
    description: String,
    #[arg(long, default_value = "Temple Bhandara")]
    category: String,
    #[arg(long)]
    contact_name: String,
    #[arg(long)]
    contact_email: String,
    #[arg(long)]
    contact_phone: Option<String>,
}

impl From<RegisterArgs> for RegistrationForm {
    fn from(args: RegisterArgs) -> Self {
        Self {
            name: args.name,
            location: args.location,
            city: args.city,
            timing: args.timing,
            description: args.description,
            category: Category::from(args.category),
            contact_name: args.contact_name,
            contact_email: args.contact_email,
            contact_phone: args.contact_phone,
        }
    }
}

/// Start the IP lookup in the background. If no client can be built the
/// platform is treated as having no location service.
fn locate_once(config: &AppConfig) -> oneshot::Receiver<Coordinates> {
    match IpGeolocator::with_base_url(
        &config.geolocate_url,
        config.geolocate_timeout_secs,
        &config.user_agent,
    ) {
        Ok(geolocator) => request_position_once(geolocator),
        Err(e) => {
            tracing::warn!(error = %e, "geolocation client unavailable");
            request_position_once(Unsupported)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = bhandara_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("bhandara-cli: no command given; try `bhandara-cli --help`");
        return Ok(());
    };

    let catalog = bhandara_core::load_catalog(&config.catalog_path)?;
    tracing::debug!(
        path = %config.catalog_path.display(),
        locations = catalog.len(),
        "catalog loaded"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Search { query } => {
            query::run_search(&catalog, query.as_deref().unwrap_or_default(), &mut out)?;
        }
        Commands::Show { id } => query::run_show(&catalog, id, &mut out)?,
        Commands::Pins { query } => {
            query::run_pins(&catalog, query.as_deref().unwrap_or_default(), &mut out)?;
        }
        Commands::Nearby { position, locate } => {
            let position = match position.coordinates() {
                Some(coords) => Some(coords),
                None if locate => locate_once(&config).await.ok(),
                None => None,
            };
            query::run_nearby(&catalog, position, &mut out)?;
        }
        Commands::Register(args) => {
            let form = RegistrationForm::from(args);
            query::run_register(&form, &config.registration_recipient, &mut out)?;
        }
        Commands::Explore {
            position,
            no_locate,
        } => {
            let receiver = match position.coordinates() {
                Some(coords) => Some(request_position_once(FixedPosition(coords))),
                None if no_locate => None,
                None => Some(locate_once(&config)),
            };
            let mut session = Session::new(Arc::new(catalog), config.registration_recipient.clone());
            let input = tokio::io::BufReader::new(tokio::io::stdin());
            explore::run_explore(&mut session, input, &mut out, receiver).await?;
        }
    }

    Ok(())
}
