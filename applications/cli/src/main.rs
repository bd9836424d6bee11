/// Nearby - command-line client for the local-services booking API
mod config;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use config::AppConfig;
use nearby_client::NearbyClient;
use nearby_core::{
    AccountType, CreateBookingRequest, CreateProviderRequest, ProviderFilters, RegisterRequest,
};
use nearby_storage::FileStore;
use serde::Serialize;
use std::{path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "nearby")]
#[command(about = "Browse and book local service providers", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long, env = "NEARBY_PASSWORD")]
        password: String,
    },
    /// Create an account
    Register {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(short, long, env = "NEARBY_PASSWORD")]
        password: String,
        #[arg(long, value_enum)]
        account: Option<Account>,
        #[arg(long)]
        business_name: Option<String>,
    },
    /// Sign out and forget the stored session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Provider listings
    Providers {
        #[command(subcommand)]
        command: ProviderCommands,
    },
    /// List service categories
    Services,
    /// Bookings of the signed-in user
    Bookings {
        #[command(subcommand)]
        command: BookingCommands,
    },
}

#[derive(Subcommand)]
enum ProviderCommands {
    /// List providers
    List {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        min_rating: Option<f64>,
    },
    /// Show one provider
    Show { id: i64 },
    /// Show your own provider profile
    Mine,
    /// Create a provider profile from a JSON file
    Create { file: PathBuf },
    /// Delete your own provider profile
    Delete,
}

#[derive(Subcommand)]
enum BookingCommands {
    /// List your bookings
    List,
    /// Book a service
    Create {
        #[arg(long)]
        provider: i64,
        #[arg(long)]
        service: i64,
        /// Date, e.g. 2024-06-01
        #[arg(long)]
        date: String,
        /// Time, e.g. 10:30
        #[arg(long)]
        time: String,
        #[arg(long)]
        address: String,
    },
    /// Cancel a booking
    Cancel { id: i64 },
}

#[derive(Clone, Copy, ValueEnum)]
enum Account {
    Client,
    Provider,
}

impl From<Account> for AccountType {
    fn from(account: Account) -> Self {
        match account {
            Account::Client => AccountType::Client,
            Account::Provider => AccountType::Provider,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nearby=info,nearby_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    config.validate()?;

    let store = FileStore::open(&config.storage.path)
        .with_context(|| format!("Failed to open store at {}", config.storage.path.display()))?;
    tracing::debug!(path = %store.path().display(), "Store opened");

    let client = NearbyClient::new(config.client_config(), Arc::new(store))?;

    match cli.command {
        Commands::Login { email, password } => {
            let auth = client.auth().login(&email, &password).await;
            print_json(&auth.user)?;
        }
        Commands::Register {
            name,
            email,
            phone,
            password,
            account,
            business_name,
        } => {
            let request = RegisterRequest {
                name,
                email,
                phone,
                password,
                user_type: account.map(AccountType::from),
                business_name,
            };
            let auth = client.auth().register(&request).await;
            print_json(&auth.user)?;
        }
        Commands::Logout => {
            client.auth().logout().await;
        }
        Commands::Whoami => whoami(&client).await?,
        Commands::Providers { command } => providers(&client, command).await?,
        Commands::Services => {
            print_json(&client.services().list().await)?;
        }
        Commands::Bookings { command } => bookings(&client, command).await?,
    }

    Ok(())
}

async fn whoami(client: &NearbyClient) -> anyhow::Result<()> {
    let auth = client.auth();
    if !auth.is_authenticated() {
        bail!("Not signed in");
    }

    // The profile endpoint may be down; fall back to the session's cached user
    match auth.current_user().await.or_else(|| auth.cached_user()) {
        Some(user) => print_json(&user),
        None => bail!("Signed in, but no user details are available"),
    }
}

async fn providers(client: &NearbyClient, command: ProviderCommands) -> anyhow::Result<()> {
    let providers = client.providers();

    match command {
        ProviderCommands::List {
            category,
            location,
            min_rating,
        } => {
            let filters = ProviderFilters {
                category,
                location,
                min_rating,
            };
            print_json(&providers.list(&filters).await?)
        }
        ProviderCommands::Show { id } => match providers.get_by_id(id).await? {
            Some(provider) => print_json(&provider),
            None => bail!("Provider {} not found", id),
        },
        ProviderCommands::Mine => match providers.get_mine().await? {
            Some(provider) => print_json(&provider),
            None => bail!("You have no provider profile"),
        },
        ProviderCommands::Create { file } => {
            let contents = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let request: CreateProviderRequest = serde_json::from_str(&contents)
                .with_context(|| format!("Invalid provider request in {}", file.display()))?;
            print_json(&providers.create(&request).await?)
        }
        ProviderCommands::Delete => {
            if !providers.delete_mine().await? {
                bail!("Provider profile could not be deleted");
            }
            Ok(())
        }
    }
}

async fn bookings(client: &NearbyClient, command: BookingCommands) -> anyhow::Result<()> {
    let bookings = client.bookings();

    match command {
        BookingCommands::List => print_json(&bookings.list_mine().await?),
        BookingCommands::Create {
            provider,
            service,
            date,
            time,
            address,
        } => {
            let request = CreateBookingRequest {
                provider_id: provider,
                service_id: service,
                date,
                time,
                address,
            };
            match bookings.create(&request).await? {
                Some(booking) => print_json(&booking),
                None => {
                    tracing::info!("Booking accepted, the API returned no details");
                    Ok(())
                }
            }
        }
        BookingCommands::Cancel { id } => {
            bookings.cancel(id).await?;
            tracing::info!(id, "Booking cancelled");
            Ok(())
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
