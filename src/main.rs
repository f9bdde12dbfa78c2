use std::sync::Arc;

use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use userstore::{DirectConnector, User, UserStore};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[command(name = "userstore", about = "User record storage over SQLite")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Store a new user record
    Add {
        id: String,
        name: String,
        password: String,
    },
    /// Fetch a user record by id and print it as JSON
    Get { id: String },
    /// Print the number of stored records
    Count,
    /// Remove every stored record
    DeleteAll,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = userstore::config::Config::from_env()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        loglevel = %cfg.loglevel,
    );

    let cli = Cli::parse();

    let connector = DirectConnector::from_url(&cfg.database_url)?;
    let store = UserStore::new(Arc::new(connector));
    store.init_schema().await?;

    match cli.command {
        Command::Add { id, name, password } => {
            let user = User::new(id, name, password);
            store.add(&user).await?;
            info!(id = %user.id, "user stored");
        }
        Command::Get { id } => match store.get(&id).await {
            Ok(user) => println!("{}", serde_json::to_string_pretty(&user)?),
            Err(e) => {
                warn!(id = %id, error = %e, "lookup failed");
                return Err(e.into());
            }
        },
        Command::Count => {
            println!("{}", store.count().await?);
        }
        Command::DeleteAll => {
            store.delete_all().await?;
            info!("all user records removed");
        }
    }

    Ok(())
}
