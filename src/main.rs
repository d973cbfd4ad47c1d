use std::path::PathBuf;

use anyhow::{bail, Result};
use application::RegistrationApp;
use clap::{Parser, Subcommand};
use config::Config;
use domain::{DomainError, RegistrationRequest};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "user-registry")]
#[command(about = "User registration database with CSV import/export")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new user (validates and appends to the database)
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        birthdate: String,
        #[arg(long)]
        address: String,
        #[arg(long)]
        phone: String,
    },
    /// Import a CSV file as the new record set
    Import {
        /// Path to a users_database.csv-style file
        file: PathBuf,
    },
    /// Export the record set as CSV
    Export {
        /// Write here instead of the configured export directory
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List registered users
    List {
        /// Output the full records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete every registration from the store
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().map_err(|error| anyhow::anyhow!(error))?;
    let mut app = RegistrationApp::new(&config).await?;

    match cli.command {
        Commands::Register {
            username,
            email,
            password,
            birthdate,
            address,
            phone,
        } => {
            let request = RegistrationRequest {
                username,
                email,
                password,
                birthdate,
                address,
                phone,
            };
            match app.register(request).await {
                Ok(record) => {
                    println!(
                        "✅ Registered '{}' ({}) on {}",
                        record.username, record.email, record.registration_date
                    );
                }
                Err(DomainError::ValidationFailed(errors)) => {
                    eprintln!("❌ Registration rejected:");
                    for (field, message) in errors.iter() {
                        eprintln!("  {}: {}", field, message);
                    }
                    std::process::exit(1);
                }
                Err(error) => return Err(error.into()),
            }
        }

        Commands::Import { file } => {
            let text = std::fs::read_to_string(&file)?;
            let count = app.import_csv(&text).await?;
            println!("📁 Imported {} users from {}", count, file.display());
        }

        Commands::Export { output } => {
            let path = match output {
                Some(path) => {
                    std::fs::write(&path, app.export_csv())?;
                    path
                }
                None => app.export_to_file()?,
            };
            println!("💾 Exported {} users to {}", app.users().len(), path.display());
        }

        Commands::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(app.users())?);
            } else if app.users().is_empty() {
                println!("No users registered");
            } else {
                // Passwords stay out of the plain listing.
                for (index, user) in app.users().iter().enumerate() {
                    println!(
                        "{:>3}. {} <{}> registered {}",
                        index + 1,
                        user.username,
                        user.email,
                        user.registration_date
                    );
                }
                println!("\n{} users registered", app.users().len());
            }
        }

        Commands::Clear { yes } => {
            if !yes {
                bail!("refusing to clear the database without --yes");
            }
            let count = app.users().len();
            app.clear().await?;
            info!("Cleared {} users from the store", count);
            println!("🗑️  Removed {} users", count);
        }
    }

    Ok(())
}
