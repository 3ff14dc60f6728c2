use clap::{Parser, Subcommand};
use finprofile::{
    config::AppConfig,
    db,
    models::PROFILE_ID,
    repositories::user_repository::{SqliteUserRepository, UserRepository},
    services::profile_service::ProfileService,
};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "finprofile-cli")]
#[command(about = "CLI tool for managing the finprofile profile record", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Profile management commands
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
}

#[derive(Subcommand)]
enum ProfileCommands {
    /// Show the stored profile
    Show,

    /// Create the profile row, or overwrite it if it already exists
    Seed {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Phone number
        #[arg(short, long)]
        phone: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;

    // Connect to database
    let pool = db::create_pool(&config.database_url).await?;

    // Run migrations
    db::run_migrations(&pool).await?;

    let user_repository = Arc::new(SqliteUserRepository::new(pool));

    // Parse CLI arguments
    let cli = Cli::parse();

    match cli.command {
        Commands::Profile { command } => match command {
            ProfileCommands::Show => {
                let service = ProfileService::new(user_repository);
                match service.find_profile().await? {
                    Some(user) => {
                        println!("  ID:    {}", user.id);
                        println!("  Name:  {}", user.name);
                        println!("  Email: {}", user.email);
                        println!("  Phone: {}", user.phone);
                    }
                    None => {
                        eprintln!("No profile found. Run `profile seed` first.");
                        std::process::exit(1);
                    }
                }
            }
            ProfileCommands::Seed { name, email, phone } => {
                let user = user_repository
                    .upsert_profile(PROFILE_ID, &name, &email, &phone)
                    .await?;
                println!("Profile saved");
                println!("  Name:  {}", user.name);
                println!("  Email: {}", user.email);
                println!("  Phone: {}", user.phone);
            }
        },
    }

    Ok(())
}
