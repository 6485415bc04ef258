use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use scholarlink_config::DatabaseConfig;
use scholarlink_db::PgStore;
use scholarlink_models::UserRole;

#[derive(Parser)]
#[command(name = "scholarlink-cli")]
#[command(about = "ScholarLink CLI - Administrative tools for ScholarLink", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Change a user's role
    SetRole {
        /// Email the user logged in with
        #[arg(short = 'e', long)]
        email: String,

        /// student, professor or admin
        #[arg(short = 'r', long)]
        role: UserRole,
    },
    /// List registered users
    ListUsers {
        /// Only show users with this role
        #[arg(short = 'r', long)]
        role: Option<UserRole>,
    },
    /// Apply pending database migrations
    Migrate,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = DatabaseConfig::from_env()?;
    let store = PgStore::connect(&config).await?;

    match cli.command {
        Commands::SetRole { email, role } => {
            let user = scholarlink_cli::set_role(&store, &email, role).await?;
            println!("✅ {} is now a {}", user.email, user.role);
        }
        Commands::ListUsers { role } => {
            let lines = scholarlink_cli::list_users(&store, role).await?;
            if lines.is_empty() {
                println!("No users found");
            }
            for line in lines {
                println!("{}", line);
            }
        }
        Commands::Migrate => {
            store.migrate().await?;
            println!("✅ Migrations applied");
        }
    }

    store.close().await;
    Ok(())
}
