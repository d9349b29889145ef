use clap::{Parser, Subcommand};
use eyre::Result;
use wellpath_core::models::kind::AssessmentKind;
use wellpath_core::models::referral::Urgency;

mod commands;
mod prompt;

#[derive(Parser)]
#[command(name = "wellpath", about = "School wellbeing assessments and referrals")]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and remember the session
    Login {
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Check whether an assessment has been completed
    Status { kind: AssessmentKind },
    /// Take an assessment interactively
    Take { kind: AssessmentKind },
    /// List referrals visible to the signed-in user
    Referrals,
    /// Open a referral for a student (counselors only)
    Refer {
        #[arg(long)]
        student: String,
        #[arg(long)]
        reason: String,
        #[arg(long, value_enum, default_value = "normal")]
        urgency: UrgencyArg,
    },
    /// Open a referral conversation
    Chat { referral_id: u64 },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum UrgencyArg {
    Low,
    Normal,
    High,
}

impl From<UrgencyArg> for Urgency {
    fn from(arg: UrgencyArg) -> Self {
        match arg {
            UrgencyArg::Low => Urgency::Low,
            UrgencyArg::Normal => Urgency::Normal,
            UrgencyArg::High => Urgency::High,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let default_filter = wellpath_terminal::default_log_filter(cli.verbose);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Login { email, password } => commands::login(&email, &password).await,
        Commands::Logout => commands::logout(),
        Commands::Whoami => commands::whoami(),
        Commands::Status { kind } => commands::status(kind).await,
        Commands::Take { kind } => commands::take(kind).await,
        Commands::Referrals => commands::referrals().await,
        Commands::Refer {
            student,
            reason,
            urgency,
        } => commands::refer(&student, &reason, urgency.into()).await,
        Commands::Chat { referral_id } => commands::chat(referral_id).await,
    }
}
