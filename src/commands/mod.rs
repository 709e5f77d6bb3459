mod bookings;
mod clients;
mod config_cmd;
mod dashboard;
mod export_cmd;
mod goals;
mod login;
mod logout;
mod logs;
mod payments;
mod progress;
mod signup;
mod stats;
mod trainers;
mod whoami;
mod workouts;

use anyhow::Result;
use clap::{Parser, Subcommand};
use uuid::Uuid;

pub use dashboard::{DashboardCommand, DashboardStats};
pub use login::LoginCommand;
pub use logout::LogoutCommand;
pub use signup::SignupCommand;
pub use stats::StatsCommand;
pub use whoami::WhoamiCommand;

use crate::api::ApiClient;
use crate::config::Config;
use crate::session::Session;

/// Build an API client from the stored config and session
pub(crate) fn api_client() -> Result<ApiClient> {
    let config = Config::load()?;
    let session = Session::load()?;
    ApiClient::new(&config, session)
}

pub(crate) fn parse_date(s: &str) -> Result<chrono::NaiveDate> {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date '{}', expected YYYY-MM-DD", s))
}

/// Ask for confirmation unless --force was given
pub(crate) fn confirm(prompt: &str, force: bool) -> Result<bool> {
    if force {
        return Ok(true);
    }

    Ok(dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}

#[derive(Parser)]
#[command(name = "fitdesk")]
#[command(about = "Terminal client for the FitDesk personal training platform", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Login to FitDesk
    Login(LoginCommand),

    /// Create a trainer account
    Signup(SignupCommand),

    /// Logout from FitDesk
    Logout(LogoutCommand),

    /// Show current user information
    Whoami(WhoamiCommand),

    /// Manage clients
    #[command(subcommand)]
    Client(ClientSubcommands),

    /// Manage client goals
    #[command(subcommand)]
    Goal(GoalSubcommands),

    /// Manage workout plans
    #[command(subcommand)]
    Workout(WorkoutSubcommands),

    /// Manage training session logs
    #[command(subcommand)]
    Log(LogSubcommands),

    /// Manage payments
    #[command(subcommand)]
    Payment(PaymentSubcommands),

    /// Manage progress measurements
    #[command(subcommand)]
    Progress(ProgressSubcommands),

    /// Manage bookings
    #[command(subcommand)]
    Booking(BookingSubcommands),

    /// Manage trainer accounts (admin)
    #[command(subcommand)]
    Trainer(TrainerSubcommands),

    /// Show the business dashboard
    Dashboard(DashboardCommand),

    /// Show revenue analytics
    Stats(StatsCommand),

    /// Export client data as CSV
    #[command(subcommand)]
    Export(ExportSubcommands),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigSubcommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum ClientSubcommands {
    /// List clients
    List {
        /// Include inactive clients
        #[arg(short, long)]
        all: bool,
    },

    /// Add a new client
    Add {
        /// Client name
        name: String,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        /// Membership start date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Show aggregated client details
    Show {
        /// Client ID
        id: Uuid,
    },

    /// Open the interactive client detail view
    View {
        /// Client ID
        id: Uuid,
    },

    /// Edit a client
    Edit {
        /// Client ID
        id: Uuid,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        /// New status (active, inactive, pending)
        #[arg(long)]
        status: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a client
    Delete {
        /// Client ID
        id: Uuid,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum GoalSubcommands {
    /// List a client's goals
    List {
        /// Client ID
        client: Uuid,
    },

    /// Create a goal for a client
    Add {
        /// Client ID
        client: Uuid,

        /// Goal title
        title: String,

        #[arg(long)]
        description: Option<String>,

        /// Target date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },

    /// Mark a goal as completed
    Complete {
        /// Goal ID
        id: Uuid,
    },

    /// Delete a goal
    Delete {
        /// Goal ID
        id: Uuid,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum WorkoutSubcommands {
    /// List a client's workout plans
    List {
        /// Client ID
        client: Uuid,
    },

    /// Show one workout plan with its exercises
    Show {
        /// Plan ID
        id: Uuid,
    },

    /// Create a workout plan
    Add {
        /// Client ID
        client: Uuid,

        /// Plan name
        name: String,

        #[arg(long)]
        description: Option<String>,

        /// Exercise spec, repeatable: NAME:SETSxREPS[@WEIGHT][:REST]
        #[arg(short, long = "exercise")]
        exercises: Vec<String>,
    },

    /// Delete a workout plan
    Delete {
        /// Plan ID
        id: Uuid,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum LogSubcommands {
    /// List a client's training logs
    List {
        /// Client ID
        client: Uuid,
    },

    /// Record a training session
    Add {
        /// Client ID
        client: Uuid,

        /// What was trained
        activity: String,

        /// Session date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,

        /// Duration in minutes
        #[arg(long)]
        duration: Option<u32>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a training log
    Delete {
        /// Log ID
        id: Uuid,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum PaymentSubcommands {
    /// List payments for a client, or all payments
    List {
        /// Client ID (omit for all clients)
        client: Option<Uuid>,
    },

    /// Record a payment
    Add {
        /// Client ID
        client: Uuid,

        /// Amount
        amount: f64,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,

        #[arg(long)]
        method: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Mark a payment as paid
    Paid {
        /// Payment ID
        id: Uuid,
    },

    /// Delete a payment
    Delete {
        /// Payment ID
        id: Uuid,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum ProgressSubcommands {
    /// List a client's measurements
    List {
        /// Client ID
        client: Uuid,
    },

    /// Record measurements (one record per supplied value)
    Add {
        /// Client ID
        client: Uuid,

        /// Weight in kg
        #[arg(long)]
        weight: Option<f64>,

        /// Body fat percentage
        #[arg(long = "body-fat")]
        body_fat: Option<f64>,

        /// Muscle mass in kg
        #[arg(long = "muscle-mass")]
        muscle_mass: Option<f64>,
    },

    /// Delete a measurement
    Delete {
        /// Measurement ID
        id: Uuid,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum BookingSubcommands {
    /// List bookings
    List {
        /// Only upcoming bookings
        #[arg(short, long)]
        upcoming: bool,
    },

    /// Book a session for a client
    Add {
        /// Client ID
        client: Uuid,

        /// Start time (YYYY-MM-DD HH:MM, local time)
        start: String,

        /// Duration in minutes
        #[arg(long, default_value = "60")]
        duration: u32,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Cancel a booking
    Cancel {
        /// Booking ID
        id: Uuid,
    },
}

#[derive(Subcommand)]
enum TrainerSubcommands {
    /// List trainer accounts
    List,

    /// Re-activate a trainer account
    Activate {
        /// Trainer ID
        id: Uuid,
    },

    /// Suspend a trainer account
    Suspend {
        /// Trainer ID
        id: Uuid,
    },

    /// Delete a trainer account
    Delete {
        /// Trainer ID
        id: Uuid,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum ExportSubcommands {
    /// Export a client's goals
    Goals {
        /// Client ID
        client: Uuid,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Export a client's payments
    Payments {
        /// Client ID
        client: Uuid,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Export a client's workout plans
    Workouts {
        /// Client ID
        client: Uuid,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Show current configuration
    Show,

    /// Edit configuration file
    Edit,

    /// Initialize configuration with defaults
    Init {
        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        if self.verbose {
            tracing::info!("Verbose mode enabled");
        }

        match self.command {
            Commands::Login(cmd) => cmd.execute().await,
            Commands::Signup(cmd) => cmd.execute().await,
            Commands::Logout(cmd) => cmd.execute().await,
            Commands::Whoami(cmd) => cmd.execute().await,
            Commands::Client(subcmd) => match subcmd {
                ClientSubcommands::List { all } => clients::list(all).await,
                ClientSubcommands::Add {
                    name,
                    email,
                    phone,
                    start,
                    notes,
                } => clients::add(name, email, phone, start, notes).await,
                ClientSubcommands::Show { id } => clients::show(id).await,
                ClientSubcommands::View { id } => clients::view(id).await,
                ClientSubcommands::Edit {
                    id,
                    name,
                    email,
                    phone,
                    status,
                    notes,
                } => clients::edit(id, name, email, phone, status, notes).await,
                ClientSubcommands::Delete { id, force } => clients::delete(id, force).await,
            },
            Commands::Goal(subcmd) => match subcmd {
                GoalSubcommands::List { client } => goals::list(client).await,
                GoalSubcommands::Add {
                    client,
                    title,
                    description,
                    date,
                } => goals::add(client, title, description, date).await,
                GoalSubcommands::Complete { id } => goals::complete(id).await,
                GoalSubcommands::Delete { id, force } => goals::delete(id, force).await,
            },
            Commands::Workout(subcmd) => match subcmd {
                WorkoutSubcommands::List { client } => workouts::list(client).await,
                WorkoutSubcommands::Show { id } => workouts::show(id).await,
                WorkoutSubcommands::Add {
                    client,
                    name,
                    description,
                    exercises,
                } => workouts::add(client, name, description, exercises).await,
                WorkoutSubcommands::Delete { id, force } => workouts::delete(id, force).await,
            },
            Commands::Log(subcmd) => match subcmd {
                LogSubcommands::List { client } => logs::list(client).await,
                LogSubcommands::Add {
                    client,
                    activity,
                    date,
                    duration,
                    notes,
                } => logs::add(client, activity, date, duration, notes).await,
                LogSubcommands::Delete { id, force } => logs::delete(id, force).await,
            },
            Commands::Payment(subcmd) => match subcmd {
                PaymentSubcommands::List { client } => payments::list(client).await,
                PaymentSubcommands::Add {
                    client,
                    amount,
                    due,
                    method,
                    notes,
                } => payments::add(client, amount, due, method, notes).await,
                PaymentSubcommands::Paid { id } => payments::mark_paid(id).await,
                PaymentSubcommands::Delete { id, force } => payments::delete(id, force).await,
            },
            Commands::Progress(subcmd) => match subcmd {
                ProgressSubcommands::List { client } => progress::list(client).await,
                ProgressSubcommands::Add {
                    client,
                    weight,
                    body_fat,
                    muscle_mass,
                } => progress::add(client, weight, body_fat, muscle_mass).await,
                ProgressSubcommands::Delete { id, force } => progress::delete(id, force).await,
            },
            Commands::Booking(subcmd) => match subcmd {
                BookingSubcommands::List { upcoming } => bookings::list(upcoming).await,
                BookingSubcommands::Add {
                    client,
                    start,
                    duration,
                    notes,
                } => bookings::add(client, start, duration, notes).await,
                BookingSubcommands::Cancel { id } => bookings::cancel(id).await,
            },
            Commands::Trainer(subcmd) => match subcmd {
                TrainerSubcommands::List => trainers::list().await,
                TrainerSubcommands::Activate { id } => trainers::activate(id).await,
                TrainerSubcommands::Suspend { id } => trainers::suspend(id).await,
                TrainerSubcommands::Delete { id, force } => trainers::delete(id, force).await,
            },
            Commands::Dashboard(cmd) => cmd.execute().await,
            Commands::Stats(cmd) => cmd.execute().await,
            Commands::Export(subcmd) => match subcmd {
                ExportSubcommands::Goals { client, output } => {
                    export_cmd::goals(client, output).await
                }
                ExportSubcommands::Payments { client, output } => {
                    export_cmd::payments(client, output).await
                }
                ExportSubcommands::Workouts { client, output } => {
                    export_cmd::workouts(client, output).await
                }
            },
            Commands::Config(subcmd) => match subcmd {
                ConfigSubcommands::Show => config_cmd::show_config().await,
                ConfigSubcommands::Edit => config_cmd::edit_config().await,
                ConfigSubcommands::Init { force } => config_cmd::init_config(force).await,
            },
            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
