use crate::demo::{run_demo, run_tutor_search, DemoArgs, TutorSearchArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use tutoria::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Tutoria Marketplace API",
    about = "Run and demonstrate the Tutoria marketplace service from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Query the bundled sample roster from the command line
    Tutors {
        #[command(subcommand)]
        command: TutorsCommand,
    },
    /// Run an end-to-end CLI demo covering matching and location updates
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum TutorsCommand {
    /// Find tutors free for an entire booking window
    Search(TutorSearchArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Tutors {
            command: TutorsCommand::Search(args),
        } => run_tutor_search(args),
        Command::Demo(args) => run_demo(args),
    }
}
