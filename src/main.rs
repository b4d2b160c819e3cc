#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play an interactive hotseat session (the default).
    Play,
    /// Replay a move list and print the outcome.
    Replay {
        #[arg(required = true, help = "Cell numbers (1-9) in play order, e.g. 5 1 9")]
        moves: Vec<usize>,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    tictactoe::init_logging();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => tictactoe::cli::run(),
        Commands::Replay { moves } => tictactoe::cli::replay(&moves),
    }
}
