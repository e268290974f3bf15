use clap::Parser;
use sitevault::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    sitevault::cli::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Keygen { ref path } => {
            sitevault::cli::commands::keygen::execute(&cli, path.as_deref())
        }
        Commands::Add(ref args) => sitevault::cli::commands::add::execute(&cli, args),
        Commands::Export { ref output } => {
            sitevault::cli::commands::export::execute(&cli, output.as_deref())
        }
        Commands::List { ref category } => {
            sitevault::cli::commands::list::execute(&cli, category.as_deref())
        }
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        sitevault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
