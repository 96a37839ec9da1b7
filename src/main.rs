use clap::Parser;
use staffdir::cli::Cli;
use staffdir::logging::init_tracing;

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "invalid configuration");
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = staffdir::ui::run(config, cli.page) {
        tracing::error!(error = %err, "directory view failed");
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
