use clap::Parser;
use climate_api::cli::{args::Args, commands};
use std::process;
use tokio_util::sync::CancellationToken;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic with signal handling
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        // Create cancellation token for coordinating graceful shutdown
        let cancellation_token = CancellationToken::new();

        // Set up graceful shutdown handling
        let shutdown_token = cancellation_token.clone();
        let shutdown_signal = async move {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install CTRL+C signal handler");

            eprintln!("\nReceived CTRL+C, shutting down gracefully...");
            shutdown_token.cancel();
        };
        tokio::spawn(shutdown_signal);

        commands::run(args, cancellation_token).await
    });

    match result {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Climate API - Station Observation Server");
    println!("========================================");
    println!();
    println!("Serve precipitation and temperature observations from a pre-populated");
    println!("station measurement dataset over a read-only HTTP API.");
    println!();
    println!("USAGE:");
    println!("    climate-api <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    serve       Run the HTTP server until interrupted (main command)");
    println!("    routes      Print the available API routes and exit");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Serve the default dataset on the default port:");
    println!("    climate-api serve");
    println!();
    println!("    # Serve a specific dataset with debug logging:");
    println!("    climate-api serve --database sqlite://hawaii.sqlite --port 9000 -vv");
    println!();
    println!("    # List the available API routes:");
    println!("    climate-api routes");
    println!();
    println!("For detailed help on any command, use:");
    println!("    climate-api <COMMAND> --help");
}
