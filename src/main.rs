use clap::{CommandFactory, Parser};
use std::process;
use takeout_geojson::ConverterError;
use takeout_geojson::cli::{args::Args, commands};

fn main() {
    let args = Args::parse();

    // No subcommand: show help
    let Some(command) = args.command.clone() else {
        let _ = Args::command().print_help();
        println!();
        process::exit(0);
    };

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args, command) => result,
            Ok(()) = tokio::signal::ctrl_c() => {
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(ConverterError::processing_interrupted("Conversion interrupted by user").into())
            }
        }
    });

    match result {
        Ok(_summary) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
