//! Command implementations for the takeout-geojson CLI
//!
//! Each subcommand is implemented in its own module; shared setup such as
//! logging and configuration loading lives in `shared`.

pub mod convert;
pub mod shared;

pub use shared::RunSummary;

use crate::cli::args::{Args, Commands};
use anyhow::Result;

/// Dispatch to the subcommand handler
pub async fn run(args: Args, command: Commands) -> Result<RunSummary> {
    match command {
        Commands::Convert(convert_args) => convert::run_convert(&args, convert_args).await,
        Commands::ConvertBatch(batch_args) => convert::run_convert_batch(&args, batch_args).await,
    }
}
