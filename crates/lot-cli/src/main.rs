mod commands;
mod opts;
mod output;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use lot_kernel::{ErrorKind, KernelError};
use lot_types::ParseError;
use tracing_subscriber::EnvFilter;

use commands::init::InitArgs;
use opts::LotOpts;

#[derive(Parser, Debug)]
#[command(name = "lot", version, about = "Parking lot spot allocator")]
struct Cli {
    #[command(flatten)]
    opts: LotOpts,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the spot inventory for a new lot
    Init(InitArgs),

    /// Park a vehicle (MOTORCYCLE, CAR or VAN)
    Park { category: String },

    /// Remove a parked vehicle and free its spots
    Leave { vehicle_id: u64 },

    /// Count free spots of a type (MOTORCYCLE, COMPACT or REGULAR)
    Available { spot_type: String },

    /// Check whether a vehicle category can no longer park
    Full { category: String },

    /// List parked vehicles with their spots
    Status,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::print_error(&cli.opts, error_code(&err), &format!("{err:#}"));
            exit_code(&err)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let opts = &cli.opts;
    match &cli.command {
        Command::Init(args) => commands::init::cmd_init(opts, args),
        Command::Park { category } => commands::park::cmd_park(opts, category),
        Command::Leave { vehicle_id } => commands::leave::cmd_leave(opts, *vehicle_id),
        Command::Available { spot_type } => commands::available::cmd_available(opts, spot_type),
        Command::Full { category } => commands::full::cmd_full(opts, category),
        Command::Status => commands::status::cmd_status(opts),
    }
}

/// Client-facing error code: 4001 not found, 4002/4003 unknown spot type or
/// vehicle category, 5001 no space, 5002 park aborted, 5000 anything else.
fn error_code(err: &anyhow::Error) -> u32 {
    if let Some(err) = err.downcast_ref::<KernelError>() {
        return err.kind().code();
    }
    if let Some(err) = err.downcast_ref::<ParseError>() {
        return err.code();
    }
    ErrorKind::Internal.code()
}

/// Exit code by error class: 2 no space, 3 not found, 1 anything else.
fn exit_code(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<KernelError>().map(KernelError::kind) {
        Some(ErrorKind::NoSpace) => ExitCode::from(2),
        Some(ErrorKind::NotFound) => ExitCode::from(3),
        _ => ExitCode::FAILURE,
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .init();
}
