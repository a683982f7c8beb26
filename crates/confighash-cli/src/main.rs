//! ConfigHash CLI
//!
//! Prints the drift-detection digests of a cluster description. Digests go
//! to stdout, logs to stderr.

use clap::{Parser, Subcommand, ValueEnum};
use confighash_core::logging_facility::{init, Profile};
use confighash_core_types::{RequestContext, TraceId};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "confighash")]
#[command(about = "ConfigHash - Drift-detection digests for managed clusters", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: commands::GlobalArgs,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty, global = true)]
    log_format: LogFormat,

    /// Trace id of the calling controller
    #[arg(long, global = true)]
    trace_id: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Digest of one agent pool's scale set
    ScaleSet(commands::scale_set::ScaleSetArgs),
    /// Digest of the sync-pod manifest bundle
    SyncPod(commands::sync_pod::SyncPodArgs),
    /// Every digest of a cluster
    All(commands::all::AllArgs),
    /// List the known schema versions
    Versions(commands::versions::VersionsArgs),
}

fn main() {
    let cli = Cli::parse();

    init(match cli.log_format {
        LogFormat::Pretty => Profile::Development,
        LogFormat::Json => Profile::Production,
    });

    let mut ctx = RequestContext::new();
    if let Some(trace_id) = cli.trace_id {
        ctx = ctx.with_trace_id(TraceId::from_string(trace_id));
    }
    let span = tracing::info_span!(
        "confighash",
        request_id = %ctx.request_id,
        trace_id = tracing::field::Empty
    );
    if let Some(trace_id) = &ctx.trace_id {
        span.record("trace_id", trace_id.as_str());
    }
    let _guard = span.enter();

    let result = match cli.command {
        Commands::ScaleSet(args) => commands::scale_set::execute(args, &cli.global, &ctx),
        Commands::SyncPod(args) => commands::sync_pod::execute(args, &cli.global, &ctx),
        Commands::All(args) => commands::all::execute(args, &cli.global, &ctx),
        Commands::Versions(args) => commands::versions::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
