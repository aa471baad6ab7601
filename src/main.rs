use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;

use simstats::config::{self, NonFinitePolicy, OutputFormat};
use simstats::report::{self, RenderOptions, ReportReader, Selection};
use simstats::stats::DataDigest;

/// Aggregate simulator statistics across owner groups
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Parse simulator statistics reports and aggregate counters across owner groups"
)]
struct Args {
    /// Statistics report (if not provided, reads from stdin)
    report: Option<PathBuf>,

    /// Only show stats with this name, across every owner group
    #[arg(short, long)]
    name: Option<String>,

    /// Only show the stat in this owner group (requires --name)
    #[arg(short, long, requires = "name")]
    group: Option<String>,

    /// Which data points to print
    #[arg(short, long, value_enum)]
    digest: Option<DataDigest>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Decimal places in table output
    #[arg(short, long)]
    precision: Option<usize>,

    /// Fail on NaN or infinite values instead of skipping them
    #[arg(long)]
    reject_non_finite: bool,

    /// Configuration file (defaults to ~/.config/simstats/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(args.verbose);

    let config_result = config::load_config(args.config.as_deref());
    if let Some(warning) = &config_result.warning {
        log::warn!("{}", warning);
    }
    let mut config = config_result.config;

    if args.reject_non_finite {
        config.parser.non_finite = NonFinitePolicy::Reject;
    }
    if let Some(digest) = args.digest {
        config.output.digest = digest;
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }
    if let Some(precision) = args.precision {
        config.output.precision = precision;
    }

    let mut stats = ReportReader::read_stats(args.report.as_deref(), &config.parser)?;
    stats.aggregate();
    stats.post_process();

    let selection = match (args.group.as_deref(), args.name.as_deref()) {
        (Some(owner_group), Some(name)) => Selection::Stat { owner_group, name },
        (None, Some(name)) => Selection::Name(name),
        _ => Selection::All,
    };

    let options = RenderOptions::from(config.output.clone());
    let snapshots = report::snapshot(&stats, selection, options.digest)?;
    let rendered = match config.output.format {
        OutputFormat::Table => report::render_table(&snapshots, options.precision),
        OutputFormat::Json => {
            let mut json = report::render_json(&snapshots)?;
            json.push('\n');
            json
        }
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;

    Ok(())
}

/// Initialize stderr logging: warnings by default, debug with --verbose, RUST_LOG overrides both
fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format(|buf, record| {
            let datetime = chrono::Local::now();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();

    log::debug!("=== SIMSTATS SESSION STARTED ===");
}
