use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use ledgerlens_finance::{Analyzer, CategoryRules, UnparseableDates};
use ledgerlens_ingest::{
    BatchedExtraction, CsvStatementFile, JsonStatementFile, StatementHeader, StatementSource, UNKNOWN,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod report;
mod state;

#[derive(Parser, Debug)]
#[command(name = "ledgerlens", version, about = "Bank statement analysis: ABB, categories, lending ratios")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyse a statement and write it back out with its summary attached
    Analyze(AnalyzeArgs),

    /// Merge extraction batch files into one statement JSON
    Assemble {
        /// Detected bank name (normalized; unknown becomes "Generic Bank")
        #[arg(long, default_value = UNKNOWN)]
        bank: String,

        /// Batch JSON files, in page order
        #[arg(required = true)]
        batches: Vec<PathBuf>,

        /// Output path (default: statement.json)
        #[arg(long, default_value = "statement.json")]
        output: PathBuf,
    },

    /// Manage ~/.ledgerlens/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Statement JSON (or a transactions CSV with --csv)
    input: PathBuf,

    /// Treat the input as a transactions CSV
    #[arg(long, default_value_t = false)]
    csv: bool,

    /// Bank name for CSV input
    #[arg(long, default_value = UNKNOWN)]
    bank: String,

    /// Account holder for CSV input
    #[arg(long, default_value = UNKNOWN)]
    holder: String,

    /// Masked account number for CSV input
    #[arg(long, default_value = UNKNOWN)]
    account: String,

    /// IFSC / routing code for CSV input
    #[arg(long)]
    ifsc: Option<String>,

    /// Output path (default from config, else output.json)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Leave rows with unparseable dates out of the ABB series
    #[arg(long, default_value_t = false)]
    exclude_unparseable: bool,

    /// Label "Others" rows from their description before analysing
    #[arg(long, default_value_t = false)]
    categorize: bool,

    /// Processing date substituted for unparseable dates (YYYY-MM-DD)
    #[arg(long)]
    today: Option<NaiveDate>,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config if none exists
    Init,
    /// Print the effective config
    Show,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "ledgerlens=info,ledgerlens_ingest=info,ledgerlens_finance=info".into()
            }),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Analyze(args) => analyze(args)?,

        Command::Assemble {
            bank,
            batches,
            output,
        } => {
            let statement = BatchedExtraction::new(bank, batches).load()?;
            state::write_json(&output, &statement, true)?;
            println!(
                "Assembled {} transactions for {} into {}",
                statement.transactions.len(),
                statement.bank_name,
                output.display()
            );
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                let cfg = config::load_config()?;
                println!("# {}\n", config::config_path()?.display());
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

fn analyze(args: AnalyzeArgs) -> Result<()> {
    let cfg = config::load_config()?;

    let source: Box<dyn StatementSource> = if args.csv {
        let header = StatementHeader {
            bank_name: args.bank,
            account_holder: args.holder,
            account_number: args.account,
            ifsc: args.ifsc,
        };
        Box::new(CsvStatementFile::new(&args.input, header))
    } else {
        Box::new(JsonStatementFile::new(&args.input))
    };

    info!(input = %args.input.display(), "loading statement");
    let mut statement = source
        .load()
        .with_context(|| format!("loading {}", args.input.display()))?;

    if args.categorize || cfg.analysis.auto_categorize {
        let relabelled = CategoryRules::new()?.apply(&mut statement);
        info!(relabelled, "keyword categorization");
    }

    let policy = if args.exclude_unparseable {
        UnparseableDates::Exclude
    } else {
        cfg.analysis.unparseable_dates
    };
    let analyzer = match args.today {
        Some(today) => Analyzer::new(today),
        None => Analyzer::for_timezone(&cfg.analysis.timezone)?,
    }
    .with_unparseable_dates(policy);

    let quality = analyzer.analyze(&mut statement);
    print!("{}", report::render_report(&statement, &quality));

    let output = args.output.unwrap_or(cfg.output.path);
    state::write_json(&output, &statement, cfg.output.pretty)?;
    println!("\nResults saved to {}", output.display());

    Ok(())
}
