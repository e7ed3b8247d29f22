use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use lexan::{
    analyze,
    errors::errors::{Error, ErrorImpl, ErrorTip},
    report::report::{render_json, render_summary, render_table, save_report, ReportFormat},
    source::source::SourceInput,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const RULE: &str = "========================================";

#[derive(Parser)]
#[command(author, version, about = "Lexical analyzer for C++ source code")]
struct Cli {
    /// Source file to analyze; shows the interactive menu when omitted
    file: Option<PathBuf>,

    /// Read code from stdin until EOF instead of showing the menu
    #[arg(long, conflicts_with = "file")]
    stdin: bool,

    /// Where to save the token report
    #[arg(short, long, default_value = "tokens.txt")]
    output: PathBuf,

    /// Do not write a report file
    #[arg(long)]
    no_save: bool,

    /// Format of the printed output and the report file
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Only print the summary
    #[arg(short, long)]
    quiet: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            display_error(&error);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let input = match &cli.file {
        Some(path) => SourceInput::File(path.clone()),
        None if cli.stdin => SourceInput::Interactive,
        None => SourceInput::Menu,
    };
    let source = input.load(io::stdin().lock(), &mut io::stdout())?;

    let tokens = analyze(&source);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let terminal = |source| ErrorImpl::Terminal { source };

    match cli.format {
        ReportFormat::Json => {
            writeln!(out, "{}", render_json(&tokens)?).map_err(terminal)?;
        }
        ReportFormat::Text if !cli.quiet => {
            write!(out, "Tokens:\n{RULE}\n{}", render_table(tokens.tokens())).map_err(terminal)?;
        }
        ReportFormat::Text => {}
    }

    // The summary is printed even when saving fails.
    let saved = if cli.no_save {
        Ok(())
    } else {
        save_report(&cli.output, &tokens, cli.format)
    };

    if saved.is_ok() && !cli.no_save {
        // Keep stdout parseable when it carries JSON.
        match cli.format {
            ReportFormat::Text => writeln!(out, "Results saved to {}", cli.output.display()),
            ReportFormat::Json => writeln!(io::stderr(), "Results saved to {}", cli.output.display()),
        }
        .map_err(terminal)?;
    }

    if cli.format == ReportFormat::Text {
        write!(out, "\nSummary:\n{RULE}\n{}", render_summary(tokens.counts())).map_err(terminal)?;
    }

    saved
}

fn display_error(error: &Error) {
    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
}
