use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use eyre::Result;
use jiff::Zoned;
use tracing_subscriber::EnvFilter;

use docpress_export::assemble::{Toolchain, generate_pdf_from_markdown};
use docpress_export::deps::{REQUIRED_TOOLS, check_dependencies};
use docpress_export::error::ExportError;
use docpress_export::naming::{OUTPUT_PREFIX, timestamped_output_name};
use docpress_export::pdf::{render_pdf, write_pdf};
use docpress_export::styles::{DEFAULT_STYLESHEET, PageStyle};
use docpress_export::tutorial::{
    TUTORIAL_OUTPUT_PATH, TUTORIAL_TEXT, TUTORIAL_TITLE, tutorial_lines,
};

#[derive(Parser)]
#[command(name = "docpress")]
#[command(about = "Render Markdown and the x11vnc tutorial to PDF")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log progress to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge Markdown files and render them through pandoc and wkhtmltopdf
    Styled {
        /// Markdown files, merged in order; missing ones are skipped
        #[arg(default_value = "README.md")]
        inputs: Vec<PathBuf>,
    },

    /// Render the built-in x11vnc tutorial
    Tutorial {
        #[arg(short, long, default_value = TUTORIAL_OUTPUT_PATH)]
        output: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = color_eyre::install() {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Styled { inputs } => styled(inputs),
        Commands::Tutorial { output } => tutorial(output),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            let code = e.downcast_ref::<ExportError>().map_or(1, ExportError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn styled(inputs: Vec<PathBuf>) -> Result<()> {
    check_dependencies(&REQUIRED_TOOLS)?;

    let output = PathBuf::from(timestamped_output_name(
        OUTPUT_PREFIX,
        Zoned::now().datetime(),
    ));
    let report =
        generate_pdf_from_markdown(&inputs, DEFAULT_STYLESHEET, &output, &Toolchain::default())?;

    println!("\n✅ PDF generated: {}", report.output.display());
    Ok(())
}

fn tutorial(output: PathBuf) -> Result<()> {
    let lines = tutorial_lines(TUTORIAL_TEXT);
    let bytes = render_pdf(&lines, &PageStyle::default(), TUTORIAL_TITLE)?;
    write_pdf(&bytes, &output)?;

    println!("✅ PDF generated: {}", output.display());
    Ok(())
}
