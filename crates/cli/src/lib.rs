mod tag;

use bioscope_core::PipelineConfig;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

pub use tag::execute;

/// Exit status for usage errors and failed runs.
pub const FAILURE_EXIT: u8 = 1;

#[derive(Parser)]
#[command(
    name = "bioscope",
    version,
    about = "Tags Java syntax tree nodes with BIO chunk labels",
    long_about = "Parses a Java source file, walks its syntax tree in pre-order and assigns every node \
                  a BIO tag (B-/I-<category> for named nodes, O-other for punctuation and keywords). \
                  Prints one '<tag> -> <text>' line per node and writes '<name>_activation.txt' next \
                  to the input.\n\n\
                  Environment:\n  \
                  BIOSCOPE_DECODE_POLICY  lossy (default) or fatal\n  \
                  BIOSCOPE_FILTERS        filter JSON file, or 'default' for the built-in Java filters\n  \
                  BIOSCOPE_BALANCE_SEED   balance the labeled dataset with this seed\n  \
                  BIOSCOPE_LOG_DIR        log directory (default ~/.bioscope/logs)"
)]
pub struct Cli {
    /// Path to the Java source file to tag
    #[arg(value_name = "SOURCE_FILE")]
    pub path: PathBuf,
}

pub fn run() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version are not errors
            return if e.use_stderr() {
                ExitCode::from(FAILURE_EXIT)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let config = match PipelineConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(FAILURE_EXIT);
        }
    };

    let _guard = match bioscope_core::logging::init_logging("cli", &config.log_dir, true) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(FAILURE_EXIT);
        }
    };

    match tag::execute(&cli.path, &config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(FAILURE_EXIT)
        }
    }
}
