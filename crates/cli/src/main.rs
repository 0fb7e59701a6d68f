use std::process::ExitCode;

fn main() -> ExitCode {
    bioscope_cli::run()
}
