use std::process::ExitCode;

fn main() -> ExitCode {
    sitecheck::cli::run()
}
