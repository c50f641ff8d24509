use std::process::ExitCode;

fn main() -> ExitCode {
    gitlab_ci_helper::cli::run()
}
