mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, check};
use preflight_common::config::Config;
use terminal::{logging, print};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg: Config = commands.to_config();

    print::header("running pre-flight check", cfg.quiet);
    let verdict = check::check(&cfg).await?;
    Ok(ExitCode::from(verdict.exit_code()))
}
