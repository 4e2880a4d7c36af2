use std::process::ExitCode;

use clap::Parser;

use harness_cfg::cli::{self, HarnessArgs};

fn main() -> ExitCode {
    let args = HarnessArgs::parse();
    cli::run(&args)
}
