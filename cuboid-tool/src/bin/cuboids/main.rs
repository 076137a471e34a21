//! Binary which builds a region from a script of cuboids and reports on it.

// Crate-specific lint settings. (General settings can be found in the workspace manifest.)
#![forbid(unsafe_code)]

use std::io::Write as _;

use anyhow::Context as _;
use clap::Parser as _;

use cuboid_tool::{Script, logging, read_input, write_report};

mod command_options;
use command_options::CuboidsArgs;

fn main() -> Result<(), anyhow::Error> {
    let CuboidsArgs {
        input,
        report,
        points_limit,
        logging: logging_args,
    } = CuboidsArgs::parse();

    logging::install(&logging_args)?;

    let text = read_input(input.as_deref())?;
    let script: Script = text.parse()?;
    log::info!("read {count} instructions", count = script.instructions().len());

    let region = script.run();
    log::info!("region has {count} cuboids", count = region.len());

    let mut stdout = std::io::stdout().lock();
    write_report(&region, report, points_limit, &mut stdout)?;
    stdout.flush().context("failed to write report")?;
    Ok(())
}
