// src/bin/cli.rs
use std::io::{self, Write};

use peg_selector::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let params = cli::parse_args(std::env::args().skip(1))?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    cli::run(&params, &mut out)?;
    out.flush()?;
    Ok(())
}
