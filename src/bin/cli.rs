// src/bin/cli.rs
use hcpcs_scrape::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::main(std::env::args().skip(1))?;
    Ok(())
}
