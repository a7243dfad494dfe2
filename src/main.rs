use anyhow::Result;
use mv_to_dirs::cli;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = cli::parse();
    app::run(args)
}
