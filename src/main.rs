use clap::Parser;
use miette::Result;
use assetsync::cli::{Cli, Commands};
use assetsync::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();

    assetsync::logging::init(cli.verbose).map_err(|e| miette::miette!("{}", e))?;

    match cli.command {
        Commands::Sync(args) => {
            assetsync::cli::sync::run(args, &Printer::new())?;
        }
        Commands::Completions(args) => assetsync::cli::completions::run(args)?,
    }

    Ok(())
}
