mod commands;
mod terminal;

use commands::{CommandLine, Commands, bench, generate, ranges};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let verbose = commands.verbose;

    logging::init_logging(verbose)?;

    match commands.command {
        Commands::Generate { scan, limit } => generate::generate(&scan.to_config(verbose), limit),
        Commands::Ranges { scan } => ranges::ranges(&scan.to_config(verbose)),
        Commands::Bench { scan, limit } => {
            print::header("starting benchmark");
            bench::bench(&scan.to_config(verbose), limit)
        }
    }
}
