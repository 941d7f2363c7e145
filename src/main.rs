use clap::Parser;

use bibstats::app::{self, RunOptions};
use bibstats::cli::Cli;
use bibstats::paths::ProgramPaths;
use bibstats::{EXIT_RUNTIME_ERROR, EXIT_SUCCESS, logging};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let exit_code = match run(&cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e.message());
            EXIT_RUNTIME_ERROR
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> bibstats::Result<()> {
    let paths = ProgramPaths::discover()?;
    let options = RunOptions {
        no_config: cli.no_config,
        summary: cli.summary,
    };

    if let Some(summary) = app::run(&paths, &options)? {
        print!("{summary}");
        if !summary.ends_with('\n') {
            println!();
        }
    }

    Ok(())
}
