use clap::Parser;
use protosplit::cli::{self, Cli};
use tracing::{debug, error, trace};

fn main() {
    let cli = Cli::parse();

    cli::init_tracing(cli.verbose);

    debug!("protosplit started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    if let Err(e) = cli::execute(cli) {
        error!("Fatal error: {:#}", e);
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
