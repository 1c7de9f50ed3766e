use clap::Parser;
use stoplink::app::{run, App};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct StoplinkAppArguments {
    #[command(subcommand)]
    app: App,
}

fn main() {
    env_logger::init();
    let args = StoplinkAppArguments::parse();
    if let Err(e) = run(&args.app) {
        log::error!("{e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
