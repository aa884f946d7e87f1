use clap::Parser;
use yoda_memory::args::Args;

fn main() {
    let args = Args::parse();

    if let Err(e) = yoda_memory::run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
