pub mod args;
pub mod constants;
pub mod image;
pub mod mmu;
pub mod monitor;

use log::{info, warn};
use mmu::MemoryController;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

pub fn setup_logging(log_path: &Option<PathBuf>) -> Result<(), io::Error> {
    let env = env_logger::Env::default().default_filter_or("info");
    let mut builder = env_logger::Builder::from_env(env);
    builder.format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));

    // Redirect to a file when a path is given, stderr otherwise.
    if let Some(path) = log_path {
        let file = File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

/// Allocates the controller, loads the optional image and runs the monitor
/// until its input is exhausted.
pub fn run(args: args::Args) -> Result<(), Box<dyn Error>> {
    setup_logging(&args.log_path)?;

    let mut memory = MemoryController::new(args.capacity)?;
    info!("Memory controller ready, {} words", memory.capacity());

    if let Some(path) = &args.image {
        let words = image::load_image(path)?;
        let stored = memory.load(0, &words);
        if stored < words.len() {
            warn!(
                "Image has {} words, only {} fit in memory",
                words.len(),
                stored
            );
        }
    }

    let stdout = io::stdout();
    let errors = match &args.script {
        Some(path) => {
            let reader = BufReader::new(File::open(path)?);
            monitor::run_script(&mut memory, reader, stdout.lock())?
        }
        None => monitor::run_script(&mut memory, io::stdin().lock(), stdout.lock())?,
    };

    if errors > 0 {
        warn!("{} monitor line(s) could not be parsed", errors);
    }

    memory.destroy();
    Ok(())
}
