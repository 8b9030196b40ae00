//! hexbake - PROGMEM hex table generator

use clap::Parser;
use hexbake::{Args, Config, Result, init_logging, pipeline};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process;

fn main() {
    let args = Args::parse();

    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    if args.verbose {
        log::debug!("{}", hexbake::get_library_info());
    }

    let config = Config::from_args_and_config(args)?;

    // Tables go to stdout unless an output file was requested; diagnostics
    // always go to the log, never into the data stream.
    let mut out: Box<dyn Write> = match &config.output_path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            Box::new(BufWriter::new(File::create(path)?))
        }
        None => Box::new(io::stdout().lock()),
    };

    let summary = pipeline::run(&config, &mut out)?;
    out.flush()?;

    log::info!(
        "Converted {} of {} input(s): {} image(s), {} WAV(s), {} failed{}",
        summary.converted(),
        config.inputs.len(),
        summary.images,
        summary.wavs,
        summary.failures,
        if summary.gamma_emitted { ", gamma tables emitted" } else { "" },
    );

    Ok(())
}
