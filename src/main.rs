//! touch's main application entry point.
//! Handles command-line argument parsing and hands the target over to the processor.

use touch::{
    cli::{get_args, Args},
    config::config_path,
    error::{default_error_handler, Result},
    logger::init_logger,
    processor::touch_file,
    prompt::DialoguerPrompter,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    let prompt = DialoguerPrompter::new();
    let config = args.config.unwrap_or_else(config_path);

    touch_file(&args.file, &config, args.force, &prompt)
}
