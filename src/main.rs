use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use photo_locator::error::PhotoLocatorError;
use photo_locator::locator::locate_directory;

/// Map the photos in a folder to Google Maps links from their EXIF GPS data
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// Filepath to the folder for photos
    #[arg(short, long, default_value_t = String::from("."))]
    path: String,
    /// Output in JSON format
    #[arg(short, long, action)]
    json: bool,
}

fn run(args: &Cli) -> Result<(), PhotoLocatorError> {
    tracing::debug!("looking for photos at path: {}", args.path);
    let report = locate_directory(Path::new(&args.path))?;

    if args.json {
        // Single object, no trailing newline.
        print!("{}", report.to_json()?);
    } else {
        for entry in &report.entries {
            println!("\n{}: {}", entry.file_name, entry.result);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    if let Err(err) = run(&args) {
        tracing::error!("{err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
