use clap::Parser;
use site_relay::domain::model::ObserverCommand;
use site_relay::PageObserver;
use std::path::PathBuf;

/// Runs the page observer against a saved HTML file and prints what the
/// content script would report.
#[derive(Debug, Parser)]
#[command(name = "page-snapshot")]
#[command(about = "Print the bounded page snapshot for an HTML file")]
struct Args {
    /// Path to an HTML file.
    file: PathBuf,

    #[arg(long, default_value = "https://example.com/")]
    url: String,

    /// Pretend this text is currently selected on the page.
    #[arg(long)]
    selection: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let html = std::fs::read_to_string(&args.file)?;
    let mut observer = PageObserver::new(&html, &args.url);
    if let Some(selection) = args.selection {
        observer.set_selection(selection);
    }

    println!(
        "{}",
        serde_json::to_string_pretty(&observer.announce())?
    );
    println!(
        "{}",
        serde_json::to_string_pretty(&observer.handle(ObserverCommand::ExtractPage))?
    );
    println!(
        "{}",
        serde_json::to_string_pretty(&observer.handle(ObserverCommand::CaptureSelection))?
    );

    Ok(())
}
