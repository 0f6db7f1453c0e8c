use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use universal_extractor::cli::{Cli, Commands};
use universal_extractor::config::Config;
use universal_extractor::output;
use universal_extractor::pipeline::ExtractionPipeline;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_directive = if cli.verbose {
        "universal_extractor=debug"
    } else if cli.quiet {
        "universal_extractor=warn"
    } else {
        "universal_extractor=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().await?;

    match cli.command {
        Commands::Extract {
            input,
            output: output_path,
            format,
        } => {
            let pipeline = ExtractionPipeline::new(&config);

            tracing::info!("Starting extraction for: {}", input);
            let text = pipeline.extract(&input).await?;

            match output_path {
                Some(path) => {
                    output::save_to_file(&text, &path, &format).await?;
                    println!("Extracted text saved to: {}", path.display());
                }
                None => {
                    output::print_to_console(&text, &format)?;
                }
            }
        }
        Commands::Config { show } => {
            if show {
                config.display();
            } else {
                config.save().await?;
                println!("Configuration written with defaults.");
            }
        }
        Commands::Formats => {
            println!("Supported inputs:");
            println!("  • Remote URLs serving HTML or PDF");
            println!("  • YouTube videos (youtube.com, youtu.be) via transcript");
            println!("  • Local files: pdf, docx, txt, csv, html");
        }
    }

    Ok(())
}
