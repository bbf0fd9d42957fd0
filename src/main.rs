use anyhow::{Context, Result};
use markwash::{Config, MarkdownRenderer};
use std::fs;
use std::io::{Read, Write};
use tracing_subscriber::EnvFilter;

/// Reads markdown from the configured input source.
///
/// # Arguments
///
/// * `config`: Command line configuration
///
/// # Returns
///
/// Markdown content as string
///
/// # Errors
///
/// Returns error if the input file or stdin cannot be read.
fn read_input(config: &Config) -> Result<String> {
    match &config.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        None => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read stdin")?;
            Ok(content)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let content = read_input(&config)?;

    let renderer = MarkdownRenderer::new();
    let html = renderer.render(&content).await;

    match &config.output {
        Some(path) => {
            fs::write(path, &html)
                .with_context(|| format!("Failed to write output file {}", path.display()))?;
            println!("Generated: {}", path.display());
        }
        None => {
            std::io::stdout()
                .write_all(html.as_bytes())
                .context("Failed to write output")?;
        }
    }

    Ok(())
}
