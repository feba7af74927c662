// Mailsift CLI - runs the triage pipeline over text or a file and prints JSON.

use anyhow::{bail, Context, Result};
use mailsift_core::{EmailProcessor, Settings};
use tracing_subscriber::EnvFilter;

fn usage() -> ! {
    eprintln!("Usage: mailsift <email text>");
    eprintln!("       mailsift --file <path>");
    eprintln!("       mailsift --health");
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let settings = Settings::from_env().context("failed to load settings")?;
    let processor = EmailProcessor::new(settings);

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [flag] if flag == "--health" => {
            println!("{}", serde_json::to_string_pretty(&processor.health())?);
        }
        [flag, path] if flag == "--file" => {
            let data = std::fs::read(path).with_context(|| format!("cannot read {}", path))?;
            let filename = std::path::Path::new(path)
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("upload");
            match processor.process_file(&data, filename).await {
                Ok(analysis) => println!("{}", serde_json::to_string_pretty(&analysis)?),
                Err(e) => bail!("file processing failed: {}", e),
            }
        }
        [text] => match processor.process_text(text).await {
            Ok(analysis) => println!("{}", serde_json::to_string_pretty(&analysis)?),
            Err(e) => bail!("processing failed: {}", e),
        },
        _ => usage(),
    }

    Ok(())
}
