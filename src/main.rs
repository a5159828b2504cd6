use anyhow::{bail, Result};
use tracing_subscriber::EnvFilter;

mod commands;

fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries results
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("varlen=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Parse arguments
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() < 2 {
        bail!("Missing <command>");
    }

    // Parse command and act accordingly
    let command = &args[1];
    match command.as_str() {
        "encode" => commands::encode(&args[2..])?,
        "decode" => match args.get(2) {
            Some(input) => commands::decode(input)?,
            None => bail!("Missing <hex>"),
        },
        "decode-stdin" => commands::decode_stdin()?,
        _ => bail!("Missing or invalid command passed: {}", command),
    }

    Ok(())
}
