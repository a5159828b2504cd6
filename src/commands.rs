use anyhow::{bail, Context, Result};
use tracing::debug;
use varlen::codec;

pub fn encode(values: &[String]) -> Result<()> {
    if values.is_empty() {
        bail!("Missing <value>");
    }
    for raw in values {
        let value: u64 = raw
            .parse()
            .with_context(|| format!("Invalid value: {}", raw))?;
        let bytes = codec::encode(value);
        println!("{}: {} ({} bytes)", value, hex::encode(&bytes), bytes.len());
    }
    Ok(())
}

pub fn decode(input: &str) -> Result<()> {
    let data = hex::decode(input.trim()).context("Failed to parse hex input")?;
    let mut pos = 0;
    while pos < data.len() {
        let (value, bytes_read) = codec::decode(&data[pos..])
            .with_context(|| format!("Failed to decode varint at offset {}", pos))?;
        println!("{}", value);
        pos += bytes_read;
    }
    Ok(())
}

pub fn decode_stdin() -> Result<()> {
    let mut reader = std::io::stdin().lock();
    let mut count = 0usize;
    while let Some(value) = codec::try_read_varint(&mut reader)
        .with_context(|| format!("Failed to read varint #{}", count + 1))?
    {
        println!("{}", value);
        count += 1;
    }
    debug!(count, "stdin drained");
    Ok(())
}
