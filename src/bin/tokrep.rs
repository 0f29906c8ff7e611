//! tokrep -- apply a token dictionary to text on stdin.
//!
//! Usage: tokrep --dict <path> [--sorted] [--preserve-order]
//!
//! The dictionary file is a JSON array of `{"key": ..., "value": ...}`
//! objects. The rewritten text is written to stdout.

use std::io::Read;

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    // Tracing goes to stderr so it never mixes with the rewritten output.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let dict_path = args
        .iter()
        .position(|a| a == "--dict")
        .and_then(|i| args.get(i + 1))
        .context("usage: tokrep --dict <path> [--sorted] [--preserve-order]")?;
    let is_sorted = args.iter().any(|a| a == "--sorted");
    let preserve_order = args.iter().any(|a| a == "--preserve-order");

    let dict_json = std::fs::read_to_string(dict_path)
        .with_context(|| format!("failed to read dictionary {dict_path}"))?;
    let mut dict: Vec<tokrep::Token> = serde_json::from_str(&dict_json)
        .with_context(|| format!("malformed dictionary {dict_path}"))?;

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let mut buf = tokrep::EditBuffer::from(input.as_str());
    tokrep::replace_tokens(&mut dict, is_sorted, preserve_order, &mut buf);
    print!("{buf}");

    Ok(())
}
