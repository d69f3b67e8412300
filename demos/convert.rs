//! Feed conversion example
//!
//! Reads a feed file, converts it to another dialect and prints the result.
//!
//! Run with: cargo run --example convert -- <feed.xml> [feed type]
//!
//! The feed type defaults to `atom_1.0`. Set `RUST_LOG=synd_rs=debug` to see
//! what the reader and writer are doing.

use synd_rs::{FeedType, InputConfig, SyndFeedInput, SyndFeedOutput};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: convert <feed.xml> [feed type]");
        eprintln!(
            "feed types: {}",
            FeedType::ALL.map(|t| t.as_str()).join(", ")
        );
        std::process::exit(2);
    };
    let target: FeedType = args.next().as_deref().unwrap_or("atom_1.0").parse()?;

    let xml = std::fs::read_to_string(&path)?;

    // Netscape 0.91 feeds carry a DOCTYPE
    let input = SyndFeedInput::with_config(InputConfig::lenient());
    let mut feed = input.build(&xml)?;

    eprintln!(
        "Read {} ({}) with {} entries",
        feed.title().unwrap_or("untitled"),
        feed.feed_type().map_or("unknown", |t| t.as_str()),
        feed.entries().len()
    );

    feed.set_feed_type(Some(target));
    println!("{}", SyndFeedOutput::new().output_string(&feed)?);

    Ok(())
}
