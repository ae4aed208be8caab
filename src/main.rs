//! Briefing refresh job, the binary entrypoint.
//! Runs one aggregation pass and writes the article array as JSON on
//! stdout; persistence and page templating are downstream collaborators.

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use morning_briefing::fetch::build_client;
use morning_briefing::{BriefingConfig, FeedSource, HttpFeedSource, Pipeline};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cfg = BriefingConfig::load_default().context("loading briefing config")?;
    let client = build_client(&cfg)?;
    let sources: Vec<Box<dyn FeedSource>> = cfg
        .feeds
        .iter()
        .map(|f| {
            Box::new(HttpFeedSource::new(
                f.name.clone(),
                f.url.clone(),
                client.clone(),
            )) as Box<dyn FeedSource>
        })
        .collect();

    let pipeline = Pipeline::from_config(&cfg);
    let mut rng = StdRng::from_os_rng();
    let articles = pipeline.run(&sources, &mut rng).await;

    let json = serde_json::to_string_pretty(&articles).context("serializing briefing output")?;
    println!("{json}");
    Ok(())
}
