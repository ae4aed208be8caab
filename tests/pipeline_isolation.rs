// tests/pipeline_isolation.rs
// A feed that fails (transport or parse) must leave the rest of the batch
// untouched: output equals running the healthy feeds alone.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;

use morning_briefing::config::BriefingConfig;
use morning_briefing::error::FeedError;
use morning_briefing::fetch::FeedSource;
use morning_briefing::pipeline::Pipeline;

const TECHWIRE: &str = include_str!("fixtures/techwire.xml");
const NEWSDESK: &str = include_str!("fixtures/newsdesk.xml");
// Tue, 14 Nov 2023 22:13:20 +0000, shortly after the fixture pubDates.
const NOW: i64 = 1_700_000_000;

struct StaticFeed {
    label: &'static str,
    body: &'static str,
}

#[async_trait]
impl FeedSource for StaticFeed {
    fn label(&self) -> &str {
        self.label
    }
    async fn fetch(&self) -> Result<String, FeedError> {
        Ok(self.body.to_string())
    }
}

struct DownFeed;

#[async_trait]
impl FeedSource for DownFeed {
    fn label(&self) -> &str {
        "DownFeed"
    }
    async fn fetch(&self) -> Result<String, FeedError> {
        Err(FeedError::network("https://down.test/feed", "connection refused"))
    }
}

fn pipeline() -> Pipeline {
    Pipeline::from_config(&BriefingConfig::default())
}

fn techwire() -> Box<dyn FeedSource> {
    Box::new(StaticFeed {
        label: "TechWire",
        body: TECHWIRE,
    })
}

fn newsdesk() -> Box<dyn FeedSource> {
    Box::new(StaticFeed {
        label: "NewsDesk",
        body: NEWSDESK,
    })
}

#[tokio::test]
async fn network_failure_is_isolated() {
    let p = pipeline();

    let with_failure: Vec<Box<dyn FeedSource>> = vec![techwire(), Box::new(DownFeed), newsdesk()];
    let healthy_only: Vec<Box<dyn FeedSource>> = vec![techwire(), newsdesk()];

    let mut rng_a = StdRng::seed_from_u64(9);
    let mut rng_b = StdRng::seed_from_u64(9);
    let a = p.collect(&with_failure, NOW, &mut rng_a).await;
    let b = p.collect(&healthy_only, NOW, &mut rng_b).await;

    assert_eq!(a, b, "failing feed changed the aggregated output");
    assert!(!a.is_empty());
}

#[tokio::test]
async fn parse_failure_is_isolated() {
    let p = pipeline();

    let with_garbage: Vec<Box<dyn FeedSource>> = vec![
        techwire(),
        Box::new(StaticFeed {
            label: "Garbage",
            body: "<html>this is not a feed</html>",
        }),
        newsdesk(),
    ];
    let healthy_only: Vec<Box<dyn FeedSource>> = vec![techwire(), newsdesk()];

    let mut rng_a = StdRng::seed_from_u64(9);
    let mut rng_b = StdRng::seed_from_u64(9);
    let a = p.collect(&with_garbage, NOW, &mut rng_a).await;
    let b = p.collect(&healthy_only, NOW, &mut rng_b).await;

    assert_eq!(a, b);
}
