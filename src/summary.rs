// src/summary.rs
//! Contextual summaries. A feed-provided description wins when present
//! (cleaned of markup, length-capped). Without one, a phrase pool matched
//! from title cues supplies the text; pool selection goes through an
//! injected `Rng` so tests can pin the output with a seeded generator.

use rand::Rng;

use crate::article::{normalize_text, Category};

/// Maximum summary length in the output artifact.
pub const MAX_SUMMARY_LEN: usize = 180;

#[derive(Debug, Clone)]
struct Pool {
    cues: &'static [&'static str],
    sentences: &'static [&'static str],
}

const GENERIC_TEMPLATES: &[&str] = &[
    "The latest {category} story drawing attention in this morning's briefing.",
    "Another {category} development on the radar for today.",
];

fn default_pools() -> Vec<Pool> {
    vec![
        Pool {
            cues: &[
                "stock", "shares", "invest", "billion", "market", "valuation", "funding",
            ],
            sentences: &[
                "Investors are weighing what the move means for the wider market.",
                "The financial stakes put fresh attention on where the money flows next.",
            ],
        },
        Pool {
            cues: &["layoff", "jobs", "hiring", "workforce", "employees", "talent"],
            sentences: &[
                "The shift lands directly on how tech teams are hired and organized.",
                "Workers across the industry are watching how this plays out.",
            ],
        },
        Pool {
            cues: &[
                "regulation",
                "regulators",
                "policy",
                "law",
                "ban",
                "government",
                "ruling",
            ],
            sentences: &[
                "Policymakers' next steps could set the tone for the entire sector.",
                "The decision adds momentum to the global debate over tech oversight.",
            ],
        },
        Pool {
            cues: &["research", "study", "paper", "university", "lab"],
            sentences: &[
                "Early results suggest practical applications are closer than expected.",
                "The work gives researchers a new baseline to build on.",
            ],
        },
        Pool {
            cues: &["chip", "gpu", "hardware", "processor", "device"],
            sentences: &[
                "The hardware race continues to drive capability up and costs down.",
                "Faster, cheaper compute keeps widening what products can ship.",
            ],
        },
    ]
}

#[derive(Debug, Clone)]
pub struct SummaryGenerator {
    pools: Vec<Pool>,
}

impl SummaryGenerator {
    pub fn new() -> Self {
        Self {
            pools: default_pools(),
        }
    }

    /// Produce a summary for one article. `description` is the raw feed
    /// description (may contain markup); an empty one falls through to the
    /// cue-matched pools.
    pub fn generate<R: Rng>(
        &self,
        title: &str,
        category: Category,
        description: &str,
        rng: &mut R,
    ) -> String {
        let desc = normalize_text(description);
        if !desc.is_empty() {
            return truncate_summary(&desc);
        }

        let lower = title.to_lowercase();
        for pool in &self.pools {
            if pool.cues.iter().any(|cue| lower.contains(cue)) {
                let idx = rng.random_range(0..pool.sentences.len());
                return pool.sentences[idx].to_string();
            }
        }

        let idx = rng.random_range(0..GENERIC_TEMPLATES.len());
        GENERIC_TEMPLATES[idx].replace("{category}", category.as_str())
    }
}

impl Default for SummaryGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn truncate_summary(s: &str) -> String {
    if s.chars().count() > MAX_SUMMARY_LEN {
        let mut cut: String = s.chars().take(MAX_SUMMARY_LEN).collect();
        cut = cut.trim_end().to_string();
        cut.push_str("...");
        cut
    } else {
        s.to_string()
    }
}
