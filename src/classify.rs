// src/classify.rs
//! Keyword-driven topic classification. The rule table is ordered and the
//! first entry with a substring hit in the lowercase title wins. There is
//! no scoring and no multi-label. Table order is part of the output
//! contract: reordering it changes classifications across runs.

use crate::article::Category;

#[derive(Debug, Clone)]
pub struct Rule {
    pub category: Category,
    pub impact: &'static str,
    pub keywords: &'static [&'static str],
}

pub const DEFAULT_IMPACT: &str = "A development worth watching across the tech landscape.";

/// The built-in rule table. Hardware precedes AI so titles like
/// "NVIDIA unveils new AI chip" land on Hardware.
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule {
            category: Category::Hardware,
            impact: "New silicon shapes the cost and speed of the next wave of AI systems.",
            keywords: &[
                "chip",
                "gpu",
                "semiconductor",
                "nvidia",
                "processor",
                "silicon",
                "data center",
                "robot",
            ],
        },
        Rule {
            category: Category::Security,
            impact: "Security incidents shape trust in connected products and platforms.",
            keywords: &[
                "security",
                "breach",
                "hack",
                "vulnerability",
                "ransomware",
                "malware",
                "phishing",
            ],
        },
        Rule {
            category: Category::Policy,
            impact: "Regulatory moves could reshape how technology products ship worldwide.",
            keywords: &[
                "regulat",
                "policy",
                "antitrust",
                "lawsuit",
                "congress",
                "senate",
                "court",
                "ban",
                "privacy law",
            ],
        },
        Rule {
            category: Category::Business,
            impact: "Capital flows hint at where the industry expects the next returns.",
            keywords: &[
                "funding",
                "acquisition",
                "merger",
                "ipo",
                "invest",
                "billion",
                "stock",
                "shares",
                "revenue",
                "valuation",
                "layoff",
            ],
        },
        Rule {
            category: Category::Research,
            impact: "New findings may set the direction of the next research cycle.",
            keywords: &[
                "research",
                "study",
                "paper",
                "breakthrough",
                "university",
                "scientists",
            ],
        },
        Rule {
            category: Category::Ai,
            impact: "Model progress keeps expanding what software can do.",
            keywords: &[
                "openai",
                "anthropic",
                "gemini",
                "chatgpt",
                "claude",
                "artificial intelligence",
                "machine learning",
                "llm",
                "chatbot",
                " ai ",
            ],
        },
    ]
}

/// Immutable classifier built from an explicit rule table (no ambient
/// globals), so rule sets are unit-testable in isolation.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<Rule>,
}

impl Classifier {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn classify(&self, title: &str) -> (Category, &'static str) {
        // padding lets short keywords be written with word boundaries
        // (" ai ") without a separate matching mode
        let lower = format!(" {} ", title.to_lowercase());
        for rule in &self.rules {
            if rule.keywords.iter().any(|kw| lower.contains(kw)) {
                return (rule.category, rule.impact);
            }
        }
        (Category::Technology, DEFAULT_IMPACT)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(default_rules())
    }
}
