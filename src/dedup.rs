// src/dedup.rs
//! Title-based deduplication: case-insensitive, first occurrence wins,
//! order preserved. Equality is title-only, so the same headline from two
//! publishers is still one story.

use std::collections::HashSet;

use crate::article::Article;

pub fn dedup_by_title(articles: Vec<Article>) -> Vec<Article> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::with_capacity(articles.len());
    for article in articles {
        if seen.insert(article.title.to_lowercase()) {
            out.push(article);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::Category;

    fn article(title: &str, source: &str) -> Article {
        Article {
            title: title.into(),
            category: Category::Technology,
            summary: "s".into(),
            impact: "i".into(),
            source: source.into(),
            time: "Just now".into(),
            url: "#".into(),
        }
    }

    #[test]
    fn case_insensitive_first_occurrence_kept() {
        let input = vec![
            article("AI is growing", "A"),
            article("ai is growing", "B"),
            article("New Chip", "C"),
        ];
        let out = dedup_by_title(input);
        let titles: Vec<_> = out.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["AI is growing", "New Chip"]);
        // the retained entry is the first-seen one, including its source
        assert_eq!(out[0].source, "A");
    }

    #[test]
    fn differing_urls_do_not_make_titles_distinct() {
        let mut a = article("Same story", "A");
        a.url = "https://a.test".into();
        let mut b = article("Same story", "B");
        b.url = "https://b.test".into();
        let out = dedup_by_title(vec![a, b]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].url, "https://a.test");
    }
}
