//! Plain-text rendering of an analysis for the terminal.

use std::io::{self, Write};
use ns_core::analysis::{self, SentimentSummary};
use ns_core::{ScoredArticle, SentimentResult};

pub const DESCRIPTION_LIMIT: usize = 100;
pub const TOP_SOURCES: usize = 10;

pub fn print_header(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "🤖 AI News Sentiment Analyzer")?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out)
}

pub fn print_search(out: &mut impl Write, query: &str, days: u32, sources: Option<&str>) -> io::Result<()> {
    writeln!(out, "🔍 Searching for: \"{}\"", query)?;
    writeln!(out, "📅 Looking back: {} days", days)?;
    if let Some(sources) = sources {
        writeln!(out, "📰 Sources: {}", sources)?;
    }
    writeln!(out)
}

/// Description cut to `DESCRIPTION_LIMIT` characters, or a placeholder when absent.
pub fn short_description(description: Option<&str>) -> String {
    match description.map(str::trim).filter(|d| !d.is_empty()) {
        None => "No description available".to_string(),
        Some(d) if d.chars().count() > DESCRIPTION_LIMIT => {
            format!("{}...", d.chars().take(DESCRIPTION_LIMIT).collect::<String>())
        }
        Some(d) => d.to_string(),
    }
}

pub fn display_articles(out: &mut impl Write, articles: &[ScoredArticle], max_articles: usize) -> io::Result<()> {
    if articles.is_empty() {
        return writeln!(out, "❌ No articles found.");
    }

    let summary = SentimentSummary::from_articles(articles);
    writeln!(out, "📰 Found {} articles", articles.len())?;
    writeln!(out, "\nSentiment Distribution:")?;
    for (label, count, percentage) in summary.distribution() {
        writeln!(
            out,
            "  {} {}: {} articles ({:.1}%)",
            label.emoji(),
            label.title(),
            count,
            percentage
        )?;
    }

    writeln!(out, "\n📄 Top {} Articles:", max_articles.min(articles.len()))?;
    writeln!(out, "{}", "-".repeat(80))?;

    for (idx, scored) in articles.iter().take(max_articles).enumerate() {
        let article = &scored.article;
        let label = scored.label();
        writeln!(
            out,
            "{:2}. {} [{}] {}",
            idx + 1,
            label.emoji(),
            article.source,
            article.published_at.format("%Y-%m-%d %H:%M")
        )?;
        writeln!(out, "    {}", article.title)?;
        writeln!(out, "    Sentiment: {} (Score: {:.2})", label.title(), scored.polarity())?;
        writeln!(out, "    📝 {}", short_description(article.description.as_deref()))?;
        writeln!(out, "    🔗 {}", article.url)?;
        writeln!(out)?;
    }
    Ok(())
}

pub fn display_sentiment_analysis(out: &mut impl Write, articles: &[ScoredArticle]) -> io::Result<()> {
    if articles.is_empty() {
        return Ok(());
    }
    let summary = SentimentSummary::from_articles(articles);

    writeln!(out, "\n📊 Sentiment Analysis Summary:")?;
    writeln!(out, "{}", "-".repeat(40))?;
    writeln!(out, "Average Polarity: {:.3} (Range: -1.0 to +1.0)", summary.average_polarity)?;
    writeln!(out, "Average Subjectivity: {:.3} (Range: 0.0 to 1.0)", summary.average_subjectivity)?;
    writeln!(out, "Overall Mood: {}", summary.mood)?;

    if let Some(best) = &summary.most_positive {
        writeln!(out, "\n😊 Most Positive: \"{}\" ({:.2})", best.title, best.polarity)?;
    }
    if let Some(worst) = &summary.most_negative {
        writeln!(out, "😞 Most Negative: \"{}\" ({:.2})", worst.title, worst.polarity)?;
    }
    Ok(())
}

pub fn display_sources(out: &mut impl Write, articles: &[ScoredArticle]) -> io::Result<()> {
    if articles.is_empty() {
        return Ok(());
    }
    writeln!(out, "\n📺 News Sources:")?;
    writeln!(out, "{}", "-".repeat(30))?;
    for row in analysis::source_counts(articles, TOP_SOURCES) {
        writeln!(out, "  📰 {}: {} articles", row.source, row.count)?;
    }
    Ok(())
}

pub fn display_score(out: &mut impl Write, text: &str, result: &SentimentResult) -> io::Result<()> {
    writeln!(out, "Text: {}", text)?;
    writeln!(
        out,
        "Sentiment: {} (polarity: {:.2}, subjectivity: {:.2})",
        result.label,
        result.polarity,
        result.subjectivity
    )?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use ns_core::{Article, SentimentResult};

    fn scored(title: &str, source: &str, polarity: f64, description: Option<&str>) -> ScoredArticle {
        let sentiment = SentimentResult::new(polarity, 0.4, 0.1);
        ScoredArticle {
            article: Article {
                source: source.to_string(),
                title: title.to_string(),
                description: description.map(String::from),
                author: None,
                published_at: Utc.with_ymd_and_hms(2024, 5, 1, 14, 5, 0).unwrap(),
                url: format!("https://example.com/{}", source.to_lowercase()),
            },
            sentiment,
            title_sentiment: sentiment,
            description_sentiment: SentimentResult::neutral(),
        }
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_short_description() {
        assert_eq!(short_description(None), "No description available");
        assert_eq!(short_description(Some("  ")), "No description available");
        assert_eq!(short_description(Some("short")), "short");

        let long = "é".repeat(120);
        let cut = short_description(Some(&long));
        assert_eq!(cut.chars().count(), 103);
        assert!(cut.ends_with("..."));

        let exact = "a".repeat(100);
        assert_eq!(short_description(Some(&exact)), exact);
    }

    #[test]
    fn test_display_articles() {
        let articles = vec![
            scored("Good news", "Wired", 0.5, Some("Details")),
            scored("Bad news", "BBC", -0.5, None),
            scored("More good news", "Wired", 0.3, None),
        ];
        let text = render(|out| display_articles(out, &articles, 2));

        assert!(text.contains("📰 Found 3 articles"));
        assert!(text.contains("  😊 Positive: 2 articles (66.7%)"));
        assert!(text.contains("  😞 Negative: 1 articles (33.3%)"));
        assert!(!text.contains("Neutral"));
        assert!(text.contains("📄 Top 2 Articles:"));
        assert!(text.contains(" 1. 😊 [Wired] 2024-05-01 14:05"));
        assert!(text.contains("    Sentiment: Negative (Score: -0.50)"));
        assert!(text.contains("    📝 No description available"));
        assert!(!text.contains("More good news"));
    }

    #[test]
    fn test_display_articles_empty() {
        let text = render(|out| display_articles(out, &[], 10));
        assert_eq!(text, "❌ No articles found.\n");
    }

    #[test]
    fn test_display_sentiment_analysis() {
        let articles = vec![
            scored("Great", "Wired", 0.8, None),
            scored("Fine", "Wired", 0.2, None),
            scored("Awful", "BBC", -0.4, None),
        ];
        let text = render(|out| display_sentiment_analysis(out, &articles));
        assert!(text.contains("Average Polarity: 0.200"));
        assert!(text.contains("Average Subjectivity: 0.400"));
        assert!(text.contains("Overall Mood: 📈 Generally Positive"));
        assert!(text.contains("😊 Most Positive: \"Great\" (0.80)"));
        assert!(text.contains("😞 Most Negative: \"Awful\" (-0.40)"));

        assert!(render(|out| display_sentiment_analysis(out, &[])).is_empty());
    }

    #[test]
    fn test_most_negative_hidden_without_negatives() {
        let articles = vec![scored("Great", "Wired", 0.8, None)];
        let text = render(|out| display_sentiment_analysis(out, &articles));
        assert!(!text.contains("Most Negative"));
    }

    #[test]
    fn test_display_sources() {
        let articles = vec![
            scored("a", "Wired", 0.1, None),
            scored("b", "BBC", 0.1, None),
            scored("c", "Wired", 0.1, None),
        ];
        let text = render(|out| display_sources(out, &articles));
        let wired = text.find("📰 Wired: 2 articles").unwrap();
        let bbc = text.find("📰 BBC: 1 articles").unwrap();
        assert!(wired < bbc);
    }

    #[test]
    fn test_header_and_search() {
        let text = render(|out| {
            print_header(out)?;
            print_search(out, "robots", 3, Some("wired"))
        });
        assert!(text.starts_with("🤖 AI News Sentiment Analyzer\n"));
        assert!(text.contains("🔍 Searching for: \"robots\""));
        assert!(text.contains("📅 Looking back: 3 days"));
        assert!(text.contains("📰 Sources: wired"));
    }
}
