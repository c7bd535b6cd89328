use std::{
    future::Future,
    io::{self, Write},
    net::SocketAddr,
    path::PathBuf,
    process::ExitCode,
    sync::Arc,
};
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};
use ns_core::{
    analysis::SentimentFilter,
    query::{DEFAULT_DAYS, DEFAULT_LANGUAGE, DEFAULT_QUERY},
    AppConfig, Error, NewsApiConfig, NewsQuery, NewsSource,
};
use ns_news::{init_logging, NewsAnalyzer, NewsApiClient};
use ns_sentiment::{create_model, ModelKind};
use ns_web::AppState;

mod output;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "AI News Sentiment Analyzer",
    long_about = "Fetches news from NewsAPI and scores the sentiment of each headline.",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(flatten)]
    analyze: AnalyzeArgs,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Search query for news articles
    #[arg(short, long, default_value = DEFAULT_QUERY)]
    query: String,
    /// Number of days to look back
    #[arg(short, long, default_value_t = DEFAULT_DAYS, value_parser = clap::value_parser!(u32).range(1..))]
    days: u32,
    /// Comma-separated list of news sources (e.g. "techcrunch,wired")
    #[arg(short, long)]
    sources: Option<String>,
    /// Maximum number of articles to display
    #[arg(short, long, default_value_t = 10)]
    max_articles: usize,
    /// Show only the sentiment analysis summary
    #[arg(long)]
    sentiment_only: bool,
    /// Show only positive articles
    #[arg(long, conflicts_with = "negative_only")]
    positive_only: bool,
    /// Show only negative articles
    #[arg(long)]
    negative_only: bool,
    /// Sentiment model: lexicon or vader
    #[arg(long, default_value = "lexicon")]
    model: ModelKind,
    /// Article language code
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    language: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the interactive dashboard
    Serve {
        #[arg(long, default_value = "127.0.0.1:8501")]
        addr: SocketAddr,
        /// Dashboard options file; built-in defaults are used when it does not exist
        #[arg(long, default_value = "config.json")]
        config: PathBuf,
    },
    /// Score text without calling the news API
    Score {
        #[arg(long, default_value = "lexicon")]
        model: ModelKind,
        /// Each argument is scored separately
        #[arg(required = true)]
        text: Vec<String>,
    },
}

fn news_source() -> ns_core::Result<Arc<dyn NewsSource>> {
    let client = NewsApiClient::new(NewsApiConfig::from_env()?)?;
    Ok(Arc::new(client))
}

async fn run_analysis(
    args: AnalyzeArgs,
    source: ns_core::Result<Arc<dyn NewsSource>>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    output::print_header(out)?;
    output::print_search(out, &args.query, args.days, args.sources.as_deref())?;
    out.flush()?;

    let analyzer = NewsAnalyzer::new(source?, create_model(args.model));
    let query = NewsQuery::new(args.query.as_str())
        .with_days(args.days)
        .with_language(args.language.as_str())
        .with_sources(args.sources.clone());
    let articles = analyzer.analyze(&query).await?;

    if articles.is_empty() {
        writeln!(out, "❌ No articles found. Try adjusting your search parameters.")?;
        return Ok(());
    }

    let filter = SentimentFilter::from_flags(args.positive_only, args.negative_only);
    let articles = filter.apply(articles);
    if let Some(notice) = filter.notice() {
        writeln!(out, "{}", notice)?;
    }

    if args.sentiment_only {
        output::display_sentiment_analysis(out, &articles)?;
    } else {
        output::display_articles(out, &articles, args.max_articles)?;
        output::display_sentiment_analysis(out, &articles)?;
        output::display_sources(out, &articles)?;
    }

    writeln!(out, "\n✅ Analysis complete! Processed {} articles.", articles.len())?;
    Ok(())
}

enum Outcome {
    Finished(anyhow::Result<()>),
    Interrupted,
}

/// Race the analysis against Ctrl-C. A signal handler that fails to install
/// never counts as an interrupt.
async fn run_until_interrupted<A, I>(analysis: A, interrupt: I) -> Outcome
where
    A: Future<Output = anyhow::Result<()>>,
    I: Future<Output = io::Result<()>>,
{
    tokio::select! {
        result = analysis => Outcome::Finished(result),
        Ok(()) = interrupt => Outcome::Interrupted,
    }
}

async fn run_server(addr: SocketAddr, config_path: PathBuf) -> anyhow::Result<()> {
    let config = AppConfig::load(&config_path)
        .with_context(|| format!("failed to load dashboard options from {}", config_path.display()))?;

    let source = match news_source() {
        Ok(source) => Some(source),
        Err(Error::MissingApiKey) => {
            warn!("⚠️ NEWSAPI_KEY is not set; analyses will report the missing key");
            None
        }
        Err(e) => return Err(e.into()),
    };

    info!("🧠 Sentiment models available: {}", config.model_options.join(", "));
    ns_web::serve(addr, AppState::new(source, config)).await?;
    Ok(())
}

fn run_score(model: ModelKind, texts: &[String], out: &mut impl Write) -> io::Result<()> {
    let model = create_model(model);
    writeln!(out, "Sentiment Analysis ({}):", model.name())?;
    writeln!(out)?;
    for text in texts {
        output::display_score(out, text, &model.analyze(text))?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve { addr, config }) => {
            init_logging("info");
            if let Err(e) = run_server(addr, config).await {
                eprintln!("❌ Error occurred: {:#}", e);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Some(Commands::Score { model, text }) => {
            init_logging("warn");
            match run_score(model, &text, &mut io::stdout().lock()) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("❌ Error occurred: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        None => {
            init_logging("warn");
            let mut stdout = io::stdout();
            let analysis = run_analysis(cli.analyze, news_source(), &mut stdout);
            match run_until_interrupted(analysis, tokio::signal::ctrl_c()).await {
                Outcome::Finished(Ok(())) => ExitCode::SUCCESS,
                Outcome::Finished(Err(e)) => {
                    println!("❌ Error occurred: {:#}", e);
                    println!("Please check your API key and internet connection.");
                    ExitCode::FAILURE
                }
                Outcome::Interrupted => {
                    println!("\n👋 Analysis interrupted by user.");
                    ExitCode::SUCCESS
                }
            }
        }
    }
}
