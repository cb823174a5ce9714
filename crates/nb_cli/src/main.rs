use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;

use nb_core::{config, CompletionModel, Credentials};
use nb_inference::models::DEFAULT_MODEL;
use nb_inference::{Analyst, GroqModel};
use nb_news::{NewsApiSource, DEFAULT_DAYS_BACK};
use nb_web::AppState;

#[derive(Parser, Debug)]
#[command(author, version, about = "AI news analysis over a search API and an LLM", long_about = None)]
struct Cli {
    /// NewsAPI key. Falls back to the NEWSAPI_KEY environment variable.
    #[arg(long, env = config::NEWSAPI_KEY_VAR, hide_env_values = true)]
    newsapi_key: Option<String>,

    /// Groq API key. Falls back to the GROQ_API_KEY environment variable.
    #[arg(long, env = config::GROQ_KEY_VAR, hide_env_values = true)]
    groq_key: Option<String>,

    /// Chat model used for analysis generation.
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the web UI
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        #[arg(long, default_value_t = 3000)]
        port: u16,
    },
    /// Run one analysis and print it to stdout
    Analyze {
        /// Free-text news query
        query: String,
        /// Lookback window in days (1-30)
        #[arg(long, default_value_t = DEFAULT_DAYS_BACK)]
        days: u32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let credentials = Credentials::resolve(cli.newsapi_key, cli.groq_key)?;

    let source = Arc::new(NewsApiSource::new(credentials.newsapi_key));
    let model = Arc::new(GroqModel::new(credentials.groq_key, cli.model));
    info!("🧠 completion model initialized ({})", model.name());
    let analyst = Analyst::new(source, model);

    match cli.command {
        Commands::Serve { host, port } => {
            let app = nb_web::create_app(AppState { analyst }).await;
            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            info!("🌐 listening on http://{addr}");
            axum::serve(listener, app).await?;
        }
        Commands::Analyze { query, days } => {
            let report = analyst.run(&query, days).await;
            for notice in &report.notices {
                eprintln!("⚠️  {notice}");
            }
            println!("{}", report.outcome.display_text());
            if !report.articles.is_empty() {
                println!();
                for article in &report.articles {
                    println!(
                        "- {} ({}, {})",
                        article.title,
                        article.source,
                        article.published_at.format("%Y-%m-%d")
                    );
                }
            }
        }
    }

    Ok(())
}
