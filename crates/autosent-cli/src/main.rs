mod auth;
mod filters;
mod views;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use autosent_analytics::drilldown::{DEFAULT_FEATURE_LIMIT, DEFAULT_PAGE_SIZE};
use autosent_analytics::{
    aggregate_by_date_and_category, aggregate_by_model_and_category, feature_feedback,
    model_feedback, moving_average, paginate, rank_features, sentiment_breakdown,
    DashboardSession, Dataset,
};
use autosent_client::DataApiClient;
use autosent_core::{AppConfig, FeatureFocus, Polarity, SummaryQuery};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::filters::FilterArgs;

#[derive(Debug, Parser)]
#[command(name = "autosent-cli")]
#[command(about = "Customer feedback sentiment dashboard for the terminal")]
struct Cli {
    /// Read records from a local JSON file instead of the data API
    #[arg(long, global = true, env = "AUTOSENT_DATA_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Sentiment counts per model and category
    Chart {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Moving average of daily sentiment counts
    Trend {
        #[command(flatten)]
        filters: FilterArgs,
        /// Trailing window in days (defaults to the configured window)
        #[arg(long)]
        window: Option<usize>,
    },
    /// Overall sentiment distribution
    Breakdown {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Top positive and negative features per model
    Features {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Values available for each filter dimension
    Options {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Paged feedback for one model
    Feedback {
        model: String,
        /// Narrow to one feature; requires --polarity
        #[arg(long, requires = "polarity")]
        feature: Option<String>,
        /// positive or negative; requires --feature
        #[arg(long, requires = "feature")]
        polarity: Option<Polarity>,
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        per_page: usize,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Feedback mentioning one feature
    FeatureFeedback {
        feature: String,
        #[arg(long, default_value_t = DEFAULT_FEATURE_LIMIT)]
        limit: usize,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Summaries for one chart cell, from the data API
    Summary {
        #[arg(long)]
        category: String,
        /// Comma-separated models
        #[arg(long, value_delimiter = ',')]
        models: Vec<String>,
        /// Day of the cell, DD-MM-YYYY
        #[arg(long)]
        date: String,
        #[arg(long)]
        brand: String,
    },
    /// A single feedback record, from the data API
    Details {
        model: String,
        index: usize,
        /// DD-MM-YYYY or YYYY-MM-DD
        #[arg(value_parser = parse_date_arg)]
        date: NaiveDate,
    },
    Signin {
        #[arg(long)]
        email: String,
        #[arg(long, env = "AUTOSENT_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Signup {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "AUTOSENT_PASSWORD", hide_env_values = true)]
        password: String,
    },
}

fn parse_date_arg(raw: &str) -> Result<NaiveDate, String> {
    autosent_analytics::normalize::parse_date(raw)
        .ok_or_else(|| format!("expected DD-MM-YYYY or YYYY-MM-DD, got '{raw}'"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();
    let config = autosent_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let Some(command) = cli.command else {
        print!("{}", views::render_navigation());
        return Ok(());
    };

    match command {
        Commands::Summary {
            category,
            models,
            date,
            brand,
        } => {
            let query = SummaryQuery {
                category,
                models,
                date,
                brand,
            };
            let records = DataApiClient::from_config(&config)?
                .detailed_summary(&query)
                .await?;
            print!("{}", views::render_summary(&records));
        }
        Commands::Details { model, index, date } => {
            let raw = DataApiClient::from_config(&config)?
                .feedback_details(&model, index, date)
                .await?;
            let record = autosent_analytics::normalize_record(index, &raw);
            let page = paginate(&[&record], 1, 1);
            print!("{}", views::render_feedback_page(&page));
        }
        Commands::Signin { email, password } => {
            auth::run_sign_in(&config, email, password).await?;
        }
        Commands::Signup {
            username,
            email,
            password,
        } => {
            auth::run_sign_up(&config, username, email, password).await?;
        }
        view => {
            let dataset = Arc::new(load_dataset(cli.file.as_ref(), &config).await?);
            run_view(view, dataset, config.moving_average_window)?;
        }
    }

    Ok(())
}

async fn load_dataset(file: Option<&PathBuf>, config: &AppConfig) -> anyhow::Result<Dataset> {
    if let Some(path) = file {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let dataset = Dataset::from_json(&json)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        tracing::info!(records = dataset.len(), path = %path.display(), "loaded feedback file");
        return Ok(dataset);
    }
    let raw = DataApiClient::from_config(config)?.fetch_records().await?;
    let dataset = Dataset::from_raw(&raw);
    tracing::info!(
        records = dataset.len(),
        api_base_url = %config.api_base_url,
        "loaded feedback dataset"
    );
    Ok(dataset)
}

fn open_session(dataset: Arc<Dataset>, filters: &FilterArgs) -> anyhow::Result<DashboardSession> {
    Ok(DashboardSession::with_filters(dataset, filters.to_state()?))
}

fn run_view(view: Commands, dataset: Arc<Dataset>, configured_window: usize) -> anyhow::Result<()> {
    let output = match view {
        Commands::Chart { filters } => {
            let session = open_session(dataset, &filters)?;
            views::render_model_category(&aggregate_by_model_and_category(session.filtered()))
        }
        Commands::Trend { filters, window } => {
            let window = match window {
                Some(0) => anyhow::bail!("--window must be at least 1"),
                Some(w) => w,
                None => configured_window,
            };
            let session = open_session(dataset, &filters)?;
            let series = aggregate_by_date_and_category(session.filtered());
            views::render_trend(&moving_average(&series, window), window)
        }
        Commands::Breakdown { filters } => {
            let session = open_session(dataset, &filters)?;
            views::render_breakdown(&sentiment_breakdown(session.filtered()))
        }
        Commands::Features { filters } => {
            let session = open_session(dataset, &filters)?;
            views::render_features(&rank_features(session.filtered()))
        }
        Commands::Options { filters } => {
            let session = open_session(dataset, &filters)?;
            views::render_options(&session.options())
        }
        Commands::Feedback {
            model,
            feature,
            polarity,
            page,
            per_page,
            filters,
        } => {
            let session = open_session(dataset, &filters)?;
            let focus = feature
                .zip(polarity)
                .map(|(feature, polarity)| FeatureFocus { feature, polarity });
            let records = model_feedback(session.filtered(), &model, focus.as_ref());
            if records.is_empty() {
                anyhow::bail!("no feedback found for model '{model}'");
            }
            views::render_feedback_page(&paginate(&records, page, per_page))
        }
        Commands::FeatureFeedback {
            feature,
            limit,
            filters,
        } => {
            let session = open_session(dataset, &filters)?;
            let records = feature_feedback(session.filtered(), &feature, limit);
            views::render_feedback_page(&paginate(&records, 1, records.len()))
        }
        Commands::Summary { .. }
        | Commands::Details { .. }
        | Commands::Signin { .. }
        | Commands::Signup { .. } => anyhow::bail!("command does not read the local dataset"),
    };
    print!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests;
