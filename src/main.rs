use clap::Parser;
use tradejournal::cli::commands::{Cli, Commands};
use tradejournal::domain::entities::psychology_entry::PsychologyDraft;
use tradejournal::domain::entities::strategy::StrategyDraft;
use tradejournal::domain::entities::trade::TradeDraft;
use tradejournal::domain::values::emotion::Emotion;
use tradejournal::TradeJournal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let journal = match TradeJournal::new() {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error initializing journal: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(journal, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(journal: TradeJournal, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::TradeAdd { json } => {
            let draft = parse_trade_draft(&json)?;
            let trade = journal.trade_add(draft).await?;
            println!("{}", serde_json::to_string_pretty(&trade)?);
        }
        Commands::Trades { date } => {
            let trades = match date {
                Some(d) => journal.trades_on(parse_date(&d)?).await?,
                None => journal.trades().await?,
            };
            println!("{}", serde_json::to_string_pretty(&trades)?);
        }
        Commands::TradeUpdate { id, json } => {
            let draft = parse_trade_draft(&json)?;
            let trade = journal.trade_update(id, draft).await?;
            println!("{}", serde_json::to_string_pretty(&trade)?);
        }
        Commands::TradeDelete { id } => {
            journal.trade_delete(id).await?;
            println!("Trade {id} deleted");
        }
        Commands::StrategyAdd { name, description } => {
            let strategy = journal.strategy_add(StrategyDraft { name, description }).await?;
            println!("{}", serde_json::to_string_pretty(&strategy)?);
        }
        Commands::Strategies => {
            let strategies = journal.strategies().await?;
            println!("{}", serde_json::to_string_pretty(&strategies)?);
        }
        Commands::StrategyUpdate { id, name, description } => {
            let strategy = journal
                .strategy_update(id, StrategyDraft { name, description })
                .await?;
            println!("{}", serde_json::to_string_pretty(&strategy)?);
        }
        Commands::StrategyDelete { id } => {
            journal.strategy_delete(id).await?;
            println!("Strategy {id} deleted");
        }
        Commands::PsychAdd { json } => {
            let draft: PsychologyDraft = serde_json::from_str(&json)?;
            let entry = journal.psychology_add(draft).await?;
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
        Commands::Psych => {
            let entries = journal.psychology_entries().await?;
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        Commands::PsychUpdate { id, json } => {
            let draft: PsychologyDraft = serde_json::from_str(&json)?;
            let entry = journal.psychology_update(id, draft).await?;
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
        Commands::PsychDelete { id } => {
            journal.psychology_delete(id).await?;
            println!("Psychology entry {id} deleted");
        }
        Commands::Stats => {
            let stats = journal.stats().await?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        Commands::Performance => {
            let rows = journal.strategy_performance().await?;
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        Commands::Calendar { month } => {
            let mut days = journal.daily_summaries().await?;
            if let Some(m) = month {
                days.retain(|d| d.date.format("%Y-%m").to_string() == m);
            }
            println!("{}", serde_json::to_string_pretty(&days)?);
        }
    }
    Ok(())
}

/// Parse a trade draft from the CLI JSON blob, canonicalizing the emotion
/// tag when one is given.
fn parse_trade_draft(json: &str) -> Result<TradeDraft, Box<dyn std::error::Error>> {
    let mut draft: TradeDraft = serde_json::from_str(json)?;
    if let Some(emotion) = &draft.emotion {
        let canonical: Emotion = emotion.parse().map_err(|e: String| e)?;
        draft.emotion = Some(canonical.to_string());
    }
    Ok(draft)
}

fn parse_date(s: &str) -> Result<chrono::NaiveDate, String> {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date format: {s}. Use YYYY-MM-DD"))
}
