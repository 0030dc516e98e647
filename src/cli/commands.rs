use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tradejournal", about = "Personal trading journal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a trade
    TradeAdd {
        /// JSON with tradeDate, stockName, quantity, entryPrice, exitPrice,
        /// stopLoss, targetPrice, setupFollowed, whichSetup, emotion, notes
        json: String,
    },
    /// List trades
    Trades {
        /// Only trades on this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    /// Update a trade (full-field replace)
    TradeUpdate {
        /// Trade ID
        id: i64,
        /// JSON with the full replacement fields
        json: String,
    },
    /// Delete a trade
    TradeDelete {
        /// Trade ID
        id: i64,
    },
    /// Add a strategy
    StrategyAdd {
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// List strategies
    Strategies,
    /// Rename a strategy
    StrategyUpdate {
        /// Strategy ID
        id: i64,
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a strategy
    StrategyDelete {
        /// Strategy ID
        id: i64,
    },
    /// Add a psychology entry
    PsychAdd {
        /// JSON with entryDate, dailyPnl, bestTradeId, worstTradeId,
        /// mentalReflections, improvementAreas
        json: String,
    },
    /// List psychology entries
    Psych,
    /// Update a psychology entry
    PsychUpdate {
        /// Entry ID
        id: i64,
        /// JSON with the full replacement fields
        json: String,
    },
    /// Delete a psychology entry
    PsychDelete {
        /// Entry ID
        id: i64,
    },
    /// Show performance statistics
    Stats,
    /// Per-strategy performance breakdown
    Performance,
    /// Per-day P&L summary for the trading calendar
    Calendar {
        /// Restrict to one month (YYYY-MM)
        #[arg(long)]
        month: Option<String>,
    },
}
