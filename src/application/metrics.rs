//! Derived performance metrics over journaled trades.
//!
//! All functions are pure and total: malformed stored amounts coerce to 0,
//! empty input yields 0 for every metric, and nothing here returns NaN or
//! infinity.

use crate::domain::entities::trade::Trade;
use serde::Serialize;

/// Write-time profit/loss derivation: (exit − entry) × quantity.
pub fn compute_pnl(entry_price: f64, exit_price: f64, quantity: i64) -> f64 {
    (exit_price - entry_price) * quantity as f64
}

/// Sum of stored profit/loss across all trades. Open trades count as 0.
pub fn total_pnl(trades: &[Trade]) -> f64 {
    trades.iter().map(Trade::pnl).sum()
}

/// Winners over realized trades, as a fraction in [0, 1]. A trade is
/// realized when its stored P&L is non-zero; open and scratch trades are
/// excluded from the denominator.
pub fn win_rate(trades: &[Trade]) -> f64 {
    let realized = trades.iter().filter(|t| t.pnl() != 0.0).count();
    if realized == 0 {
        return 0.0;
    }
    let wins = trades.iter().filter(|t| t.pnl() > 0.0).count();
    wins as f64 / realized as f64
}

/// Mean of positive P&L values; 0 when there are no winners.
pub fn average_win(trades: &[Trade]) -> f64 {
    mean(trades.iter().map(Trade::pnl).filter(|p| *p > 0.0))
}

/// Mean of negative P&L values (itself negative); 0 when there are no losers.
pub fn average_loss(trades: &[Trade]) -> f64 {
    mean(trades.iter().map(Trade::pnl).filter(|p| *p < 0.0))
}

/// |average win / average loss|, defined as 0 when the average loss is 0 so
/// the ratio is never infinite or NaN.
pub fn profit_factor(trades: &[Trade]) -> f64 {
    let avg_loss = average_loss(trades);
    if avg_loss == 0.0 {
        return 0.0;
    }
    (average_win(trades) / avg_loss).abs()
}

/// Largest peak-to-trough decline of cumulative P&L, as a non-negative
/// magnitude. Trades are ordered by trade date before accumulating; the
/// stable sort keeps same-day trades in input order.
pub fn max_drawdown(trades: &[Trade]) -> f64 {
    let mut ordered: Vec<&Trade> = trades.iter().collect();
    ordered.sort_by_key(|t| t.trade_date);

    let mut cumulative = 0.0;
    let mut peak = 0.0;
    let mut drawdown = 0.0_f64;
    for trade in ordered {
        cumulative += trade.pnl();
        if cumulative > peak {
            peak = cumulative;
        }
        let decline = peak - cumulative;
        if decline > drawdown {
            drawdown = decline;
        }
    }
    drawdown
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values {
        sum += v;
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Aggregate summary for the `stats` command and any dashboard consumer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeStats {
    pub total_trades: usize,
    pub winning_trades: usize,
    pub losing_trades: usize,
    pub total_pnl: f64,
    pub win_rate: f64,
    pub average_win: f64,
    pub average_loss: f64,
    pub profit_factor: f64,
    pub max_drawdown: f64,
    pub best_trade: f64,
    pub worst_trade: f64,
}

impl TradeStats {
    pub fn from_trades(trades: &[Trade]) -> Self {
        Self {
            total_trades: trades.len(),
            winning_trades: trades.iter().filter(|t| t.pnl() > 0.0).count(),
            losing_trades: trades.iter().filter(|t| t.pnl() < 0.0).count(),
            total_pnl: total_pnl(trades),
            win_rate: win_rate(trades),
            average_win: average_win(trades),
            average_loss: average_loss(trades),
            profit_factor: profit_factor(trades),
            max_drawdown: max_drawdown(trades),
            best_trade: trades.iter().map(Trade::pnl).reduce(f64::max).unwrap_or(0.0),
            worst_trade: trades.iter().map(Trade::pnl).reduce(f64::min).unwrap_or(0.0),
        }
    }
}
