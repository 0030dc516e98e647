//! Partitioning trades for per-strategy and per-day reporting.
//!
//! Grouping is lossless (every input trade appears in exactly one group) and
//! stable (order within a group matches input order).

use crate::application::metrics;
use crate::domain::entities::trade::Trade;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Bucket for trades with no strategy tag.
pub const UNASSIGNED: &str = "unassigned";

/// Partition by strategy name. Trades with a missing or blank `which_setup`
/// land in the [`UNASSIGNED`] bucket rather than being dropped.
pub fn group_by_strategy(trades: &[Trade]) -> BTreeMap<String, Vec<Trade>> {
    let mut groups: BTreeMap<String, Vec<Trade>> = BTreeMap::new();
    for trade in trades {
        let key = trade
            .which_setup
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(UNASSIGNED)
            .to_string();
        groups.entry(key).or_default().push(trade.clone());
    }
    groups
}

/// Partition by calendar date, for the trading calendar / heatmap.
pub fn group_by_date(trades: &[Trade]) -> BTreeMap<NaiveDate, Vec<Trade>> {
    let mut groups: BTreeMap<NaiveDate, Vec<Trade>> = BTreeMap::new();
    for trade in trades {
        groups.entry(trade.trade_date).or_default().push(trade.clone());
    }
    groups
}

/// One row of the strategy performance breakdown.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyPerformance {
    pub strategy: String,
    pub trades: usize,
    pub pnl: f64,
    pub win_rate: f64,
}

/// Per-strategy aggregate, sorted by P&L descending.
pub fn strategy_performance(trades: &[Trade]) -> Vec<StrategyPerformance> {
    let mut rows: Vec<StrategyPerformance> = group_by_strategy(trades)
        .into_iter()
        .map(|(strategy, group)| StrategyPerformance {
            strategy,
            trades: group.len(),
            pnl: metrics::total_pnl(&group),
            win_rate: metrics::win_rate(&group),
        })
        .collect();
    rows.sort_by(|a, b| b.pnl.partial_cmp(&a.pnl).unwrap_or(std::cmp::Ordering::Equal));
    rows
}

/// One calendar day of trading activity.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    pub date: NaiveDate,
    pub trades: usize,
    pub pnl: f64,
}

/// Per-day aggregate in chronological order.
pub fn daily_summaries(trades: &[Trade]) -> Vec<DaySummary> {
    group_by_date(trades)
        .into_iter()
        .map(|(date, group)| DaySummary {
            date,
            trades: group.len(),
            pnl: metrics::total_pnl(&group),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::trade::TradeDraft;

    fn trade(id: i64, date: &str, setup: Option<&str>, pnl: &str) -> Trade {
        let draft = TradeDraft {
            trade_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            stock_name: "TEST".into(),
            quantity: 1,
            entry_price: "100".into(),
            exit_price: None,
            stop_loss: None,
            target_price: None,
            profit_loss: Some(pnl.into()),
            setup_followed: setup.is_some(),
            which_setup: setup.map(String::from),
            emotion: None,
            notes: None,
            psychology_reflections: None,
            screenshot_link: None,
        };
        Trade::from_draft(id, &draft)
    }

    #[test]
    fn test_union_equals_input() {
        let trades = vec![
            trade(1, "2025-01-02", Some("breakout"), "100"),
            trade(2, "2025-01-02", None, "-50"),
            trade(3, "2025-01-03", Some("breakout"), "30"),
            trade(4, "2025-01-04", Some("  "), "0"),
        ];
        let groups = group_by_strategy(&trades);
        let mut ids: Vec<i64> = groups.values().flatten().map(|t| t.id).collect();
        ids.sort();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_blank_setup_is_unassigned() {
        let trades = vec![
            trade(1, "2025-01-02", None, "10"),
            trade(2, "2025-01-02", Some(""), "20"),
        ];
        let groups = group_by_strategy(&trades);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[UNASSIGNED].len(), 2);
    }

    #[test]
    fn test_within_group_order_is_input_order() {
        let trades = vec![
            trade(3, "2025-01-05", Some("gap"), "1"),
            trade(1, "2025-01-01", Some("gap"), "2"),
            trade(2, "2025-01-03", Some("gap"), "3"),
        ];
        let groups = group_by_strategy(&trades);
        let ids: Vec<i64> = groups["gap"].iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_group_by_date() {
        let trades = vec![
            trade(1, "2025-01-02", None, "10"),
            trade(2, "2025-01-03", None, "20"),
            trade(3, "2025-01-02", None, "-5"),
        ];
        let groups = group_by_date(&trades);
        assert_eq!(groups.len(), 2);
        let d = NaiveDate::parse_from_str("2025-01-02", "%Y-%m-%d").unwrap();
        assert_eq!(groups[&d].len(), 2);
    }

    #[test]
    fn test_strategy_performance_sorted_by_pnl() {
        let trades = vec![
            trade(1, "2025-01-02", Some("gap"), "10"),
            trade(2, "2025-01-03", Some("breakout"), "200"),
            trade(3, "2025-01-04", Some("gap"), "-30"),
        ];
        let rows = strategy_performance(&trades);
        assert_eq!(rows[0].strategy, "breakout");
        assert_eq!(rows[0].pnl, 200.0);
        assert_eq!(rows[1].strategy, "gap");
        assert_eq!(rows[1].trades, 2);
        assert_eq!(rows[1].win_rate, 0.5);
    }

    #[test]
    fn test_daily_summaries_chronological() {
        let trades = vec![
            trade(1, "2025-01-05", None, "10"),
            trade(2, "2025-01-02", None, "20"),
        ];
        let days = daily_summaries(&trades);
        assert_eq!(days.len(), 2);
        assert!(days[0].date < days[1].date);
        assert_eq!(days[0].pnl, 20.0);
    }
}
