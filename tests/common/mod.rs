//! Shared test helpers.

use chrono::NaiveDate;
use std::sync::Arc;
use tradejournal::domain::entities::psychology_entry::PsychologyDraft;
use tradejournal::domain::entities::trade::TradeDraft;
use tradejournal::infrastructure::memory::InMemoryStore;
use tradejournal::TradeJournal;

pub fn setup() -> TradeJournal {
    TradeJournal::with_store(Arc::new(InMemoryStore::new()))
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn trade_draft(day: &str, stock: &str, qty: i64, entry: &str, exit: Option<&str>) -> TradeDraft {
    TradeDraft {
        trade_date: date(day),
        stock_name: stock.to_string(),
        quantity: qty,
        entry_price: entry.to_string(),
        exit_price: exit.map(String::from),
        stop_loss: None,
        target_price: None,
        profit_loss: None,
        setup_followed: false,
        which_setup: None,
        emotion: None,
        notes: None,
        psychology_reflections: None,
        screenshot_link: None,
    }
}

pub fn psych_draft(day: &str, reflections: &str) -> PsychologyDraft {
    PsychologyDraft {
        entry_date: date(day),
        daily_pnl: Some("0".into()),
        best_trade_id: None,
        worst_trade_id: None,
        mental_reflections: reflections.to_string(),
        improvement_areas: "Stick to the plan on red days".to_string(),
    }
}
