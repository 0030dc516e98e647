use crate::application::cache::{CollectionCache, DEFAULT_STALE_AFTER};
use crate::application::metrics::compute_pnl;
use crate::domain::entities::trade::{parse_amount, Trade, TradeDraft};
use crate::domain::error::JournalError;
use crate::domain::ports::journal_store::JournalStore;
use chrono::NaiveDate;
use std::sync::Arc;

pub struct TradesUseCase {
    store: Arc<dyn JournalStore>,
    cache: CollectionCache<Trade>,
}

impl TradesUseCase {
    pub fn new(store: Arc<dyn JournalStore>) -> Self {
        Self {
            store,
            cache: CollectionCache::new(DEFAULT_STALE_AFTER),
        }
    }

    pub async fn list(&self) -> Result<Vec<Trade>, JournalError> {
        let store = self.store.clone();
        self.cache
            .get_or_fetch(|| async move { store.get_trades().await })
            .await
    }

    /// Date-filtered fetch, uncached — the calendar asks per day and the
    /// collection cache only tracks the full set.
    pub async fn on_date(&self, date: NaiveDate) -> Result<Vec<Trade>, JournalError> {
        self.store.get_trades_by_date(date).await
    }

    pub async fn add(&self, mut draft: TradeDraft) -> Result<Trade, JournalError> {
        derive_profit_loss(&mut draft);
        let trade = self.store.add_trade(&draft).await?;
        self.cache.invalidate().await;
        Ok(trade)
    }

    pub async fn update(&self, id: i64, mut draft: TradeDraft) -> Result<Trade, JournalError> {
        derive_profit_loss(&mut draft);
        let trade = self.store.update_trade(id, &draft).await?;
        self.cache.invalidate().await;
        Ok(trade)
    }

    pub async fn delete(&self, id: i64) -> Result<(), JournalError> {
        self.store.delete_trade(id).await?;
        self.cache.invalidate().await;
        Ok(())
    }
}

/// Profit/loss is derived once at write time and stored with the trade.
/// Open trades (no exit price) store "0".
fn derive_profit_loss(draft: &mut TradeDraft) {
    let exit = draft
        .exit_price
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let pnl = match exit {
        Some(exit) => compute_pnl(
            parse_amount(Some(&draft.entry_price)),
            parse_amount(Some(exit)),
            draft.quantity,
        ),
        None => 0.0,
    };
    draft.profit_loss = Some(format!("{pnl:.2}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(entry: &str, exit: Option<&str>, qty: i64) -> TradeDraft {
        TradeDraft {
            trade_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            stock_name: "TEST".into(),
            quantity: qty,
            entry_price: entry.into(),
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

    #[test]
    fn test_derive_pnl_closed_trade() {
        let mut d = draft("100", Some("110"), 10);
        derive_profit_loss(&mut d);
        assert_eq!(d.profit_loss.as_deref(), Some("100.00"));
    }

    #[test]
    fn test_derive_pnl_open_trade_is_zero() {
        let mut d = draft("100", None, 10);
        derive_profit_loss(&mut d);
        assert_eq!(d.profit_loss.as_deref(), Some("0.00"));

        let mut blank = draft("100", Some("  "), 10);
        derive_profit_loss(&mut blank);
        assert_eq!(blank.profit_loss.as_deref(), Some("0.00"));
    }

    #[test]
    fn test_derive_pnl_overwrites_submitted_value() {
        let mut d = draft("50", Some("40"), 5);
        d.profit_loss = Some("999".into());
        derive_profit_loss(&mut d);
        assert_eq!(d.profit_loss.as_deref(), Some("-50.00"));
    }
}
