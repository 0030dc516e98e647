mod common;

use common::setup;
use tradejournal::domain::entities::strategy::StrategyDraft;
use tradejournal::domain::error::JournalError;

fn draft(name: &str) -> StrategyDraft {
    StrategyDraft {
        name: name.to_string(),
        description: None,
    }
}

#[tokio::test]
async fn test_add_and_list() {
    let journal = setup();
    let added = journal.strategy_add(draft("breakout")).await.unwrap();
    assert!(added.id > 0);

    let strategies = journal.strategies().await.unwrap();
    assert_eq!(strategies.len(), 1);
    assert_eq!(strategies[0].name, "breakout");
}

#[tokio::test]
async fn test_blank_name_rejected() {
    let journal = setup();
    let err = journal.strategy_add(draft("   ")).await.unwrap_err();
    assert!(matches!(err, JournalError::InvalidInput(_)));
}

#[tokio::test]
async fn test_update_renames() {
    let journal = setup();
    let added = journal.strategy_add(draft("gap")).await.unwrap();
    let updated = journal
        .strategy_update(added.id, draft("gap and go"))
        .await
        .unwrap();
    assert_eq!(updated.name, "gap and go");

    let strategies = journal.strategies().await.unwrap();
    assert_eq!(strategies[0].name, "gap and go");
}

#[tokio::test]
async fn test_delete_and_missing_id() {
    let journal = setup();
    let added = journal.strategy_add(draft("vwap fade")).await.unwrap();
    journal.strategy_delete(added.id).await.unwrap();
    assert!(journal.strategies().await.unwrap().is_empty());

    let err = journal.strategy_update(added.id, draft("x")).await.unwrap_err();
    assert!(matches!(err, JournalError::NotFound(_)));
}
