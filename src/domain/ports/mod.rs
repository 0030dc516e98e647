pub mod journal_store;
