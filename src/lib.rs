// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod input;
pub mod ledger;
pub mod round;
pub mod session;
pub mod ui;
pub mod word_bank;
