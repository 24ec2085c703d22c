//! Database repository layer for the ToofPic catalog and ownership ledger.
//!
//! Repositories use SeaORM entity models internally and return domain models to keep
//! the data layer separate from the engines built on top of it. Every ledger mutation is
//! issued as a single statement or a single transaction, so the storage layer serializes
//! concurrent writes to the same `(owner, pic)` row.

pub mod ownership;
pub mod toof_pic;

#[cfg(test)]
mod test;
