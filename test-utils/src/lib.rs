//! Toofbot Test Utils
//!
//! Provides shared testing utilities for the toofbot crate. This crate offers a builder
//! pattern for creating test contexts with in-memory SQLite databases built straight from
//! the SeaORM entities, plus factories for seeding the ToofPic catalog and ledger.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_ledger() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_toof_pic_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let pic = factory::create_pic(db, 'C').await?;
//!     factory::create_ownership(db, 1234, &pic.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
