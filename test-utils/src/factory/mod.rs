//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating catalog and ledger rows with
//! sensible defaults, reducing boilerplate in tests. Each table has a `Factory` struct
//! for customization and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Catalog entries with generated sequence numbers
//! let common = factory::create_pic(&db, 'C').await?;
//! let legendary = factory::create_pic(&db, 'L').await?;
//!
//! // Catalog entries with exact ids
//! let catalog = factory::create_catalog(&db, &["C001", "C002", "R001", "L001"]).await?;
//!
//! // Give a user a pic
//! factory::create_ownership(&db, 1234, &common.id).await?;
//! ```

pub mod helpers;
pub mod ownership;
pub mod toof_pic;

// Re-export commonly used factory functions for concise usage
pub use helpers::create_catalog;
pub use ownership::create_ownership;
pub use toof_pic::{create_pic, create_pic_with_id};
