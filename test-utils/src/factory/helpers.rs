//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique sequence numbers in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates one catalog entry per id, in the given order.
///
/// # Arguments
/// - `db` - Database connection
/// - `ids` - Exact pic ids to insert, e.g. `["C001", "R001"]`
///
/// # Returns
/// - `Ok(Vec<entity::toof_pic::Model>)` - Created catalog entries
/// - `Err(DbErr)` - Database error during creation (e.g. a duplicate id)
pub async fn create_catalog(
    db: &DatabaseConnection,
    ids: &[&str],
) -> Result<Vec<entity::toof_pic::Model>, DbErr> {
    let mut pics = Vec::with_capacity(ids.len());

    for id in ids {
        pics.push(crate::factory::toof_pic::create_pic_with_id(db, *id).await?);
    }

    Ok(pics)
}
