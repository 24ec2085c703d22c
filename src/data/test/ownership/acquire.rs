use super::*;

/// Tests acquiring a pic for the first time.
///
/// Expected: Ok(created = true) and one record
#[tokio::test]
async fn creates_record_on_first_acquire() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_toof_pic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_catalog(db, &["C001"]).await?;

    let repo = OwnershipRepository::new(db);
    let acquisition = repo.acquire(10, "C001").await?;

    assert!(acquisition.created);
    assert!(repo.get(10, "C001").await?.is_some());
    assert_eq!(repo.count().await?, 1);

    Ok(())
}

/// Tests that acquiring an owned pic is a no-op.
///
/// Verifies no duplicate record is written and the original acquired_at is kept.
///
/// Expected: Ok(created = false), one record, unchanged timestamp
#[tokio::test]
async fn reacquire_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_toof_pic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_catalog(db, &["C001"]).await?;

    let repo = OwnershipRepository::new(db);
    repo.acquire(10, "C001").await?;
    let original = repo.get(10, "C001").await?.unwrap();

    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

    let acquisition = repo.acquire(10, "C001").await?;
    let after = repo.get(10, "C001").await?.unwrap();

    assert!(!acquisition.created);
    assert_eq!(repo.count().await?, 1);
    assert_eq!(after.acquired_at, original.acquired_at);

    Ok(())
}

/// Tests that the same pic can be owned by different users.
///
/// Expected: Ok with one record per owner
#[tokio::test]
async fn different_users_can_own_same_pic() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_toof_pic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_catalog(db, &["R001"]).await?;

    let repo = OwnershipRepository::new(db);
    assert!(repo.acquire(1, "R001").await?.created);
    assert!(repo.acquire(2, "R001").await?.created);

    assert_eq!(repo.get_by_pic("R001").await?.len(), 2);

    Ok(())
}
