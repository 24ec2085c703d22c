use super::*;

/// Tests granting the whole catalog to a user who already owns part of it.
///
/// Expected: Ok(2) new records, user owns all three pics once each
#[tokio::test]
async fn grants_missing_pics_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_toof_pic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_catalog(db, &["C001", "R001", "L001"]).await?;
    factory::create_ownership(db, 3, "R001").await?;

    let repo = OwnershipRepository::new(db);
    let created = repo.grant_all(3).await?;

    assert_eq!(created, 2);
    assert_eq!(repo.get_collection(3).await?.len(), 3);
    assert_eq!(repo.count().await?, 3);

    Ok(())
}

/// Tests granting from an empty catalog.
///
/// Expected: Ok(0)
#[tokio::test]
async fn empty_catalog_grants_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_toof_pic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OwnershipRepository::new(db);

    assert_eq!(repo.grant_all(3).await?, 0);

    Ok(())
}
