use super::*;

/// Tests retrieving the collection of a user who owns nothing.
///
/// Expected: Ok(empty collection)
#[tokio::test]
async fn returns_empty_collection() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_toof_pic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_catalog(db, &["C001"]).await?;

    let repo = OwnershipRepository::new(db);
    let collection = repo.get_collection(1).await?;

    assert!(collection.is_empty());
    assert_eq!(collection.owner_id, 1);

    Ok(())
}

/// Tests that a collection contains only the requested user's pics.
///
/// Verifies the join with the catalog and the canonical ordering.
///
/// Expected: Ok with user 1's pics in order C001, R001
#[tokio::test]
async fn returns_only_owned_pics_in_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_toof_pic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_catalog(db, &["C001", "C002", "R001"]).await?;
    factory::create_ownership(db, 1, "R001").await?;
    factory::create_ownership(db, 1, "C001").await?;
    factory::create_ownership(db, 2, "C002").await?;

    let repo = OwnershipRepository::new(db);
    let collection = repo.get_collection(1).await?;

    let ids: Vec<String> = collection.pics().into_iter().map(|p| p.id).collect();
    assert_eq!(ids, vec!["C001", "R001"]);
    assert!(!collection.contains("C002"));

    Ok(())
}

/// Tests that acquisition timestamps come through the join.
///
/// Expected: Ok with the stored acquired_at
#[tokio::test]
async fn includes_acquisition_timestamps() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_toof_pic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_catalog(db, &["L001"]).await?;
    let acquired_at = chrono::Utc::now() - chrono::Duration::days(3);
    factory::ownership::OwnershipFactory::new(db, 5, "L001")
        .acquired_at(acquired_at)
        .build()
        .await?;

    let repo = OwnershipRepository::new(db);
    let collection = repo.get_collection(5).await?;

    assert_eq!(collection.len(), 1);
    let owned = &collection.owned()[0];
    assert_eq!(owned.pic.id, "L001");
    assert_eq!(
        owned.acquired_at.timestamp_millis(),
        acquired_at.timestamp_millis()
    );

    Ok(())
}
