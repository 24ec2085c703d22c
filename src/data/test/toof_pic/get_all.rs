use super::*;

/// Tests retrieving an empty catalog.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_catalog() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_toof_pic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ToofPicRepository::new(db);
    let pics = repo.get_all().await?;

    assert!(pics.is_empty());

    Ok(())
}

/// Tests that the catalog comes back in canonical order.
///
/// Verifies pics are sorted by rarity rank first and id second, regardless of
/// insertion order.
///
/// Expected: Ok with pics ordered C, C, R, L
#[tokio::test]
async fn returns_pics_sorted_by_rarity_then_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_toof_pic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_catalog(db, &["L001", "C002", "R001", "C001"]).await?;

    let repo = ToofPicRepository::new(db);
    let pics = repo.get_all().await?;

    let ids: Vec<&str> = pics.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["C001", "C002", "R001", "L001"]);
    assert_eq!(pics[3].rarity, Rarity::Legendary);

    Ok(())
}
