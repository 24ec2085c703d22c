use super::*;

/// Tests looking up an existing pic.
///
/// Expected: Ok(Some(pic)) with rarity resolved from the id
#[tokio::test]
async fn returns_existing_pic() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_toof_pic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_pic_with_id(db, "R003").await?;

    let repo = ToofPicRepository::new(db);
    let pic = repo.get_by_id("R003").await?;

    assert!(pic.is_some());
    let pic = pic.unwrap();
    assert_eq!(pic.name, created.name);
    assert_eq!(pic.rarity, Rarity::Rare);

    Ok(())
}

/// Tests looking up a pic that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_toof_pic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ToofPicRepository::new(db);
    let pic = repo.get_by_id("C999").await?;

    assert!(pic.is_none());

    Ok(())
}
