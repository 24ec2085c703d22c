use super::*;

/// Tests counting pics per rarity.
///
/// Verifies each rarity only counts pics with its own id prefix.
///
/// Expected: Ok with counts 2, 1, 0
#[tokio::test]
async fn counts_only_matching_rarity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_toof_pic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_catalog(db, &["C001", "C002", "R001"]).await?;

    let repo = ToofPicRepository::new(db);

    assert_eq!(repo.count_by_rarity(Rarity::Common).await?, 2);
    assert_eq!(repo.count_by_rarity(Rarity::Rare).await?, 1);
    assert_eq!(repo.count_by_rarity(Rarity::Legendary).await?, 0);

    Ok(())
}
