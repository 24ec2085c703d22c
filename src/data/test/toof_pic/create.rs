use super::*;

fn param(rarity: Rarity, name: &str) -> CreateToofPicParam {
    CreateToofPicParam {
        rarity,
        name: name.to_string(),
        link: format!("https://cdn.example.com/{}.png", name),
    }
}

/// Tests appending the first pic of a rarity.
///
/// Expected: Ok with id "L001"
#[tokio::test]
async fn assigns_first_sequence_number() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_toof_pic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ToofPicRepository::new(db);
    let pic = repo.create(param(Rarity::Legendary, "shiny")).await?;

    assert_eq!(pic.id, "L001");
    assert_eq!(pic.rarity, Rarity::Legendary);
    assert_eq!(pic.name, "shiny");

    let stored = repo.get_by_id("L001").await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that sequence numbers are counted per rarity.
///
/// Verifies that existing pics of other rarities do not advance the sequence.
///
/// Expected: Ok with ids "C003" and "R002"
#[tokio::test]
async fn sequence_is_per_rarity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_toof_pic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_catalog(db, &["C001", "C002", "R001", "L001"]).await?;

    let repo = ToofPicRepository::new(db);
    let common = repo.create(param(Rarity::Common, "nap")).await?;
    let rare = repo.create(param(Rarity::Rare, "zoomies")).await?;

    assert_eq!(common.id, "C003");
    assert_eq!(rare.id, "R002");
    assert_eq!(repo.get_all().await?.len(), 6);

    Ok(())
}

/// Tests appends of one rarity running at once on separate connections.
///
/// Each append that loses the race for a sequence number recounts and takes the next
/// one, so every append succeeds with a distinct id.
///
/// Expected: Ok for all three, ids "C001" through "C003"
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_appends_get_distinct_ids() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_file_database(8)
        .with_toof_pic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let handles: Vec<_> = ["one", "two", "three"]
        .into_iter()
        .map(|name| {
            let db = db.clone();
            tokio::spawn(async move {
                ToofPicRepository::new(&db)
                    .create(param(Rarity::Common, name))
                    .await
            })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap()?.id);
    }
    ids.sort();

    assert_eq!(ids, vec!["C001", "C002", "C003"]);
    assert_eq!(
        ToofPicRepository::new(db)
            .count_by_rarity(Rarity::Common)
            .await?,
        3
    );

    Ok(())
}
