use super::*;

/// Tests a transfer to a user who does not own the pic.
///
/// Verifies the record moves to the recipient with a fresh acquired_at and that the
/// number of records for the pic does not change.
///
/// Expected: Ok(Transferred)
#[tokio::test]
async fn moves_record_to_recipient() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_toof_pic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_catalog(db, &["C002"]).await?;
    let old = chrono::Utc::now() - chrono::Duration::days(1);
    factory::ownership::OwnershipFactory::new(db, 2, "C002")
        .acquired_at(old)
        .build()
        .await?;

    let repo = OwnershipRepository::new(db);
    let outcome = repo.transfer(2, 1, "C002").await?;

    let TransferOutcome::Transferred(ownership) = outcome else {
        panic!("expected transfer, got {:?}", outcome);
    };
    assert_eq!(ownership.owner_id, 1);
    assert!(ownership.acquired_at > old);

    assert!(repo.get(2, "C002").await?.is_none());
    assert!(repo.get(1, "C002").await?.is_some());
    assert_eq!(repo.get_by_pic("C002").await?.len(), 1);

    Ok(())
}

/// Tests a transfer to a user who already owns the pic.
///
/// Expected: Ok(Collision) and both records unchanged
#[tokio::test]
async fn reports_collision_and_leaves_source_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_toof_pic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_catalog(db, &["C001"]).await?;
    factory::create_ownership(db, 1, "C001").await?;
    factory::create_ownership(db, 2, "C001").await?;

    let repo = OwnershipRepository::new(db);
    let before = repo.get(2, "C001").await?;

    let outcome = repo.transfer(2, 1, "C001").await?;

    assert_eq!(outcome, TransferOutcome::Collision);
    assert_eq!(repo.get(2, "C001").await?, before);
    assert_eq!(repo.get_by_pic("C001").await?.len(), 2);

    Ok(())
}

/// Tests a transfer from a user who does not own the pic.
///
/// Expected: Ok(NoRecord) and no records written
#[tokio::test]
async fn reports_no_record_when_source_does_not_own() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_toof_pic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_catalog(db, &["R001"]).await?;

    let repo = OwnershipRepository::new(db);
    let outcome = repo.transfer(2, 1, "R001").await?;

    assert_eq!(outcome, TransferOutcome::NoRecord);
    assert_eq!(repo.count().await?, 0);

    Ok(())
}

/// Tests two steals racing for the same pic from the same target.
///
/// The second transfer observes the post-transfer state and must not succeed.
///
/// Expected: first Ok(Transferred), second Ok(NoRecord)
#[tokio::test]
async fn second_transfer_of_same_record_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_toof_pic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_catalog(db, &["L001"]).await?;
    factory::create_ownership(db, 9, "L001").await?;

    let repo = OwnershipRepository::new(db);
    let first = repo.transfer(9, 1, "L001").await?;
    let second = repo.transfer(9, 2, "L001").await?;

    assert!(matches!(first, TransferOutcome::Transferred(_)));
    assert_eq!(second, TransferOutcome::NoRecord);
    assert!(repo.get(1, "L001").await?.is_some());
    assert!(repo.get(2, "L001").await?.is_none());
    assert_eq!(repo.get_by_pic("L001").await?.len(), 1);

    Ok(())
}

/// Tests several steals of the same pic from the same target running at once.
///
/// Uses a file-backed pool so the transfers hold separate connections and overlap at
/// the database. Exactly one transfer wins; every other one sees the record already gone.
///
/// Expected: one Ok(Transferred), the rest Ok(NoRecord), one record for the pic
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_transfers_of_same_record_leave_one_winner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_file_database(8)
        .with_toof_pic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_catalog(db, &["C001"]).await?;
    factory::create_ownership(db, 9, "C001").await?;

    let handles: Vec<_> = (1..=6)
        .map(|recipient| {
            let db = db.clone();
            tokio::spawn(async move {
                OwnershipRepository::new(&db)
                    .transfer(9, recipient, "C001")
                    .await
            })
        })
        .collect();

    let mut transferred = Vec::new();
    let mut no_record = 0;
    for handle in handles {
        match handle.await.unwrap()? {
            TransferOutcome::Transferred(ownership) => transferred.push(ownership.owner_id),
            TransferOutcome::NoRecord => no_record += 1,
            TransferOutcome::Collision => panic!("no recipient owned the pic"),
        }
    }

    assert_eq!(transferred.len(), 1);
    assert_eq!(no_record, 5);

    let repo = OwnershipRepository::new(db);
    let holders = repo.get_by_pic("C001").await?;
    assert_eq!(holders.len(), 1);
    assert_eq!(holders[0].owner_id, transferred[0]);
    assert!(repo.get(9, "C001").await?.is_none());

    Ok(())
}
