//! Steal attempts between users.

use dioxus_logger::tracing;
use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::{
    data::ownership::OwnershipRepository,
    error::{toof_pic::ToofPicError, AppError},
    model::{ownership::TransferOutcome, toof_pic::ToofPic},
};

/// Default odds of a steal roll succeeding, as `(numerator, denominator)`.
pub const DEFAULT_SUCCESS_CHANCE: (u32, u32) = (1, 3);

/// Why a steal had no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StealFailure {
    /// The success roll failed.
    NoEffect,
    /// The roll succeeded but the target owns nothing.
    EmptyTarget,
}

/// Result of a steal attempt that did not error.
#[derive(Debug, Clone, PartialEq)]
pub enum StealOutcome {
    /// The pic moved from the target to the actor.
    Stolen(ToofPic),
    /// The roll picked a pic the actor already owns; nothing changed.
    Collision(ToofPic),
    /// Nothing was taken.
    Failed(StealFailure),
}

/// Service resolving steal attempts against the ownership ledger.
pub struct StealService<'a> {
    db: &'a DatabaseConnection,
    success_chance: (u32, u32),
}

impl<'a> StealService<'a> {
    /// Creates a new StealService with the default success chance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            success_chance: DEFAULT_SUCCESS_CHANCE,
        }
    }

    /// Overrides the odds of the success roll.
    ///
    /// The numerator is capped at the denominator and a zero denominator is treated as 1.
    pub fn with_success_chance(mut self, numerator: u32, denominator: u32) -> Self {
        let denominator = denominator.max(1);
        self.success_chance = (numerator.min(denominator), denominator);
        self
    }

    /// Attempts to steal a random pic from `target_id` for `actor_id`.
    ///
    /// The target's pic is picked uniformly, regardless of rarity. A failed roll, an
    /// empty target and a collision all leave the ledger untouched.
    ///
    /// # Arguments
    /// - `actor_id` - Discord ID of the user stealing
    /// - `target_id` - Discord ID of the user being stolen from
    /// - `rng` - Random source for the success roll and the pic choice
    ///
    /// # Returns
    /// - `Ok(StealOutcome)` - The outcome of the attempt
    /// - `Err(AppError::ToofPicErr(SelfTargetDenied))` - `actor_id == target_id`
    /// - `Err(AppError::ToofPicErr(NoRecord))` - The target lost the pic mid-steal
    /// - `Err(AppError::DbErr)` - Database error; the ledger is unchanged
    pub async fn steal<R: Rng + Send + ?Sized>(
        &self,
        actor_id: u64,
        target_id: u64,
        rng: &mut R,
    ) -> Result<StealOutcome, AppError> {
        if actor_id == target_id {
            return Err(ToofPicError::SelfTargetDenied.into());
        }

        let (numerator, denominator) = self.success_chance;
        if !rng.random_ratio(numerator, denominator) {
            tracing::debug!("User {} failed to steal from user {}", actor_id, target_id);
            return Ok(StealOutcome::Failed(StealFailure::NoEffect));
        }

        let repo = OwnershipRepository::new(self.db);
        let target = repo.get_collection(target_id).await?;
        if target.is_empty() {
            return Ok(StealOutcome::Failed(StealFailure::EmptyTarget));
        }

        let owned = target.owned();
        let pic = owned[rng.random_range(0..owned.len())].pic.clone();

        self.take(actor_id, target_id, pic).await
    }

    /// Moves an already picked `pic` from `target_id` to `actor_id`.
    ///
    /// # Returns
    /// - `Ok(StealOutcome::Stolen)` - The pic now belongs to `actor_id`
    /// - `Ok(StealOutcome::Collision)` - `actor_id` already owns the pic; nothing changed
    /// - `Err(AppError::ToofPicErr(NoRecord))` - `target_id` no longer owns the pic
    /// - `Err(AppError::DbErr)` - Database error; the ledger is unchanged
    async fn take(
        &self,
        actor_id: u64,
        target_id: u64,
        pic: ToofPic,
    ) -> Result<StealOutcome, AppError> {
        let repo = OwnershipRepository::new(self.db);

        if repo.get(actor_id, &pic.id).await?.is_some() {
            tracing::debug!(
                "User {} rolled pic {} from user {} but already owns it",
                actor_id,
                pic.id,
                target_id
            );
            return Ok(StealOutcome::Collision(pic));
        }

        match repo.transfer(target_id, actor_id, &pic.id).await? {
            TransferOutcome::Transferred(_) => {
                tracing::info!(
                    "User {} stole pic {} from user {}",
                    actor_id,
                    pic.id,
                    target_id
                );
                Ok(StealOutcome::Stolen(pic))
            }
            TransferOutcome::Collision => Ok(StealOutcome::Collision(pic)),
            TransferOutcome::NoRecord => {
                tracing::debug!(
                    "User {} lost pic {} before user {} could take it",
                    target_id,
                    pic.id,
                    actor_id
                );
                Err(ToofPicError::NoRecord.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use test_utils::{builder::TestBuilder, factory};

    const A: u64 = 1;
    const B: u64 = 2;

    fn ids(pics: Vec<ToofPic>) -> Vec<String> {
        pics.into_iter().map(|pic| pic.id).collect()
    }

    #[tokio::test]
    async fn stealing_from_self_is_denied() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_toof_pic_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = StealService::new(db).with_success_chance(1, 1);
        let mut rng = StdRng::seed_from_u64(1);
        let result = service.steal(A, A, &mut rng).await;

        assert!(matches!(
            result,
            Err(AppError::ToofPicErr(ToofPicError::SelfTargetDenied))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn failed_roll_has_no_effect() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_toof_pic_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        factory::create_catalog(db, &["C001"]).await?;
        factory::create_ownership(db, B, "C001").await?;

        let service = StealService::new(db).with_success_chance(0, 1);
        let mut rng = StdRng::seed_from_u64(1);
        let outcome = service.steal(A, B, &mut rng).await?;

        assert_eq!(outcome, StealOutcome::Failed(StealFailure::NoEffect));
        assert!(OwnershipRepository::new(db).get(B, "C001").await?.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn target_with_nothing_reports_empty_target() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_toof_pic_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        factory::create_catalog(db, &["C001"]).await?;

        let service = StealService::new(db).with_success_chance(1, 1);
        let mut rng = StdRng::seed_from_u64(1);
        let outcome = service.steal(A, B, &mut rng).await?;

        assert_eq!(outcome, StealOutcome::Failed(StealFailure::EmptyTarget));

        Ok(())
    }

    /// Catalog {C001, C002, R001, L001}; A owns C001 and B owns C002.
    ///
    /// A successful steal moves C002 to A and leaves exactly one record for it. Stealing
    /// from B again after B re-acquires C002 collides and changes nothing.
    #[tokio::test]
    async fn steal_then_collide() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_toof_pic_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        factory::create_catalog(db, &["C001", "C002", "R001", "L001"]).await?;
        factory::create_ownership(db, A, "C001").await?;
        factory::create_ownership(db, B, "C002").await?;

        let repo = OwnershipRepository::new(db);
        let service = StealService::new(db).with_success_chance(1, 1);
        let mut rng = StdRng::seed_from_u64(1);

        let outcome = service.steal(A, B, &mut rng).await?;

        let StealOutcome::Stolen(pic) = outcome else {
            panic!("expected steal, got {:?}", outcome);
        };
        assert_eq!(pic.id, "C002");
        assert_eq!(ids(repo.get_collection(A).await?.pics()), vec!["C001", "C002"]);
        assert!(repo.get_collection(B).await?.is_empty());
        assert_eq!(repo.get_by_pic("C002").await?.len(), 1);

        repo.acquire(B, "C002").await?;

        let outcome = service.steal(A, B, &mut rng).await?;

        let StealOutcome::Collision(pic) = outcome else {
            panic!("expected collision, got {:?}", outcome);
        };
        assert_eq!(pic.id, "C002");
        assert_eq!(ids(repo.get_collection(A).await?.pics()), vec!["C001", "C002"]);
        assert_eq!(ids(repo.get_collection(B).await?.pics()), vec!["C002"]);

        Ok(())
    }

    /// The target lost the picked pic between the pick and the transfer, as when another
    /// steal of the same pic finished first.
    #[tokio::test]
    async fn pic_gone_before_transfer_reports_no_record() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_toof_pic_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        factory::create_catalog(db, &["C001"]).await?;
        factory::create_ownership(db, B, "C001").await?;

        let repo = OwnershipRepository::new(db);
        let pic = repo.get_collection(B).await?.pics().remove(0);
        assert!(matches!(
            repo.transfer(B, 3, "C001").await?,
            TransferOutcome::Transferred(_)
        ));

        let service = StealService::new(db);
        let result = service.take(A, B, pic).await;

        assert!(matches!(
            result,
            Err(AppError::ToofPicErr(ToofPicError::NoRecord))
        ));
        assert!(repo.get(A, "C001").await?.is_none());
        assert!(repo.get(3, "C001").await?.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn success_chance_is_respected() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_toof_pic_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = StealService::new(db);
        let mut rng = StdRng::seed_from_u64(17);
        let attempts = 3_000;
        let mut passed = 0;

        for _ in 0..attempts {
            // B owns nothing, so every successful roll ends as EmptyTarget
            if service.steal(A, B, &mut rng).await?
                == StealOutcome::Failed(StealFailure::EmptyTarget)
            {
                passed += 1;
            }
        }

        let share = passed as f64 / attempts as f64;
        assert!((share - 1.0 / 3.0).abs() < 0.04, "succeeded {:.3}", share);

        Ok(())
    }
}
