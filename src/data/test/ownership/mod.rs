use crate::{
    data::ownership::OwnershipRepository,
    error::AppError,
    model::ownership::TransferOutcome,
};
use test_utils::{builder::TestBuilder, factory};

mod acquire;
mod get_collection;
mod grant_all;
mod transfer;
