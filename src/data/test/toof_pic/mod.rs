use crate::{
    data::toof_pic::ToofPicRepository,
    error::AppError,
    model::{rarity::Rarity, toof_pic::CreateToofPicParam},
};
use test_utils::{builder::TestBuilder, factory};

mod count_by_rarity;
mod create;
mod get_all;
mod get_by_id;
