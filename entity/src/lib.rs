//! SeaORM entities for the ToofPic catalog and ownership ledger.

pub mod prelude;

pub mod toof_pic;
pub mod toof_pic_ownership;
