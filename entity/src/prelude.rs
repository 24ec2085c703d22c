pub use super::toof_pic::Entity as ToofPic;
pub use super::toof_pic_ownership::Entity as ToofPicOwnership;
