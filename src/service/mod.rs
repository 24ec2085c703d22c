pub mod cooldown;
pub mod draw;
pub mod steal;
pub mod toof_pic;
