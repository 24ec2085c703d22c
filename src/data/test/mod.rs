mod ownership;
mod toof_pic;
