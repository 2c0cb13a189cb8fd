pub mod home;
pub mod shop;
