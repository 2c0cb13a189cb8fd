pub mod money;
pub mod random;
