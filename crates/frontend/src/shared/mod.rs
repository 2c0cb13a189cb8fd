pub mod config;
pub mod dom;
pub mod parallax;
pub mod preferences;
pub mod random;
pub mod reveal;
pub mod theme;
