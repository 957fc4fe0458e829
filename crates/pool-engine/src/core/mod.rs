pub mod config;
pub mod math;
pub mod scene;
pub mod time;
