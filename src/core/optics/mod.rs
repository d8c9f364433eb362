pub mod interference;
pub mod spectrum;
