pub mod ai;
pub mod exercise;
