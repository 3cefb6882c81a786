pub mod questions;
pub mod seed;
pub mod serve;
