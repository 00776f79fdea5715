pub mod config;
pub mod engine;
pub mod error;
pub mod log;
pub mod outcome;

mod context;
mod depth;
mod worker;

#[cfg(test)]
mod tests;
