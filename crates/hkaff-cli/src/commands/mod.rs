pub mod catalogue;
pub mod conflicts;
pub mod config;
pub mod export;
pub mod lang;
pub mod schedule;
