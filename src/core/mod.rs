pub mod add;
pub mod backup;
pub mod calculator;
pub mod config;
pub mod export;
pub mod import;
pub mod list;
pub mod log;
pub mod logic;
pub mod status;
