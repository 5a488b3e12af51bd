pub mod accumulation;
pub mod duty_limits;
pub mod entry_source;
pub mod risk_band;
pub mod training_log;
pub mod window;
