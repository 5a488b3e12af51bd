pub mod accumulate;
pub mod threshold;
