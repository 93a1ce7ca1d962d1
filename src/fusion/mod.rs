pub mod calibrator;
pub mod engine;
pub mod gate;
pub mod types;
