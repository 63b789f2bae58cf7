// src/lib.rs

pub mod api;
pub mod config;
pub mod llm;
pub mod math;
pub mod ops;
pub mod state;
pub mod validate;
