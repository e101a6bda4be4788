// src/services/mod.rs
pub mod dashboard;
pub mod export;
pub mod worldbank;
