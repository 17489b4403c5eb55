// src/services/mod.rs
pub mod openai;
