// src/lib.rs
pub mod animation;
pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod render;

pub use error::PuzzleError;
