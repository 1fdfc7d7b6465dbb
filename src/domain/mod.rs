pub mod cell;
pub mod config;
pub mod patterns;
pub mod rules;
