pub mod config;
pub mod eval;
pub mod languages;
pub mod parse;
pub mod text;
