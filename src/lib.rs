//! A mock language model and calculator tool, shaped like the handlers a
//! plugin host invokes. Completions come from a canned response pool and
//! stream word by word; the tool adds two numbers. Nothing here talks to
//! a real provider.

pub mod args;
pub mod commands;
pub mod config;
pub mod errors;
pub mod handler;
pub mod llm;
pub mod models;
pub mod tools;
pub mod utils;
