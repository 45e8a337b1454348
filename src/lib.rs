// Core infrastructure modules
pub mod config;
pub mod core;
pub mod logging;

// Feature-specific modules
pub mod book_form;
pub mod catalog;
pub mod export;
pub mod tui;

#[cfg(test)]
mod test_utils;
