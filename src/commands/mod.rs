//! Command implementations for the CLI
//!
//! - start: Start the order desk server
//! - test: Test configuration validity
//! - config: Configuration display and validation
//! - quote: Price an order from the terminal

pub mod config;
pub mod quote;
pub mod start;
