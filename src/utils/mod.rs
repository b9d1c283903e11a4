//! Utility functions for code generation and request handling.
//!
//! This module provides helper functions used across the application:
//!
//! - [`code_generator`] - Short code generation
//! - [`request_meta`] - Click metadata extraction from request headers

pub mod code_generator;
pub mod request_meta;
