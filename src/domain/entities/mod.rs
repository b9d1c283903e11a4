//! Core domain entities representing the business data model.
//!
//! This module contains the fundamental data structures that represent the core
//! concepts of the URL shortening service. Entities are plain data structures;
//! the only logic they carry is derived state such as expiry.
//!
//! # Entity Types
//!
//! - [`ShortUrl`] - A shortcode to URL mapping with a validity window
//! - [`ClickEvent`] - A click recorded on a shortened link

pub mod click;
pub mod short_url;

pub use click::ClickEvent;
pub use short_url::ShortUrl;
