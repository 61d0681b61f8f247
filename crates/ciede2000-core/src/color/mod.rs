//! Color types
//!
//! This module provides:
//! - CIELAB (L*a*b*) coordinates
//! - Reference/sample pairs and their CSV row parsing

pub mod lab;
pub mod pair;

pub use lab::Lab;
pub use pair::{LabPair, parse_fields};
