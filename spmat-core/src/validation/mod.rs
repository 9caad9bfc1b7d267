//! Validation utilities for the sparse matrix text format
//!
//! This module contains pure validation functions with no I/O dependencies.

pub mod bounds;
pub mod parsing;

pub use bounds::{check_inner_dimensions, check_same_shape, validate_entry_bounds};
pub use parsing::{leading_integer, parse_count, parse_index, parse_value};
