//! Utility modules for common functionality.
//!
//! This module contains helpers shared by the binary, currently logging
//! configuration.

pub mod logger;
