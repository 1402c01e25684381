//! Graph construction and representation
//!
//! This module provides link graph building and the compact storage
//! the solver iterates over.

pub mod builder;
pub mod csr;
