//! Rule-level parsers. Each module pairs a `parse` entry point with the
//! `generate` that inverts it.

pub mod agent;
pub mod css_injection;
pub mod modifier;
pub mod network;
