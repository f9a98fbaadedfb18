//! Adapters - Implementations of ports and the HTTP surface.

pub mod catalog;
pub mod http;
pub mod storage;
pub mod summary;
