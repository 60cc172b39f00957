//! Adapter implementations of the ports: reqwest for HTTP, file/memory
//! key-value stores, and navigation sinks. Each production adapter has a
//! test double living alongside it.

pub mod http;
pub mod navigation;
pub mod storage;
