// Adapters layer: concrete implementations for external systems.

pub mod duckduckgo;

pub use duckduckgo::DuckDuckGo;
