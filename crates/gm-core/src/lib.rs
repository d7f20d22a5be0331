/// Codepage tables, symbol windows, and shared configuration for glyphmap.
///
/// This crate contains the legacy-codepage data, window construction,
/// and configuration logic used across the glyphmap workspace.

pub mod codepage;
pub mod config;
pub mod error;
pub mod window;

pub use codepage::Codepage;
pub use config::MapperConfig;
pub use error::CoreError;
pub use window::SymbolWindow;
