/// Mapping construction and transcoding engine for glyphmap.
///
/// Builds the reversible letter ↔ symbol pairs and applies them over
/// arbitrary text, one character at a time.

pub mod mapping;
pub mod transcode;

pub use mapping::MappingPair;
pub use transcode::Transcoder;
