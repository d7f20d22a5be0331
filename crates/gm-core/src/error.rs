use thiserror::Error;

use crate::codepage::Codepage;

/// Errors originating from the core module.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Symbol window shorter than the alphabet it must cover.
    #[error("Fenêtre de symboles trop courte : {got} caractères pour {need} lettres")]
    WindowTooSmall {
        /// Characters the window actually yielded.
        got: usize,
        /// Characters required to cover the alphabet.
        need: usize,
    },

    /// Code position with no assigned character in the codepage.
    #[error("Position non assignée dans {codepage} : 0x{codepoint:02X}")]
    UnassignedCodepoint {
        /// Codepage whose table was consulted.
        codepage: Codepage,
        /// The offending code position.
        codepoint: u8,
    },

    /// Invalid configuration value or structure.
    #[error("Configuration invalide : {0}")]
    Config(String),
}
