//! Passe de transcodage caractère par caractère.
//!
//! Transformation un-pour-un : l'ordre et le nombre de caractères de la
//! sortie sont exactement ceux de l'entrée ; tout caractère hors des
//! paires passe inchangé.

use gm_core::error::CoreError;

use crate::mapping::{MappingPair, lowercase_pair, uppercase_pair};

/// Encode letters into their window symbols, lower pair first.
///
/// # Example
/// ```
/// use gm_codec::mapping::lowercase_pair;
/// use gm_codec::transcode::encode_text;
/// let lower = lowercase_pair().unwrap();
/// assert_eq!(encode_text("abc", &lower, None), "¡¢£");
/// ```
#[must_use]
pub fn encode_text(text: &str, lower: &MappingPair, upper: Option<&MappingPair>) -> String {
    text.chars()
        .map(|c| {
            lower
                .encode(c)
                .or_else(|| upper.and_then(|pair| pair.encode(c)))
                .unwrap_or(c)
        })
        .collect()
}

/// Decode window symbols back into letters, lower pair first.
///
/// # Example
/// ```
/// use gm_codec::mapping::lowercase_pair;
/// use gm_codec::transcode::decode_text;
/// let lower = lowercase_pair().unwrap();
/// assert_eq!(decode_text("¡¢£", &lower, None), "abc");
/// ```
#[must_use]
pub fn decode_text(text: &str, lower: &MappingPair, upper: Option<&MappingPair>) -> String {
    text.chars()
        .map(|c| {
            lower
                .decode(c)
                .or_else(|| upper.and_then(|pair| pair.decode(c)))
                .unwrap_or(c)
        })
        .collect()
}

/// Les deux paires de mapping, construites une fois au démarrage puis
/// immuables.
///
/// Sans paire majuscules, A–Z passe inchangé (variante minuscules
/// seules).
///
/// # Example
/// ```
/// use gm_codec::transcode::Transcoder;
/// let transcoder = Transcoder::new(true).unwrap();
/// let encoded = transcoder.encode("Rust");
/// assert_eq!(transcoder.decode(&encoded), "Rust");
/// ```
#[derive(Clone, Debug)]
pub struct Transcoder {
    lower: MappingPair,
    upper: Option<MappingPair>,
}

impl Transcoder {
    /// Build both pairs; `with_uppercase = false` gives the
    /// lowercase-only variant.
    ///
    /// # Errors
    /// Propagates [`CoreError`] from the lowercase window construction.
    pub fn new(with_uppercase: bool) -> Result<Self, CoreError> {
        let lower = lowercase_pair()?;
        let upper = with_uppercase.then(uppercase_pair);
        Ok(Self { lower, upper })
    }

    /// Letters → symbols, pass-through for everything else.
    #[must_use]
    pub fn encode(&self, text: &str) -> String {
        encode_text(text, &self.lower, self.upper.as_ref())
    }

    /// Symbols → letters, pass-through for everything else.
    #[must_use]
    pub fn decode(&self, text: &str) -> String {
        decode_text(text, &self.lower, self.upper.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> Transcoder {
        Transcoder::new(true).expect("fenêtre fixe")
    }

    #[test]
    fn empty_input_empty_output() {
        let transcoder = full();
        assert_eq!(transcoder.encode(""), "");
        assert_eq!(transcoder.decode(""), "");
    }

    #[test]
    fn round_trip_lowercase() {
        let transcoder = full();
        let encoded = transcoder.encode("hello world");
        assert_eq!(transcoder.decode(&encoded), "hello world");
    }

    #[test]
    fn round_trip_mixed_case() {
        let transcoder = full();
        let encoded = transcoder.encode("The Quick Brown Fox");
        assert_eq!(transcoder.decode(&encoded), "The Quick Brown Fox");
    }

    #[test]
    fn lowercase_only_variant_leaves_uppercase_untouched() {
        let transcoder = Transcoder::new(false).expect("fenêtre fixe");
        assert_eq!(transcoder.encode("Ab"), "A¢");
        assert_eq!(transcoder.decode("A¢"), "Ab");
    }

    #[test]
    fn punctuation_and_spaces_pass_through() {
        let transcoder = full();
        // Seules les lettres sont remplacées ; H et W passent via la
        // paire majuscules.
        let encoded = transcoder.encode("Hello, World!");
        assert_eq!(encoded, "◘¥¬¬°, ↨°³¬¤!");
    }

    #[test]
    fn uppercase_ignored_without_upper_pair() {
        let lower = lowercase_pair().expect("fenêtre fixe");
        assert_eq!(
            encode_text("Hello, World!", &lower, None),
            "H¥¬¬°, W°³¬¤!"
        );
    }

    #[test]
    fn output_length_matches_input() {
        let transcoder = full();
        let input = "abc XYZ 123 ¡ ☺ é";
        let encoded = transcoder.encode(input);
        assert_eq!(encoded.chars().count(), input.chars().count());
    }

    #[test]
    fn double_encode_is_identity_on_symbols() {
        let transcoder = full();
        let encoded = transcoder.encode("abcxyz");
        // Les symboles ne sont pas des clés d'encodage.
        assert_eq!(transcoder.encode(&encoded), encoded);
    }

    #[test]
    fn unknown_symbols_pass_through_decode() {
        let transcoder = full();
        assert_eq!(transcoder.decode("€ ¼ ½ ¾ ¿"), "€ ¼ ½ ¾ ¿");
        assert_eq!(transcoder.decode("déjà-vu"), "déjà-vu");
    }

    #[test]
    fn arbitrary_unicode_passes_through() {
        let transcoder = full();
        assert_eq!(transcoder.encode("日本語 🎉 42"), "日本語 🎉 42");
    }
}
