//! Construction des paires de mapping lettre ↔ symbole.

use std::collections::HashMap;

use gm_core::codepage::CP437_TO_UNICODE;
use gm_core::error::CoreError;
use gm_core::window::lower_window;

/// Letters covered by each pair.
pub const ALPHABET_LEN: usize = 26;

/// CP437 codepoint assigned to 'T' (the sequential slot, 20, stays unused).
const CP437_T: usize = 27;
/// CP437 codepoint assigned to 'U' (the sequential slot, 21, stays unused).
const CP437_U: usize = 28;

/// Paire encode/décode réversible pour un alphabet de 26 lettres.
///
/// Invariant : bijection. Chaque lettre a exactement un symbole et
/// réciproquement, `decode(encode(l)) == l` pour toute lettre couverte.
///
/// # Example
/// ```
/// use gm_codec::mapping::lowercase_pair;
/// let pair = lowercase_pair().unwrap();
/// assert_eq!(pair.encode('a'), Some('¡'));
/// assert_eq!(pair.decode('¡'), Some('a'));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MappingPair {
    forward: HashMap<char, char>,
    reverse: HashMap<char, char>,
}

impl MappingPair {
    fn from_pairs<I: IntoIterator<Item = (char, char)>>(pairs: I) -> Self {
        let mut forward = HashMap::new();
        let mut reverse = HashMap::new();
        for (letter, symbol) in pairs {
            forward.insert(letter, symbol);
            reverse.insert(symbol, letter);
        }
        Self { forward, reverse }
    }

    /// Symbol for `letter`, `None` if the pair does not cover it.
    #[must_use]
    pub fn encode(&self, letter: char) -> Option<char> {
        self.forward.get(&letter).copied()
    }

    /// Letter for `symbol`, `None` if no letter encodes to it.
    #[must_use]
    pub fn decode(&self, symbol: char) -> Option<char> {
        self.reverse.get(&symbol).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

/// Construit la paire a–z ↔ fenêtre de ponctuation Windows-1252.
///
/// L'appariement est positionnel : la lettre d'indice i prend le i-ème
/// symbole de la fenêtre (161–191 sans 173). Seuls les 26 premiers des
/// 30 symboles sont consommés.
///
/// # Errors
/// [`CoreError::WindowTooSmall`] si la fenêtre donne moins de 26
/// symboles. Impossible avec la plage fixe, vérifié car la fenêtre est
/// calculée.
pub fn lowercase_pair() -> Result<MappingPair, CoreError> {
    let window = lower_window()?;
    if window.len() < ALPHABET_LEN {
        return Err(CoreError::WindowTooSmall {
            got: window.len(),
            need: ALPHABET_LEN,
        });
    }

    let pairs = ('a'..='z').zip(window.chars().iter().copied());
    log::debug!("paire minuscules construite : {ALPHABET_LEN} entrées");
    Ok(MappingPair::from_pairs(pairs))
}

/// Construit la paire A–Z ↔ pictogrammes CP437.
///
/// Appariement séquentiel : la lettre d'indice i prend le codepoint
/// i + 1. Exceptions : 'T' prend 27 et 'U' prend 28. Leurs slots
/// séquentiels 20 et 21 (¶ et §) appartiennent déjà à la fenêtre
/// minuscules et restent inutilisés ici.
///
/// # Example
/// ```
/// use gm_codec::mapping::uppercase_pair;
/// let pair = uppercase_pair();
/// assert_eq!(pair.encode('A'), Some('☺'));
/// assert_eq!(pair.encode('T'), Some('←'));
/// ```
#[must_use]
pub fn uppercase_pair() -> MappingPair {
    let pairs = ('A'..='Z').enumerate().map(|(i, letter)| {
        let codepoint = match letter {
            'T' => CP437_T,
            'U' => CP437_U,
            _ => i + 1,
        };
        (letter, CP437_TO_UNICODE[codepoint])
    });
    log::debug!("paire majuscules construite : {ALPHABET_LEN} entrées");
    MappingPair::from_pairs(pairs)
}
