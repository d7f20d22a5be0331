use std::ops::RangeInclusive;

use crate::codepage::Codepage;
use crate::error::CoreError;

/// Suite ordonnée de symboles décodés depuis une plage de codepoints
/// d'un codepage legacy, exclusions déduites.
///
/// Construite une fois au démarrage, lecture seule ensuite.
///
/// # Example
/// ```
/// use gm_core::codepage::Codepage;
/// use gm_core::window::SymbolWindow;
/// let window = SymbolWindow::new(Codepage::Cp1252, 0xA1..=0xA3, &[]).unwrap();
/// assert_eq!(window.chars(), &['¡', '¢', '£']);
/// ```
#[derive(Clone, Debug)]
pub struct SymbolWindow {
    codepage: Codepage,
    chars: Vec<char>,
}

impl SymbolWindow {
    /// Decode `codepoints` under `codepage`, skipping `excluded` positions.
    ///
    /// # Errors
    /// Returns [`CoreError::UnassignedCodepoint`] if the range crosses a
    /// position the codepage leaves unassigned.
    pub fn new(
        codepage: Codepage,
        codepoints: RangeInclusive<u8>,
        excluded: &[u8],
    ) -> Result<Self, CoreError> {
        let mut chars = Vec::with_capacity(codepoints.size_hint().0);
        for codepoint in codepoints {
            if excluded.contains(&codepoint) {
                continue;
            }
            let ch = codepage.decode(codepoint).ok_or(CoreError::UnassignedCodepoint {
                codepage,
                codepoint,
            })?;
            chars.push(ch);
        }
        log::debug!("fenêtre {codepage} construite : {} symboles", chars.len());
        Ok(Self { codepage, chars })
    }

    /// Symbols in window order.
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    #[must_use]
    pub fn codepage(&self) -> Codepage {
        self.codepage
    }
}

/// Fenêtre de ponctuation Windows-1252 : codepoints 161–191, trait
/// d'union conditionnel (173) exclu. Donne 30 symboles.
///
/// # Errors
/// Ne peut pas échouer avec la plage fixe ; l'erreur est propagée par
/// prudence car la fenêtre est calculée, pas écrite en dur.
///
/// # Example
/// ```
/// use gm_core::window::lower_window;
/// let window = lower_window().unwrap();
/// assert_eq!(window.len(), 30);
/// ```
pub fn lower_window() -> Result<SymbolWindow, CoreError> {
    SymbolWindow::new(Codepage::Cp1252, 161..=191, &[173])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_window_yields_thirty_symbols() {
        let window = lower_window().expect("plage fixe");
        assert_eq!(window.len(), 30);
        assert_eq!(window.chars()[0], '¡');
        assert_eq!(window.chars()[29], '¿');
    }

    #[test]
    fn lower_window_skips_soft_hyphen() {
        let window = lower_window().expect("plage fixe");
        assert!(!window.chars().contains(&'\u{AD}'));
    }

    #[test]
    fn lower_window_symbols_are_distinct() {
        let window = lower_window().expect("plage fixe");
        let mut seen = std::collections::HashSet::new();
        for &ch in window.chars() {
            assert!(seen.insert(ch), "symbole en double : {ch}");
        }
    }

    #[test]
    fn unassigned_position_is_an_error() {
        let result = SymbolWindow::new(Codepage::Cp1252, 0x7F..=0x90, &[]);
        assert!(matches!(
            result,
            Err(CoreError::UnassignedCodepoint { codepoint: 0x81, .. })
        ));
    }

    #[test]
    fn exclusions_are_skipped_not_decoded() {
        // 0x81 n'est pas assigné mais il est exclu : pas d'erreur.
        let window = SymbolWindow::new(Codepage::Cp1252, 0x80..=0x82, &[0x81]).expect("0x81 exclu");
        assert_eq!(window.chars(), &['€', '‚']);
    }
}
