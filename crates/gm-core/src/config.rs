use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Configuration du transcodeur, sérialisable en TOML.
///
/// Chaque champ a une valeur par défaut saine ; le fichier ne porte que
/// les écarts.
///
/// # Example
/// ```
/// use gm_core::config::MapperConfig;
/// let config = MapperConfig::default();
/// assert!(config.uppercase);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MapperConfig {
    /// Activer la paire majuscules (A–Z ↔ pictogrammes CP437).
    /// Désactivée, les majuscules passent inchangées.
    pub uppercase: bool,
    /// Afficher la bannière à l'entrée du mode interactif.
    pub banner: bool,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            uppercase: true,
            banner: true,
        }
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs
/// optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    mapper: MapperSection,
}

/// Mapper section of the TOML config, all fields optional for partial
/// override.
#[derive(Deserialize)]
struct MapperSection {
    uppercase: Option<bool>,
    banner: Option<bool>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use gm_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<MapperConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;

    let file: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Erreur de parsing TOML dans {}", path.display()))?;

    let mut config = MapperConfig::default();

    let m = file.mapper;
    if let Some(v) = m.uppercase {
        config.uppercase = v;
    }
    if let Some(v) = m.banner {
        config.banner = v;
    }

    Ok(config)
}
