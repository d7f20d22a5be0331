use std::path::PathBuf;

use clap::Parser;

/// glyphmap — Letter ↔ legacy-symbol transcoder (CP1252 + CP437).
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Encoder ce texte (a–z → symboles CP1252, A–Z → pictogrammes
    /// CP437) puis quitter.
    #[arg(long)]
    pub encode: Option<String>,

    /// Décoder ce texte (symboles → lettres) puis quitter.
    #[arg(long)]
    pub decode: Option<String>,

    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Désactiver la paire majuscules (variante minuscules seules).
    #[arg(long, default_value_t = false)]
    pub no_uppercase: bool,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Validate that at most one one-shot mode is requested.
    ///
    /// Without `--encode` or `--decode`, the interactive loop starts.
    ///
    /// # Errors
    /// Returns an error if both flags are combined.
    pub fn validate_mode(&self) -> anyhow::Result<()> {
        if self.encode.is_some() && self.decode.is_some() {
            anyhow::bail!("--encode et --decode sont exclusifs. Spécifiez l'un OU l'autre.");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_and_decode_are_exclusive() {
        let cli = Cli::parse_from(["glyphmap", "--encode", "abc", "--decode", "¡¢£"]);
        assert!(cli.validate_mode().is_err());
    }

    #[test]
    fn single_mode_is_accepted() {
        let cli = Cli::parse_from(["glyphmap", "--encode", "abc"]);
        assert!(cli.validate_mode().is_ok());

        let cli = Cli::parse_from(["glyphmap"]);
        assert!(cli.validate_mode().is_ok());
    }
}
