use anyhow::Result;
use clap::Parser;
use gm_codec::transcode::Transcoder;
use gm_core::config::MapperConfig;

pub mod cli;
pub mod interactive;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Valider le mode demandé
    cli.validate_mode()?;

    // 4. Charger la config
    let mut config = resolve_config(&cli)?;

    // 4b. Appliquer les overrides CLI
    if cli.no_uppercase {
        config.uppercase = false;
    }

    // 5. Construire le transcodeur (tables immuables, une seule fois)
    let transcoder = Transcoder::new(config.uppercase)?;

    // 6. Mode one-shot ou boucle interactive
    if let Some(ref text) = cli.encode {
        println!("{}", transcoder.encode(text));
        return Ok(());
    }
    if let Some(ref text) = cli.decode {
        println!("{}", transcoder.decode(text));
        return Ok(());
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    interactive::run(&transcoder, &config, stdin.lock(), stdout.lock())
}

/// Resolve config: TOML file, or defaults if the file is missing.
fn resolve_config(cli: &cli::Cli) -> Result<MapperConfig> {
    if cli.config.exists() {
        gm_core::config::load_config(&cli.config)
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(MapperConfig::default())
    }
}
