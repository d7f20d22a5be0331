//! Boucle interactive : menu à deux choix, saisie ligne à ligne.

use std::io::{BufRead, Write};

use anyhow::Result;
use gm_codec::transcode::Transcoder;
use gm_core::config::MapperConfig;

/// Bannière affichée à l'entrée du mode interactif.
const BANNER: &str = r"
        __          __
  ___ _/ /_ _____  / /  __ _  ___ ____
 / _ `/ / // / _ \/ _ \/  ' \/ _ `/ _ \
 \_, /_/\_, / .__/_//_/_/_/_/\_,_/ .__/
/___/  /___/_/                  /_/
";

/// Run the menu loop until EOF on `input`.
///
/// Each iteration: print the menu, read a choice, read one line of
/// text, print the transformed result. Invalid choices print a hint and
/// re-prompt.
pub fn run<R: BufRead, W: Write>(
    transcoder: &Transcoder,
    config: &MapperConfig,
    mut input: R,
    mut output: W,
) -> Result<()> {
    if config.banner {
        writeln!(output, "{BANNER}")?;
    }

    loop {
        writeln!(output, "=== glyphmap : a–z ↔ CP1252, A–Z ↔ CP437 ===")?;
        writeln!(output, "1. Encoder du texte")?;
        writeln!(output, "2. Décoder du texte")?;
        write!(output, "Choix (1/2) : ")?;
        output.flush()?;

        let Some(choice) = read_line(&mut input)? else {
            return Ok(());
        };

        match choice.trim() {
            "1" => {
                write!(output, "Texte à encoder : ")?;
                output.flush()?;
                let Some(text) = read_line(&mut input)? else {
                    return Ok(());
                };
                writeln!(output, "\nRésultat encodé :\n{}\n", transcoder.encode(&text))?;
            }
            "2" => {
                write!(output, "Texte à décoder : ")?;
                output.flush()?;
                let Some(text) = read_line(&mut input)? else {
                    return Ok(());
                };
                writeln!(output, "\nRésultat décodé :\n{}\n", transcoder.decode(&text))?;
            }
            other => {
                log::debug!("choix de menu invalide : {other:?}");
                writeln!(output, "Choix invalide. Sélectionnez 1 ou 2.")?;
            }
        }
    }
}

/// Read one line without its trailing newline; `None` on EOF.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with(['\n', '\r']) {
        line.pop();
    }
    Ok(Some(line))
}
