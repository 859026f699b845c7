
mod chemistry;
mod io;

use anyhow::Result;
use log::debug;

use crate::chemistry::model::Peptide;
use crate::io::prompt::{prompt_isotopes, prompt_sequence};
use crate::io::report::format_summary;

fn main() -> Result<()> {
    env_logger::init();

    let stdin = std::io::stdin();
    let mut input = stdin.lock();

    let sequence = prompt_sequence(&mut input)?;
    let isotopes = prompt_isotopes(&mut input)?;
    debug!("sequence '{}' with {} isotope label(s)", sequence, isotopes.len());

    let polypeptide = Peptide::new(&sequence, isotopes)?;
    print!("{}", format_summary(&polypeptide));

    Ok(())
}
