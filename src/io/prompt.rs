
use anyhow::*;
use log::debug;
use std::io::BufRead;

use crate::chemistry::model::{ChemError, IsotopeDirective};
use crate::chemistry::table::formula_for;

/// Checks a raw sequence line: trimmed, non-empty, canonical codes only.
pub fn parse_sequence(raw: &str) -> Result<String> {
    let sequence = raw.trim();
    if sequence.is_empty() { bail!("sequence is empty") }

    for code1 in sequence.chars() {
        formula_for(code1)?;
    }

    Ok(sequence.to_string())
}

/// Parses the raw isotope line: `;`-separated entries, each either a bare
/// element symbol or `<Symbol>,<mass>`. An empty line means no labels.
pub fn parse_isotope_list(raw: &str) -> Result<Vec<IsotopeDirective>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Vec::new());
    }

    let mut directives = Vec::new();
    for entry in raw.split(';') {
        let mut parts = entry.splitn(2, ',');
        let symbol = parts.next().ok_or_else(|| anyhow!("empty isotope entry"))?.trim();

        let mass = match parts.next() {
            Some(mass_str) => {
                let mass_str = mass_str.trim();
                let mass: f64 = fast_float::parse(mass_str)
                    .map_err(|_| anyhow!(ChemError::InvalidIsotopeMass(mass_str.to_string())))?;
                Some(mass)
            }
            None => None,
        };

        directives.push(IsotopeDirective::new(symbol, mass)?);
    }

    Ok(directives)
}

pub fn prompt_sequence(input: &mut impl BufRead) -> Result<String> {
    loop {
        println!("Enter the amino acid sequence as a continuous string of single letter abbreviations:");
        let line = read_line(input)?;

        match parse_sequence(&line) {
            Result::Ok(sequence) => return Ok(sequence),
            Result::Err(e) => {
                debug!("rejected sequence input: {}", e);
                println!("Invalid characters entered ({}). Please try again!", e);
            }
        }
    }
}

pub fn prompt_isotopes(input: &mut impl BufRead) -> Result<Vec<IsotopeDirective>> {
    loop {
        println!("Enter the atomic symbol of the desired isotope (multiple labels should be separated by ';'):");
        println!("Key: \"N\" - Nitrogen 15");
        println!("     \"O\" - Oxygen 18");
        println!("     \"H\" - Deuterium");
        println!("     \"C\" - Carbon 13");
        println!("     \"S\" - Sulfur 34");
        println!("     Custom: (H,C,O,N,S),MW");
        let line = read_line(input)?;

        match parse_isotope_list(&line) {
            Result::Ok(directives) => return Ok(directives),
            Result::Err(e) => {
                debug!("rejected isotope input: {}", e);
                println!("Invalid isotope entered ({}). Check that the mass is a positive real number.", e);
            }
        }
    }
}

fn read_line(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    let n_bytes = input.read_line(&mut line)?;
    if n_bytes == 0 { bail!("unexpected end of input") }
    Ok(line)
}
