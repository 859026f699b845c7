
use itertools::Itertools;

use crate::chemistry::constants::ELEMENT_SYMBOLS;
use crate::chemistry::model::{ElementCounts, Peptide};

pub fn format_formula(formula: &ElementCounts) -> String {
    ELEMENT_SYMBOLS
        .iter()
        .zip(formula.iter())
        .map(|(symbol, n_atoms)| format!("{}-{}", symbol, n_atoms))
        .join(" ")
}

// Masses are rounded to 5 decimals for display only; the peptide keeps
// full precision.
pub fn format_summary(peptide: &Peptide) -> String {
    format!(
        "\nMolecular Formula: {}\n\
         Average Mass (amu)\n\
         \x20 Normal: {:.5}\n\
         \x20 Enriched: {:.5}\n\
         Monoisotopic Mass (amu)\n\
         \x20 Normal: {:.5}\n\
         \x20 Enriched: {:.5}\n",
        format_formula(&peptide.formula),
        peptide.base_mass.average,
        peptide.enriched_mass.average,
        peptide.base_mass.mono,
        peptide.enriched_mass.mono,
    )
}
