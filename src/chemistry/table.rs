use crate::chemistry::constants::*;
use crate::chemistry::model::{ChemError, ElementCounts, MassPair};

use anyhow::*;
use lazy_static::lazy_static;
use std::collections::HashMap;

#[derive(Clone, Default, PartialEq, Debug)]
pub struct AminoAcidTable {
    pub composition_by_code1: HashMap<char, ElementCounts>,
}

impl AminoAcidTable {
    pub fn new(entries: Vec<(char, ElementCounts)>) -> Result<AminoAcidTable> {
        if entries.is_empty() { bail!("entries is empty") }

        let n_entries = entries.len();
        let mut composition_by_code1 = HashMap::with_capacity(n_entries);
        for (code1, counts) in entries {
            composition_by_code1.insert(code1, counts);
        }

        if composition_by_code1.len() != n_entries {
            bail!("entries contains duplicated residue codes")
        }

        Ok(AminoAcidTable {
            composition_by_code1: composition_by_code1,
        })
    }
}

#[derive(Clone, Copy, Default, PartialEq, Debug)]
pub struct IsotopeEntry {
    pub index: usize, // position in ElementCounts
    pub mass: f64,    // default enriched isotope mass
}

#[derive(Clone, Default, PartialEq, Debug)]
pub struct IsotopeTable {
    pub entry_by_symbol: HashMap<String, IsotopeEntry>,
}

impl IsotopeTable {
    pub fn new(entries: Vec<(&str, IsotopeEntry)>) -> Result<IsotopeTable> {
        if entries.is_empty() { bail!("entries is empty") }

        let n_entries = entries.len();
        let mut entry_by_symbol = HashMap::with_capacity(n_entries);
        for (symbol, entry) in entries {
            if entry.index >= NUM_ELEMENTS { bail!("element index out of range") }
            entry_by_symbol.insert(symbol.to_string(), entry);
        }

        if entry_by_symbol.len() != n_entries {
            bail!("entries contains duplicated element symbols")
        }

        Ok(IsotopeTable {
            entry_by_symbol: entry_by_symbol,
        })
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct MassConstants {
    pub average: [f64; NUM_ELEMENTS],
    pub mono: [f64; NUM_ELEMENTS],
    pub water: MassPair,
}

const MASS_CONSTANTS: MassConstants = MassConstants {
    average: ELEMENT_AVERAGE_MASSES,
    mono: ELEMENT_MONO_MASSES,
    water: MassPair {
        average: WATER_AVERAGE_MASS,
        mono: WATER_MONO_MASS,
    },
};

pub fn mass_constants() -> &'static MassConstants {
    &MASS_CONSTANTS
}

// Elemental contribution of each canonical residue in C,H,O,N,S order,
// assuming the residue has formed two peptide bonds (internal to a chain).
// Sources:
// - http://en.wikipedia.org/wiki/Proteinogenic_amino_acid
// - http://www.matrixscience.com/help/aa_help.html
lazy_static! {
    pub static ref STANDARD_AMINO_ACID_TABLE: AminoAcidTable = AminoAcidTable::new(
        vec![
            ('G', [2, 3, 1, 1, 0]),
            ('A', [3, 5, 1, 1, 0]),
            ('V', [5, 9, 1, 1, 0]),
            ('L', [6, 11, 1, 1, 0]),
            ('I', [6, 11, 1, 1, 0]),
            ('F', [9, 9, 1, 1, 0]),
            ('Y', [9, 9, 2, 1, 0]),
            ('W', [11, 10, 1, 2, 0]),
            ('S', [3, 5, 2, 1, 0]),
            ('T', [4, 7, 2, 1, 0]),
            ('P', [5, 7, 1, 1, 0]),
            ('Q', [5, 8, 2, 2, 0]),
            ('C', [3, 5, 1, 1, 1]),
            ('M', [5, 9, 1, 1, 1]),
            ('N', [4, 6, 2, 2, 0]),
            ('D', [4, 5, 3, 1, 0]),
            ('E', [5, 7, 3, 1, 0]),
            ('K', [6, 12, 1, 2, 0]),
            ('R', [6, 12, 1, 4, 0]),
            ('H', [6, 7, 1, 3, 0]),
        ]
    ).unwrap();

    // Default enriched isotope per element: 13C, 2H, 18O, 15N, 34S
    pub static ref BIOMOLECULE_ISOTOPE_TABLE: IsotopeTable = IsotopeTable::new(
        vec![
            (atom::C, IsotopeEntry { index: 0, mass: 13.00335 }),
            (atom::H, IsotopeEntry { index: 1, mass: 2.014102 }),
            (atom::O, IsotopeEntry { index: 2, mass: 17.99916 }),
            (atom::N, IsotopeEntry { index: 3, mass: 15.00011 }),
            (atom::S, IsotopeEntry { index: 4, mass: 33.96787 }),
        ]
    ).unwrap();
}

pub fn formula_for(code1: char) -> Result<ElementCounts> {
    STANDARD_AMINO_ACID_TABLE
        .composition_by_code1
        .get(&code1)
        .copied()
        .ok_or_else(|| anyhow!(ChemError::UnknownResidue(code1)))
}

pub fn isotope_info(symbol: &str) -> Result<(usize, f64)> {
    let entry = BIOMOLECULE_ISOTOPE_TABLE
        .entry_by_symbol
        .get(symbol)
        .ok_or_else(|| anyhow!(ChemError::UnknownElement(symbol.to_string())))?;

    Ok((entry.index, entry.mass))
}
