use anyhow::*;
use serde::{Deserialize, Serialize};

use crate::chemistry::composition::calc_formula;
use crate::chemistry::constants::NUM_ELEMENTS;
use crate::chemistry::mass_calc::{calc_base_mass, calc_enriched_mass};
use crate::chemistry::table::isotope_info;

// Atom counts in the fixed C,H,O,N,S order
pub type ElementCounts = [u32; NUM_ELEMENTS];

#[derive(Clone, PartialEq, Debug)]
pub enum ChemError {
    UnknownResidue(char),
    UnknownElement(String),
    InvalidIsotopeMass(String),
}

impl std::fmt::Display for ChemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChemError::UnknownResidue(code1) => {
                write!(f, "unknown amino acid '{}'", code1)
            }
            ChemError::UnknownElement(symbol) => {
                write!(f, "unknown element symbol '{}'", symbol)
            }
            ChemError::InvalidIsotopeMass(entry) => {
                write!(f, "isotope mass must be a positive real number (got '{}')", entry)
            }
        }
    }
}

impl std::error::Error for ChemError {}

/// One mass value per mass convention.
#[derive(Clone, Copy, Default, PartialEq, Debug, Serialize, Deserialize)]
pub struct MassPair {
    pub average: f64,
    pub mono: f64,
}

/// An isotope-enrichment label: substitute every atom of `symbol` with an
/// isotope of mass `mass` (the element's default enriched isotope if None).
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct IsotopeDirective {
    pub symbol: String,
    pub mass: Option<f64>,
}

impl IsotopeDirective {
    pub fn new(symbol: &str, mass: Option<f64>) -> anyhow::Result<IsotopeDirective> {
        isotope_info(symbol)?;

        if let Some(m) = mass {
            if !m.is_finite() || m <= 0.0 {
                bail!(ChemError::InvalidIsotopeMass(m.to_string()))
            }
        }

        Ok(IsotopeDirective {
            symbol: symbol.to_string(),
            mass: mass,
        })
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Peptide {
    pub sequence: String,
    pub isotopes: Vec<IsotopeDirective>,
    pub formula: ElementCounts,
    pub base_mass: MassPair,
    pub enriched_mass: MassPair,
}

impl Peptide {
    /// Builds a fully computed peptide from a raw sequence and isotope
    /// labels. Fails atomically on the first invalid residue, element
    /// symbol or isotope mass.
    pub fn new(sequence: &str, isotopes: Vec<IsotopeDirective>) -> anyhow::Result<Peptide> {
        if sequence.is_empty() { bail!("sequence is empty") }

        let formula = calc_formula(sequence)?;
        let base_mass = calc_base_mass(&formula);
        let enriched_mass = calc_enriched_mass(&formula, base_mass, &isotopes)?;

        Ok(Peptide {
            sequence: sequence.to_string(),
            isotopes: isotopes,
            formula: formula,
            base_mass: base_mass,
            enriched_mass: enriched_mass,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_with_default_mass() {
        let directive = IsotopeDirective::new("N", None).unwrap();
        assert_eq!(directive.symbol, "N");
        assert_eq!(directive.mass, None);
    }

    #[test]
    fn directive_rejects_unknown_element() {
        let err = IsotopeDirective::new("Z", None).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ChemError>(),
            Some(&ChemError::UnknownElement("Z".to_string()))
        );
    }

    #[test]
    fn directive_rejects_non_positive_mass() {
        for bad_mass in [-1.0, 0.0, f64::NAN] {
            let err = IsotopeDirective::new("C", Some(bad_mass)).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<ChemError>(),
                Some(ChemError::InvalidIsotopeMass(_))
            ));
        }
    }

    #[test]
    fn peptide_construction_is_atomic() {
        assert!(Peptide::new("", vec![]).is_err());

        let err = Peptide::new("GXG", vec![]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ChemError>(),
            Some(&ChemError::UnknownResidue('X'))
        );
    }

    #[test]
    fn peptide_without_labels_keeps_base_mass() {
        let peptide = Peptide::new("GAVLIK", vec![]).unwrap();
        assert_eq!(peptide.enriched_mass, peptide.base_mass);
    }
}
