
use anyhow::*;

use crate::chemistry::constants::NUM_ELEMENTS;
use crate::chemistry::model::ElementCounts;
use crate::chemistry::table::formula_for;

/// Element-wise sum of the per-residue contributions over the whole
/// sequence. Terminal atoms are not part of the counts; they only enter
/// the mass computation through the water addback.
pub fn calc_formula(sequence: &str) -> Result<ElementCounts> {
    let mut formula: ElementCounts = [0; NUM_ELEMENTS];

    for code1 in sequence.chars() {
        let contribution = formula_for(code1)?;
        for k in 0..NUM_ELEMENTS {
            formula[k] += contribution[k];
        }
    }

    Ok(formula)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chemistry::model::ChemError;

    #[test]
    fn glycine_formula() {
        assert_eq!(calc_formula("G").unwrap(), [2, 3, 1, 1, 0]);
    }

    #[test]
    fn formula_sums_residue_contributions() {
        // G(2,3,1,1,0) + A(3,5,1,1,0) + C(3,5,1,1,1)
        assert_eq!(calc_formula("GAC").unwrap(), [8, 13, 3, 3, 1]);
    }

    #[test]
    fn invalid_residue_aborts_the_whole_formula() {
        let err = calc_formula("GAXC").unwrap_err();
        assert_eq!(
            err.downcast_ref::<ChemError>(),
            Some(&ChemError::UnknownResidue('X'))
        );
    }
}
