
use anyhow::*;

use crate::chemistry::constants::NUM_ELEMENTS;
use crate::chemistry::model::{ElementCounts, IsotopeDirective, MassPair};
use crate::chemistry::table::{isotope_info, mass_constants};

/// Formula-weighted mass in both conventions, plus one water for the free
/// termini of the chain.
pub fn calc_base_mass(formula: &ElementCounts) -> MassPair {
    let constants = mass_constants();

    let mut average = constants.water.average;
    let mut mono = constants.water.mono;

    for k in 0..NUM_ELEMENTS {
        let n_atoms = formula[k] as f64;
        average += n_atoms * constants.average[k];
        mono += n_atoms * constants.mono[k];
    }

    MassPair { average: average, mono: mono }
}

/// Applies the isotope labels in list order against a running mass.
///
/// For every directive the whole-peptide atom count is read from the
/// immutable formula and the standard per-element constant is subtracted
/// afresh from the running value before the enriched mass is added, for
/// both conventions. Repeated labels for one element therefore do not
/// collapse into a single substitution; the chosen isotope mass feeds both
/// conventions unchanged.
pub fn calc_enriched_mass(
    formula: &ElementCounts,
    base_mass: MassPair,
    isotopes: &[IsotopeDirective],
) -> Result<MassPair> {
    let constants = mass_constants();
    let mut mass = base_mass;

    for directive in isotopes {
        let (index, default_mass) = isotope_info(&directive.symbol)?;
        let n_atoms = formula[index] as f64;
        let enriched = directive.mass.unwrap_or(default_mass);

        mass.average = mass.average - n_atoms * constants.average[index] + n_atoms * enriched;
        mass.mono = mass.mono - n_atoms * constants.mono[index] + n_atoms * enriched;
    }

    Ok(mass)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chemistry::composition::calc_formula;
    use crate::chemistry::model::ChemError;

    const EPSILON: f64 = 1e-9;

    fn assert_close(value: f64, expected: f64) {
        assert!(
            (value - expected).abs() < EPSILON,
            "{} differs from expected {}",
            value,
            expected
        );
    }

    #[test]
    fn glycine_base_mass() {
        let formula = calc_formula("G").unwrap();
        let mass = calc_base_mass(&formula);

        // 2 C + 3 H + O + N + water, per convention
        assert_close(mass.average, 75.06655);
        assert_close(mass.mono, 75.032015);
    }

    #[test]
    fn no_labels_leaves_base_mass_untouched() {
        let formula = calc_formula("PEPTIDE").unwrap();
        let base = calc_base_mass(&formula);
        let enriched = calc_enriched_mass(&formula, base, &[]).unwrap();

        // exact equality, no drift allowed on the no-op path
        assert_eq!(enriched, base);
    }

    #[test]
    fn default_carbon_13_shifts_by_carbon_count() {
        let formula = calc_formula("GA").unwrap();
        assert_eq!(formula[0], 5);

        let base = calc_base_mass(&formula);
        let labels = vec![IsotopeDirective::new("C", None).unwrap()];
        let enriched = calc_enriched_mass(&formula, base, &labels).unwrap();

        assert_close(enriched.average, base.average + 5.0 * (13.00335 - 12.0108));
        assert_close(enriched.mono, base.mono + 5.0 * (13.00335 - 12.0));
    }

    #[test]
    fn distinct_element_labels_compose_additively() {
        let formula = calc_formula("GA").unwrap();
        let base = calc_base_mass(&formula);

        let labels = vec![
            IsotopeDirective::new("C", None).unwrap(),
            IsotopeDirective::new("N", None).unwrap(),
        ];
        let enriched = calc_enriched_mass(&formula, base, &labels).unwrap();

        let expected_average = base.average
            + 5.0 * (13.00335 - 12.0108)
            + 2.0 * (15.00011 - 14.0067);
        let expected_mono = base.mono
            + 5.0 * (13.00335 - 12.0)
            + 2.0 * (15.00011 - 14.00307);
        assert_close(enriched.average, expected_average);
        assert_close(enriched.mono, expected_mono);
    }

    #[test]
    fn repeated_labels_for_one_element_subtract_the_standard_mass_each_time() {
        // regression for the running-mass recurrence: two carbon labels on
        // glycine (2 carbon atoms), custom masses 13.5 then 14.0
        let formula = calc_formula("G").unwrap();
        let base = calc_base_mass(&formula);

        let labels = vec![
            IsotopeDirective::new("C", Some(13.5)).unwrap(),
            IsotopeDirective::new("C", Some(14.0)).unwrap(),
        ];
        let enriched = calc_enriched_mass(&formula, base, &labels).unwrap();

        // average: 75.06655 + 2*(13.5 - 12.0108) + 2*(14.0 - 12.0108)
        assert_close(enriched.average, 82.02335);
        // mono: 75.032015 + 2*1.5 + 2*2.0
        assert_close(enriched.mono, 82.032015);
    }

    #[test]
    fn custom_mass_equal_to_the_standard_weight_is_not_a_no_op() {
        // the chosen mass replaces the per-convention standard mass in BOTH
        // conventions, so matching the average weight still shifts the mono
        let formula = calc_formula("G").unwrap();
        let base = calc_base_mass(&formula);

        let labels = vec![IsotopeDirective::new("C", Some(12.0108)).unwrap()];
        let enriched = calc_enriched_mass(&formula, base, &labels).unwrap();

        assert_close(enriched.average, base.average);
        assert_close(enriched.mono, base.mono + 2.0 * (12.0108 - 12.0));
    }

    #[test]
    fn unknown_element_fails_enrichment() {
        let formula = calc_formula("G").unwrap();
        let base = calc_base_mass(&formula);

        // bypass the directive constructor to hit the lookup directly
        let labels = vec![IsotopeDirective { symbol: "Se".to_string(), mass: None }];
        let err = calc_enriched_mass(&formula, base, &labels).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ChemError>(),
            Some(&ChemError::UnknownElement("Se".to_string()))
        );
    }
}
