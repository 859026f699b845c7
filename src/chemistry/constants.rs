
// Per-element atomic masses indexed in the fixed C,H,O,N,S order used by
// ElementCounts. Sources:
// - https://physics.nist.gov/cgi-bin/Compositions/stand_alone.pl
// - https://proteomicsresource.washington.edu/tools/masses.php
pub const NUM_ELEMENTS: usize = 5;

pub const ELEMENT_SYMBOLS: [&str; NUM_ELEMENTS] = ["C", "H", "O", "N", "S"];

// Abundance-weighted standard atomic weights
pub const ELEMENT_AVERAGE_MASSES: [f64; NUM_ELEMENTS] =
    [12.0108, 1.00795, 15.9994, 14.0067, 32.066];

// Most abundant naturally occurring isotope of each element
pub const ELEMENT_MONO_MASSES: [f64; NUM_ELEMENTS] =
    [12.0, 1.007825, 15.99491, 14.00307, 31.97207];

// Forming a peptide bond releases one water molecule; the residue table
// assumes both bonds formed, so one water is added back for the free
// N- and C-termini of the whole chain.
pub const WATER_AVERAGE_MASS: f64 = 18.015;
pub const WATER_MONO_MASS: f64 = 18.01056;

#[allow(dead_code)]
pub mod atom {
    pub const C: &'static str = "C";
    pub const H: &'static str = "H";
    pub const O: &'static str = "O";
    pub const N: &'static str = "N";
    pub const S: &'static str = "S";
}
