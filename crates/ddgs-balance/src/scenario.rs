//! Side-by-side evaluation of an operating point with and without syrup.

use crate::balance::{BalanceResult, compute};
use crate::inputs::ProcessInputs;
use ddgs_core::units::{MassRate, Ratio};

/// The primary operating point next to its no-syrup counterpart.
#[derive(Debug, Clone, Copy)]
pub struct SyrupComparison {
    pub with_syrup: BalanceResult,
    pub without_syrup: BalanceResult,
}

impl SyrupComparison {
    /// Extra as-fed product flow gained by blending syrup in.
    pub fn delta_product_as_fed(&self) -> MassRate {
        self.with_syrup.product_as_fed_mass - self.without_syrup.product_as_fed_mass
    }

    /// Shift in as-fed protein share from blending syrup in, in
    /// percentage points.
    pub fn delta_protein_pct_as_fed(&self) -> Ratio {
        self.with_syrup.protein_pct_as_fed - self.without_syrup.protein_pct_as_fed
    }
}

/// Evaluate `inputs` and the same operating point with all syrup diverted.
///
/// The comparison reuses the plain calculator on a modified copy of the
/// inputs; there is no special no-syrup logic in the balance itself.
pub fn compare(inputs: &ProcessInputs) -> SyrupComparison {
    SyrupComparison {
        with_syrup: compute(inputs),
        without_syrup: compute(&inputs.without_syrup()),
    }
}
