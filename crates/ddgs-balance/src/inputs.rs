//! Operating-point inputs for the dryer mass balance.

use ddgs_core::units::{MassRate, Ratio, pct, tph};

/// One operating point of the drying line.
///
/// Flows are as-fed mass rates; every percentage from the plant balance
/// sheet is carried as a dimensionless [`Ratio`] built from percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessInputs {
    /// Wet cake (WDG) as-fed flow.
    pub wet_cake_flow: MassRate,
    /// Solids fraction of the wet cake, as-fed basis.
    pub wet_cake_solids: Ratio,
    /// Protein fraction of the wet-cake dry solids.
    pub wet_cake_protein_ds: Ratio,
    /// De-oiled syrup (CDS) as-fed flow.
    pub syrup_flow: MassRate,
    /// Solids fraction of the syrup, as-fed basis.
    pub syrup_solids: Ratio,
    /// Protein fraction of the syrup dry solids.
    pub syrup_protein_ds: Ratio,
    /// Fraction of the syrup flow diverted away before blending.
    ///
    /// The cut scales the as-fed syrup flow while `syrup_solids` is held
    /// fixed. If dewatering changes the real solids fraction under the cut,
    /// the caller must supply an already-adjusted `syrup_solids`; the model
    /// does not correct for it.
    pub syrup_cut: Ratio,
    /// Target moisture fraction of the finished DDGS, as-fed basis.
    pub final_moisture: Ratio,
    /// Fraction of incoming dry solids lost in the dryer and cyclones.
    pub ds_loss: Ratio,
}

impl ProcessInputs {
    /// Copy of these inputs with the syrup cut forced to 100 %.
    ///
    /// This is the comparison scenario: all syrup diverted, the dryer fed
    /// by wet cake alone.
    pub fn without_syrup(&self) -> Self {
        Self {
            syrup_cut: pct(100.0),
            ..*self
        }
    }
}

impl Default for ProcessInputs {
    /// Base-case operating point of the reference plant.
    fn default() -> Self {
        Self {
            wet_cake_flow: tph(50.0),
            wet_cake_solids: pct(38.0),
            wet_cake_protein_ds: pct(24.0),
            syrup_flow: tph(26.0),
            syrup_solids: pct(30.0),
            syrup_protein_ds: pct(35.0),
            syrup_cut: pct(30.0),
            final_moisture: pct(12.0),
            ds_loss: pct(0.0),
        }
    }
}
