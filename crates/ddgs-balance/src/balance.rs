//! Steady-state solids and protein balance across the dryer.

use crate::inputs::ProcessInputs;
use ddgs_core::units::{MassRate, Ratio, frac, kgps, unitless};

/// Derived flows and protein contents for one operating point.
///
/// Fully determined by [`ProcessInputs`]. Fields subject to an undefined
/// ratio carry NaN instead of failing; see [`compute`].
#[derive(Debug, Clone, Copy)]
pub struct BalanceResult {
    /// Dry solids in the wet-cake stream.
    pub ds_wet_cake: MassRate,
    /// Protein in the wet-cake stream.
    pub protein_wet_cake: MassRate,
    /// Dry solids in the syrup stream, after the cut.
    pub ds_syrup: MassRate,
    /// Protein in the syrup stream, after the cut.
    pub protein_syrup: MassRate,
    /// Total dry solids entering the dryer.
    pub ds_in: MassRate,
    /// Dry solids leaving the dryer.
    pub ds_out: MassRate,
    /// Dry solids lost in the dryer and cyclones.
    pub ds_lost: MassRate,
    /// Total protein entering and leaving the dryer.
    pub protein_total: MassRate,
    /// DDGS product on a dry basis; equal to `ds_out`.
    pub product_dry_mass: MassRate,
    /// DDGS product as-fed, back-calculated from the target moisture.
    ///
    /// NaN when the target moisture is 100 % or more.
    pub product_as_fed_mass: MassRate,
    /// Protein share of the product, dry basis. NaN when no dry mass
    /// leaves the dryer.
    pub protein_pct_dry: Ratio,
    /// Protein share of the product, as-fed basis. NaN whenever
    /// `product_as_fed_mass` is zero or NaN.
    pub protein_pct_as_fed: Ratio,
}

/// Compute the steady-state balance for one operating point.
///
/// Pure and total: every input produces a result, with NaN standing in for
/// ratios that are undefined at that operating point. The syrup cut scales
/// the as-fed syrup flow with the solids fraction held fixed, the dry-solids
/// loss applies to solids only, and protein is treated as fully conservative
/// through the dryer.
pub fn compute(inputs: &ProcessInputs) -> BalanceResult {
    let solids_wdg = frac(inputs.wet_cake_solids);
    let protein_wdg = frac(inputs.wet_cake_protein_ds);
    let solids_cds = frac(inputs.syrup_solids);
    let protein_cds = frac(inputs.syrup_protein_ds);
    let kept = 1.0 - frac(inputs.syrup_cut);
    let moisture = frac(inputs.final_moisture);
    let loss = frac(inputs.ds_loss);

    let ds_wet_cake = inputs.wet_cake_flow * solids_wdg;
    let protein_wet_cake = ds_wet_cake * protein_wdg;

    // Cut applied to the as-fed syrup flow, solids fraction held fixed.
    let ds_syrup = inputs.syrup_flow * solids_cds * kept;
    let protein_syrup = ds_syrup * protein_cds;

    let ds_in = ds_wet_cake + ds_syrup;
    let ds_out = ds_in * (1.0 - loss);
    let ds_lost = ds_in - ds_out;
    let protein_total = protein_wet_cake + protein_syrup;

    let product_dry_mass = ds_out;

    let dry_complement = 1.0 - moisture;
    let product_as_fed_mass = if dry_complement > 0.0 {
        product_dry_mass / dry_complement
    } else {
        kgps(f64::NAN)
    };

    let protein_pct_dry = if product_dry_mass.value > 0.0 {
        protein_total / product_dry_mass
    } else {
        unitless(f64::NAN)
    };

    let protein_pct_as_fed = if product_as_fed_mass.value > 0.0 {
        protein_total / product_as_fed_mass
    } else {
        unitless(f64::NAN)
    };

    BalanceResult {
        ds_wet_cake,
        protein_wet_cake,
        ds_syrup,
        protein_syrup,
        ds_in,
        ds_out,
        ds_lost,
        protein_total,
        product_dry_mass,
        product_as_fed_mass,
        protein_pct_dry,
        protein_pct_as_fed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ddgs_core::numeric::{Tolerances, nearly_equal};
    use ddgs_core::units::{as_pct, as_tph, pct, tph};

    fn base_case() -> ProcessInputs {
        ProcessInputs::default()
    }

    #[test]
    fn base_case_balance() {
        let tol = Tolerances::default();
        let res = compute(&base_case());

        assert!(nearly_equal(as_tph(res.ds_wet_cake), 19.0, tol));
        assert!(nearly_equal(as_tph(res.protein_wet_cake), 4.56, tol));
        assert!(nearly_equal(as_tph(res.ds_syrup), 26.0 * 0.30 * 0.70, tol));
        assert!(nearly_equal(as_tph(res.protein_syrup), 1.911, tol));
        assert!(nearly_equal(as_tph(res.ds_in), 24.46, tol));
        assert!(nearly_equal(as_tph(res.ds_out), 24.46, tol));
        assert!(nearly_equal(as_tph(res.ds_lost), 0.0, tol));
        assert!(nearly_equal(as_tph(res.protein_total), 6.471, tol));
        assert!(nearly_equal(
            as_tph(res.product_as_fed_mass),
            24.46 / 0.88,
            tol
        ));
        assert!(nearly_equal(
            as_pct(res.protein_pct_dry),
            6.471 / 24.46 * 100.0,
            tol
        ));
        assert!(nearly_equal(
            as_pct(res.protein_pct_as_fed),
            6.471 / (24.46 / 0.88) * 100.0,
            tol
        ));
    }

    #[test]
    fn zero_loss_keeps_all_solids() {
        let tol = Tolerances::default();
        let res = compute(&ProcessInputs {
            ds_loss: pct(0.0),
            ..base_case()
        });
        assert!(nearly_equal(res.ds_out.value, res.ds_in.value, tol));
        assert!(nearly_equal(res.ds_lost.value, 0.0, tol));
    }

    #[test]
    fn ds_loss_takes_solids_but_not_protein() {
        let tol = Tolerances::default();
        let lossless = compute(&base_case());
        let res = compute(&ProcessInputs {
            ds_loss: pct(5.0),
            ..base_case()
        });
        assert!(nearly_equal(
            as_tph(res.ds_out),
            as_tph(lossless.ds_in) * 0.95,
            tol
        ));
        assert!(nearly_equal(
            as_tph(res.ds_lost),
            as_tph(lossless.ds_in) * 0.05,
            tol
        ));
        assert_eq!(res.protein_total.value, lossless.protein_total.value);
    }

    #[test]
    fn full_moisture_leaves_dry_side_finite() {
        let res = compute(&ProcessInputs {
            final_moisture: pct(100.0),
            ..base_case()
        });
        assert!(res.product_as_fed_mass.value.is_nan());
        assert!(res.protein_pct_as_fed.value.is_nan());
        assert!(res.product_dry_mass.value.is_finite());
        assert!(res.protein_pct_dry.value.is_finite());
    }

    #[test]
    fn zero_feed_has_undefined_protein_shares() {
        let res = compute(&ProcessInputs {
            wet_cake_flow: tph(0.0),
            syrup_flow: tph(0.0),
            ..base_case()
        });
        assert_eq!(res.ds_wet_cake.value, 0.0);
        assert_eq!(res.ds_syrup.value, 0.0);
        assert_eq!(res.ds_in.value, 0.0);
        assert_eq!(res.ds_out.value, 0.0);
        assert_eq!(res.protein_total.value, 0.0);
        assert!(res.protein_pct_dry.value.is_nan());
        assert!(res.protein_pct_as_fed.value.is_nan());
    }

    #[test]
    fn full_cut_zeroes_the_syrup_stream() {
        let res = compute(&base_case().without_syrup());
        assert_eq!(res.ds_syrup.value, 0.0);
        assert_eq!(res.protein_syrup.value, 0.0);
        // Wet cake alone: protein share on a dry basis is the feed's.
        let tol = Tolerances::default();
        assert!(nearly_equal(as_pct(res.protein_pct_dry), 24.0, tol));
    }
}
