//! Range clamping and sanity checks for scenario files.

use crate::schema::{LATEST_VERSION, Scenario};
use ddgs_core::numeric::{clamp, ensure_finite};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Non-finite value: {field} = {value}")]
    NonFinite { field: &'static str, value: f64 },
}

/// Check the file version and clamp every input into its form range.
///
/// Out-of-range values are clamped, not rejected; only non-finite numbers
/// and unknown versions are errors. The ranges are the reference form's:
/// flows non-negative, percentages 0-100, final moisture 0-40, DS loss 0-20.
pub fn validate_scenario(scenario: &mut Scenario) -> Result<(), ValidationError> {
    if scenario.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }

    clamp_field(
        &mut scenario.wet_cake.flow_t_per_h,
        "wet_cake.flow_t_per_h",
        0.0,
        f64::MAX,
    )?;
    clamp_field(
        &mut scenario.wet_cake.solids_pct,
        "wet_cake.solids_pct",
        0.0,
        100.0,
    )?;
    clamp_field(
        &mut scenario.wet_cake.protein_ds_pct,
        "wet_cake.protein_ds_pct",
        0.0,
        100.0,
    )?;
    clamp_field(
        &mut scenario.syrup.flow_t_per_h,
        "syrup.flow_t_per_h",
        0.0,
        f64::MAX,
    )?;
    clamp_field(&mut scenario.syrup.solids_pct, "syrup.solids_pct", 0.0, 100.0)?;
    clamp_field(
        &mut scenario.syrup.protein_ds_pct,
        "syrup.protein_ds_pct",
        0.0,
        100.0,
    )?;
    clamp_field(
        &mut scenario.dryer.syrup_cut_pct,
        "dryer.syrup_cut_pct",
        0.0,
        100.0,
    )?;
    clamp_field(
        &mut scenario.dryer.final_moisture_pct,
        "dryer.final_moisture_pct",
        0.0,
        40.0,
    )?;
    clamp_field(
        &mut scenario.dryer.ds_loss_pct,
        "dryer.ds_loss_pct",
        0.0,
        20.0,
    )?;

    Ok(())
}

fn clamp_field(
    value: &mut f64,
    field: &'static str,
    min: f64,
    max: f64,
) -> Result<(), ValidationError> {
    ensure_finite(*value, field).map_err(|_| ValidationError::NonFinite {
        field,
        value: *value,
    })?;
    *value = clamp(*value, min, max);
    Ok(())
}
