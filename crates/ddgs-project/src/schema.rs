//! Scenario file schema definitions.
//!
//! Field defaults mirror the reference plant's base case, so a scenario
//! file only needs to spell out what it changes.

use ddgs_balance::ProcessInputs;
use ddgs_core::units::{pct, tph};
use serde::{Deserialize, Serialize};

/// Latest scenario file version understood by this crate.
pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub wet_cake: WetCakeDef,
    #[serde(default)]
    pub syrup: SyrupDef,
    #[serde(default)]
    pub dryer: DryerDef,
}

/// Wet cake (WDG) feed stream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WetCakeDef {
    #[serde(default = "default_wet_cake_flow")]
    pub flow_t_per_h: f64,
    #[serde(default = "default_wet_cake_solids")]
    pub solids_pct: f64,
    #[serde(default = "default_wet_cake_protein")]
    pub protein_ds_pct: f64,
}

/// De-oiled syrup (CDS) feed stream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SyrupDef {
    #[serde(default = "default_syrup_flow")]
    pub flow_t_per_h: f64,
    #[serde(default = "default_syrup_solids")]
    pub solids_pct: f64,
    #[serde(default = "default_syrup_protein")]
    pub protein_ds_pct: f64,
}

/// Dryer operation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DryerDef {
    /// Share of syrup flow diverted away before blending.
    #[serde(default = "default_syrup_cut")]
    pub syrup_cut_pct: f64,
    /// Target moisture of the finished DDGS.
    #[serde(default = "default_final_moisture")]
    pub final_moisture_pct: f64,
    /// Dry solids lost in the dryer and cyclones.
    #[serde(default)]
    pub ds_loss_pct: f64,
}

fn default_version() -> u32 {
    LATEST_VERSION
}

fn default_name() -> String {
    "base case".to_string()
}

fn default_wet_cake_flow() -> f64 {
    50.0
}

fn default_wet_cake_solids() -> f64 {
    38.0
}

fn default_wet_cake_protein() -> f64 {
    24.0
}

fn default_syrup_flow() -> f64 {
    26.0
}

fn default_syrup_solids() -> f64 {
    30.0
}

fn default_syrup_protein() -> f64 {
    35.0
}

fn default_syrup_cut() -> f64 {
    30.0
}

fn default_final_moisture() -> f64 {
    12.0
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            version: default_version(),
            name: default_name(),
            wet_cake: WetCakeDef::default(),
            syrup: SyrupDef::default(),
            dryer: DryerDef::default(),
        }
    }
}

impl Default for WetCakeDef {
    fn default() -> Self {
        Self {
            flow_t_per_h: default_wet_cake_flow(),
            solids_pct: default_wet_cake_solids(),
            protein_ds_pct: default_wet_cake_protein(),
        }
    }
}

impl Default for SyrupDef {
    fn default() -> Self {
        Self {
            flow_t_per_h: default_syrup_flow(),
            solids_pct: default_syrup_solids(),
            protein_ds_pct: default_syrup_protein(),
        }
    }
}

impl Default for DryerDef {
    fn default() -> Self {
        Self {
            syrup_cut_pct: default_syrup_cut(),
            final_moisture_pct: default_final_moisture(),
            ds_loss_pct: 0.0,
        }
    }
}

impl Scenario {
    /// Convert the scenario into calculator inputs.
    pub fn to_inputs(&self) -> ProcessInputs {
        ProcessInputs {
            wet_cake_flow: tph(self.wet_cake.flow_t_per_h),
            wet_cake_solids: pct(self.wet_cake.solids_pct),
            wet_cake_protein_ds: pct(self.wet_cake.protein_ds_pct),
            syrup_flow: tph(self.syrup.flow_t_per_h),
            syrup_solids: pct(self.syrup.solids_pct),
            syrup_protein_ds: pct(self.syrup.protein_ds_pct),
            syrup_cut: pct(self.dryer.syrup_cut_pct),
            final_moisture: pct(self.dryer.final_moisture_pct),
            ds_loss: pct(self.dryer.ds_loss_pct),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ddgs_core::numeric::{Tolerances, nearly_equal};
    use ddgs_core::units::{as_pct, as_tph};

    #[test]
    fn defaults_match_base_case() {
        let scenario = Scenario::default();
        assert_eq!(scenario.version, LATEST_VERSION);
        assert_eq!(scenario.wet_cake.flow_t_per_h, 50.0);
        assert_eq!(scenario.syrup.protein_ds_pct, 35.0);
        assert_eq!(scenario.dryer.ds_loss_pct, 0.0);
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let yaml = "version: 1\nname: less syrup\ndryer:\n  syrup_cut_pct: 60.0\n";
        let scenario: Scenario = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(scenario.name, "less syrup");
        assert_eq!(scenario.dryer.syrup_cut_pct, 60.0);
        // Untouched sections and fields come back as the base case.
        assert_eq!(scenario.wet_cake, WetCakeDef::default());
        assert_eq!(scenario.dryer.final_moisture_pct, 12.0);
    }

    #[test]
    fn yaml_round_trip() {
        let scenario = Scenario::default();
        let yaml = serde_yaml::to_string(&scenario).unwrap();
        let reparsed: Scenario = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(scenario, reparsed);
    }

    #[test]
    fn to_inputs_converts_units() {
        let tol = Tolerances::default();
        let inputs = Scenario::default().to_inputs();
        assert!(nearly_equal(as_tph(inputs.wet_cake_flow), 50.0, tol));
        assert!(nearly_equal(as_pct(inputs.wet_cake_solids), 38.0, tol));
        assert!(nearly_equal(as_pct(inputs.syrup_cut), 30.0, tol));
    }
}
