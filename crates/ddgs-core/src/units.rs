// ddgs-core/src/units.rs

use uom::si::f64::{MassRate as UomMassRate, Ratio as UomRatio};

// Public canonical unit types (SI, f64)
pub type MassRate = UomMassRate;
pub type Ratio = UomRatio;

/// Kilograms per second in one tonne per hour.
const KGPS_PER_TPH: f64 = 1000.0 / 3600.0;

#[inline]
pub fn kgps(v: f64) -> MassRate {
    use uom::si::mass_rate::kilogram_per_second;
    MassRate::new::<kilogram_per_second>(v)
}

/// Mass rate from tonnes per hour, the plant's working unit.
#[inline]
pub fn tph(v: f64) -> MassRate {
    kgps(v * KGPS_PER_TPH)
}

/// Mass rate back in tonnes per hour.
#[inline]
pub fn as_tph(m: MassRate) -> f64 {
    use uom::si::mass_rate::kilogram_per_second;
    m.get::<kilogram_per_second>() / KGPS_PER_TPH
}

/// Dimensionless ratio from a 0-100 percentage.
#[inline]
pub fn pct(v: f64) -> Ratio {
    use uom::si::ratio::percent;
    Ratio::new::<percent>(v)
}

/// Ratio back as a 0-100 percentage.
#[inline]
pub fn as_pct(r: Ratio) -> f64 {
    use uom::si::ratio::percent;
    r.get::<percent>()
}

/// Ratio as a plain 0-1 fraction.
#[inline]
pub fn frac(r: Ratio) -> f64 {
    use uom::si::ratio::ratio;
    r.get::<ratio>()
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}
