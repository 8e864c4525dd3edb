//! ddgs-balance: steady-state mass balance for a DDGS drying line.
//!
//! The model blends two feed streams, wet cake (WDG) and de-oiled syrup
//! (CDS), applies a syrup cut and a dry-solids loss across the dryer, and
//! reports product flow and protein content on dry and as-fed bases.
//!
//! The calculator is a pure function of [`ProcessInputs`]: no state, no I/O,
//! no failure modes. Ratios that are undefined at an operating point (zero
//! dry mass, moisture at or above 100 %) come back as NaN rather than an
//! error, so the rest of the result stays usable.
//!
//! # Example
//!
//! ```
//! use ddgs_balance::{ProcessInputs, compute};
//! use ddgs_core::units::{as_pct, as_tph};
//!
//! let inputs = ProcessInputs::default();
//! let result = compute(&inputs);
//!
//! println!("DDGS as-fed: {:.2} t/h", as_tph(result.product_as_fed_mass));
//! println!("Protein:     {:.2} % DS", as_pct(result.protein_pct_dry));
//! ```

pub mod balance;
pub mod inputs;
pub mod scenario;

// Re-exports
pub use balance::{BalanceResult, compute};
pub use inputs::ProcessInputs;
pub use scenario::{SyrupComparison, compare};
