//! Pure site logic: the ROI engine, the solution catalog and form validation.

pub mod configurator;
pub mod contact;
pub mod roi;
pub mod site_state;

#[allow(unused_imports)]
pub use configurator::{
    CatalogError, Challenge, Industry, Solution, SolutionCatalog, MAX_RECOMMENDATIONS,
};
#[allow(unused_imports)]
pub use contact::{ContactError, ContactRequest};
#[allow(unused_imports)]
pub use roi::{compute_roi, GoalEffect, GoalKind, ProjectionSeries, RoiInputs, RoiResult};
pub use site_state::SiteState;
