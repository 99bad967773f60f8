pub mod kpi_card;
pub mod projection_chart;
pub mod solution_card;
pub mod toast;
pub mod typewriter;

#[allow(unused_imports)]
pub use kpi_card::KpiCard;
#[allow(unused_imports)]
pub use projection_chart::ProjectionChart;
#[allow(unused_imports)]
pub use solution_card::SolutionCard;
#[allow(unused_imports)]
pub use typewriter::Typewriter;
