use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Fully loaded salary assumption per employee and year, in USD.
const BASE_COST_PER_EMPLOYEE: f64 = 40_000.0;
/// Per-employee implementation cost before the goal multiplier is applied.
const IMPLEMENTATION_COST_PER_EMPLOYEE: f64 = 2_000.0;
/// Only a conservative share of the theoretical efficiency gain is counted.
const REALIZATION_FACTOR: f64 = 0.3;
/// Annual run cost of the deployed solution, as a share of implementation cost.
const ANNUAL_OVERHEAD_FACTOR: f64 = 0.15;

const ROI_CAP_PCT: f64 = 500.0;
const PAYBACK_CAP_MONTHS: f64 = 36.0;

/// Automation investment category a visitor can select in the calculator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalKind {
    Process,
    Analytics,
    Customer,
    Prediction,
}

impl GoalKind {
    pub const ALL: [GoalKind; 4] = [
        GoalKind::Process,
        GoalKind::Analytics,
        GoalKind::Customer,
        GoalKind::Prediction,
    ];

    /// Fixed per-goal effect on the financial model.
    pub fn effect(&self) -> GoalEffect {
        match self {
            GoalKind::Process => GoalEffect {
                efficiency_gain_points: 40,
                cost_multiplier_delta: 0.5,
            },
            GoalKind::Analytics => GoalEffect {
                efficiency_gain_points: 35,
                cost_multiplier_delta: 0.3,
            },
            GoalKind::Customer => GoalEffect {
                efficiency_gain_points: 50,
                cost_multiplier_delta: 0.4,
            },
            GoalKind::Prediction => GoalEffect {
                efficiency_gain_points: 60,
                cost_multiplier_delta: 0.6,
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GoalKind::Process => "Process Automation",
            GoalKind::Analytics => "Data Analytics",
            GoalKind::Customer => "Customer Experience",
            GoalKind::Prediction => "Predictive Intelligence",
        }
    }

    pub fn blurb(&self) -> &'static str {
        match self {
            GoalKind::Process => "Automate repetitive workflows end to end",
            GoalKind::Analytics => "Turn raw data into operational insight",
            GoalKind::Customer => "AI-assisted support and personalization",
            GoalKind::Prediction => "Forecast demand, risk and maintenance",
        }
    }
}

/// Coefficients attributed to a single goal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GoalEffect {
    pub efficiency_gain_points: u32,
    pub cost_multiplier_delta: f64,
}

/// Everything the calculator widget collects from the visitor.
///
/// `current_efficiency` is shown back to the visitor but deliberately does not
/// feed the financial model.
#[derive(Clone, Debug, PartialEq)]
pub struct RoiInputs {
    pub company_size: u32,
    pub current_efficiency: u32,
    pub goals: BTreeSet<GoalKind>,
}

impl Default for RoiInputs {
    fn default() -> Self {
        Self {
            company_size: 100,
            current_efficiency: 40,
            goals: BTreeSet::new(),
        }
    }
}

/// Five yearly data points for the projection chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectionSeries {
    /// Cumulative realized savings, mid-year convention (0.5, 1.5, ... 4.5x).
    pub savings: [f64; 5],
    /// Implementation cost up front, then 20% maintenance per year.
    pub cost: [f64; 5],
}

/// Derived financial metrics, recomputed from scratch on every input change.
#[derive(Clone, Debug, PartialEq)]
pub struct RoiResult {
    pub efficiency_gain_pct: u32,
    pub cost_multiplier: f64,
    pub total_labor_cost: f64,
    pub potential_savings: f64,
    pub implementation_cost: f64,
    pub annual_savings: f64,
    /// `annual_savings` rounded to the nearest thousand for display.
    pub display_savings: f64,
    /// Clamped to `[0, 500]`.
    pub roi_pct: u32,
    /// Upper-clamped to 36 months; 0 only when implementation cost is 0.
    pub payback_months: u32,
    pub projection: ProjectionSeries,
}

/// Computes the full metric bundle for the ROI calculator.
///
/// Pure and deterministic: the same inputs always produce the same result, and
/// no state is carried between invocations. Negative intermediate values (an
/// empty goal set makes `annual_savings` pure overhead) are allowed and only
/// clamped at the ROI / payback output stage.
pub fn compute_roi(company_size: u32, goals: &BTreeSet<GoalKind>) -> RoiResult {
    let mut efficiency_gain_pct = 0u32;
    let mut cost_multiplier = 1.0f64;
    for goal in goals {
        let effect = goal.effect();
        efficiency_gain_pct += effect.efficiency_gain_points;
        cost_multiplier += effect.cost_multiplier_delta;
    }

    let size = company_size as f64;
    let total_labor_cost = size * BASE_COST_PER_EMPLOYEE;
    let potential_savings =
        total_labor_cost * (efficiency_gain_pct as f64 / 100.0) * REALIZATION_FACTOR;
    let implementation_cost = size * IMPLEMENTATION_COST_PER_EMPLOYEE * cost_multiplier;
    let annual_overhead = implementation_cost * ANNUAL_OVERHEAD_FACTOR;
    let annual_savings = potential_savings - annual_overhead;

    // Guard the denominator: a zero-size company has zero overhead.
    let roi_raw = if annual_overhead <= 0.0 {
        0.0
    } else {
        ((annual_savings - annual_overhead) / annual_overhead) * 100.0
    };
    let roi_pct = roi_raw.round().clamp(0.0, ROI_CAP_PCT) as u32;

    // max(1, monthly savings) keeps a negative or zero cash flow from blowing
    // up the division; the cap then turns that degenerate case into "36+".
    let monthly_savings = (annual_savings / 12.0).max(1.0);
    let payback_months = (implementation_cost / monthly_savings)
        .ceil()
        .min(PAYBACK_CAP_MONTHS) as u32;

    let display_savings = (annual_savings / 1000.0).round() * 1000.0;

    let projection = ProjectionSeries {
        savings: [
            annual_savings * 0.5,
            annual_savings * 1.5,
            annual_savings * 2.5,
            annual_savings * 3.5,
            annual_savings * 4.5,
        ],
        cost: [
            implementation_cost,
            implementation_cost * 0.2,
            implementation_cost * 0.2,
            implementation_cost * 0.2,
            implementation_cost * 0.2,
        ],
    };

    RoiResult {
        efficiency_gain_pct,
        cost_multiplier,
        total_labor_cost,
        potential_savings,
        implementation_cost,
        annual_savings,
        display_savings,
        roi_pct,
        payback_months,
        projection,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goals(list: &[GoalKind]) -> BTreeSet<GoalKind> {
        list.iter().copied().collect()
    }

    fn all_goal_subsets() -> Vec<BTreeSet<GoalKind>> {
        (0..16u32)
            .map(|mask| {
                GoalKind::ALL
                    .iter()
                    .enumerate()
                    .filter(|(idx, _)| mask & (1u32 << idx) != 0)
                    .map(|(_, goal)| *goal)
                    .collect()
            })
            .collect()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn zero_company_size_yields_all_zero_metrics() {
        let result = compute_roi(0, &BTreeSet::new());
        assert_eq!(result.efficiency_gain_pct, 0);
        assert_close(result.cost_multiplier, 1.0);
        assert_close(result.implementation_cost, 0.0);
        assert_close(result.annual_savings, 0.0);
        assert_eq!(result.roi_pct, 0);
        assert_eq!(result.payback_months, 0);
        assert_close(result.projection.savings[4], 0.0);
        assert_close(result.projection.cost[0], 0.0);
    }

    #[test]
    fn process_goal_worked_example() {
        let result = compute_roi(100, &goals(&[GoalKind::Process]));
        assert_eq!(result.efficiency_gain_pct, 40);
        assert_close(result.cost_multiplier, 1.5);
        assert_close(result.total_labor_cost, 4_000_000.0);
        assert_close(result.potential_savings, 480_000.0);
        assert_close(result.implementation_cost, 300_000.0);
        assert_close(result.annual_savings, 435_000.0);
        assert_close(result.display_savings, 435_000.0);
        // Raw ROI is ~867%, capped for display.
        assert_eq!(result.roi_pct, 500);
        // ceil(300_000 / (435_000 / 12)) = 9 months.
        assert_eq!(result.payback_months, 9);
    }

    #[test]
    fn empty_goal_set_is_pure_overhead() {
        let result = compute_roi(100, &BTreeSet::new());
        assert_eq!(result.efficiency_gain_pct, 0);
        assert_close(result.cost_multiplier, 1.0);
        assert_close(result.implementation_cost, 200_000.0);
        assert_close(result.annual_savings, -30_000.0);
        assert_close(result.display_savings, -30_000.0);
        assert_eq!(result.roi_pct, 0);
        assert_eq!(result.payback_months, 36);
    }

    #[test]
    fn roi_and_payback_stay_in_bounds_for_all_goal_combinations() {
        for size in [1u32, 7, 50, 100, 500, 1000] {
            for subset in all_goal_subsets() {
                let result = compute_roi(size, &subset);
                assert!(result.roi_pct <= 500, "roi {} for size {size}", result.roi_pct);
                assert!(
                    (1..=36).contains(&result.payback_months),
                    "payback {} for size {size} goals {subset:?}",
                    result.payback_months
                );
            }
        }
    }

    #[test]
    fn projection_savings_grow_with_fixed_ratio() {
        let result = compute_roi(250, &goals(&[GoalKind::Process, GoalKind::Customer]));
        assert!(result.annual_savings > 0.0);
        let savings = result.projection.savings;
        for i in 0..4 {
            assert!(savings[i + 1] > savings[i]);
            let expected_ratio = (i as f64 + 1.5) / (i as f64 + 0.5);
            assert_close(savings[i + 1] / savings[i], expected_ratio);
        }
    }

    #[test]
    fn projection_cost_drops_to_maintenance_after_year_one() {
        let result = compute_roi(80, &goals(&[GoalKind::Analytics]));
        let cost = result.projection.cost;
        assert_close(cost[0], result.implementation_cost);
        for year in &cost[1..] {
            assert_close(*year, result.implementation_cost * 0.2);
        }
    }

    #[test]
    fn goal_selection_order_is_irrelevant() {
        let forward = goals(&[GoalKind::Process, GoalKind::Prediction]);
        let reverse = goals(&[GoalKind::Prediction, GoalKind::Process]);
        assert_eq!(compute_roi(120, &forward), compute_roi(120, &reverse));
    }

    #[test]
    fn recomputation_is_idempotent() {
        let selection = goals(&[GoalKind::Analytics, GoalKind::Customer, GoalKind::Prediction]);
        assert_eq!(compute_roi(333, &selection), compute_roi(333, &selection));
    }

    #[test]
    fn all_goals_selected_sums_coefficients() {
        let result = compute_roi(10, &goals(&GoalKind::ALL));
        assert_eq!(result.efficiency_gain_pct, 185);
        assert_close(result.cost_multiplier, 2.8);
    }
}
