//! Static industry/challenge lookup behind the "solution configurator" panel.
//!
//! The recommendation content is an immutable data asset embedded at build
//! time (`assets/solutions.json`); this module only decodes and slices it.

use std::{
    collections::{BTreeMap, BTreeSet},
    sync::OnceLock,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::util::assets;

/// At most this many recommendations are surfaced per selection.
pub const MAX_RECOMMENDATIONS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    Healthcare,
    Finance,
    Retail,
    Manufacturing,
    D2c,
    Technology,
}

impl Industry {
    pub const ALL: [Industry; 6] = [
        Industry::Healthcare,
        Industry::Finance,
        Industry::Retail,
        Industry::Manufacturing,
        Industry::D2c,
        Industry::Technology,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Industry::Healthcare => "Healthcare",
            Industry::Finance => "Finance",
            Industry::Retail => "Retail",
            Industry::Manufacturing => "Manufacturing",
            Industry::D2c => "D2C Brands",
            Industry::Technology => "Technology",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Industry::Healthcare => "🏥",
            Industry::Finance => "🏦",
            Industry::Retail => "🛒",
            Industry::Manufacturing => "🏭",
            Industry::D2c => "📦",
            Industry::Technology => "💻",
        }
    }
}

/// Business challenge a visitor can tick in the configurator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Challenge {
    Automation,
    Analytics,
    Customer,
    Prediction,
}

impl Challenge {
    pub const ALL: [Challenge; 4] = [
        Challenge::Automation,
        Challenge::Analytics,
        Challenge::Customer,
        Challenge::Prediction,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Challenge::Automation => "Manual, repetitive processes",
            Challenge::Analytics => "Data without insight",
            Challenge::Customer => "Customer experience gaps",
            Challenge::Prediction => "No forward visibility",
        }
    }
}

/// One canned recommendation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub name: String,
    pub description: String,
    pub timeline: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to decode solution catalog: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Immutable industry × challenge → solutions table.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct SolutionCatalog {
    entries: BTreeMap<Industry, BTreeMap<Challenge, Vec<Solution>>>,
}

impl SolutionCatalog {
    pub fn load() -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(assets::solutions_json())?)
    }

    /// Decoded once and cached for the lifetime of the process. The asset is
    /// compiled in, so a decode failure is a build defect, not a runtime
    /// condition worth recovering from.
    pub fn embedded() -> &'static SolutionCatalog {
        static CATALOG: OnceLock<SolutionCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| {
            SolutionCatalog::load()
                .unwrap_or_else(|err| panic!("Embedded solution catalog is invalid: {err}"))
        })
    }

    pub fn solutions_for(&self, industry: Industry, challenge: Challenge) -> &[Solution] {
        self.entries
            .get(&industry)
            .and_then(|challenges| challenges.get(&challenge))
            .map(|solutions| solutions.as_slice())
            .unwrap_or(&[])
    }

    /// Concatenates the solutions for every selected challenge and keeps the
    /// first [`MAX_RECOMMENDATIONS`].
    pub fn recommend(&self, industry: Industry, challenges: &BTreeSet<Challenge>) -> Vec<Solution> {
        let mut recommendations = Vec::new();
        for challenge in challenges {
            recommendations.extend_from_slice(self.solutions_for(industry, *challenge));
        }
        recommendations.truncate(MAX_RECOMMENDATIONS);
        recommendations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn challenges(list: &[Challenge]) -> BTreeSet<Challenge> {
        list.iter().copied().collect()
    }

    #[test]
    fn embedded_catalog_decodes() {
        let catalog = SolutionCatalog::embedded();
        assert!(!catalog.entries.is_empty());
    }

    #[test]
    fn every_industry_challenge_cell_has_two_entries() {
        let catalog = SolutionCatalog::embedded();
        for industry in Industry::ALL {
            for challenge in Challenge::ALL {
                let solutions = catalog.solutions_for(industry, challenge);
                assert_eq!(
                    solutions.len(),
                    2,
                    "{industry:?}/{challenge:?} should carry exactly two solutions"
                );
                for solution in solutions {
                    assert!(!solution.name.is_empty());
                    assert!(!solution.description.is_empty());
                    assert!(solution.timeline.ends_with("weeks"));
                }
            }
        }
    }

    #[test]
    fn recommendations_are_capped() {
        let catalog = SolutionCatalog::embedded();
        let all = challenges(&Challenge::ALL);
        let recommendations = catalog.recommend(Industry::Finance, &all);
        assert_eq!(recommendations.len(), MAX_RECOMMENDATIONS);
    }

    #[test]
    fn no_challenges_means_no_recommendations() {
        let catalog = SolutionCatalog::embedded();
        assert!(catalog
            .recommend(Industry::Retail, &BTreeSet::new())
            .is_empty());
    }

    #[test]
    fn single_challenge_returns_its_cell() {
        let catalog = SolutionCatalog::embedded();
        let picks = catalog.recommend(Industry::Healthcare, &challenges(&[Challenge::Customer]));
        assert_eq!(picks.len(), 2);
        assert_eq!(
            picks,
            catalog.solutions_for(Industry::Healthcare, Challenge::Customer)
        );
    }
}
