use std::collections::HashSet;

use clap::ValueEnum;

use crate::catalog::Plan;

/// Which feature labels become rows of the comparison table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum FeatureUniverse {
    /// Every distinct label across all plans, in order of first appearance.
    #[default]
    #[value(name = "union")]
    UnionOfAll,
    /// Only the labels of the first plan.
    #[value(name = "first-plan")]
    FirstPlanOnly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRow {
    pub feature: &'static str,
    /// One entry per plan column, `true` when the plan lists the feature verbatim.
    pub cells: Vec<bool>,
}

impl ComparisonRow {
    pub fn marker_count(&self) -> usize {
        self.cells.iter().filter(|included| **included).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonMatrix {
    pub plan_names: Vec<&'static str>,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonMatrix {
    pub fn build(plans: &[Plan], universe: FeatureUniverse) -> Self {
        let rows = feature_universe(plans, universe)
            .into_iter()
            .map(|feature| ComparisonRow {
                feature,
                cells: plans.iter().map(|plan| plan.includes(feature)).collect(),
            })
            .collect();

        Self {
            plan_names: plans.iter().map(|plan| plan.name).collect(),
            rows,
        }
    }
}

fn feature_universe(plans: &[Plan], universe: FeatureUniverse) -> Vec<&'static str> {
    match universe {
        FeatureUniverse::UnionOfAll => {
            let mut seen = HashSet::new();
            plans
                .iter()
                .flat_map(|plan| plan.features.iter().copied())
                .filter(|feature| seen.insert(*feature))
                .collect()
        }
        FeatureUniverse::FirstPlanOnly => plans
            .first()
            .map(|plan| plan.features.to_vec())
            .unwrap_or_default(),
    }
}
