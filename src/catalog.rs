use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const TRY_NOW: &str = "Try Now";
pub const CONTACT_US: &str = "Contact Us";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Annual,
}

impl BillingCycle {
    pub const ALL: [BillingCycle; 2] = [BillingCycle::Monthly, BillingCycle::Annual];

    pub fn toggled(self) -> Self {
        match self {
            BillingCycle::Monthly => BillingCycle::Annual,
            BillingCycle::Annual => BillingCycle::Monthly,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BillingCycle::Monthly => "monthly",
            BillingCycle::Annual => "annual",
        }
    }

    /// Suffix shown after a numeric price, e.g. `$229/month`.
    pub fn period(self) -> &'static str {
        match self {
            BillingCycle::Monthly => "month",
            BillingCycle::Annual => "year",
        }
    }
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BillingCycle::Monthly => "Monthly",
            BillingCycle::Annual => "Annual",
        })
    }
}

/// What a plan card shows in its price slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Price {
    Amount(u32),
    Label(&'static str),
}

impl Price {
    pub fn amount(self) -> Option<u32> {
        match self {
            Price::Amount(value) => Some(value),
            Price::Label(_) => None,
        }
    }
}

/// Independently authored monthly and annual figures.
#[derive(Debug, Clone, Copy)]
struct CyclePrice {
    monthly: u32,
    annual: u32,
}

impl CyclePrice {
    const fn new(monthly: u32, annual: u32) -> Self {
        Self { monthly, annual }
    }

    fn pick(self, cycle: BillingCycle) -> u32 {
        match cycle {
            BillingCycle::Monthly => self.monthly,
            BillingCycle::Annual => self.annual,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub name: &'static str,
    pub price: Price,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credits: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    pub additional_features: &'static [&'static str],
    pub highlighted: bool,
}

impl Plan {
    pub fn includes(&self, feature: &str) -> bool {
        self.features.iter().any(|candidate| *candidate == feature)
    }

    /// Discount relative to the original price, rounded to a whole percent.
    ///
    /// `None` unless the price is numeric and an original price above it is set.
    pub fn discount_percent(&self) -> Option<u32> {
        let price = self.price.amount()?;
        let original = self.original_price?;
        if original <= price {
            return None;
        }
        let saved = u64::from(original - price) * 100;
        let original = u64::from(original);
        Some(((saved + original / 2) / original) as u32)
    }
}

const GROWTH_PRICE: CyclePrice = CyclePrice::new(229, 2290);
const GROWTH_ORIGINAL: CyclePrice = CyclePrice::new(459, 4590);
const BOOSTER_PRICE: CyclePrice = CyclePrice::new(499, 4990);
const BOOSTER_ORIGINAL: CyclePrice = CyclePrice::new(999, 9990);

/// Builds the catalog for one billing cycle. Called on every render.
pub fn plans(cycle: BillingCycle) -> Vec<Plan> {
    vec![
        Plan {
            name: "Trial",
            price: Price::Label(TRY_NOW),
            original_price: None,
            credits: None,
            description: Some("Get personalised template"),
            features: &[
                "25+ data sources",
                "GPT4, LinkedIn and others",
                "Access to slack community",
                "10+ templates to scale your outbound",
            ],
            cta: "Try Now",
            additional_features: &["Explore product capabilities"],
            highlighted: false,
        },
        Plan {
            name: "Growth",
            price: Price::Amount(GROWTH_PRICE.pick(cycle)),
            original_price: Some(GROWTH_ORIGINAL.pick(cycle)),
            credits: Some(8000),
            description: None,
            features: &[
                "Webhook, HTTP API",
                "Credit rollover (upto 2x plan credits)",
                "Outbound email integrations like Instantly, Smartlead.",
                "Dedicated 3 hours from Bitscale expert",
            ],
            cta: "Continue with Growth",
            additional_features: &[
                "Unlimited leads search",
                "Fully enriched 5000 leads",
                "Personalized outreach at scale",
            ],
            highlighted: false,
        },
        Plan {
            name: "Booster",
            price: Price::Amount(BOOSTER_PRICE.pick(cycle)),
            original_price: Some(BOOSTER_ORIGINAL.pick(cycle)),
            credits: Some(25000),
            description: None,
            features: &[
                "Webhook, HTTP API",
                "Credit rollover (upto 2x plan credits)",
                "Outbound email integrations like Instantly, Smartlead.",
                "Dedicated 3 hours from Bitscale expert",
                "Advanced models like Claude Sonnet",
                "Dedicated 8 hours from Bitscale expert",
                "2 way Hubspot integration",
            ],
            cta: "Continue with Booster",
            additional_features: &[
                "Unlimited leads search",
                "Fully enriched 15000 leads",
                "Personalized outreach at scale",
            ],
            highlighted: true,
        },
        Plan {
            name: "Enterprise",
            price: Price::Label(CONTACT_US),
            original_price: None,
            credits: None,
            description: Some("For individual pricing"),
            features: &[
                "Data privacy certification",
                "Priority Support",
                "Dedicated Bitscale expert",
                "Private Slack Channel",
                "Collaborative workspace and templates",
            ],
            cta: "Try Now",
            additional_features: &[
                "Perfect for High-Volume End-to-End CRM Data Enrichment",
                "Unlimited list of leads with unlimited data points",
            ],
            highlighted: false,
        },
    ]
}

pub fn find_plan(cycle: BillingCycle, name: &str) -> Option<Plan> {
    plans(cycle).into_iter().find(|plan| plan.name == name)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("plan `{plan}` lists original price {original} which is not above its price {price}")]
    OriginalNotAbovePrice {
        plan: String,
        price: u32,
        original: u32,
    },
    #[error("plan `{0}` has an original price but no numeric price")]
    OriginalWithoutAmount(String),
    #[error("plan name `{0}` appears more than once")]
    DuplicateName(String),
    #[error("{0} plans are highlighted, at most one is allowed")]
    TooManyHighlighted(usize),
}

/// Checks authored content for mistakes a reader of the page would notice.
pub fn validate(plans: &[Plan]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for plan in plans {
        if !seen.insert(plan.name) {
            return Err(CatalogError::DuplicateName(plan.name.to_string()));
        }
        match (plan.price, plan.original_price) {
            (Price::Amount(price), Some(original)) if original <= price => {
                return Err(CatalogError::OriginalNotAbovePrice {
                    plan: plan.name.to_string(),
                    price,
                    original,
                });
            }
            (Price::Label(_), Some(_)) => {
                return Err(CatalogError::OriginalWithoutAmount(plan.name.to_string()));
            }
            _ => {}
        }
    }

    let highlighted = plans.iter().filter(|plan| plan.highlighted).count();
    if highlighted > 1 {
        return Err(CatalogError::TooManyHighlighted(highlighted));
    }

    Ok(())
}

/// Validates the catalog as built for every billing cycle.
pub fn validate_all() -> Result<(), CatalogError> {
    BillingCycle::ALL
        .into_iter()
        .try_for_each(|cycle| validate(&plans(cycle)))
}
