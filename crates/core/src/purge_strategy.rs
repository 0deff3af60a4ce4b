//! Purge strategy recommender.
//!
//! Maps four categorical inputs to a purge recommendation. Rules are checked
//! in priority order and the first match wins; fields a rule does not set
//! keep their defaults (`url`, `immediate`, `low`).

use serde::{Deserialize, Serialize};

/// What kind of content is being served.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Static,
    Dynamic,
}

impl ContentType {
    pub const ALL: [ContentType; 2] = [ContentType::Static, ContentType::Dynamic];
}

/// How often the content changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateFrequency {
    /// Monthly or less.
    Rarely,
    Weekly,
    #[default]
    Daily,
    Hourly,
    /// Several times per hour.
    Frequent,
}

impl UpdateFrequency {
    pub const ALL: [UpdateFrequency; 5] = [
        UpdateFrequency::Rarely,
        UpdateFrequency::Weekly,
        UpdateFrequency::Daily,
        UpdateFrequency::Hourly,
        UpdateFrequency::Frequent,
    ];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrafficLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl TrafficLevel {
    pub const ALL: [TrafficLevel; 3] = [TrafficLevel::Low, TrafficLevel::Medium, TrafficLevel::High];
}

/// Whether the pending update is critical (security fix, broken release).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criticality {
    #[default]
    Normal,
    Critical,
}

impl Criticality {
    pub const ALL: [Criticality; 2] = [Criticality::Normal, Criticality::Critical];
}

/// Calculator inputs. Omitted fields take the calculator's initial selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyInputs {
    pub content_type: ContentType,
    pub update_frequency: UpdateFrequency,
    pub traffic_level: TrafficLevel,
    pub criticality: Criticality,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Selective,
    Automated,
    Immediate,
}

impl Strategy {
    pub fn description(self) -> &'static str {
        match self {
            Strategy::Selective => {
                "Target specific content for purging to minimize performance impact"
            }
            Strategy::Automated => "Set up automated purging based on content update schedules",
            Strategy::Immediate => "Purge content immediately when critical updates are deployed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PurgeMethod {
    Url,
    Tag,
    Everything,
}

impl PurgeMethod {
    pub fn description(self) -> &'static str {
        match self {
            PurgeMethod::Url => "Purge specific URLs or file paths",
            PurgeMethod::Tag => "Use cache tags to purge related content groups",
            PurgeMethod::Everything => "Purge all cached content (use sparingly)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Timing {
    Immediate,
    Scheduled,
}

impl Timing {
    pub fn description(self) -> &'static str {
        match self {
            Timing::Immediate => "Execute purge operations immediately after content updates",
            Timing::Scheduled => "Schedule purge operations during low-traffic periods",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Risk {
    Low,
    Medium,
    High,
}

impl Risk {
    pub fn description(self) -> &'static str {
        match self {
            Risk::Low => "Minimal impact on performance and user experience",
            Risk::Medium => "Moderate impact - monitor performance after purging",
            Risk::High => "High impact - consider off-peak timing and gradual rollout",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrategyRecommendation {
    pub strategy: Strategy,
    pub method: PurgeMethod,
    pub timing: Timing,
    pub risk: Risk,
}

impl Default for StrategyRecommendation {
    fn default() -> Self {
        Self {
            strategy: Strategy::Selective,
            method: PurgeMethod::Url,
            timing: Timing::Immediate,
            risk: Risk::Low,
        }
    }
}

/// Recommend a purge strategy.
pub fn recommend(inputs: StrategyInputs) -> StrategyRecommendation {
    let mut rec = StrategyRecommendation::default();

    if inputs.content_type == ContentType::Dynamic
        && inputs.update_frequency == UpdateFrequency::Hourly
    {
        rec.strategy = Strategy::Automated;
        rec.timing = Timing::Scheduled;
    } else if inputs.criticality == Criticality::Critical {
        rec.strategy = Strategy::Immediate;
        rec.method = PurgeMethod::Everything;
        rec.timing = Timing::Immediate;
        rec.risk = Risk::Medium;
    } else if inputs.traffic_level == TrafficLevel::High
        && inputs.update_frequency == UpdateFrequency::Frequent
    {
        rec.strategy = Strategy::Selective;
        rec.method = PurgeMethod::Tag;
        rec.risk = Risk::Medium;
    }

    rec
}

/// General advice shown alongside every recommendation.
pub const IMPLEMENTATION_TIPS: [&str; 3] = [
    "Test your purging strategy in a staging environment first",
    "Monitor cache hit rates before and after implementing changes",
    "Set up alerts for unusual purging patterns or performance issues",
];

/// A recommendation with the explanatory text for each field.
#[derive(Debug, Clone, Serialize)]
pub struct PurgeAdvice {
    pub inputs: StrategyInputs,
    pub recommendation: StrategyRecommendation,
    pub strategy_description: &'static str,
    pub method_description: &'static str,
    pub timing_description: &'static str,
    pub risk_description: &'static str,
    pub tips: &'static [&'static str],
}

/// Recommend a strategy and attach its descriptions.
pub fn advise(inputs: StrategyInputs) -> PurgeAdvice {
    let recommendation = recommend(inputs);
    PurgeAdvice {
        inputs,
        recommendation,
        strategy_description: recommendation.strategy.description(),
        method_description: recommendation.method.description(),
        timing_description: recommendation.timing.description(),
        risk_description: recommendation.risk.description(),
        tips: &IMPLEMENTATION_TIPS,
    }
}
