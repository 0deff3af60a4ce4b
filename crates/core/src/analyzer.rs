//! Cache performance grading for the analyzer tool.

use serde::Serialize;

/// Raw numbers from one (simulated) analysis run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    /// Percentage of requests served from cache.
    pub hit_rate: u32,
    pub avg_response_time_ms: u32,
    pub total_requests: u32,
    pub cache_efficiency: u32,
    /// Percentage of bandwidth saved at the edge.
    pub bandwidth_saved: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PerformanceGrade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
}

impl PerformanceGrade {
    /// Grade a hit rate: 90+ A+, 80+ A, 70+ B, 60+ C, otherwise D.
    pub fn from_hit_rate(hit_rate: u32) -> Self {
        match hit_rate {
            90.. => PerformanceGrade::APlus,
            80..=89 => PerformanceGrade::A,
            70..=79 => PerformanceGrade::B,
            60..=69 => PerformanceGrade::C,
            _ => PerformanceGrade::D,
        }
    }

    pub fn rating(self) -> &'static str {
        match self {
            PerformanceGrade::APlus => "Excellent",
            PerformanceGrade::A => "Good",
            PerformanceGrade::B => "Fair",
            PerformanceGrade::C => "Poor",
            PerformanceGrade::D => "Critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Level {
    Low,
    Medium,
    High,
}

/// A static optimisation suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub title: &'static str,
    pub description: &'static str,
    pub impact: Level,
    pub effort: Level,
}

pub const RECOMMENDATIONS: [Recommendation; 4] = [
    Recommendation {
        title: "Optimize Cache Headers",
        description: "Set appropriate Cache-Control headers for better cache efficiency",
        impact: Level::High,
        effort: Level::Medium,
    },
    Recommendation {
        title: "Implement Cache Tags",
        description: "Use cache tags for more granular purging control",
        impact: Level::Medium,
        effort: Level::High,
    },
    Recommendation {
        title: "Review TTL Settings",
        description: "Adjust Time-To-Live values based on content update frequency",
        impact: Level::Medium,
        effort: Level::Low,
    },
    Recommendation {
        title: "Enable Compression",
        description: "Use Gzip/Brotli compression to reduce bandwidth usage",
        impact: Level::High,
        effort: Level::Low,
    },
];

/// Hit rates at or above this count as performing well.
pub const WELL_PERFORMING_HIT_RATE: u32 = 80;

/// An analysis report with its grade and suggestions.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisOutcome {
    pub report: AnalysisReport,
    pub grade: PerformanceGrade,
    pub rating: &'static str,
    pub performing_well: bool,
    pub miss_rate: u32,
    pub recommendations: &'static [Recommendation],
}

pub fn assess(report: AnalysisReport) -> AnalysisOutcome {
    let grade = PerformanceGrade::from_hit_rate(report.hit_rate);
    AnalysisOutcome {
        grade,
        rating: grade.rating(),
        performing_well: report.hit_rate >= WELL_PERFORMING_HIT_RATE,
        miss_rate: 100u32.saturating_sub(report.hit_rate),
        recommendations: &RECOMMENDATIONS,
        report,
    }
}
