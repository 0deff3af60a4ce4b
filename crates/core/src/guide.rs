//! Static learning content: the overview, tool catalogue and the three
//! cache-management topics.

use serde::Serialize;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Link {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub path: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Overview {
    pub headline: &'static str,
    pub summary: &'static str,
    pub features: &'static [Link],
    pub tools: &'static [Link],
}

pub static TOOLS: [Link; 3] = [
    Link {
        slug: "purge-calculator",
        title: "Purge Calculator",
        description: "Calculate optimal purge strategies",
        path: "/api/v1/tools/purge-calculator",
    },
    Link {
        slug: "cache-analyzer",
        title: "Cache Analyzer",
        description: "Analyze your cache performance",
        path: "/api/v1/tools/cache-analyzer/run",
    },
    Link {
        slug: "performance-monitor",
        title: "Performance Monitor",
        description: "Monitor cache performance metrics",
        path: "/api/v1/tools/performance-monitor",
    },
];

pub static OVERVIEW: Overview = Overview {
    headline: "Master CDN Cache Management",
    summary: "Understand how CDN caching works, learn when to purge your cache, \
              and monitor your cache performance in real-time.",
    features: &[
        Link {
            slug: "dashboard",
            title: "Real-time Dashboard",
            description: "Monitor your cache performance with live metrics and analytics",
            path: "/api/v1/dashboard",
        },
        Link {
            slug: "learn",
            title: "Learn Cache Management",
            description: "Comprehensive guides on CDN caching strategies",
            path: "/api/v1/learn",
        },
        Link {
            slug: "tools",
            title: "Cache Tools",
            description: "Tools to analyze and optimize your cache performance",
            path: "/api/v1/tools",
        },
    ],
    tools: &TOOLS,
};

pub static TOPICS: [Link; 3] = [
    Link {
        slug: "cache-purging",
        title: "Cache Purging Basics",
        description: "Learn the fundamentals of CDN cache purging",
        path: "/api/v1/learn/cache-purging",
    },
    Link {
        slug: "best-practices",
        title: "Best Practices",
        description: "Industry best practices for cache management",
        path: "/api/v1/learn/best-practices",
    },
    Link {
        slug: "cache-types",
        title: "Cache Types & Strategies",
        description: "Different caching strategies and when to use them",
        path: "/api/v1/learn/cache-types",
    },
];

/// A titled block of prose with optional bullet points.
#[derive(Debug, Serialize)]
pub struct Section {
    pub heading: &'static str,
    pub body: &'static str,
    pub points: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct PurgeMethodGuide {
    pub name: &'static str,
    pub description: &'static str,
    pub note: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LabeledPoint {
    pub label: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PurgingGuide {
    pub title: &'static str,
    pub summary: &'static str,
    pub what_is_purging: Section,
    pub when_to_purge: &'static [Section],
    pub methods: &'static [PurgeMethodGuide],
    pub performance_impact: &'static [LabeledPoint],
}

#[derive(Debug, Serialize)]
pub struct BestPracticesGuide {
    pub title: &'static str,
    pub summary: &'static str,
    pub dos: &'static [&'static str],
    pub donts: &'static [&'static str],
    pub approaches: &'static [Section],
    pub guidelines: &'static [Section],
    pub advanced_tips: &'static [Section],
}

#[derive(Debug, Serialize)]
pub struct CacheLayer {
    pub name: &'static str,
    pub description: &'static str,
    pub ttl_range: &'static str,
    pub best_for: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CachingStrategy {
    pub name: &'static str,
    pub description: &'static str,
    pub pros: &'static [&'static str],
    pub cons: &'static [&'static str],
    pub best_for: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CacheHeader {
    pub name: &'static str,
    pub purpose: &'static str,
    pub example: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CacheTypesGuide {
    pub title: &'static str,
    pub summary: &'static str,
    pub layers: &'static [CacheLayer],
    pub strategies: &'static [CachingStrategy],
    pub headers: &'static [CacheHeader],
    /// Site kind paired with the strategy to start from.
    pub selection_guide: &'static [LabeledPoint],
}

pub static CACHE_PURGING: PurgingGuide = PurgingGuide {
    title: "Cache Purging Fundamentals",
    summary: "The essential concepts of CDN cache purging and when to use it effectively.",
    what_is_purging: Section {
        heading: "What is Cache Purging?",
        body: "Cache purging removes cached content from the CDN's edge servers, forcing \
               them to fetch fresh content from your origin server on the next request.",
        points: &[
            "Removes outdated content from edge servers",
            "Ensures users see the latest version of your content",
            "Maintains content freshness across the global CDN",
        ],
    },
    when_to_purge: &[
        Section {
            heading: "Content Updates",
            body: "After deploying new website content, blog posts, or product information",
            points: &[],
        },
        Section {
            heading: "Bug Fixes",
            body: "When fixing critical bugs or security issues that affect cached content",
            points: &[],
        },
        Section {
            heading: "Asset Changes",
            body: "After updating CSS, JavaScript, images, or other static assets",
            points: &[],
        },
        Section {
            heading: "API Updates",
            body: "When API responses change and cached data becomes stale",
            points: &[],
        },
    ],
    methods: &[
        PurgeMethodGuide {
            name: "Purge Everything",
            description: "Clears all cached content for your entire domain. \
                          Use sparingly as it affects all visitors.",
            note: "Use carefully: this removes all cached content",
        },
        PurgeMethodGuide {
            name: "Purge by URL",
            description: "Removes specific files or pages from cache. More targeted and efficient.",
            note: "Recommended for most use cases: precise and efficient",
        },
        PurgeMethodGuide {
            name: "Purge by Cache Tag",
            description: "Clears content associated with specific cache tags. \
                          Often limited to higher-tier plans.",
            note: "Most flexible option for complex caching strategies",
        },
    ],
    performance_impact: &[
        LabeledPoint {
            label: "IMPACT",
            detail: "First request after purge will be slower as content is fetched from origin",
        },
        LabeledPoint {
            label: "TIMING",
            detail: "Purge operations typically complete within 30 seconds globally",
        },
        LabeledPoint {
            label: "RECOVERY",
            detail: "Cache rebuilds automatically as users request content",
        },
    ],
};

pub static BEST_PRACTICES: BestPracticesGuide = BestPracticesGuide {
    title: "Cache Management Best Practices",
    summary: "Industry-proven strategies for effective CDN cache management and optimization.",
    dos: &[
        "Use selective purging instead of \"Purge Everything\" when possible",
        "Implement cache tags for granular control over purging",
        "Monitor cache hit rates to ensure optimal performance",
        "Automate purging in your CI/CD pipeline for deployments",
        "Test purge operations in staging before production",
        "Set appropriate cache TTL values for different content types",
    ],
    donts: &[
        "Don't purge cache unnecessarily - it impacts performance",
        "Don't rely solely on manual purging for content updates",
        "Don't purge during high traffic periods unless critical",
        "Don't forget to purge related dependencies when updating content",
        "Don't use \"Purge Everything\" for minor content changes",
        "Don't ignore cache headers when implementing purging strategies",
    ],
    approaches: &[
        Section {
            heading: "Proactive Purging",
            body: "Automatically purge cache as part of your deployment process",
            points: &["CI/CD integration", "Webhook automation", "Scheduled purging"],
        },
        Section {
            heading: "Selective Targeting",
            body: "Use precise purging methods to minimize performance impact",
            points: &[
                "URL-specific purging",
                "Cache tag strategies",
                "Pattern-based purging",
            ],
        },
        Section {
            heading: "Performance Monitoring",
            body: "Track cache performance to optimize your strategy",
            points: &[
                "Hit rate monitoring",
                "Response time tracking",
                "Error rate analysis",
            ],
        },
    ],
    guidelines: &[
        Section {
            heading: "Development Environment",
            body: "Set up a staging environment that mirrors your production cache \
                   configuration. Test all purging strategies before deploying to production.",
            points: &[],
        },
        Section {
            heading: "Automation Strategy",
            body: "Implement automated purging workflows that trigger based on content \
                   changes, deployments, or scheduled intervals to maintain content freshness.",
            points: &[],
        },
        Section {
            heading: "Monitoring & Alerts",
            body: "Set up monitoring for cache hit rates, purge frequency, and performance \
                   metrics. Configure alerts for unusual patterns or performance degradation.",
            points: &[],
        },
    ],
    advanced_tips: &[
        Section {
            heading: "Cache Headers Optimization",
            body: "",
            points: &[
                "Set appropriate Cache-Control headers",
                "Use ETags for conditional requests",
                "Implement Last-Modified headers",
                "Configure Vary headers correctly",
            ],
        },
        Section {
            heading: "Edge Case Handling",
            body: "",
            points: &[
                "Handle mobile vs desktop content",
                "Manage user-specific content",
                "Deal with dynamic API responses",
                "Consider geographic variations",
            ],
        },
    ],
};

pub static CACHE_TYPES: CacheTypesGuide = CacheTypesGuide {
    title: "Cache Types & Strategies",
    summary: "The different caching layers and strategies for tuning a CDN configuration.",
    layers: &[
        CacheLayer {
            name: "Edge Cache",
            description: "Content cached at the CDN's edge servers worldwide",
            ttl_range: "2 hours - 30 days",
            best_for: "Static assets, images, CSS, JavaScript files",
        },
        CacheLayer {
            name: "Origin Cache",
            description: "Content cached at your origin server",
            ttl_range: "1 minute - 24 hours",
            best_for: "Dynamic content, API responses, personalized data",
        },
        CacheLayer {
            name: "Browser Cache",
            description: "Content cached in the user's browser",
            ttl_range: "1 hour - 1 year",
            best_for: "Frequently accessed resources, offline functionality",
        },
        CacheLayer {
            name: "Tiered Cache",
            description: "Multi-level caching strategy",
            ttl_range: "Variable",
            best_for: "Complex applications with mixed content types",
        },
    ],
    strategies: &[
        CachingStrategy {
            name: "Cache Everything",
            description: "Cache all content including HTML pages",
            pros: &[
                "Maximum performance",
                "Reduced origin load",
                "Global content delivery",
            ],
            cons: &[
                "Complex invalidation",
                "Dynamic content challenges",
                "Personalization issues",
            ],
            best_for: "Static websites, blogs, documentation sites",
        },
        CachingStrategy {
            name: "Cache Static Assets Only",
            description: "Cache only static resources like images, CSS, JS",
            pros: &[
                "Simple to implement",
                "Predictable behavior",
                "Easy invalidation",
            ],
            cons: &[
                "Limited performance gains",
                "HTML still hits origin",
                "Higher server load",
            ],
            best_for: "Dynamic web applications, e-commerce sites",
        },
        CachingStrategy {
            name: "Selective Caching",
            description: "Cache specific content based on rules and headers",
            pros: &[
                "Flexible control",
                "Optimized performance",
                "Balanced approach",
            ],
            cons: &[
                "Complex configuration",
                "Requires planning",
                "Monitoring needed",
            ],
            best_for: "Mixed content applications, APIs with varying data freshness",
        },
    ],
    headers: &[
        CacheHeader {
            name: "Cache-Control",
            purpose: "Controls caching behavior and TTL",
            example: "max-age=3600, public",
        },
        CacheHeader {
            name: "ETag",
            purpose: "Enables conditional requests",
            example: "\"abc123def456\"",
        },
        CacheHeader {
            name: "Last-Modified",
            purpose: "Indicates when content was last changed",
            example: "Wed, 21 Oct 2024 07:28:00 GMT",
        },
        CacheHeader {
            name: "Vary",
            purpose: "Specifies which headers affect caching",
            example: "Accept-Encoding, User-Agent",
        },
    ],
    selection_guide: &[
        LabeledPoint {
            label: "Static Sites",
            detail: "Use \"Cache Everything\" with long TTL values",
        },
        LabeledPoint {
            label: "Dynamic Apps",
            detail: "Use \"Selective Caching\" with smart invalidation",
        },
        LabeledPoint {
            label: "APIs",
            detail: "Use \"Cache Static Assets\" with API-specific rules",
        },
    ],
};

/// Full body of a learning topic, tagged with its slug.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "topic", rename_all = "kebab-case")]
pub enum TopicBody {
    CachePurging(&'static PurgingGuide),
    BestPractices(&'static BestPracticesGuide),
    CacheTypes(&'static CacheTypesGuide),
}

/// Look up a topic by slug.
pub fn topic(slug: &str) -> Result<TopicBody, CoreError> {
    match slug {
        "cache-purging" => Ok(TopicBody::CachePurging(&CACHE_PURGING)),
        "best-practices" => Ok(TopicBody::BestPractices(&BEST_PRACTICES)),
        "cache-types" => Ok(TopicBody::CacheTypes(&CACHE_TYPES)),
        other => Err(CoreError::NotFound {
            entity: "Topic",
            key: other.to_string(),
        }),
    }
}
