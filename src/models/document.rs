use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Root of the emitted MindBridge AI data document.
///
/// Field order here is the key order in the written JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootDocument {
    pub app_info: AppInfo,
    pub features: FeatureCatalog,
    pub statistics: YouthStatistics,
    pub development_requirements: DevelopmentRequirements,
}

/// Top-level application metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppInfo {
    pub name: String,
    pub tagline: String,
    pub target_audience: String,
    pub platform_type: String,
}

/// Feature catalog: core features, AI capabilities and technical architecture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCatalog {
    pub core_features: IndexMap<String, CoreFeature>,
    pub ai_capabilities: IndexMap<String, Vec<String>>,
    pub technical_architecture: IndexMap<String, Vec<String>>,
}

/// A single core feature entry.
///
/// Each feature carries its own set of named lists (`technologies`,
/// `safety_features`, ...). They are flattened into the feature object so the
/// JSON reads `{"name": .., "description": .., "technologies": [..]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreFeature {
    pub name: String,
    pub description: String,

    #[serde(flatten)]
    pub lists: IndexMap<String, Vec<String>>,
}

/// Youth mental health statistics, grouped by topic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YouthStatistics {
    pub prevalence: IndexMap<String, String>,
    pub digital_engagement: IndexMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevelopmentRequirements {
    pub compliance: Vec<String>,
    pub accessibility: Vec<String>,
    pub performance: Vec<String>,
    pub security: Vec<String>,
}

impl RootDocument {
    /// Top-level keys of the serialized document, in emission order
    pub const TOP_LEVEL_KEYS: [&'static str; 4] = [
        "app_info",
        "features",
        "statistics",
        "development_requirements",
    ];

    pub fn top_level_keys() -> &'static [&'static str] {
        &Self::TOP_LEVEL_KEYS
    }

    /// Convert the document into a generic JSON value for structural inspection.
    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

impl CoreFeature {
    /// Get a named list for this feature
    pub fn list(&self, key: &str) -> Option<&Vec<String>> {
        self.lists.get(key)
    }
}

impl FeatureCatalog {
    /// Get a core feature by its key (e.g. `ai_chatbot`)
    pub fn core_feature(&self, key: &str) -> Option<&CoreFeature> {
        self.core_features.get(key)
    }
}
