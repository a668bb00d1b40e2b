use crate::models::{
    AppInfo, CoreFeature, DevelopmentRequirements, FeatureCatalog, RootDocument, YouthStatistics,
};
use indexmap::IndexMap;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn core_feature(name: &str, description: &str) -> CoreFeature {
    CoreFeature {
        name: name.to_string(),
        description: description.to_string(),
        lists: IndexMap::new(),
    }
}

impl CoreFeature {
    fn with_list(mut self, key: &str, items: &[&str]) -> Self {
        self.lists.insert(key.to_string(), strings(items));
        self
    }
}

/// Assemble the complete MindBridge AI data document.
///
/// Composes the feature catalog, youth statistics and app metadata into the
/// four top-level sections. Pure and deterministic: every call returns an
/// equal document.
pub fn assemble() -> RootDocument {
    let document = RootDocument {
        app_info: app_info(),
        features: feature_catalog(),
        statistics: youth_statistics(),
        development_requirements: development_requirements(),
    };

    tracing::debug!(
        core_features = document.features.core_features.len(),
        "Assembled data document"
    );

    document
}

pub fn app_info() -> AppInfo {
    AppInfo {
        name: "MindBridge AI".to_string(),
        tagline: "Empowering Youth Mental Wellness Through AI".to_string(),
        target_audience: "Youth aged 13-24".to_string(),
        platform_type: "Web-based Flask application with mobile-responsive design".to_string(),
    }
}

/// Application features and architecture
pub fn feature_catalog() -> FeatureCatalog {
    let mut core_features = IndexMap::new();

    core_features.insert(
        "ai_chatbot".to_string(),
        core_feature(
            "AI Mental Health Companion",
            "GPT-powered conversational AI for 24/7 emotional support",
        )
        .with_list(
            "technologies",
            &[
                "OpenAI GPT-4",
                "Natural Language Processing",
                "Sentiment Analysis",
            ],
        )
        .with_list(
            "capabilities",
            &[
                "Crisis detection and escalation",
                "Personalized therapeutic conversations",
                "Evidence-based CBT/DBT techniques",
                "Multi-language support",
            ],
        ),
    );

    core_features.insert(
        "mood_tracking".to_string(),
        core_feature(
            "Smart Mood Analytics",
            "AI-powered mood pattern recognition and insights",
        )
        .with_list(
            "features",
            &[
                "Daily mood check-ins",
                "Emotion trend analysis",
                "Trigger pattern identification",
                "Personalized recommendations",
            ],
        ),
    );

    core_features.insert(
        "peer_support".to_string(),
        core_feature(
            "Safe Community Platform",
            "Moderated peer support groups and forums",
        )
        .with_list(
            "safety_features",
            &[
                "AI content moderation",
                "Anonymous participation options",
                "Trained moderators",
                "Crisis intervention protocols",
            ],
        ),
    );

    core_features.insert(
        "resource_library".to_string(),
        core_feature(
            "Personalized Wellness Library",
            "AI-curated mental health resources and exercises",
        )
        .with_list(
            "content_types",
            &[
                "Guided meditations",
                "Breathing exercises",
                "Journaling prompts",
                "Educational videos",
            ],
        ),
    );

    let mut ai_capabilities = IndexMap::new();
    ai_capabilities.insert(
        "generative_features".to_string(),
        strings(&[
            "Personalized coping strategies",
            "Custom meditation scripts",
            "Adaptive therapy exercises",
            "Crisis response protocols",
        ]),
    );
    ai_capabilities.insert(
        "analysis_features".to_string(),
        strings(&[
            "Sentiment analysis",
            "Risk assessment",
            "Progress tracking",
            "Behavioral pattern recognition",
        ]),
    );

    let mut technical_architecture = IndexMap::new();
    technical_architecture.insert(
        "backend_stack".to_string(),
        strings(&[
            "Flask (Python)",
            "OpenAI API",
            "PostgreSQL",
            "Redis (caching)",
            "Celery (task queue)",
        ]),
    );
    technical_architecture.insert(
        "security_features".to_string(),
        strings(&[
            "HIPAA compliance",
            "End-to-end encryption",
            "Multi-factor authentication",
            "Data anonymization",
        ]),
    );
    technical_architecture.insert(
        "scalability".to_string(),
        strings(&[
            "Microservices architecture",
            "Load balancing",
            "Auto-scaling",
            "CDN integration",
        ]),
    );

    FeatureCatalog {
        core_features,
        ai_capabilities,
        technical_architecture,
    }
}

/// Youth mental health statistics
pub fn youth_statistics() -> YouthStatistics {
    let mut prevalence = IndexMap::new();
    prevalence.insert(
        "global_impact".to_string(),
        "1 in 7 youth (14%) aged 10-19 experience mental disorders".to_string(),
    );
    prevalence.insert(
        "depression".to_string(),
        "18% of youth have major depressive episodes".to_string(),
    );
    prevalence.insert(
        "anxiety".to_string(),
        "31.9% of teens have anxiety disorders".to_string(),
    );
    prevalence.insert(
        "treatment_gap".to_string(),
        "Only 51% of youth with mental health conditions receive treatment".to_string(),
    );

    let mut digital_engagement = IndexMap::new();
    digital_engagement.insert(
        "smartphone_usage".to_string(),
        "89% of teens have smartphones".to_string(),
    );
    digital_engagement.insert(
        "daily_screen_time".to_string(),
        "7+ hours per day average".to_string(),
    );
    digital_engagement.insert(
        "app_preference".to_string(),
        "90% have favorable opinions of mHealth apps".to_string(),
    );
    digital_engagement.insert(
        "counseling_comfort".to_string(),
        "Less than 50% comfortable seeking traditional counseling".to_string(),
    );

    YouthStatistics {
        prevalence,
        digital_engagement,
    }
}

pub fn development_requirements() -> DevelopmentRequirements {
    DevelopmentRequirements {
        compliance: strings(&["HIPAA", "COPPA", "GDPR"]),
        accessibility: strings(&[
            "WCAG 2.1 AA",
            "Screen reader compatible",
            "Multiple language support",
        ]),
        performance: strings(&["<2s page load time", "99.9% uptime", "Real-time chat response"]),
        security: strings(&[
            "Zero-trust architecture",
            "Regular security audits",
            "Data encryption at rest and in transit",
        ]),
    }
}
