//! Data models for the MindBridge AI data document.
//!
//! - [`RootDocument`]: the single top-level mapping that gets serialized
//! - [`FeatureCatalog`] / [`CoreFeature`]: feature descriptions
//! - [`YouthStatistics`]: prevalence and digital engagement figures
//! - [`DevelopmentRequirements`]: compliance, accessibility, performance, security
//!
//! Every leaf is a `String` or a `Vec<String>`. Open-ended groups use
//! [`IndexMap`](indexmap::IndexMap) so insertion order survives serialization.

pub mod document;

pub use document::{
    AppInfo, CoreFeature, DevelopmentRequirements, FeatureCatalog, RootDocument, YouthStatistics,
};
