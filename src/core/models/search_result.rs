use super::resource::{ResourceCategory, ResourceRecord};

/// One complete answer for a topic. Built once from the upstream response and
/// replaced wholesale by the next search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub summary: String,
    pub resources: Vec<ResourceRecord>,
    pub grounding_urls: Vec<String>,
}

impl SearchResult {
    pub fn build(
        summary: String,
        resources: Vec<ResourceRecord>,
        grounding_urls: Vec<String>,
    ) -> Self {
        Self {
            summary,
            resources,
            grounding_urls,
        }
    }

    /// Resources tagged with `category`, in the order the upstream returned
    /// them.
    pub fn resources_in(&self, category: ResourceCategory) -> Vec<&ResourceRecord> {
        self.resources
            .iter()
            .filter(|resource| resource.category == category)
            .collect()
    }
}
