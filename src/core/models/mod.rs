mod resource;
mod search_result;

pub use resource::{display_host, ResourceCategory, ResourceRecord};
pub use search_result::SearchResult;
