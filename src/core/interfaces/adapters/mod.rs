mod source_finder;

pub use source_finder::SourceFinder;
