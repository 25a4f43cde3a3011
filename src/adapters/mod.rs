mod gemini_source_finder;

pub use gemini_source_finder::GeminiSourceFinder;
