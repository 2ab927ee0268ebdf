pub mod bulk;
pub mod policy;
pub mod regex_engine;
pub mod searcher;

pub use bulk::{BulkSearcher, BULK_PASS_WIDTH};
pub use policy::SearchPolicy;
pub use regex_engine::RegexSearcher;
pub use searcher::{build_searcher, MultiSearcher, Pass, Passes, Searcher};
