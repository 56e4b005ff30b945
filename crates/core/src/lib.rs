pub mod dedup;
pub mod error;
pub mod export;
pub mod extract;
pub mod locate;
pub mod markers;
pub mod numbers;
pub mod parse;
pub mod pipeline;
pub mod record;
pub mod stats;

pub use dedup::{DEFAULT_WINDOW_CAPACITY, RecencyWindow, dedup_exact};
pub use error::{ExcerpoError, Result};
pub use export::{Export, ExportMetadata, write_export};
pub use extract::{ExtractConfig, extract_posts};
#[doc(hidden)]
pub use locate::{FOOTER_CLIMB_LIMIT, POST_CLIMB_LIMIT, climb_until, find_post_root, locate_stats_fragment};
pub use markers::MarkerSet;
pub use numbers::parse_count;
pub use parse::{Document, Element};
pub use pipeline::{HarvestConfig, accept_post, harvest_directory, harvest_file, snapshot_files};
pub use record::PostRecord;
pub use stats::{PostStats, parse_stats};
