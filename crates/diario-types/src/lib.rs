pub mod classified;
pub mod error;
pub mod kind;
pub mod message;
pub mod record;
pub mod stats;
mod util;

pub use classified::ClassifiedRecord;
pub use error::{Error, Result};
pub use kind::{CanonicalType, IconTag, Presentation, VisualCategory};
pub use message::{ClientRequest, SearchRequest, StreamMessage};
pub use record::RawRecord;
pub use stats::AggregateStats;
pub use util::*;
