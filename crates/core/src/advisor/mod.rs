//! The advisor pipeline: prompt construction, reply normalization, rule checks, and the
//! caching orchestrator that strings them together.

mod coerce;
pub mod error;
pub mod json;
pub mod normalize;
pub mod orchestrator;
pub mod prompt;
pub mod store;
pub mod validate;

pub use coerce::{CoercionReport, DefaultReason, DefaultedField};
pub use error::ParseError;
pub use normalize::{normalize, normalize_basic, normalize_enhanced};
pub use orchestrator::{AnalyzeOptions, BuildAdvisor};
pub use prompt::{build_prompt, MetaBuildReference, PromptOptions};
pub use store::{CachedRecommendation, InMemoryStore, RecommendationStore};
pub use validate::validate;
