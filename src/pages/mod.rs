//! Pages
//!
//! One page per managed entity, each behind the session gate.

mod features;
mod slugs;

pub use features::FeaturesPage;
pub use slugs::SlugsPage;
