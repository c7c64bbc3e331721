//! Activity domain — records, the seed set, and the shared directory.
//!
//! - **model** — [`Activity`] and the insertion-ordered [`ActivityMap`].
//! - **seed** — the fixed activities present at process start.
//! - **directory** — [`ActivityDirectory`], the locked store behind the API.

mod directory;
mod model;
pub mod seed;

pub use directory::ActivityDirectory;
pub use model::{Activity, ActivityMap};
