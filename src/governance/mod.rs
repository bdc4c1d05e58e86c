//! Governance metadata (sigs.yaml): schema and loading.

pub mod load;
pub mod model;

pub use load::{find_sigs_yaml, load_context};
pub use model::{Category, Contact, Context, Group, Person, Subproject};
