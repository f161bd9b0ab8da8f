pub mod assemble;
pub mod flush;
pub mod model;
pub mod names;
pub mod profile;
pub mod progression;
pub mod rng;
pub mod synth;

pub use assemble::{CommunityEntity, GenConfig, generate};
pub use model::{Classification, CommunityRecord, FieldDef, FieldKind, Identity};
pub use profile::{AreaType, LocationProfile, profile_for};
pub use progression::ProgressionState;
pub use rng::Lcg;
