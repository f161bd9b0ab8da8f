pub mod fields;
pub mod record;

pub use fields::{FieldDef, FieldKind};
pub use record::{
    Classification, CommunityRecord, Demographics, Documentation, Education, Facilities,
    FoodSecurity, HazardLevel, Hazards, Identity, Livelihood, LivestockCount, Priorities,
    PriorityRating, RoadType, Roads, Utilities, Water, WaterSource, WaterStatus,
};
