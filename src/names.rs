use crate::profile::AreaType;
use crate::rng::Lcg;

const URBAN_PREFIXES: &[&str] = &["Bagong", "San", "Santa", "Villa", "Centro"];
const RURAL_PREFIXES: &[&str] = &["Sitio", "Lower", "Upper", "New", "Barrio"];
const HIGHLAND_PREFIXES: &[&str] = &["Upper", "Mount", "Upland", "Sitio"];

const COMMON_BASES: &[&str] = &[
    "Malaya", "Masagana", "Mabuhay", "Tagumpay", "Maligaya", "Pag-asa", "Silangan", "Kanluran",
    "Maunlad", "Matatag", "Bagumbayan", "Katuparan",
];

const INDIGENOUS_BASES: &[&str] = &[
    "Dulangan", "Kalinawan", "Banwa", "Kabulig", "Talaandig", "Matigsalug", "Kidapan", "Langilan",
];

/// Compose a community name from a type-keyed prefix pool and a base pool;
/// indigenous communities draw from the ancestral-name pool.
pub fn compose_name(area_type: AreaType, indigenous: bool, rng: &mut Lcg) -> String {
    let prefixes = match area_type {
        AreaType::Urban | AreaType::SemiUrban => URBAN_PREFIXES,
        AreaType::Rural => RURAL_PREFIXES,
        AreaType::Highland => HIGHLAND_PREFIXES,
    };
    let bases = if indigenous { INDIGENOUS_BASES } else { COMMON_BASES };
    format!("{} {}", rng.pick(prefixes), rng.pick(bases))
}

/// Short code: initials of the location name plus three random digits.
pub fn short_code(location: &str, rng: &mut Lcg) -> String {
    let initials: String = location
        .split_whitespace()
        .filter_map(|w| w.chars().next())
        .filter(|c| c.is_alphabetic())
        .collect::<String>()
        .to_uppercase();
    format!("{initials}-{:03}", rng.next_int(0, 999))
}
