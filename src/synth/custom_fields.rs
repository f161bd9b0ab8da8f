use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use serde_json::{Value, json};

use crate::model::{FieldDef, FieldKind};
use crate::rng::Lcg;
use crate::synth::round2;

const REMARK_POOL: &[&str] = &[
    "No major issues reported",
    "Pending validation by the council",
    "Updated during the annual profiling visit",
    "Carried over from the previous survey round",
    "Verified with the community secretary",
];

const GENERIC_TOKENS: &[&str] = &["north", "south", "east", "west", "central"];

/// Materialize the externally supplied field catalog for one year. Values are
/// keyed by the stable field id so downstream joins work across years.
pub(crate) fn synth_custom_fields(
    catalog: &[FieldDef],
    year: i32,
    rng: &mut Lcg,
) -> BTreeMap<String, Value> {
    let mut values = BTreeMap::new();
    for def in catalog {
        values.insert(def.id.clone(), value_for(def, year, rng));
    }
    values
}

fn value_for(def: &FieldDef, year: i32, rng: &mut Lcg) -> Value {
    match def.kind {
        FieldKind::Text => json!(format!("{} ({year})", rng.pick(REMARK_POOL))),
        FieldKind::Number => {
            let lo = def.min.unwrap_or(0.0);
            let hi = def.max.unwrap_or(100.0);
            json!(round2(rng.next_float(lo, hi.max(lo))))
        }
        FieldKind::Boolean => json!(rng.chance(0.5)),
        FieldKind::Date => {
            json!(format!("{year}-{:02}-{:02}", rng.next_int(1, 12), rng.next_int(1, 28)))
        }
        FieldKind::Array => {
            let pool: Vec<&str> = if def.options.is_empty() {
                GENERIC_TOKENS.to_vec()
            } else {
                def.options.iter().map(String::as_str).collect()
            };
            let n = rng.next_int(1, pool.len().min(3) as i64) as usize;
            let mut items = pool;
            rng.shuffle(&mut items);
            items.truncate(n);
            json!(items)
        }
        FieldKind::SingleSelect => {
            if def.options.is_empty() {
                Value::Null
            } else {
                json!(rng.pick(&def.options))
            }
        }
        FieldKind::MultiSelect => {
            if def.options.is_empty() {
                json!([])
            } else {
                let mut options = def.options.clone();
                options.shuffle(rng);
                let n = rng.next_int(1, options.len() as i64) as usize;
                options.truncate(n);
                json!(options)
            }
        }
    }
}
