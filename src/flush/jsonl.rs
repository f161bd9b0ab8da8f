use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::assemble::CommunityEntity;
use crate::model::{Classification, CommunityRecord, Identity};
use crate::profile::AreaType;

/// Write an iterator of serializable items to a JSONL file (one JSON object per line).
fn write_jsonl<T: Serialize>(path: &Path, items: impl Iterator<Item = T>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut writer, &item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

#[derive(Serialize)]
struct EntityRow<'a> {
    #[serde(flatten)]
    identity: &'a Identity,
    area_type: AreaType,
    classification: &'a Classification,
    years: Vec<i32>,
}

#[derive(Serialize)]
struct RecordRow<'a> {
    code: &'a str,
    year: i32,
    record: &'a CommunityRecord,
}

/// Flush generated communities to JSONL files in the given output directory.
///
/// Creates the directory if needed. Writes two files:
/// - `entities.jsonl` — one line per community (identity, classification, years)
/// - `records.jsonl` — one line per community-year, keyed by the entity code
pub fn flush_to_jsonl(entities: &[CommunityEntity], output_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(output_dir)?;

    write_jsonl(
        &output_dir.join("entities.jsonl"),
        entities.iter().map(|e| EntityRow {
            identity: &e.identity,
            area_type: e.area_type,
            classification: &e.classification,
            years: e.years(),
        }),
    )?;

    write_jsonl(
        &output_dir.join("records.jsonl"),
        entities.iter().flat_map(|e| {
            e.records.values().map(move |r| RecordRow {
                code: &e.identity.code,
                year: r.year,
                record: r,
            })
        }),
    )
}
