//! Loaders for activity data exported from the records system.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::domain::{FacultyActivityBundle, FacultyId, TeachingRecord};

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid activity bundle json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid teaching load csv: {0}")]
    Csv(#[from] csv::Error),
}

/// Reads a JSON object keyed by faculty id, each value an activity bundle.
pub fn load_bundles<R: Read>(
    reader: R,
) -> Result<BTreeMap<FacultyId, FacultyActivityBundle>, ImportError> {
    let raw: BTreeMap<String, FacultyActivityBundle> = serde_json::from_reader(reader)?;
    Ok(raw
        .into_iter()
        .map(|(id, bundle)| (FacultyId(id), bundle))
        .collect())
}

pub fn load_bundles_from_path(
    path: impl AsRef<Path>,
) -> Result<BTreeMap<FacultyId, FacultyActivityBundle>, ImportError> {
    load_bundles(open(path.as_ref())?)
}

/// Reads a single bundle document.
pub fn load_bundle_from_path(path: impl AsRef<Path>) -> Result<FacultyActivityBundle, ImportError> {
    Ok(serde_json::from_reader(open(path.as_ref())?)?)
}

fn open(path: &Path) -> Result<BufReader<File>, ImportError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| ImportError::Io {
            path: path.display().to_string(),
            source,
        })
}

/// Imports a teaching-load spreadsheet export (one row per subject taught).
pub struct TeachingLoadImporter;

impl TeachingLoadImporter {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Vec<TeachingRecord>, ImportError> {
        Self::from_reader(open(path.as_ref())?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<TeachingRecord>, ImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for row in csv_reader.deserialize::<TeachingRow>() {
            records.push(row?.into_record());
        }

        Ok(records)
    }
}

#[derive(Debug, Deserialize)]
struct TeachingRow {
    #[serde(rename = "Subject Name")]
    subject_name: String,
    #[serde(rename = "Lecture Hours", default, deserialize_with = "blank_as_zero")]
    lecture_hours: u32,
    #[serde(rename = "Tutorial Hours", default, deserialize_with = "blank_as_zero")]
    tutorial_hours: u32,
    #[serde(rename = "Practical Hours", default, deserialize_with = "blank_as_zero")]
    practical_hours: u32,
    #[serde(rename = "Extra Hours", default, deserialize_with = "blank_as_zero")]
    extra_hours: u32,
}

impl TeachingRow {
    fn into_record(self) -> TeachingRecord {
        TeachingRecord {
            subject_name: self.subject_name,
            lecture_hours: self.lecture_hours,
            tutorial_hours: self.tutorial_hours,
            practical_hours: self.practical_hours,
            extra_hours: self.extra_hours,
        }
    }
}

fn blank_as_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(0),
        Some(value) => value.parse::<u32>().map_err(serde::de::Error::custom),
    }
}
