use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::campus_manifest::{CampusManifest, MANIFEST_VERSION};

#[derive(Debug)]
pub enum CampusManifestError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    UnsupportedVersion {
        found: String,
    },
    BadYearKey {
        key: String,
    },
}

impl fmt::Display for CampusManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CampusManifestError::Io { path, source } => {
                write!(f, "failed to read manifest {}: {source}", path.display())
            }
            CampusManifestError::Parse(err) => write!(f, "manifest parse error: {err}"),
            CampusManifestError::UnsupportedVersion { found } => {
                write!(f, "unsupported manifest version: {found}")
            }
            CampusManifestError::BadYearKey { key } => {
                write!(f, "timeline key is not a year: {key:?}")
            }
        }
    }
}

impl std::error::Error for CampusManifestError {}

/// Loads and validates a campus manifest.
///
/// Validation is structural only: version gate plus numeric timeline keys.
/// Cross-references (volumes naming buildings missing from the timeline and
/// vice versa) are allowed and degrade to no-ops downstream.
pub fn load_manifest(path: impl AsRef<Path>) -> Result<CampusManifest, CampusManifestError> {
    let path = path.as_ref();
    let payload = fs::read_to_string(path).map_err(|source| CampusManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_manifest(&payload)
}

pub fn parse_manifest(payload: &str) -> Result<CampusManifest, CampusManifestError> {
    let manifest: CampusManifest =
        serde_json::from_str(payload).map_err(CampusManifestError::Parse)?;

    if manifest.version != MANIFEST_VERSION {
        return Err(CampusManifestError::UnsupportedVersion {
            found: manifest.version,
        });
    }

    for key in manifest.timeline.keys() {
        if key.trim().parse::<i32>().is_err() {
            return Err(CampusManifestError::BadYearKey { key: key.clone() });
        }
    }

    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::{CampusManifestError, load_manifest, parse_manifest};
    use crate::campus_manifest::{CampusManifest, MANIFEST_VERSION, VolumePlacement};
    use std::fs;
    use std::path::PathBuf;

    fn temp_dir(label: &str) -> PathBuf {
        let mut dir = std::env::temp_dir();
        let id = format!("campus_manifest_{label}_{}", std::process::id());
        dir.push(id);
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    fn demo_manifest() -> CampusManifest {
        let mut manifest = CampusManifest::new("demo-campus");
        manifest.name = Some("Demo".to_string());
        manifest
            .timeline
            .insert("2001".to_string(), vec!["library".to_string()]);
        manifest.volumes.push(VolumePlacement {
            building: "library".to_string(),
            position: [10.0, 0.0, 0.0],
            height: 12.0,
        });
        manifest
    }

    #[test]
    fn round_trips_through_disk() {
        let root = temp_dir("load");
        let manifest = demo_manifest();
        let payload = serde_json::to_string_pretty(&manifest).expect("serialize manifest");
        let path = root.join("campus.manifest.json");
        fs::write(&path, payload).expect("write manifest");

        let loaded = load_manifest(&path).expect("load manifest");
        assert_eq!(loaded, manifest);
    }

    #[test]
    fn loads_demo_campus_assets() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../apps/replay/assets/campus.manifest.json");
        let manifest = load_manifest(path).expect("load demo manifest");

        assert_eq!(manifest.campus_id, "seeu-tetovo");
        assert!(!manifest.timeline.is_empty());
        // Every placed volume's building should be spawnable; timeline
        // membership is intentionally not required.
        assert!(!manifest.volumes.is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_manifest("/nonexistent/campus.manifest.json").expect_err("expect io error");
        match err {
            CampusManifestError::Io { path, .. } => {
                assert!(path.ends_with("campus.manifest.json"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_unsupported_version() {
        let mut manifest = demo_manifest();
        manifest.version = "2.0".to_string();
        let payload = serde_json::to_string(&manifest).expect("serialize");

        let err = parse_manifest(&payload).expect_err("expect version error");
        match err {
            CampusManifestError::UnsupportedVersion { found } => {
                assert_eq!(found, "2.0");
                assert_ne!(found, MANIFEST_VERSION);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_non_numeric_year_keys() {
        let mut manifest = demo_manifest();
        manifest
            .timeline
            .insert("someday".to_string(), vec!["lh1".to_string()]);
        let payload = serde_json::to_string(&manifest).expect("serialize");

        let err = parse_manifest(&payload).expect_err("expect year error");
        match err {
            CampusManifestError::BadYearKey { key } => assert_eq!(key, "someday"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_manifest("{ not json").expect_err("expect parse error");
        assert!(matches!(err, CampusManifestError::Parse(_)));
    }
}
