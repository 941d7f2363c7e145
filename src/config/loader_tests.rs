use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::*;
use crate::config::FileSystem;

struct MockFileSystem {
    files: Mutex<HashMap<PathBuf, String>>,
}

impl MockFileSystem {
    fn new() -> Self {
        Self {
            files: Mutex::new(HashMap::new()),
        }
    }

    fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), content.to_string());
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}

#[test]
fn missing_file_yields_defaults() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let config = loader.load_from_dir(Path::new("/opt/bibstats")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn loads_file_next_to_program() {
    let fs = MockFileSystem::new().with_file(
        "/opt/bibstats/bibstats.toml",
        r##"
[style]
font_family = "DejaVu Serif"

[year_chart]
width = 640
bar_color = "#336699"
"##,
    );
    let loader = FileConfigLoader::with_fs(fs);
    let config = loader.load_from_dir(Path::new("/opt/bibstats")).unwrap();

    assert_eq!(config.style.font_family, "DejaVu Serif");
    assert!((config.year_chart.width - 640.0).abs() < f64::EPSILON);
    assert!((config.year_chart.height - 300.0).abs() < f64::EPSILON);
    assert_eq!(config.year_chart.bar_color, "#336699");
    assert_eq!(config.category_chart.colors.len(), 3);
}

#[test]
fn load_from_path_reports_missing_file() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let err = loader
        .load_from_path(Path::new("/nowhere/bibstats.toml"))
        .unwrap_err();
    assert!(matches!(err, BibStatsError::FileRead { .. }));
    assert!(err.message().contains("file not found"));
}

#[test]
fn malformed_toml_is_an_error() {
    let fs = MockFileSystem::new().with_file("/cfg/bibstats.toml", "[style\nfont_family = 1");
    let loader = FileConfigLoader::with_fs(fs);
    let err = loader.load_from_dir(Path::new("/cfg")).unwrap_err();
    assert!(matches!(err, BibStatsError::TomlParse(_)));
}

#[test]
fn unknown_keys_are_rejected() {
    let err = parse_config("[year_chart]\ncolour = \"red\"\n").unwrap_err();
    assert!(matches!(err, BibStatsError::TomlParse(_)));

    let err = parse_config("[legend]\nshow = true\n").unwrap_err();
    assert!(matches!(err, BibStatsError::TomlParse(_)));
}

#[test]
fn parse_config_runs_validation() {
    let err = parse_config("[category_chart]\ncolors = []\n").unwrap_err();
    assert!(matches!(err, BibStatsError::Config(_)));
}

#[test]
fn empty_file_is_all_defaults() {
    assert_eq!(parse_config("").unwrap(), Config::default());
}
