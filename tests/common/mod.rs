#![allow(dead_code)]
#![allow(deprecated)] // cargo_bin deprecation - still works fine

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A scratch directory holding its own copy of the bibstats binary.
///
/// The tool reads and writes next to its executable, so each test runs a
/// private copy to keep inputs and charts isolated.
pub struct TestFixture {
    pub dir: TempDir,
    exe: PathBuf,
}

impl TestFixture {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let source = assert_cmd::cargo::cargo_bin("bibstats");
        let file_name = source.file_name().expect("binary has a file name");
        let exe = dir.path().join(file_name);
        fs::copy(&source, &exe).expect("Failed to copy binary");
        Self { dir, exe }
    }

    pub fn with_bib(self, content: &str) -> Self {
        self.write("bib.bib", content);
        self
    }

    pub fn with_config(self, content: &str) -> Self {
        self.write("bibstats.toml", content);
        self
    }

    pub fn write(&self, name: &str, content: &str) {
        fs::write(self.dir.path().join(name), content).expect("Failed to write file");
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    pub fn exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Command running the copied binary from an unrelated working directory.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::new(&self.exe);
        cmd.current_dir(std::env::temp_dir());
        cmd
    }
}

pub const SAMPLE_BIB: &str = r#"
@string{conf = "Proc. of the "}

@article{smith2020,
  author = {Smith, J.},
  title = {A Study},
  journal = {Journal of Things},
  year = {2020},
}

@Article{jones2021,
  title = "Another {Study}",
  year = 2021
}

@inproceedings{lee2020,
  title = {Talk},
  booktitle = conf # "Conference",
  year = {2020},
  month = jan
}

@misc{arxiv2022,
  title = {Preprint},
  year = {2022}
}

@book{knuth1968,
  title = {The Art of Computer Programming}
}
"#;
