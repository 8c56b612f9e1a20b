#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::{TempDir, tempdir};

/// Scratch directory that removes its files on drop.
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            temp_dir: tempdir().expect("temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Writes `contents` into a file under the workspace and returns the path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        self.write_bytes(name, contents.as_bytes())
    }

    pub fn write_bytes(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        let mut file = File::create(&path).expect("create temp file");
        file.write_all(contents).expect("write temp file contents");
        path
    }
}

/// Wraps plain strings as present samples.
pub fn samples(values: &[&str]) -> Vec<Option<String>> {
    values.iter().map(|v| Some(v.to_string())).collect()
}

pub const ORDERS_CSV: &str = "\
id,amount,ordered_at,note,status
1,42.50,2024-01-05,,NULL
2,13.37,2024-01-06,,null
3,1204.75,2024-02-20,,NULL
";

/// Fixed-width rows: code 0..4, amount 4..13 (left padded), shipped 13..23.
pub const ORDERS_FIXED: &str = "\
CODEAMOUNT   SHIPPED
A001    12.502024-01-05
B002  1234.002024-02-20
C003     7.252024-03-31
";
