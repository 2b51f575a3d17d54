// tests/common/mod.rs
//! 共通テストユーティリティ

use std::{
    fs,
    path::{Path, PathBuf},
};

/// Temporary source tree removed on drop.
#[derive(Debug)]
pub struct Workspace {
    dir: tempfile::TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }
}

/// 10 lines: 2 blank, 3 comment, 5 code.
pub const GO_SOURCE: &str = "\
// Package demo shows counting.
package demo

// Add sums two ints.
func Add(a, b int) int {
\treturn a + b
}

// Zero is unused.
var Zero = 0
";

/// 4 code lines.
pub const PY_SOURCE: &str = "\
import os
x = 1
y = x + 1
print(os.getcwd(), y)
";

#[allow(dead_code)]
pub fn sample_tree() -> Workspace {
    let ws = Workspace::new();
    ws.write_file("main.go", GO_SOURCE);
    ws.write_file("tools/run.py", PY_SOURCE);
    ws
}
