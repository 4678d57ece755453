//! Common test utilities for amisync-docs
//!
//! Provides:
//! - `DocTree`: a Terraform documentation tree laid out in a temp directory
//! - `RecordingFs`: a `DocFs` wrapper that records writes and can refuse them

#![allow(dead_code)]

use amisync_core::{DirEntryInfo, DocFs, LocalFs};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

pub const MANIFEST: &str = "\
# AWS Terraform AMIs

# us-east-1 v14.1.0 OSS: ami-000
# us-east-1 v14.1.0 Enterprise: ami-e00
# us-east-1 v14.1.0 Enterprise FIPS: ami-f00
# eu-west-1 v14.1.0 OSS: ami-999
# eu-west-1 v14.1.0 Enterprise: ami-e99
# eu-west-1 v14.1.0 Enterprise FIPS: ami-f99
";

pub const STARTER_README: &str = "\
# Starter cluster

```bash
export TF_VAR_ami_name=\"gravitational-teleport-ami-oss-14.1.0\"
# export TF_VAR_ami_name=\"gravitational-teleport-ami-ent-14.1.0\"
# export TF_VAR_ami_name=\"gravitational-teleport-ami-ent-fips-14.1.0\"
```
";

pub const HA_README: &str = "\
# HA autoscale cluster

export TF_VAR_ami_name=\"gravitational-teleport-ami-ent-14.1.0\"
";

pub const PLAIN_README: &str = "# Shared modules\n\nNothing pinned here.\n";

/// Documentation tree on disk
pub struct DocTree {
    pub dir: TempDir,
}

impl DocTree {
    /// Tree with two deployment modes, a marker-free mode, a hidden
    /// directory, and the manifest
    pub fn standard() -> Self {
        let tree = Self::empty();
        tree.write("starter-cluster/README.md", STARTER_README);
        tree.write("ha-autoscale-cluster/README.md", HA_README);
        tree.write("modules/README.md", PLAIN_README);
        tree.write(
            ".terraform/README.md",
            "gravitational-teleport-ami-oss-1.0.0\n",
        );
        tree.write("AMIS.md", MANIFEST);
        tree
    }

    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    pub fn write(&self, rel: &str, contents: &str) {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, contents).unwrap();
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.path(rel)).unwrap()
    }

    /// Every file under the tree with its contents
    pub fn snapshot(&self) -> BTreeMap<PathBuf, String> {
        fn walk(dir: &Path, out: &mut BTreeMap<PathBuf, String>) {
            for entry in std::fs::read_dir(dir).unwrap() {
                let path = entry.unwrap().path();
                if path.is_dir() {
                    walk(&path, out);
                } else {
                    let contents = std::fs::read_to_string(&path).unwrap();
                    out.insert(path, contents);
                }
            }
        }
        let mut out = BTreeMap::new();
        walk(self.root(), &mut out);
        out
    }
}

/// `DocFs` over the local filesystem that records writes
#[derive(Default)]
pub struct RecordingFs {
    writes: Mutex<Vec<PathBuf>>,
    deny_writes: bool,
}

impl RecordingFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every write fails with permission denied
    pub fn read_only() -> Self {
        Self {
            writes: Mutex::new(Vec::new()),
            deny_writes: true,
        }
    }

    pub fn writes(&self) -> Vec<PathBuf> {
        self.writes.lock().unwrap().clone()
    }
}

impl DocFs for RecordingFs {
    fn list_dir(&self, path: &Path) -> std::io::Result<Vec<DirEntryInfo>> {
        LocalFs.list_dir(path)
    }

    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        LocalFs.read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> std::io::Result<()> {
        if self.deny_writes {
            return Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only test filesystem",
            ));
        }
        self.writes.lock().unwrap().push(path.to_path_buf());
        LocalFs.write(path, contents)
    }
}
