//! package.json types for the generated project

use crate::runtime::{Identity, PackageManager};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Author block, built from the git identity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Author {
    /// Author from a git identity, `None` when neither name nor email is set
    pub fn from_identity(identity: &Identity) -> Option<Self> {
        let non_empty = |v: Option<&str>| v.filter(|s| !s.trim().is_empty()).map(str::to_string);
        let author = Author {
            name: non_empty(identity.name()),
            email: non_empty(identity.email()),
        };

        if author.name.is_none() && author.email.is_none() {
            None
        } else {
            Some(author)
        }
    }
}

/// npm scripts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scripts {
    pub build: String,
    pub release: String,
}

/// Entry points for one module format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportTarget {
    pub types: String,
    pub default: String,
}

/// `import` / `require` conditions of an export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConditions {
    pub import: ExportTarget,
    pub require: ExportTarget,
}

/// Generated package.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    pub description: String,
    pub keywords: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,

    pub license: String,

    #[serde(rename = "type")]
    pub module_type: String,

    pub main: String,
    pub module: String,
    pub types: String,
    pub scripts: Scripts,
    pub exports: BTreeMap<String, ExportConditions>,
    pub files: Vec<String>,
}

impl PackageManifest {
    /// Manifest for a new library named `name`
    pub fn new(name: &str, manager: PackageManager, author: Option<Author>) -> Self {
        let mut exports = BTreeMap::new();
        exports.insert(
            ".".to_string(),
            ExportConditions {
                import: ExportTarget {
                    types: "./dist/index.d.ts".to_string(),
                    default: "./dist/index.js".to_string(),
                },
                require: ExportTarget {
                    types: "./dist/index.d.cts".to_string(),
                    default: "./dist/index.cjs".to_string(),
                },
            },
        );

        Self {
            name: name.to_string(),
            version: "0.0.0".to_string(),
            description: String::new(),
            keywords: Vec::new(),
            author,
            license: "MIT".to_string(),
            module_type: "module".to_string(),
            main: "./dist/index.cjs".to_string(),
            module: "./dist/index.js".to_string(),
            types: "./dist/index.d.ts".to_string(),
            scripts: Scripts {
                build: manager.build_script(),
                release: manager.release_script(),
            },
            exports,
            files: vec!["dist".to_string()],
        }
    }
}
