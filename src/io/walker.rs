//! Discovery of the conventional .NET source layout.
//!
//! Only files matching the glob shapes below are considered; everything
//! else in the tree is ignored. Traversal order is whatever the walker
//! yields; callers must not depend on cross-file ordering.

use anyhow::Result;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

const CONTROLLER_GLOBS: &[&str] = &["**/Controllers/**/*.cs"];
const MODEL_GLOBS: &[&str] = &["**/Models/**/*.cs", "**/Entities/**/*.cs", "**/Domain/**/*.cs"];
const VIEW_GLOBS: &[&str] = &["**/Views/**/*.cshtml"];
const SERVICE_GLOBS: &[&str] = &["**/Services/**/*.cs"];
const PROJECT_GLOBS: &[&str] = &["**/*.csproj"];

pub struct SourceTree {
    root: PathBuf,
    files: Vec<PathBuf>,
}

impl SourceTree {
    /// Walk the tree once, collecting every candidate file.
    pub fn scan(root: &Path) -> Result<Self> {
        let mut files = Vec::new();
        let walker = WalkBuilder::new(root).hidden(false).git_ignore(true).build();

        for entry in walker {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && has_candidate_extension(path) {
                files.push(path.to_path_buf());
            }
        }
        files.sort();

        Ok(Self {
            root: root.to_path_buf(),
            files,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn controller_files(&self) -> Vec<PathBuf> {
        self.matching(CONTROLLER_GLOBS)
    }

    pub fn model_files(&self) -> Vec<PathBuf> {
        self.matching(MODEL_GLOBS)
    }

    pub fn view_files(&self) -> Vec<PathBuf> {
        self.matching(VIEW_GLOBS)
    }

    pub fn service_files(&self) -> Vec<PathBuf> {
        self.matching(SERVICE_GLOBS)
    }

    pub fn project_files(&self) -> Vec<PathBuf> {
        self.matching(PROJECT_GLOBS)
    }

    /// All C# sources, used by the tree-wide DbContext and auth scans.
    pub fn cs_files(&self) -> Vec<PathBuf> {
        self.files
            .iter()
            .filter(|p| p.extension().is_some_and(|e| e == "cs"))
            .cloned()
            .collect()
    }

    /// All Razor views anywhere under the root.
    pub fn razor_files(&self) -> Vec<PathBuf> {
        self.files
            .iter()
            .filter(|p| p.extension().is_some_and(|e| e == "cshtml"))
            .cloned()
            .collect()
    }

    /// Every file the walk considered, in sorted order.
    pub fn all_files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn is_controller_file(&self, path: &Path) -> bool {
        self.matches_globs(path, CONTROLLER_GLOBS)
    }

    pub fn is_model_file(&self, path: &Path) -> bool {
        self.matches_globs(path, MODEL_GLOBS)
    }

    pub fn is_view_file(&self, path: &Path) -> bool {
        self.matches_globs(path, VIEW_GLOBS)
    }

    pub fn is_service_file(&self, path: &Path) -> bool {
        self.matches_globs(path, SERVICE_GLOBS)
    }

    pub fn is_project_file(&self, path: &Path) -> bool {
        self.matches_globs(path, PROJECT_GLOBS)
    }

    fn matches_globs(&self, path: &Path, globs: &[&str]) -> bool {
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        globs
            .iter()
            .filter_map(|g| glob::Pattern::new(g).ok())
            .any(|p| p.matches_path(rel))
    }

    fn matching(&self, globs: &[&str]) -> Vec<PathBuf> {
        self.files
            .iter()
            .filter(|path| self.matches_globs(path, globs))
            .cloned()
            .collect()
    }
}

fn has_candidate_extension(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("cs") | Some("cshtml") | Some("csproj")
    )
}
