//! Model shapes bound to non-text inputs.
//!
//! | Input | Model | Meaning |
//! |-------|-------|---------|
//! | checkbox | [`CheckableModel`] | a flag, or the selected option values |
//! | radio | `Option<String>` | the selected option value, if any |
//! | file | `Vec<SelectedFile>` | the chosen files |

use crate::collections::{self, StringCollection};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Checkbox-style state: a single flag, or a group of selected values held
/// as a list or a set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckableModel {
    Checked(bool),
    List(Vec<String>),
    Set(HashSet<String>),
}

impl Default for CheckableModel {
    fn default() -> Self {
        CheckableModel::Checked(false)
    }
}

impl CheckableModel {
    /// The group representation, if this model is not a plain flag.
    pub fn collection(&self) -> Option<&dyn StringCollection> {
        match self {
            CheckableModel::Checked(_) => None,
            CheckableModel::List(values) => Some(values),
            CheckableModel::Set(values) => Some(values),
        }
    }

    pub fn collection_mut(&mut self) -> Option<&mut dyn StringCollection> {
        match self {
            CheckableModel::Checked(_) => None,
            CheckableModel::List(values) => Some(values),
            CheckableModel::Set(values) => Some(values),
        }
    }

    /// Whether the option carrying `value` is checked.
    ///
    /// A flag model ignores `value`; a group model requires a non-empty
    /// `value` that is a member.
    pub fn is_checked(&self, value: &str) -> bool {
        match self.collection() {
            Some(group) => !value.is_empty() && collections::has(value, group),
            None => matches!(self, CheckableModel::Checked(true)),
        }
    }

    /// Check or uncheck the option carrying `value`.
    pub fn set_checked(&mut self, value: &str, checked: bool) {
        if let CheckableModel::Checked(flag) = self {
            *flag = checked;
            return;
        }
        if let Some(group) = self.collection_mut() {
            if checked {
                collections::add(value, group);
            } else {
                collections::remove(value, group);
            }
        }
    }
}

impl From<bool> for CheckableModel {
    fn from(checked: bool) -> Self {
        CheckableModel::Checked(checked)
    }
}

impl From<Vec<String>> for CheckableModel {
    fn from(values: Vec<String>) -> Self {
        CheckableModel::List(values)
    }
}

impl From<HashSet<String>> for CheckableModel {
    fn from(values: HashSet<String>) -> Self {
        CheckableModel::Set(values)
    }
}

/// A file chosen in a file input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFile {
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    pub mime: Option<String>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            mime: None,
        }
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    /// Describe a file on disk the way a file input would.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::new(name, metadata.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_model_ignores_value() {
        assert!(CheckableModel::Checked(true).is_checked(""));
        assert!(!CheckableModel::Checked(false).is_checked("test"));
    }

    #[test]
    fn group_models_check_membership() {
        let list = CheckableModel::from(vec!["test".to_string()]);
        assert!(list.is_checked("test"));
        assert!(!list.is_checked("invalid"));
        assert!(!list.is_checked(""));

        let set = CheckableModel::from(HashSet::from(["test".to_string()]));
        assert!(set.is_checked("test"));
        assert!(!set.is_checked("invalid"));
    }

    #[test]
    fn set_checked_toggles_flag() {
        let mut model = CheckableModel::default();
        model.set_checked("ignored", true);
        assert_eq!(model, CheckableModel::Checked(true));
        model.set_checked("ignored", false);
        assert_eq!(model, CheckableModel::Checked(false));
    }

    #[test]
    fn set_checked_adds_and_removes_group_values() {
        let mut model = CheckableModel::List(Vec::new());
        model.set_checked("a", true);
        model.set_checked("b", true);
        model.set_checked("a", true);
        assert_eq!(
            model,
            CheckableModel::List(vec!["a".to_string(), "b".to_string()])
        );

        model.set_checked("a", false);
        assert_eq!(model, CheckableModel::List(vec!["b".to_string()]));
    }

    #[test]
    fn from_path_reads_size_and_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test-file.txt");
        std::fs::write(&path, "(file content)").unwrap();

        let file = SelectedFile::from_path(&path).unwrap();
        assert_eq!(file.name, "test-file.txt");
        assert_eq!(file.size, 14);
        assert_eq!(file.mime, None);
    }

    #[test]
    fn from_path_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let err = SelectedFile::from_path(missing).unwrap_err();
        assert!(matches!(err, crate::error::InputkitError::Io(_)));
    }
}
