use std::path::{Component, Path, PathBuf};

/// One `<assignment>` entry of `assignments.xml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForestAssignment {
    pub forest_name: String,
    pub data_directory: Option<PathBuf>,
}

/// Where a forest's journals were looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForestLocation {
    /// The assignment had no data directory; the base directory was used.
    DefaultBase,
    /// The assignment names its own data directory.
    DataDirectory,
}

impl ForestAssignment {
    pub fn new(forest_name: impl Into<String>, data_directory: Option<PathBuf>) -> Self {
        Self {
            forest_name: forest_name.into(),
            data_directory,
        }
    }

    pub fn location(&self) -> ForestLocation {
        match self.data_directory {
            Some(_) => ForestLocation::DataDirectory,
            None => ForestLocation::DefaultBase,
        }
    }

    /// `<data_directory>/Forests/<forest>/Journals`, or
    /// `<default_base>/<forest>/Journals` when no data directory is set.
    ///
    /// The forest name always stays below the base directory.
    pub fn journal_dir(&self, default_base: &Path) -> PathBuf {
        let forest: PathBuf = relative_name(&self.forest_name);
        let forest_root: PathBuf = match &self.data_directory {
            Some(data_dir) => data_dir.join("Forests").join(forest),
            None => default_base.join(forest),
        };
        forest_root.join("Journals")
    }
}

/// Keeps only the plain components of `name`: no root, no prefix, no `..`.
fn relative_name(name: &str) -> PathBuf {
    Path::new(name)
        .components()
        .filter(|component| matches!(component, Component::Normal(_)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forest_without_data_directory_lives_under_default_base() {
        let forest = ForestAssignment::new("A", None);
        assert_eq!(
            forest.journal_dir(Path::new("/default_base")),
            PathBuf::from("/default_base/A/Journals")
        );
        assert_eq!(forest.location(), ForestLocation::DefaultBase);
    }

    #[test]
    fn forest_with_data_directory_lives_under_its_forests_dir() {
        let forest = ForestAssignment::new("B", Some(PathBuf::from("/custom")));
        assert_eq!(
            forest.journal_dir(Path::new("/default_base")),
            PathBuf::from("/custom/Forests/B/Journals")
        );
        assert_eq!(forest.location(), ForestLocation::DataDirectory);
    }

    #[test]
    fn absolute_forest_name_stays_under_the_base() {
        let forest = ForestAssignment::new("/etc", None);
        assert_eq!(
            forest.journal_dir(Path::new("/default_base")),
            PathBuf::from("/default_base/etc/Journals")
        );

        let custom = ForestAssignment::new("/etc", Some(PathBuf::from("/custom")));
        assert_eq!(
            custom.journal_dir(Path::new("/default_base")),
            PathBuf::from("/custom/Forests/etc/Journals")
        );
    }

    #[test]
    fn parent_components_in_forest_name_are_dropped() {
        let forest = ForestAssignment::new("../../etc", None);
        assert_eq!(
            forest.journal_dir(Path::new("/default_base")),
            PathBuf::from("/default_base/etc/Journals")
        );
    }
}
