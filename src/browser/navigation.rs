//! Navigation stack for a browser session.

use super::FolderRef;

/// Ordered path from the drive root to the folder currently displayed.
///
/// Element 0 is always the root sentinel and the path never shrinks below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationPath {
    crumbs: Vec<FolderRef>,
}

impl NavigationPath {
    /// A path holding only the root sentinel, shown as `root_label`.
    pub fn new(root_label: impl Into<String>) -> Self {
        Self {
            crumbs: vec![FolderRef::root(root_label)],
        }
    }

    /// Descend into `folder`. It becomes the current folder.
    pub fn push(&mut self, folder: FolderRef) {
        self.crumbs.push(folder);
    }

    /// Step back one level. Returns `false` (and does nothing) at the root.
    pub fn pop(&mut self) -> bool {
        if self.crumbs.len() > 1 {
            self.crumbs.pop();
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> &FolderRef {
        // Never empty: constructed with the root and `pop` keeps it.
        &self.crumbs[self.crumbs.len() - 1]
    }

    /// Full path for display; the last crumb is the active one.
    pub fn breadcrumbs(&self) -> &[FolderRef] {
        &self.crumbs
    }

    pub fn depth(&self) -> usize {
        self.crumbs.len()
    }

    pub fn is_root(&self) -> bool {
        self.crumbs.len() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_root() {
        let path = NavigationPath::new("Root");
        assert!(path.is_root());
        assert_eq!(path.depth(), 1);
        assert!(path.current().is_root());
        assert_eq!(path.current().name, "Root");
    }

    #[test]
    fn push_moves_current() {
        let mut path = NavigationPath::new("Root");
        path.push(FolderRef::new("A", "Docs"));
        path.push(FolderRef::new("A1", "Contracts"));

        assert_eq!(path.depth(), 3);
        assert!(!path.is_root());
        assert_eq!(path.current().id, "A1");
        let names: Vec<&str> = path.breadcrumbs().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["Root", "Docs", "Contracts"]);
    }

    #[test]
    fn pop_at_root_is_noop() {
        let mut path = NavigationPath::new("Root");
        assert!(!path.pop());
        assert!(!path.pop());
        assert_eq!(path.depth(), 1);
        assert!(path.current().is_root());
    }

    #[test]
    fn push_then_pop_restores_current() {
        let mut path = NavigationPath::new("Root");
        path.push(FolderRef::new("A", "Docs"));
        let before = path.current().clone();

        path.push(FolderRef::new("B", "Media"));
        assert!(path.pop());

        assert_eq!(path.current(), &before);
    }

    #[test]
    fn pushing_same_folder_twice_is_not_deduplicated() {
        let mut path = NavigationPath::new("Root");
        path.push(FolderRef::new("A", "Docs"));
        path.push(FolderRef::new("A", "Docs"));
        assert_eq!(path.depth(), 3);
    }

    #[test]
    fn length_never_drops_below_one() {
        let mut path = NavigationPath::new("Root");
        // Deterministic mix of pushes and pops, more pops than pushes overall.
        let script = "ppopooopppoooooopo";
        for (i, op) in script.chars().enumerate() {
            match op {
                'p' => path.push(FolderRef::new(format!("f{i}"), format!("Folder {i}"))),
                _ => {
                    path.pop();
                }
            }
            assert!(path.depth() >= 1);
            assert!(path.breadcrumbs()[0].is_root());
        }
    }
}
