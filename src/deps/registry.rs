//! Registry of the libraries the application imports at start time.

/// A library the launched application needs before it can start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// Display name (e.g., "PyQt5").
    pub name: String,
    /// Module name used in the throwaway import check.
    pub import_name: String,
    /// Package name passed to pip.
    pub pip_package: String,
    /// Manual install command suggested when automatic install fails.
    pub install_hint: String,
}

impl Dependency {
    /// Define a dependency whose display, import, and pip names coincide.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            import_name: name.to_string(),
            pip_package: name.to_string(),
            install_hint: format!("pip install {}", name),
        }
    }

    /// Override the import module name (pip name and module name can differ).
    pub fn with_import_name(mut self, import_name: &str) -> Self {
        self.import_name = import_name.to_string();
        self
    }
}

/// The set of dependencies checked before launch.
#[derive(Debug, Clone)]
pub struct DependencyRegistry {
    deps: Vec<Dependency>,
}

impl Default for DependencyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyRegistry {
    /// The libraries Oracle Counter imports at startup: the GUI toolkit
    /// and the keyboard-hook module.
    pub fn new() -> Self {
        Self {
            deps: vec![Dependency::new("PyQt5"), Dependency::new("pynput")],
        }
    }

    /// An empty registry (for tests).
    pub fn empty() -> Self {
        Self { deps: Vec::new() }
    }

    /// Add a dependency.
    pub fn with(mut self, dep: Dependency) -> Self {
        self.deps.push(dep);
        self
    }

    /// Look up a dependency by import name.
    pub fn get(&self, import_name: &str) -> Option<&Dependency> {
        self.deps.iter().find(|d| d.import_name == import_name)
    }

    /// Iterate over all dependencies in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Dependency> {
        self.deps.iter()
    }

    /// Number of registered dependencies.
    pub fn len(&self) -> usize {
        self.deps.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.deps.is_empty()
    }
}
