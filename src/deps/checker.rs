//! Import checker for dependency evaluation.
//!
//! The `ImportChecker` runs a throwaway `python -c "import <module>"`
//! process per dependency, caching results within a run so the same
//! dependency checked multiple times only spawns one process. Nothing is
//! persisted: a re-run of the launcher always re-checks.

use crate::deps::registry::{Dependency, DependencyRegistry};
use crate::deps::status::{DependencyGap, DependencyStatus};
use crate::process::execute_check;
use crate::runtime::Interpreter;
use std::collections::HashMap;
use std::path::Path;

/// Checks whether required libraries are importable in an interpreter.
pub struct ImportChecker<'a> {
    interpreter: &'a Interpreter,
    import_fn: Box<dyn Fn(&Path, &str) -> bool + 'a>,
    cache: HashMap<String, DependencyStatus>,
}

impl<'a> ImportChecker<'a> {
    /// Create a checker that runs real import checks.
    pub fn new(interpreter: &'a Interpreter) -> Self {
        Self::with_import_fn(interpreter, |python, module| {
            execute_check(python, &["-c", &format!("import {}", module)])
        })
    }

    /// Create a checker with a custom import-check function.
    ///
    /// This allows testing the remediation flow without real interpreters.
    pub fn with_import_fn<F>(interpreter: &'a Interpreter, import_fn: F) -> Self
    where
        F: Fn(&Path, &str) -> bool + 'a,
    {
        Self {
            interpreter,
            import_fn: Box::new(import_fn),
            cache: HashMap::new(),
        }
    }

    /// The interpreter this checker runs imports in.
    pub fn interpreter(&self) -> &Interpreter {
        self.interpreter
    }

    /// Check all registered dependencies, returning only the gaps.
    pub fn check_all(&mut self, registry: &DependencyRegistry) -> Vec<DependencyGap> {
        let mut gaps = Vec::new();
        for dep in registry.iter() {
            let status = self.check_one(dep);
            if !status.is_satisfied() {
                gaps.push(DependencyGap {
                    dependency: dep.clone(),
                    status,
                });
            }
        }
        gaps
    }

    /// Check a single dependency, using the cache when available.
    pub fn check_one(&mut self, dep: &Dependency) -> DependencyStatus {
        if let Some(cached) = self.cache.get(&dep.import_name) {
            return *cached;
        }

        tracing::debug!("import check: {} via {}", dep.import_name, self.interpreter.path.display());
        let status = if (self.import_fn)(&self.interpreter.path, &dep.import_name) {
            DependencyStatus::Satisfied
        } else {
            DependencyStatus::Missing
        };
        self.cache.insert(dep.import_name.clone(), status);
        status
    }

    /// Invalidate a cached result for a specific dependency.
    ///
    /// Called after an install attempt so the follow-up check re-runs
    /// the import rather than trusting a stale result.
    pub fn invalidate(&mut self, import_name: &str) {
        self.cache.remove(import_name);
    }

    /// Invalidate all cached results.
    pub fn invalidate_all(&mut self) {
        self.cache.clear();
    }

    #[cfg(test)]
    pub(crate) fn cache_contains(&self, import_name: &str) -> bool {
        self.cache.contains_key(import_name)
    }
}
