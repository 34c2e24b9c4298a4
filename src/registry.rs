//! Handler registry.
//!
//! Maps module IDs and directive names to factories so a host can build
//! filters from a directive source without knowing their concrete types.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use crate::directive::{Dispenser, DirectiveError};
use crate::guard::prefix::DIRECTIVE;
use crate::guard::{PathFilter, PrefixGuard};

/// Module ID of the prefix guard.
pub const PREFIX_GUARD_ID: &str = "http.handlers.restrict_prefix";

/// Builds a ready-to-serve filter from a directive segment.
pub type Factory = fn(&mut Dispenser) -> Result<Arc<dyn PathFilter>, DirectiveError>;

/// Registration record for a handler module.
#[derive(Clone, Copy)]
pub struct ModuleInfo {
    pub id: &'static str,
    pub directive: &'static str,
    pub factory: Factory,
}

impl std::fmt::Debug for ModuleInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleInfo")
            .field("id", &self.id)
            .field("directive", &self.directive)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("module already registered: {0}")]
    Duplicate(&'static str),

    #[error("directive '{directive}' already claimed by module {existing}")]
    DuplicateDirective {
        directive: &'static str,
        existing: &'static str,
    },
}

/// Registry info for [`PrefixGuard`].
pub fn prefix_guard_module() -> ModuleInfo {
    ModuleInfo {
        id: PREFIX_GUARD_ID,
        directive: DIRECTIVE,
        factory: build_prefix_guard,
    }
}

fn build_prefix_guard(d: &mut Dispenser) -> Result<Arc<dyn PathFilter>, DirectiveError> {
    let mut guard = PrefixGuard::default();
    guard.unmarshal(d)?;
    guard.validate();
    Ok(Arc::new(guard))
}

#[derive(Debug, Default)]
pub struct HandlerRegistry {
    modules: HashMap<&'static str, ModuleInfo>,
    directives: HashMap<&'static str, &'static str>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in handlers.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.insert(prefix_guard_module());
        registry
    }

    pub fn register(&mut self, info: ModuleInfo) -> Result<(), RegistryError> {
        if self.modules.contains_key(info.id) {
            return Err(RegistryError::Duplicate(info.id));
        }
        if let Some(existing) = self.directives.get(info.directive) {
            return Err(RegistryError::DuplicateDirective {
                directive: info.directive,
                existing: *existing,
            });
        }
        self.insert(info);
        Ok(())
    }

    fn insert(&mut self, info: ModuleInfo) {
        self.directives.insert(info.directive, info.id);
        self.modules.insert(info.id, info);
    }

    pub fn get(&self, id: &str) -> Option<&ModuleInfo> {
        self.modules.get(id)
    }

    pub fn by_directive(&self, name: &str) -> Option<&ModuleInfo> {
        self.directives.get(name).and_then(|id| self.modules.get(id))
    }

    /// Build one filter per directive line in `src`, in source order.
    pub fn parse_directive_block(
        &self,
        src: &str,
    ) -> Result<Vec<Arc<dyn PathFilter>>, DirectiveError> {
        let mut filters = Vec::new();
        for mut segment in Dispenser::new(src)?.segments() {
            let mut head = segment.clone();
            head.next();
            let info = self.by_directive(head.val()).ok_or_else(|| {
                DirectiveError::UnknownDirective {
                    name: head.val().to_string(),
                    line: head.line(),
                }
            })?;
            tracing::debug!(module = info.id, line = head.line(), "Building handler");
            filters.push((info.factory)(&mut segment)?);
        }
        Ok(filters)
    }
}
