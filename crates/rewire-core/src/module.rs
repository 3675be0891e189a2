//! Virtual module declarations.
//!
//! A virtual module is an id mapped to a content source: either literal
//! source text, or an async producer invoked at configuration time. The
//! declaration set is ordered — declaration order drives write order and
//! the order of installed alias entries.

use std::fmt;
use std::future::Future;
use std::path::PathBuf;

use futures::future::BoxFuture;

use crate::error::BoxError;

/// Output of resolving a module's content. `Ok(None)` skips the module
/// without error.
pub type ProducerOutput = Result<Option<String>, BoxError>;

/// Boxed async function producing a module's content.
pub type ProducerFn = Box<dyn Fn(ResolveContext) -> BoxFuture<'static, ProducerOutput> + Send + Sync>;

/// Context handed to producer functions at configuration time.
#[derive(Debug, Clone)]
pub struct ResolveContext {
    /// Absolute cache directory the module will be written into.
    pub cache_dir: PathBuf,
}

/// Source of a virtual module's content.
pub enum ModuleSource {
    /// Fixed source text.
    Literal(String),
    /// Async producer invoked once per configuration pass.
    Producer(ProducerFn),
}

impl ModuleSource {
    /// Create a literal source.
    pub fn literal(code: impl Into<String>) -> Self {
        Self::Literal(code.into())
    }

    /// Create a producer source from an async function.
    pub fn producer<F, Fut>(produce: F) -> Self
    where
        F: Fn(ResolveContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ProducerOutput> + Send + 'static,
    {
        Self::Producer(Box::new(move |ctx| Box::pin(produce(ctx))))
    }

    /// Resolve this source to its content.
    ///
    /// # Errors
    /// Propagates producer failures unmodified.
    pub async fn resolve(&self, ctx: ResolveContext) -> ProducerOutput {
        match self {
            Self::Literal(code) => Ok(Some(code.clone())),
            Self::Producer(produce) => produce(ctx).await,
        }
    }
}

impl fmt::Debug for ModuleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(code) => f.debug_tuple("Literal").field(code).finish(),
            Self::Producer(_) => f.write_str("Producer(..)"),
        }
    }
}

/// Declared virtual modules, in declaration order.
#[derive(Debug, Default)]
pub struct VirtualModules {
    entries: Vec<(String, ModuleSource)>,
}

impl VirtualModules {
    /// Create an empty declaration set.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Declare a module.
    ///
    /// Redeclaring an id replaces its source but keeps the original
    /// declaration position.
    pub fn insert(&mut self, id: impl Into<String>, source: ModuleSource) {
        let id = id.into();
        match self.entries.iter().position(|(existing, _)| *existing == id) {
            Some(index) => self.entries[index].1 = source,
            None => self.entries.push((id, source)),
        }
    }

    /// Iterate declarations in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ModuleSource)> {
        self.entries.iter().map(|(id, source)| (id.as_str(), source))
    }

    /// Declared module ids, in order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    /// Number of declared modules.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no modules are declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
