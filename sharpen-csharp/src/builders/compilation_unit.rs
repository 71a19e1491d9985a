use super::{NamespaceBuilder, Shared, build_all, impl_identity};
use crate::ast::CompilationUnit;
use crate::error::{Result, required};

#[derive(Debug, Default)]
struct CompilationUnitState {
    usings: Vec<String>,
    namespaces: Vec<NamespaceBuilder>,
}

/// The root of a generated source file.
///
/// ```
/// use sharpen_csharp::{ClassBuilder, CompilationUnitBuilder, NamespaceBuilder};
///
/// let namespace = NamespaceBuilder::file_scoped("Demo")?
///     .with_class(&ClassBuilder::new("Empty")?);
/// let unit = CompilationUnitBuilder::new()
///     .with_using("System")?
///     .with_namespace(&namespace);
/// assert_eq!(
///     unit.render(),
///     "using System;\n\nnamespace Demo;\n\nclass Empty\n{\n}"
/// );
/// # Ok::<(), sharpen_csharp::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct CompilationUnitBuilder {
    state: Shared<CompilationUnitState>,
}

impl_identity!(CompilationUnitBuilder);

impl CompilationUnitBuilder {
    pub fn new() -> Self {
        Self {
            state: Shared::new(CompilationUnitState::default()),
        }
    }

    pub fn with_using(&self, name: &str) -> Result<Self> {
        let name = required(name, "using")?;
        self.state.update(|s| s.usings.push(name));
        Ok(self.clone())
    }

    pub fn with_namespace(&self, namespace: &NamespaceBuilder) -> Self {
        let namespace = namespace.clone();
        self.state.update(|s| s.namespaces.push(namespace));
        self.clone()
    }

    pub fn build(&self) -> CompilationUnit {
        let state = self.state.get();
        tracing::debug!(
            usings = state.usings.len(),
            namespaces = state.namespaces.len(),
            "building compilation unit"
        );
        CompilationUnit {
            usings: state.usings.clone(),
            namespaces: build_all(&state.namespaces, NamespaceBuilder::build),
        }
    }

    pub fn render(&self) -> String {
        self.build().to_string()
    }
}

impl Default for CompilationUnitBuilder {
    fn default() -> Self {
        Self::new()
    }
}
