//! Type declarations, namespaces, and compilation units.

use serde::Serialize;

use super::{Attribute, ConstraintClause, Member, TypeParameter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TypeKind {
    Class,
    Interface,
}

impl TypeKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
        }
    }
}

/// A class or interface declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeDeclaration {
    pub kind: TypeKind,
    pub name: String,
    pub modifiers: Vec<String>,
    /// Base class; always `None` for interfaces.
    pub base_type: Option<String>,
    /// Implemented interfaces (classes) or base interfaces (interfaces).
    pub interfaces: Vec<String>,
    pub attributes: Vec<Attribute>,
    pub type_parameters: Vec<TypeParameter>,
    pub constraints: Vec<ConstraintClause>,
    /// Members grouped as constructors, fields, properties, then methods.
    pub members: Vec<Member>,
}

impl TypeDeclaration {
    /// Base class followed by interfaces.
    pub fn base_list(&self) -> Vec<&str> {
        self.base_type
            .iter()
            .chain(&self.interfaces)
            .map(String::as_str)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum NamespaceLayout {
    /// `namespace N;` followed by top-level content.
    #[default]
    FileScoped,
    /// `namespace N { ... }`.
    Enclosed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Namespace {
    pub name: String,
    pub layout: NamespaceLayout,
    pub usings: Vec<String>,
    pub attributes: Vec<Attribute>,
    pub types: Vec<TypeDeclaration>,
}

/// A whole source file.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CompilationUnit {
    pub usings: Vec<String>,
    pub namespaces: Vec<Namespace>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_list_puts_base_class_first() {
        let decl = TypeDeclaration {
            kind: TypeKind::Class,
            name: "Repo".to_string(),
            modifiers: Vec::new(),
            base_type: Some("RepoBase".to_string()),
            interfaces: vec!["IRepo".to_string(), "IDisposable".to_string()],
            attributes: Vec::new(),
            type_parameters: Vec::new(),
            constraints: Vec::new(),
            members: Vec::new(),
        };
        assert_eq!(decl.base_list(), vec!["RepoBase", "IRepo", "IDisposable"]);
    }

    #[test]
    fn test_keywords() {
        assert_eq!(TypeKind::Class.keyword(), "class");
        assert_eq!(TypeKind::Interface.keyword(), "interface");
        assert_eq!(NamespaceLayout::default(), NamespaceLayout::FileScoped);
    }
}
