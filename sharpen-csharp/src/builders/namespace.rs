use super::{
    AttributeBuilder, ClassBuilder, InterfaceBuilder, Shared, build_all, impl_attributes,
    impl_identity,
};
use crate::ast::{Namespace, NamespaceLayout, TypeDeclaration};
use crate::error::{Result, required};

#[derive(Debug)]
enum TypeBuilder {
    Class(ClassBuilder),
    Interface(InterfaceBuilder),
}

impl TypeBuilder {
    fn build(&self) -> TypeDeclaration {
        match self {
            Self::Class(class) => class.build(),
            Self::Interface(interface) => interface.build(),
        }
    }
}

#[derive(Debug)]
struct NamespaceState {
    name: String,
    layout: NamespaceLayout,
    usings: Vec<String>,
    attributes: Vec<AttributeBuilder>,
    types: Vec<TypeBuilder>,
}

/// A namespace holding classes and interfaces in the order they were added.
///
/// ```
/// use sharpen_csharp::NamespaceBuilder;
///
/// let namespace = NamespaceBuilder::file_scoped("TestNamespace")?.with_using("System")?;
/// assert_eq!(namespace.render(), "namespace TestNamespace;\nusing System;");
/// # Ok::<(), sharpen_csharp::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct NamespaceBuilder {
    state: Shared<NamespaceState>,
}

impl_identity!(NamespaceBuilder);
impl_attributes!(NamespaceBuilder);

impl NamespaceBuilder {
    pub fn new(name: &str, layout: NamespaceLayout) -> Result<Self> {
        Ok(Self {
            state: Shared::new(NamespaceState {
                name: required(name, "name")?,
                layout,
                usings: Vec::new(),
                attributes: Vec::new(),
                types: Vec::new(),
            }),
        })
    }

    /// `namespace Name;`
    pub fn file_scoped(name: &str) -> Result<Self> {
        Self::new(name, NamespaceLayout::FileScoped)
    }

    /// `namespace Name { ... }`
    pub fn enclosed(name: &str) -> Result<Self> {
        Self::new(name, NamespaceLayout::Enclosed)
    }

    pub fn with_using(&self, name: &str) -> Result<Self> {
        let name = required(name, "using")?;
        self.state.update(|s| s.usings.push(name));
        Ok(self.clone())
    }

    pub fn with_class(&self, class: &ClassBuilder) -> Self {
        self.push(TypeBuilder::Class(class.clone()))
    }

    pub fn with_interface(&self, interface: &InterfaceBuilder) -> Self {
        self.push(TypeBuilder::Interface(interface.clone()))
    }

    fn push(&self, ty: TypeBuilder) -> Self {
        self.state.update(|s| s.types.push(ty));
        self.clone()
    }

    pub fn build(&self) -> Namespace {
        let state = self.state.get();
        tracing::debug!(
            namespace = %state.name,
            usings = state.usings.len(),
            types = state.types.len(),
            "building namespace"
        );
        Namespace {
            name: state.name.clone(),
            layout: state.layout,
            usings: state.usings.clone(),
            attributes: build_all(&state.attributes, AttributeBuilder::build),
            types: build_all(&state.types, TypeBuilder::build),
        }
    }

    pub fn render(&self) -> String {
        self.build().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_scoped_with_using() {
        let namespace = NamespaceBuilder::file_scoped("TestNamespace")
            .unwrap()
            .with_using("System")
            .unwrap();
        assert_eq!(namespace.render(), "namespace TestNamespace;\nusing System;");
    }

    #[test]
    fn test_enclosed_with_using() {
        let namespace = NamespaceBuilder::enclosed("Test")
            .unwrap()
            .with_using("System")
            .unwrap();
        assert_eq!(
            namespace.render(),
            "namespace Test\n{\n    using System;\n}"
        );
    }

    #[test]
    fn test_types_in_insertion_order() {
        let interface = InterfaceBuilder::new("IShape").unwrap();
        let class = ClassBuilder::new("Circle").unwrap();
        let namespace = NamespaceBuilder::enclosed("Shapes")
            .unwrap()
            .with_interface(&interface)
            .with_class(&class);
        assert_eq!(
            namespace.render(),
            "namespace Shapes\n{\n    interface IShape\n    {\n    }\n\n    class Circle\n    {\n    }\n}"
        );
    }

    #[test]
    fn test_file_scoped_types() {
        let class = ClassBuilder::new("Circle").unwrap();
        let namespace = NamespaceBuilder::file_scoped("Shapes")
            .unwrap()
            .with_using("System")
            .unwrap()
            .with_class(&class);
        assert_eq!(
            namespace.render(),
            "namespace Shapes;\nusing System;\n\nclass Circle\n{\n}"
        );
    }

    #[test]
    fn test_layout_is_kept() {
        let namespace = NamespaceBuilder::new("A", NamespaceLayout::Enclosed).unwrap();
        assert_eq!(namespace.build().layout, NamespaceLayout::Enclosed);
        let namespace = NamespaceBuilder::file_scoped("A").unwrap();
        assert_eq!(namespace.build().layout, NamespaceLayout::FileScoped);
    }

    #[test]
    fn test_rejects_blank_names() {
        assert_eq!(
            NamespaceBuilder::file_scoped("").unwrap_err().argument(),
            "name"
        );
        assert_eq!(
            NamespaceBuilder::enclosed("A")
                .unwrap()
                .with_using(" ")
                .unwrap_err()
                .argument(),
            "using"
        );
    }

    #[test]
    fn test_attribute_line_above_file_scoped_namespace() {
        let attribute = AttributeBuilder::new("A").unwrap();
        let namespace = NamespaceBuilder::file_scoped("N")
            .unwrap()
            .with_attribute(&attribute);
        assert_eq!(namespace.render(), "[A]\nnamespace N;");
    }

    #[test]
    fn test_attribute_line_above_enclosed_namespace() {
        let attribute = AttributeBuilder::new("A").unwrap();
        let namespace = NamespaceBuilder::enclosed("N")
            .unwrap()
            .with_attribute(&attribute)
            .with_using("System")
            .unwrap();
        assert_eq!(
            namespace.render(),
            "[A]\nnamespace N\n{\n    using System;\n}"
        );
    }
}
