use sharpen_codegen::{CodeFragment, Renderable};

use super::inline::{type_parameter_list, where_clauses};
use super::{attribute_list, modifier_prefix, separated, using_lines};
use crate::ast::{CompilationUnit, Namespace, NamespaceLayout, TypeDeclaration};

impl TypeDeclaration {
    fn header(&self) -> String {
        let mut header = format!(
            "{}{} {}{}",
            modifier_prefix(&self.modifiers),
            self.kind.keyword(),
            self.name,
            type_parameter_list(&self.type_parameters),
        );
        let bases = self.base_list();
        if !bases.is_empty() {
            header.push_str(" : ");
            header.push_str(&bases.join(", "));
        }
        header.push_str(&where_clauses(&self.constraints));
        header
    }
}

impl Renderable for TypeDeclaration {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let members = separated(self.members.iter().map(Renderable::to_fragments));
        attribute_list(&self.attributes)
            .into_iter()
            .chain([
                CodeFragment::line(self.header()),
                CodeFragment::braced(members),
            ])
            .collect()
    }
}

/// Usings, a blank line when both are present, then the declarations.
fn usings_then(usings: &[String], items: Vec<CodeFragment>) -> Vec<CodeFragment> {
    let mut out: Vec<_> = using_lines(usings).collect();
    if !out.is_empty() && !items.is_empty() {
        out.push(CodeFragment::blank());
    }
    out.extend(items);
    out
}

impl Renderable for Namespace {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let types = separated(self.types.iter().map(Renderable::to_fragments));
        let mut out: Vec<_> = attribute_list(&self.attributes).into_iter().collect();

        match self.layout {
            NamespaceLayout::Enclosed => {
                out.push(CodeFragment::line(format!("namespace {}", self.name)));
                out.push(CodeFragment::braced(usings_then(&self.usings, types)));
            }
            NamespaceLayout::FileScoped => {
                out.push(CodeFragment::line(format!("namespace {};", self.name)));
                out.extend(using_lines(&self.usings));
                if !types.is_empty() {
                    out.push(CodeFragment::blank());
                    out.extend(types);
                }
            }
        }
        out
    }
}

impl Renderable for CompilationUnit {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let namespaces = separated(self.namespaces.iter().map(Renderable::to_fragments));
        usings_then(&self.usings, namespaces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{
        Attribute, Constraint, ConstraintClause, Field, Member, TypeKind, TypeParameter,
    };

    fn class(name: &str) -> TypeDeclaration {
        TypeDeclaration {
            kind: TypeKind::Class,
            name: name.to_string(),
            modifiers: Vec::new(),
            base_type: None,
            interfaces: Vec::new(),
            attributes: Vec::new(),
            type_parameters: Vec::new(),
            constraints: Vec::new(),
            members: Vec::new(),
        }
    }

    fn field(name: &str) -> Member {
        Member::Field(Field {
            ty: "int".to_string(),
            name: name.to_string(),
            modifiers: Vec::new(),
            initializer: None,
            attributes: Vec::new(),
        })
    }

    fn namespace(layout: NamespaceLayout) -> Namespace {
        Namespace {
            name: "Test".to_string(),
            layout,
            usings: Vec::new(),
            attributes: Vec::new(),
            types: Vec::new(),
        }
    }

    #[test]
    fn test_empty_class() {
        let mut decl = class("Test");
        decl.modifiers = vec!["public".to_string()];
        assert_eq!(decl.to_string(), "public class Test\n{\n}");
    }

    #[test]
    fn test_generic_class_header() {
        let mut decl = class("Repository");
        decl.base_type = Some("RepositoryBase<T>".to_string());
        decl.interfaces = vec!["IRepository<T>".to_string()];
        decl.type_parameters = vec![TypeParameter {
            name: "T".to_string(),
        }];
        decl.constraints = vec![ConstraintClause {
            type_parameter: "T".to_string(),
            constraints: vec![Constraint::Class, Constraint::New],
        }];
        assert_eq!(
            decl.to_string(),
            "class Repository<T> : RepositoryBase<T>, IRepository<T> where T : class, new()\n{\n}"
        );
    }

    #[test]
    fn test_interface_with_attribute() {
        let mut decl = class("ITest");
        decl.kind = TypeKind::Interface;
        decl.attributes = vec![Attribute {
            name: "ServiceContract".to_string(),
            arguments: Vec::new(),
        }];
        assert_eq!(decl.to_string(), "[ServiceContract]\ninterface ITest\n{\n}");
    }

    #[test]
    fn test_members_indented() {
        let mut decl = class("Point");
        decl.members = vec![field("x"), field("y")];
        assert_eq!(decl.to_string(), "class Point\n{\n    int x;\n    int y;\n}");
    }

    #[test]
    fn test_enclosed_namespace_usings_only() {
        let mut ns = namespace(NamespaceLayout::Enclosed);
        ns.usings = vec!["System".to_string()];
        assert_eq!(ns.to_string(), "namespace Test\n{\n    using System;\n}");
    }

    #[test]
    fn test_file_scoped_namespace() {
        let mut ns = namespace(NamespaceLayout::FileScoped);
        ns.usings = vec!["System".to_string()];
        assert_eq!(ns.to_string(), "namespace Test;\nusing System;");

        ns.types = vec![class("A"), class("B")];
        assert_eq!(
            ns.to_string(),
            "namespace Test;\nusing System;\n\nclass A\n{\n}\n\nclass B\n{\n}"
        );
    }

    #[test]
    fn test_file_scoped_namespace_without_usings() {
        let mut ns = namespace(NamespaceLayout::FileScoped);
        ns.types = vec![class("A")];
        assert_eq!(ns.to_string(), "namespace Test;\n\nclass A\n{\n}");
    }

    #[test]
    fn test_compilation_unit() {
        let unit = CompilationUnit {
            usings: vec!["System.Windows".to_string()],
            namespaces: Vec::new(),
        };
        assert_eq!(unit.to_string(), "using System.Windows;");

        let unit = CompilationUnit {
            usings: vec!["System".to_string()],
            namespaces: vec![namespace(NamespaceLayout::Enclosed)],
        };
        assert_eq!(unit.to_string(), "using System;\n\nnamespace Test\n{\n}");
    }
}
