//! Fluent builders for every node kind.
//!
//! A builder is a cheap handle over shared state: cloning it, or getting it
//! back from a setter, yields another handle to the same instance. Parents
//! keep handles to their children and build them again on every `build`, so
//! a child changed after it was attached shows up in the next render.

mod accessor;
mod attribute;
mod class;
mod compilation_unit;
mod constructor;
mod field;
mod generics;
mod interface;
mod method;
mod namespace;
mod property;

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

pub use accessor::AccessorBuilder;
pub use attribute::AttributeBuilder;
pub use class::ClassBuilder;
pub use compilation_unit::CompilationUnitBuilder;
pub use constructor::{BaseConstructorBuilder, ConstructorBuilder};
pub use field::FieldBuilder;
pub use generics::{TypeParameterBuilder, TypeParameterConstraintBuilder};
pub use interface::InterfaceBuilder;
pub use method::MethodBuilder;
pub use namespace::NamespaceBuilder;
pub use property::PropertyBuilder;

use crate::ast::{Body, ConstraintClause, Parameter, TypeParameter};
use crate::error::{Result, require, required};

/// Interior state shared by all handles of one builder.
pub(crate) struct Shared<S>(Rc<RefCell<S>>);

impl<S> Shared<S> {
    pub(crate) fn new(state: S) -> Self {
        Self(Rc::new(RefCell::new(state)))
    }

    pub(crate) fn get(&self) -> Ref<'_, S> {
        self.0.borrow()
    }

    pub(crate) fn update(&self, f: impl FnOnce(&mut S)) {
        f(&mut self.0.borrow_mut());
    }

    pub(crate) fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<S> Clone for Shared<S> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<S: fmt::Debug> fmt::Debug for Shared<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.borrow().fmt(f)
    }
}

/// `ptr_eq` for a builder whose state lives in `self.state`.
macro_rules! impl_identity {
    ($builder:ty) => {
        impl $builder {
            /// Whether both handles refer to the same builder.
            pub fn ptr_eq(&self, other: &Self) -> bool {
                self.state.ptr_eq(&other.state)
            }
        }
    };
}

/// `with_modifier` / `with_modifiers` for a state with a `modifiers` list.
macro_rules! impl_modifiers {
    ($builder:ty) => {
        impl $builder {
            /// Append one modifier token, e.g. `public`.
            pub fn with_modifier(&self, modifier: &str) -> $crate::Result<Self> {
                let modifier = $crate::error::required(modifier, "modifier")?;
                self.state.update(|s| s.modifiers.push(modifier));
                Ok(self.clone())
            }

            /// Append every whitespace-separated token of `modifiers`.
            pub fn with_modifiers(&self, modifiers: &str) -> $crate::Result<Self> {
                let tokens = $crate::builders::modifier_tokens(modifiers)?;
                self.state.update(|s| s.modifiers.extend(tokens));
                Ok(self.clone())
            }
        }
    };
}

/// `with_attribute` for a state with an `attributes` list of builders.
macro_rules! impl_attributes {
    ($builder:ty) => {
        impl $builder {
            pub fn with_attribute(&self, attribute: &$crate::builders::AttributeBuilder) -> Self {
                let attribute = attribute.clone();
                self.state.update(|s| s.attributes.push(attribute));
                self.clone()
            }
        }
    };
}

pub(crate) use {impl_attributes, impl_identity, impl_modifiers};

pub(crate) fn modifier_tokens(modifiers: &str) -> Result<Vec<String>> {
    require(modifiers, "modifiers")?;
    Ok(modifiers.split_whitespace().map(str::to_string).collect())
}

/// A validated parameter. A blank default means no default.
pub(crate) fn parameter(
    ty: &str,
    name: &str,
    default: Option<&str>,
    is_this: bool,
) -> Result<Parameter> {
    Ok(Parameter {
        ty: required(ty, "parameter_type")?,
        name: required(name, "parameter_name")?,
        default: default
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string),
        is_this,
    })
}

/// An arrow body whose expression is still non-blank once normalized.
pub(crate) fn arrow_expression(text: &str) -> Result<Body> {
    require(text, "expression")?;
    let body = Body::expression(text);
    if let Body::Expression(expression) = &body {
        require(expression, "expression")?;
    }
    Ok(body)
}

pub(crate) fn build_all<B, N>(builders: &[B], build: impl Fn(&B) -> N) -> Vec<N> {
    builders.iter().map(build).collect()
}

/// Type parameters and their constraint clauses, dropping the clauses when
/// nothing is generic.
pub(crate) fn build_generics(
    type_parameters: &[TypeParameterBuilder],
    constraints: &[TypeParameterConstraintBuilder],
) -> (Vec<TypeParameter>, Vec<ConstraintClause>) {
    let type_parameters = build_all(type_parameters, TypeParameterBuilder::build);
    let constraints = if type_parameters.is_empty() {
        Vec::new()
    } else {
        build_all(constraints, TypeParameterConstraintBuilder::build)
    };
    (type_parameters, constraints)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, InvalidReason};

    #[test]
    fn test_modifier_tokens() {
        assert_eq!(
            modifier_tokens("public  static\treadonly").unwrap(),
            vec!["public", "static", "readonly"]
        );
        assert_eq!(
            modifier_tokens("   ").unwrap_err(),
            Error::InvalidArgument {
                argument: "modifiers",
                reason: InvalidReason::Whitespace,
            }
        );
    }

    #[test]
    fn test_parameter_blank_default_is_none() {
        let p = parameter("string", "name", Some("  "), false).unwrap();
        assert_eq!(p.default, None);

        let p = parameter("string", "name", Some("null"), false).unwrap();
        assert_eq!(p.default.as_deref(), Some("null"));
    }

    #[test]
    fn test_arrow_expression_rejects_bare_semicolons() {
        assert_eq!(
            arrow_expression(";").unwrap_err(),
            Error::InvalidArgument {
                argument: "expression",
                reason: InvalidReason::Empty,
            }
        );
        assert_eq!(
            arrow_expression(" ;; ").unwrap_err().argument(),
            "expression"
        );
        assert_eq!(
            arrow_expression("  ").unwrap_err(),
            Error::InvalidArgument {
                argument: "expression",
                reason: InvalidReason::Whitespace,
            }
        );
        assert_eq!(
            arrow_expression(" x; ").unwrap(),
            Body::Expression("x".to_string())
        );
    }

    #[test]
    fn test_parameter_validates_names() {
        let err = parameter("", "name", None, false).unwrap_err();
        assert_eq!(err.argument(), "parameter_type");
        let err = parameter("int", " ", None, false).unwrap_err();
        assert_eq!(err.argument(), "parameter_name");
    }

    #[test]
    fn test_shared_handles_alias() {
        let a = Shared::new(Vec::<i32>::new());
        let b = a.clone();
        b.update(|v| v.push(1));
        assert_eq!(*a.get(), vec![1]);
        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&Shared::new(Vec::new())));
    }
}
