use super::{Shared, impl_identity};
use crate::ast::{Attribute, AttributeArgument};
use crate::error::{Result, required};
use crate::literal::AttributeValue;

#[derive(Debug)]
struct AttributeState {
    name: String,
    arguments: Vec<AttributeArgument>,
}

/// Builds an [`Attribute`] such as `Obsolete("use Bar", DiagnosticId = "X1")`.
///
/// ```
/// use sharpen_csharp::AttributeBuilder;
///
/// let attribute = AttributeBuilder::new("SomeAttribute")?
///     .with_named_argument("SomeProperty", "SomeString")?;
/// assert_eq!(attribute.render(), r#"SomeAttribute(SomeProperty = "SomeString")"#);
/// # Ok::<(), sharpen_csharp::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct AttributeBuilder {
    state: Shared<AttributeState>,
}

impl_identity!(AttributeBuilder);

impl AttributeBuilder {
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self {
            state: Shared::new(AttributeState {
                name: required(name, "name")?,
                arguments: Vec::new(),
            }),
        })
    }

    /// Add a positional argument.
    pub fn with_argument(&self, value: impl Into<AttributeValue>) -> Result<Self> {
        let value = value.into();
        value.validate()?;
        self.push(AttributeArgument::positional(value));
        Ok(self.clone())
    }

    /// Add a `Property = value` argument.
    pub fn with_named_argument(
        &self,
        property: &str,
        value: impl Into<AttributeValue>,
    ) -> Result<Self> {
        let property = required(property, "property")?;
        let value = value.into();
        value.validate()?;
        self.push(AttributeArgument::named(property, value));
        Ok(self.clone())
    }

    pub fn with_null_argument(&self) -> Self {
        self.push(AttributeArgument::positional(AttributeValue::Null));
        self.clone()
    }

    pub fn with_named_null_argument(&self, property: &str) -> Result<Self> {
        let property = required(property, "property")?;
        self.push(AttributeArgument::named(property, AttributeValue::Null));
        Ok(self.clone())
    }

    fn push(&self, argument: AttributeArgument) {
        self.state.update(|s| s.arguments.push(argument));
    }

    pub fn build(&self) -> Attribute {
        let state = self.state.get();
        Attribute {
            name: state.name.clone(),
            arguments: state.arguments.clone(),
        }
    }

    pub fn render(&self) -> String {
        self.build().to_string()
    }
}
