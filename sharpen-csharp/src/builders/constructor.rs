use super::{
    AttributeBuilder, Shared, build_all, impl_attributes, impl_identity, impl_modifiers, parameter,
};
use crate::ast::{Constructor, ConstructorInitializer, Parameter, statement_lines};
use crate::error::{Result, require, required};

/// The `: base(...)` call of a constructor.
#[derive(Debug, Clone)]
pub struct BaseConstructorBuilder {
    state: Shared<ConstructorInitializer>,
}

impl_identity!(BaseConstructorBuilder);

impl BaseConstructorBuilder {
    pub fn new() -> Self {
        Self {
            state: Shared::new(ConstructorInitializer {
                arguments: Vec::new(),
            }),
        }
    }

    /// Append a positional argument expression.
    pub fn with_argument(&self, argument: &str) -> Result<Self> {
        let argument = required(argument, "argument")?;
        self.state.update(|s| s.arguments.push(argument));
        Ok(self.clone())
    }

    pub fn build(&self) -> ConstructorInitializer {
        self.state.get().clone()
    }

    pub fn render(&self) -> String {
        self.build().to_string()
    }
}

impl Default for BaseConstructorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
struct ConstructorState {
    name: String,
    modifiers: Vec<String>,
    attributes: Vec<AttributeBuilder>,
    parameters: Vec<Parameter>,
    base: Option<BaseConstructorBuilder>,
    body: Vec<String>,
}

/// A constructor of the type named at creation.
#[derive(Debug, Clone)]
pub struct ConstructorBuilder {
    state: Shared<ConstructorState>,
}

impl_identity!(ConstructorBuilder);
impl_modifiers!(ConstructorBuilder);
impl_attributes!(ConstructorBuilder);

impl ConstructorBuilder {
    pub fn new(type_name: &str) -> Result<Self> {
        Ok(Self {
            state: Shared::new(ConstructorState {
                name: required(type_name, "type_name")?,
                modifiers: Vec::new(),
                attributes: Vec::new(),
                parameters: Vec::new(),
                base: None,
                body: Vec::new(),
            }),
        })
    }

    pub fn with_parameter(&self, ty: &str, name: &str) -> Result<Self> {
        let parameter = parameter(ty, name, None, false)?;
        self.state.update(|s| s.parameters.push(parameter));
        Ok(self.clone())
    }

    /// A parameter with a default value; a blank default adds none.
    pub fn with_default_parameter(&self, ty: &str, name: &str, default: &str) -> Result<Self> {
        let parameter = parameter(ty, name, Some(default), false)?;
        self.state.update(|s| s.parameters.push(parameter));
        Ok(self.clone())
    }

    /// Chain to a base constructor. A later call replaces the earlier one.
    pub fn with_base(&self, base: &BaseConstructorBuilder) -> Self {
        let base = base.clone();
        self.state.update(|s| s.base = Some(base));
        self.clone()
    }

    pub fn with_body(&self, body: &str) -> Result<Self> {
        require(body, "body")?;
        let lines = statement_lines(body);
        self.state.update(|s| s.body = lines);
        Ok(self.clone())
    }

    pub fn build(&self) -> Constructor {
        let state = self.state.get();
        Constructor {
            name: state.name.clone(),
            modifiers: state.modifiers.clone(),
            attributes: build_all(&state.attributes, AttributeBuilder::build),
            parameters: state.parameters.clone(),
            initializer: state.base.as_ref().map(BaseConstructorBuilder::build),
            body: state.body.clone(),
        }
    }

    pub fn render(&self) -> String {
        self.build().to_string()
    }
}
