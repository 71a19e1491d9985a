use super::{AttributeBuilder, Shared, build_all, impl_attributes, impl_identity, impl_modifiers};
use crate::ast::Field;
use crate::error::{Result, require, required};

#[derive(Debug)]
struct FieldState {
    ty: String,
    name: String,
    modifiers: Vec<String>,
    initializer: Option<String>,
    attributes: Vec<AttributeBuilder>,
}

#[derive(Debug, Clone)]
pub struct FieldBuilder {
    state: Shared<FieldState>,
}

impl_identity!(FieldBuilder);
impl_modifiers!(FieldBuilder);
impl_attributes!(FieldBuilder);

impl FieldBuilder {
    pub fn new(ty: &str, name: &str) -> Result<Self> {
        Ok(Self {
            state: Shared::new(FieldState {
                ty: required(ty, "type_name")?,
                name: required(name, "name")?,
                modifiers: Vec::new(),
                initializer: None,
                attributes: Vec::new(),
            }),
        })
    }

    /// Initial value expression, written as `= expression`.
    pub fn with_initializer(&self, expression: &str) -> Result<Self> {
        require(expression, "initializer")?;
        let expression = expression.trim().to_string();
        self.state.update(|s| s.initializer = Some(expression));
        Ok(self.clone())
    }

    pub fn build(&self) -> Field {
        let state = self.state.get();
        Field {
            ty: state.ty.clone(),
            name: state.name.clone(),
            modifiers: state.modifiers.clone(),
            initializer: state.initializer.clone(),
            attributes: build_all(&state.attributes, AttributeBuilder::build),
        }
    }

    pub fn render(&self) -> String {
        self.build().to_string()
    }
}
