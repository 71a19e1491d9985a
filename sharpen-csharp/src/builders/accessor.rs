use super::{Shared, arrow_expression, impl_identity, impl_modifiers};
use crate::ast::{Accessor, AccessorKind, Body};
use crate::error::{Result, require};

#[derive(Debug)]
struct AccessorState {
    kind: AccessorKind,
    modifiers: Vec<String>,
    body: Body,
}

/// A `get`, `set`, or `init` accessor of a property.
///
/// Without a body the accessor is auto-implemented (`get;`). `with_body` and
/// `with_arrow_expression` replace each other; the last call wins.
#[derive(Debug, Clone)]
pub struct AccessorBuilder {
    state: Shared<AccessorState>,
}

impl_identity!(AccessorBuilder);
impl_modifiers!(AccessorBuilder);

impl AccessorBuilder {
    pub fn new(kind: AccessorKind) -> Self {
        Self {
            state: Shared::new(AccessorState {
                kind,
                modifiers: Vec::new(),
                body: Body::Semicolon,
            }),
        }
    }

    pub fn getter() -> Self {
        Self::new(AccessorKind::Get)
    }

    pub fn setter() -> Self {
        Self::new(AccessorKind::Set)
    }

    pub fn init() -> Self {
        Self::new(AccessorKind::Init)
    }

    /// Statement lines for a block body.
    pub fn with_body(&self, body: &str) -> Result<Self> {
        require(body, "body")?;
        self.state.update(|s| s.body = Body::block(body));
        Ok(self.clone())
    }

    pub fn with_arrow_expression(&self, expression: &str) -> Result<Self> {
        let body = arrow_expression(expression)?;
        self.state.update(|s| s.body = body);
        Ok(self.clone())
    }

    pub fn build(&self) -> Accessor {
        let state = self.state.get();
        Accessor {
            kind: state.kind,
            modifiers: state.modifiers.clone(),
            body: state.body.clone(),
        }
    }

    pub fn render(&self) -> String {
        self.build().to_string()
    }
}
