use super::{
    AttributeBuilder, Shared, TypeParameterBuilder, TypeParameterConstraintBuilder,
    arrow_expression, build_all, build_generics, impl_attributes, impl_identity, impl_modifiers,
    parameter,
};
use crate::ast::{Body, Method, NOT_IMPLEMENTED, Parameter};
use crate::error::{Result, require, required};

#[derive(Debug)]
struct MethodState {
    return_type: String,
    name: String,
    modifiers: Vec<String>,
    attributes: Vec<AttributeBuilder>,
    type_parameters: Vec<TypeParameterBuilder>,
    constraints: Vec<TypeParameterConstraintBuilder>,
    parameters: Vec<Parameter>,
    body: Body,
}

/// A method declaration.
///
/// A new method has the placeholder body `=> throw new
/// NotImplementedException();`. `with_body`, `with_expression`, and
/// `without_body` replace one another; the last call wins.
///
/// ```
/// use sharpen_csharp::MethodBuilder;
///
/// let method = MethodBuilder::new("string", "Test")?;
/// assert_eq!(method.render(), "string Test() => throw new NotImplementedException();");
/// # Ok::<(), sharpen_csharp::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct MethodBuilder {
    state: Shared<MethodState>,
}

impl_identity!(MethodBuilder);
impl_modifiers!(MethodBuilder);
impl_attributes!(MethodBuilder);

impl MethodBuilder {
    pub fn new(return_type: &str, name: &str) -> Result<Self> {
        Ok(Self {
            state: Shared::new(MethodState {
                return_type: required(return_type, "return_type")?,
                name: required(name, "name")?,
                modifiers: Vec::new(),
                attributes: Vec::new(),
                type_parameters: Vec::new(),
                constraints: Vec::new(),
                parameters: Vec::new(),
                body: Body::Expression(NOT_IMPLEMENTED.to_string()),
            }),
        })
    }

    pub fn with_parameter(&self, ty: &str, name: &str) -> Result<Self> {
        Ok(self.push_parameter(parameter(ty, name, None, false)?))
    }

    /// A parameter with a default value; a blank default adds none.
    pub fn with_default_parameter(&self, ty: &str, name: &str, default: &str) -> Result<Self> {
        Ok(self.push_parameter(parameter(ty, name, Some(default), false)?))
    }

    /// The `this` receiver of an extension method.
    pub fn with_this_parameter(&self, ty: &str, name: &str) -> Result<Self> {
        Ok(self.push_parameter(parameter(ty, name, None, true)?))
    }

    fn push_parameter(&self, parameter: Parameter) -> Self {
        self.state.update(|s| s.parameters.push(parameter));
        self.clone()
    }

    pub fn with_type_parameter(&self, type_parameter: &TypeParameterBuilder) -> Self {
        let type_parameter = type_parameter.clone();
        self.state.update(|s| s.type_parameters.push(type_parameter));
        self.clone()
    }

    pub fn with_constraint(&self, constraint: &TypeParameterConstraintBuilder) -> Self {
        let constraint = constraint.clone();
        self.state.update(|s| s.constraints.push(constraint));
        self.clone()
    }

    pub fn with_body(&self, body: &str) -> Result<Self> {
        require(body, "body")?;
        self.state.update(|s| s.body = Body::block(body));
        Ok(self.clone())
    }

    pub fn with_expression(&self, expression: &str) -> Result<Self> {
        let body = arrow_expression(expression)?;
        self.state.update(|s| s.body = body);
        Ok(self.clone())
    }

    /// End the declaration with `;`, as in interfaces and abstract methods.
    pub fn without_body(&self) -> Self {
        self.state.update(|s| s.body = Body::Semicolon);
        self.clone()
    }

    pub fn build(&self) -> Method {
        let state = self.state.get();
        let (type_parameters, constraints) =
            build_generics(&state.type_parameters, &state.constraints);
        Method {
            return_type: state.return_type.clone(),
            name: state.name.clone(),
            modifiers: state.modifiers.clone(),
            attributes: build_all(&state.attributes, AttributeBuilder::build),
            type_parameters,
            constraints,
            parameters: state.parameters.clone(),
            body: state.body.clone(),
        }
    }

    pub fn render(&self) -> String {
        self.build().to_string()
    }
}
