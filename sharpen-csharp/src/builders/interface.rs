use super::{
    AttributeBuilder, MethodBuilder, PropertyBuilder, Shared, TypeParameterBuilder,
    TypeParameterConstraintBuilder, build_all, build_generics, impl_attributes, impl_identity,
    impl_modifiers,
};
use crate::ast::{Member, TypeDeclaration, TypeKind};
use crate::error::{Result, required};

#[derive(Debug)]
struct InterfaceState {
    name: String,
    modifiers: Vec<String>,
    base_interfaces: Vec<String>,
    attributes: Vec<AttributeBuilder>,
    type_parameters: Vec<TypeParameterBuilder>,
    constraints: Vec<TypeParameterConstraintBuilder>,
    properties: Vec<PropertyBuilder>,
    methods: Vec<MethodBuilder>,
}

/// An interface declaration: properties first, then methods.
#[derive(Debug, Clone)]
pub struct InterfaceBuilder {
    state: Shared<InterfaceState>,
}

impl_identity!(InterfaceBuilder);
impl_modifiers!(InterfaceBuilder);
impl_attributes!(InterfaceBuilder);

impl InterfaceBuilder {
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self {
            state: Shared::new(InterfaceState {
                name: required(name, "name")?,
                modifiers: Vec::new(),
                base_interfaces: Vec::new(),
                attributes: Vec::new(),
                type_parameters: Vec::new(),
                constraints: Vec::new(),
                properties: Vec::new(),
                methods: Vec::new(),
            }),
        })
    }

    pub fn with_base_interface(&self, name: &str) -> Result<Self> {
        let name = required(name, "base_interface")?;
        self.state.update(|s| s.base_interfaces.push(name));
        Ok(self.clone())
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

    pub fn with_property(&self, property: &PropertyBuilder) -> Self {
        let property = property.clone();
        self.state.update(|s| s.properties.push(property));
        self.clone()
    }

    /// Add a method. Methods keep whatever body they were given; call
    /// `without_body` on the method for a plain signature.
    pub fn with_method(&self, method: &MethodBuilder) -> Self {
        let method = method.clone();
        self.state.update(|s| s.methods.push(method));
        self.clone()
    }

    pub fn build(&self) -> TypeDeclaration {
        let state = self.state.get();
        let (type_parameters, constraints) =
            build_generics(&state.type_parameters, &state.constraints);

        let members = state
            .properties
            .iter()
            .map(|p| Member::Property(p.build()))
            .chain(state.methods.iter().map(|m| Member::Method(m.build())))
            .collect();

        TypeDeclaration {
            kind: TypeKind::Interface,
            name: state.name.clone(),
            modifiers: state.modifiers.clone(),
            base_type: None,
            interfaces: state.base_interfaces.clone(),
            attributes: build_all(&state.attributes, AttributeBuilder::build),
            type_parameters,
            constraints,
            members,
        }
    }

    pub fn render(&self) -> String {
        self.build().to_string()
    }
}
