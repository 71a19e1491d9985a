use super::{
    AttributeBuilder, ConstructorBuilder, FieldBuilder, MethodBuilder, PropertyBuilder, Shared,
    TypeParameterBuilder, TypeParameterConstraintBuilder, build_all, build_generics,
    impl_attributes, impl_identity, impl_modifiers,
};
use crate::ast::{Member, TypeDeclaration, TypeKind};
use crate::error::{Result, required};

#[derive(Debug)]
struct ClassState {
    name: String,
    modifiers: Vec<String>,
    base_class: Option<String>,
    interfaces: Vec<String>,
    attributes: Vec<AttributeBuilder>,
    type_parameters: Vec<TypeParameterBuilder>,
    constraints: Vec<TypeParameterConstraintBuilder>,
    constructors: Vec<ConstructorBuilder>,
    fields: Vec<FieldBuilder>,
    properties: Vec<PropertyBuilder>,
    methods: Vec<MethodBuilder>,
}

/// A class declaration.
///
/// Members are laid out by kind: constructors, fields, properties, then
/// methods, each kind in the order it was added.
///
/// ```
/// use sharpen_csharp::{ClassBuilder, FieldBuilder};
///
/// let class = ClassBuilder::new("Point")?
///     .with_modifiers("public sealed")?
///     .with_field(&FieldBuilder::new("int", "X")?.with_modifier("public")?);
/// assert_eq!(class.render(), "public sealed class Point\n{\n    public int X;\n}");
/// # Ok::<(), sharpen_csharp::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ClassBuilder {
    state: Shared<ClassState>,
}

impl_identity!(ClassBuilder);
impl_modifiers!(ClassBuilder);
impl_attributes!(ClassBuilder);

impl ClassBuilder {
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self {
            state: Shared::new(ClassState {
                name: required(name, "name")?,
                modifiers: Vec::new(),
                base_class: None,
                interfaces: Vec::new(),
                attributes: Vec::new(),
                type_parameters: Vec::new(),
                constraints: Vec::new(),
                constructors: Vec::new(),
                fields: Vec::new(),
                properties: Vec::new(),
                methods: Vec::new(),
            }),
        })
    }

    /// Set the base class.
    ///
    /// A class has at most one base class, so a later call replaces the
    /// earlier one instead of adding a second entry to the base list. Use
    /// [`with_implemented_interface`](Self::with_implemented_interface) for
    /// every further base type.
    pub fn with_base_class(&self, name: &str) -> Result<Self> {
        let name = required(name, "base_class")?;
        self.state.update(|s| s.base_class = Some(name));
        Ok(self.clone())
    }

    pub fn with_implemented_interface(&self, name: &str) -> Result<Self> {
        let name = required(name, "interface")?;
        self.state.update(|s| s.interfaces.push(name));
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

    pub fn with_constructor(&self, constructor: &ConstructorBuilder) -> Self {
        let constructor = constructor.clone();
        self.state.update(|s| s.constructors.push(constructor));
        self.clone()
    }

    pub fn with_field(&self, field: &FieldBuilder) -> Self {
        let field = field.clone();
        self.state.update(|s| s.fields.push(field));
        self.clone()
    }

    pub fn with_property(&self, property: &PropertyBuilder) -> Self {
        let property = property.clone();
        self.state.update(|s| s.properties.push(property));
        self.clone()
    }

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
            .constructors
            .iter()
            .map(|c| Member::Constructor(c.build()))
            .chain(state.fields.iter().map(|f| Member::Field(f.build())))
            .chain(state.properties.iter().map(|p| Member::Property(p.build())))
            .chain(state.methods.iter().map(|m| Member::Method(m.build())))
            .collect();

        TypeDeclaration {
            kind: TypeKind::Class,
            name: state.name.clone(),
            modifiers: state.modifiers.clone(),
            base_type: state.base_class.clone(),
            interfaces: state.interfaces.clone(),
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
