use super::{
    AccessorBuilder, AttributeBuilder, Shared, build_all, impl_attributes, impl_identity,
    impl_modifiers,
};
use crate::ast::Property;
use crate::error::{Result, required};

#[derive(Debug)]
struct PropertyState {
    ty: String,
    name: String,
    modifiers: Vec<String>,
    attributes: Vec<AttributeBuilder>,
    accessors: Vec<AccessorBuilder>,
}

/// A property with an ordered list of accessors.
///
/// ```
/// use sharpen_csharp::{AccessorBuilder, PropertyBuilder};
///
/// let property = PropertyBuilder::new("string", "Name")?
///     .with_modifier("public")?
///     .with_accessor(&AccessorBuilder::getter())
///     .with_accessor(&AccessorBuilder::init());
/// assert_eq!(property.render(), "public string Name { get; init; }");
/// # Ok::<(), sharpen_csharp::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct PropertyBuilder {
    state: Shared<PropertyState>,
}

impl_identity!(PropertyBuilder);
impl_modifiers!(PropertyBuilder);
impl_attributes!(PropertyBuilder);

impl PropertyBuilder {
    pub fn new(ty: &str, name: &str) -> Result<Self> {
        Ok(Self {
            state: Shared::new(PropertyState {
                ty: required(ty, "type_name")?,
                name: required(name, "name")?,
                modifiers: Vec::new(),
                attributes: Vec::new(),
                accessors: Vec::new(),
            }),
        })
    }

    pub fn with_accessor(&self, accessor: &AccessorBuilder) -> Self {
        let accessor = accessor.clone();
        self.state.update(|s| s.accessors.push(accessor));
        self.clone()
    }

    pub fn build(&self) -> Property {
        let state = self.state.get();
        Property {
            ty: state.ty.clone(),
            name: state.name.clone(),
            modifiers: state.modifiers.clone(),
            attributes: build_all(&state.attributes, AttributeBuilder::build),
            accessors: build_all(&state.accessors, AccessorBuilder::build),
        }
    }

    pub fn render(&self) -> String {
        self.build().to_string()
    }
}
