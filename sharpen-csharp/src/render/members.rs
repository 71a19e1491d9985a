use sharpen_codegen::{CodeFragment, Renderable};

use super::inline::{comma_separated, type_parameter_list, where_clauses};
use super::{attribute_list, block, modifier_prefix, separated};
use crate::ast::{Accessor, Attribute, Body, Constructor, Field, Member, Method, Property};

/// A declaration header followed by its body in one of the three forms.
fn with_body(header: String, body: &Body) -> Vec<CodeFragment> {
    match body {
        Body::Semicolon => vec![CodeFragment::line(format!("{header};"))],
        Body::Expression(expression) => {
            vec![CodeFragment::line(format!("{header} => {expression};"))]
        }
        Body::Block(lines) => vec![CodeFragment::line(header), block(lines)],
    }
}

/// Attribute line (if any) followed by the declaration itself.
fn attributed(attributes: &[Attribute], rest: Vec<CodeFragment>) -> Vec<CodeFragment> {
    attribute_list(attributes).into_iter().chain(rest).collect()
}

impl Accessor {
    fn header(&self) -> String {
        format!("{}{}", modifier_prefix(&self.modifiers), self.kind.keyword())
    }

    /// The accessor as it appears inside a one-line property.
    fn inline(&self) -> String {
        match &self.body {
            Body::Expression(expression) => format!("{} => {expression};", self.header()),
            Body::Semicolon | Body::Block(_) => format!("{};", self.header()),
        }
    }
}

impl Renderable for Accessor {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        with_body(self.header(), &self.body)
    }
}

impl Renderable for Field {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut line = format!("{}{} {}", modifier_prefix(&self.modifiers), self.ty, self.name);
        if let Some(initializer) = &self.initializer {
            line.push_str(" = ");
            line.push_str(initializer);
        }
        line.push(';');
        attributed(&self.attributes, vec![CodeFragment::line(line)])
    }
}

impl Renderable for Property {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let header = format!("{}{} {}", modifier_prefix(&self.modifiers), self.ty, self.name);

        let declaration = if self.is_single_line() {
            let accessors: String = self
                .accessors
                .iter()
                .map(|accessor| format!(" {}", accessor.inline()))
                .collect();
            vec![CodeFragment::line(format!("{header} {{{accessors} }}"))]
        } else {
            let accessors = separated(self.accessors.iter().map(Renderable::to_fragments));
            vec![CodeFragment::line(header), CodeFragment::braced(accessors)]
        };

        attributed(&self.attributes, declaration)
    }
}

impl Renderable for Method {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let signature = format!(
            "{}{} {}{}({}){}",
            modifier_prefix(&self.modifiers),
            self.return_type,
            self.name,
            type_parameter_list(&self.type_parameters),
            comma_separated(&self.parameters),
            where_clauses(&self.constraints),
        );
        attributed(&self.attributes, with_body(signature, &self.body))
    }
}

impl Renderable for Constructor {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut header = format!(
            "{}{}({})",
            modifier_prefix(&self.modifiers),
            self.name,
            comma_separated(&self.parameters),
        );
        if let Some(initializer) = &self.initializer {
            header.push(' ');
            header.push_str(&initializer.to_string());
        }
        attributed(
            &self.attributes,
            vec![CodeFragment::line(header), block(&self.body)],
        )
    }
}

impl Renderable for Member {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self {
            Self::Constructor(constructor) => constructor.to_fragments(),
            Self::Field(field) => field.to_fragments(),
            Self::Property(property) => property.to_fragments(),
            Self::Method(method) => method.to_fragments(),
        }
    }
}
