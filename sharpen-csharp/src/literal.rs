//! Literal encoding for attribute arguments.
//!
//! [`AttributeValue`] carries the *kind* of a value so that the literal can be
//! written with the suffix and quoting C# expects for that kind.

use std::fmt;

use serde::Serialize;

use crate::error::{Result, require};

/// A typed attribute argument value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum AttributeValue {
    String(String),
    Char(char),
    Bool(bool),
    Null,
    /// `int`
    Int(i32),
    /// `uint`, suffixed `U`.
    UInt(u32),
    /// `long`, suffixed `L`.
    Long(i64),
    /// `ulong`, suffixed `UL`.
    ULong(u64),
    /// `short`
    Short(i16),
    /// `ushort`
    UShort(u16),
    /// `byte`
    Byte(u8),
    /// `float`, suffixed `F`.
    Float(f32),
    /// `double`
    Double(f64),
    /// `typeof(T)`; only the unqualified name of `T` is written.
    TypeOf(String),
    /// `EnumType.Member`; only the unqualified enum type name is written.
    EnumMember { enum_type: String, member: String },
}

/// A Rust enum mirroring a C# enum, usable as an attribute argument.
///
/// ```
/// use sharpen_csharp::{AttributeValue, CSharpEnum};
///
/// enum Kind {
///     Fast,
/// }
///
/// impl CSharpEnum for Kind {
///     const TYPE_NAME: &'static str = "Demo.Kind";
///
///     fn member_name(&self) -> &'static str {
///         match self {
///             Kind::Fast => "Fast",
///         }
///     }
/// }
///
/// assert_eq!(AttributeValue::from_enum(&Kind::Fast).to_literal(), "Kind.Fast");
/// ```
pub trait CSharpEnum {
    /// Possibly namespace-qualified C# type name.
    const TYPE_NAME: &'static str;

    /// Name of the member this value represents.
    fn member_name(&self) -> &'static str;
}

impl AttributeValue {
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    pub fn null() -> Self {
        Self::Null
    }

    pub fn type_of(type_name: impl Into<String>) -> Self {
        Self::TypeOf(type_name.into())
    }

    pub fn enum_member(enum_type: impl Into<String>, member: impl Into<String>) -> Self {
        Self::EnumMember {
            enum_type: enum_type.into(),
            member: member.into(),
        }
    }

    pub fn from_enum<E: CSharpEnum>(value: &E) -> Self {
        Self::enum_member(E::TYPE_NAME, value.member_name())
    }

    /// Check the names carried by `TypeOf` and `EnumMember` values.
    pub(crate) fn validate(&self) -> Result<()> {
        match self {
            Self::TypeOf(type_name) => require(type_name, "type_name"),
            Self::EnumMember { enum_type, member } => {
                require(enum_type, "enum_type")?;
                require(member, "member")
            }
            _ => Ok(()),
        }
    }

    /// The canonical C# literal text.
    pub fn to_literal(&self) -> String {
        match self {
            Self::String(s) => quote(s, '"'),
            Self::Char(c) => quote(c.encode_utf8(&mut [0; 4]), '\''),
            Self::Bool(b) => b.to_string(),
            Self::Null => "null".to_string(),
            Self::Int(v) => v.to_string(),
            Self::UInt(v) => format!("{v}U"),
            Self::Long(v) => format!("{v}L"),
            Self::ULong(v) => format!("{v}UL"),
            Self::Short(v) => v.to_string(),
            Self::UShort(v) => v.to_string(),
            Self::Byte(v) => v.to_string(),
            Self::Float(v) => float_literal(f64::from(*v), v.to_string(), "float", "F"),
            Self::Double(v) => float_literal(*v, v.to_string(), "double", ""),
            Self::TypeOf(type_name) => format!("typeof({})", short_name(type_name)),
            Self::EnumMember { enum_type, member } => {
                format!("{}.{}", short_name(enum_type), member)
            }
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_literal())
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for AttributeValue {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from! {
    String => String,
    char => Char,
    bool => Bool,
    i32 => Int,
    u32 => UInt,
    i64 => Long,
    u64 => ULong,
    i16 => Short,
    u16 => UShort,
    u8 => Byte,
    f32 => Float,
    f64 => Double,
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

fn float_literal(value: f64, digits: String, keyword: &str, suffix: &str) -> String {
    if value.is_finite() {
        return digits + suffix;
    }
    let constant = if value.is_nan() {
        "NaN"
    } else if value > 0.0 {
        "PositiveInfinity"
    } else {
        "NegativeInfinity"
    };
    format!("{keyword}.{constant}")
}

fn quote(text: &str, delimiter: char) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push(delimiter);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\0' => out.push_str("\\0"),
            '\u{7}' => out.push_str("\\a"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{b}' => out.push_str("\\v"),
            c if c == delimiter => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() || matches!(c, '\u{2028}' | '\u{2029}') => {
                out.push_str(&format!("\\u{:04X}", u32::from(c)));
            }
            c => out.push(c),
        }
    }
    out.push(delimiter);
    out
}

/// The unqualified part of a dotted type name, ignoring dots inside generic arguments.
pub(crate) fn short_name(type_name: &str) -> &str {
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in type_name.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            '.' if depth == 0 => start = i + 1,
            _ => {}
        }
    }
    &type_name[start..]
}
