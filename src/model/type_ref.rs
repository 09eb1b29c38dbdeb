//! Declared property types as written in the host language.
//!
//! Type references arrive as text (`int`, `string[]`, `List<string>`,
//! `Sample.DatabaseConfig`, `LogLevel?`) and are parsed once when the
//! model is loaded.

use std::{fmt, str::Chars};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{ConfdocError, Result};

/// Deepest generic or wrapper nesting the parser accepts.
const MAX_NESTING: usize = 64;

/// Well-known framework names that behave as a sequence of their single
/// type argument when the model does not describe them itself.
const WELL_KNOWN_SEQUENCES: &[&str] = &[
    "List",
    "IList",
    "IEnumerable",
    "ICollection",
    "IReadOnlyList",
    "IReadOnlyCollection",
    "HashSet",
    "ISet",
    "IReadOnlySet",
    "SortedSet",
    "LinkedList",
    "Collection",
    "ReadOnlyCollection",
    "ObservableCollection",
    "Queue",
    "Stack",
    "ImmutableArray",
    "ImmutableList",
    "ImmutableHashSet",
];

/// A declared type.
///
/// Model files deserialize leniently: text that does not parse is kept as
/// [`TypeRef::Unparsed`] so one bad property cannot fail the whole load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TypeRef {
    /// A named type, optionally generic.
    Named {
        /// Name as written, possibly namespace-qualified.
        name: String,
        /// Generic type arguments in order.
        args: Vec<TypeRef>,
    },
    /// A single-dimensional array of the inner type.
    Array(Box<TypeRef>),
    /// A nullable wrapper (`T?`).
    Nullable(Box<TypeRef>),
    /// Text that failed to parse, kept as written. Always a leaf.
    Unparsed(String),
}

/// Compiler-special primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialType {
    /// `string`
    String,
    /// `bool`
    Boolean,
    /// `char`
    Char,
    /// `sbyte`
    SByte,
    /// `byte`
    Byte,
    /// `short`
    Int16,
    /// `ushort`
    UInt16,
    /// `int`
    Int32,
    /// `uint`
    UInt32,
    /// `long`
    Int64,
    /// `ulong`
    UInt64,
    /// `float`
    Single,
    /// `double`
    Double,
    /// `decimal`
    Decimal,
    /// `object`
    Object,
}

impl SpecialType {
    const ALL: [SpecialType; 15] = [
        SpecialType::String,
        SpecialType::Boolean,
        SpecialType::Char,
        SpecialType::SByte,
        SpecialType::Byte,
        SpecialType::Int16,
        SpecialType::UInt16,
        SpecialType::Int32,
        SpecialType::UInt32,
        SpecialType::Int64,
        SpecialType::UInt64,
        SpecialType::Single,
        SpecialType::Double,
        SpecialType::Decimal,
        SpecialType::Object,
    ];

    /// Keyword spelling, also used for display.
    pub fn keyword(self) -> &'static str {
        match self {
            SpecialType::String => "string",
            SpecialType::Boolean => "bool",
            SpecialType::Char => "char",
            SpecialType::SByte => "sbyte",
            SpecialType::Byte => "byte",
            SpecialType::Int16 => "short",
            SpecialType::UInt16 => "ushort",
            SpecialType::Int32 => "int",
            SpecialType::UInt32 => "uint",
            SpecialType::Int64 => "long",
            SpecialType::UInt64 => "ulong",
            SpecialType::Single => "float",
            SpecialType::Double => "double",
            SpecialType::Decimal => "decimal",
            SpecialType::Object => "object",
        }
    }

    /// Framework type name without the `System.` prefix.
    pub fn framework_name(self) -> &'static str {
        match self {
            SpecialType::String => "String",
            SpecialType::Boolean => "Boolean",
            SpecialType::Char => "Char",
            SpecialType::SByte => "SByte",
            SpecialType::Byte => "Byte",
            SpecialType::Int16 => "Int16",
            SpecialType::UInt16 => "UInt16",
            SpecialType::Int32 => "Int32",
            SpecialType::UInt32 => "UInt32",
            SpecialType::Int64 => "Int64",
            SpecialType::UInt64 => "UInt64",
            SpecialType::Single => "Single",
            SpecialType::Double => "Double",
            SpecialType::Decimal => "Decimal",
            SpecialType::Object => "Object",
        }
    }

    /// Recognizes a keyword (`int`) or a `System.`-qualified name
    /// (`System.Int32`).
    pub fn from_name(name: &str) -> Option<SpecialType> {
        let name = name.strip_prefix("global::").unwrap_or(name);
        if let Some(framework) = name.strip_prefix("System.") {
            return Self::ALL
                .into_iter()
                .find(|special| special.framework_name() == framework);
        }
        Self::ALL
            .into_iter()
            .find(|special| special.keyword() == name)
    }

    /// Whether the type is numeric.
    pub fn is_numeric(self) -> bool {
        !matches!(
            self,
            SpecialType::String | SpecialType::Boolean | SpecialType::Char | SpecialType::Object
        )
    }
}

impl TypeRef {
    /// Parses a type reference such as `Dictionary<string, List<int>>[]`.
    ///
    /// # Errors
    ///
    /// Returns `ConfdocError::InvalidTypeRef` for empty or malformed text,
    /// or for nesting deeper than 64 levels.
    pub fn parse(text: &str) -> Result<TypeRef> {
        let mut parser = TypeRefParser::new(text);
        let parsed = parser.parse_type()?;
        parser.skip_whitespace();
        if let Some(rest) = parser.peek() {
            return Err(parser.error(format!("unexpected '{rest}'")));
        }
        Ok(parsed)
    }

    /// Builds a non-generic named reference.
    pub fn named(name: impl Into<String>) -> TypeRef {
        TypeRef::Named {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Removes any nullable wrappers.
    pub fn strip_nullable(&self) -> &TypeRef {
        match self {
            TypeRef::Nullable(inner) => inner.strip_nullable(),
            other => other,
        }
    }

    /// The special type this reference names, if any.
    pub fn special(&self) -> Option<SpecialType> {
        match self {
            TypeRef::Named { name, args } if args.is_empty() => SpecialType::from_name(name),
            _ => None,
        }
    }

    /// Whether the named type is a framework sequence by name alone.
    pub fn is_well_known_sequence(name: &str) -> bool {
        let simple = name.rsplit('.').next().unwrap_or(name);
        WELL_KNOWN_SEQUENCES.contains(&simple)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named { name, args } => {
                if let Some(special) = self.special() {
                    return write!(f, "{}", special.keyword());
                }
                let name = name.strip_prefix("global::").unwrap_or(name);
                write!(f, "{}", name.rsplit('.').next().unwrap_or(name))?;
                if !args.is_empty() {
                    write!(f, "<")?;
                    for (index, arg) in args.iter().enumerate() {
                        if index > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    write!(f, ">")?;
                }
                Ok(())
            }
            TypeRef::Array(inner) => write!(f, "{inner}[]"),
            TypeRef::Nullable(inner) => write!(f, "{inner}?"),
            TypeRef::Unparsed(text) => write!(f, "{text}"),
        }
    }
}

impl From<String> for TypeRef {
    fn from(value: String) -> Self {
        match TypeRef::parse(&value) {
            Ok(parsed) => parsed,
            Err(err) => {
                warn!(error = %err, "Keeping type reference unparsed");
                TypeRef::Unparsed(value)
            }
        }
    }
}

impl From<TypeRef> for String {
    fn from(value: TypeRef) -> Self {
        value.to_written()
    }
}

impl TypeRef {
    /// Renders the reference back in fully written form, keeping
    /// namespaces, so that it parses to the same value.
    pub fn to_written(&self) -> String {
        match self {
            TypeRef::Named { name, args } if args.is_empty() => name.clone(),
            TypeRef::Named { name, args } => {
                let args: Vec<String> = args.iter().map(TypeRef::to_written).collect();
                format!("{}<{}>", name, args.join(", "))
            }
            TypeRef::Array(inner) => format!("{}[]", inner.to_written()),
            TypeRef::Nullable(inner) => format!("{}?", inner.to_written()),
            TypeRef::Unparsed(text) => text.clone(),
        }
    }
}

struct TypeRefParser<'a> {
    text: &'a str,
    chars: std::iter::Peekable<Chars<'a>>,
    depth: usize,
}

impl<'a> TypeRefParser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.chars().peekable(),
            depth: 0,
        }
    }

    fn error(&self, details: impl Into<String>) -> ConfdocError {
        ConfdocError::InvalidTypeRef {
            text: self.text.to_string(),
            details: details.into(),
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.chars.next();
        }
    }

    fn descend(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_NESTING {
            return Err(self.error("type nesting too deep"));
        }
        Ok(())
    }

    fn parse_type(&mut self) -> Result<TypeRef> {
        let depth = self.depth;
        let parsed = self.parse_nested();
        self.depth = depth;
        parsed
    }

    fn parse_nested(&mut self) -> Result<TypeRef> {
        self.descend()?;
        self.skip_whitespace();
        let name = self.parse_name()?;
        let args = self.parse_args()?;
        let mut parsed = TypeRef::Named { name, args };

        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('?') => {
                    self.descend()?;
                    self.chars.next();
                    parsed = TypeRef::Nullable(Box::new(parsed));
                }
                Some('[') => {
                    self.descend()?;
                    self.chars.next();
                    self.skip_whitespace();
                    if self.chars.next() != Some(']') {
                        return Err(self.error("only single-dimensional arrays are supported"));
                    }
                    parsed = TypeRef::Array(Box::new(parsed));
                }
                _ => return Ok(parsed),
            }
        }
    }

    fn parse_name(&mut self) -> Result<String> {
        let mut name = String::new();
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || matches!(c, '_' | '.' | ':' | '`') {
                name.push(c);
                self.chars.next();
            } else {
                break;
            }
        }

        let trimmed = name.strip_prefix("global::").unwrap_or(&name);
        let valid = !trimmed.is_empty()
            && !trimmed.contains(':')
            && trimmed.split('.').all(|segment| !segment.is_empty());
        if !valid {
            return Err(self.error("expected a type name"));
        }
        Ok(trimmed.to_string())
    }

    fn parse_args(&mut self) -> Result<Vec<TypeRef>> {
        self.skip_whitespace();
        if self.peek() != Some('<') {
            return Ok(Vec::new());
        }
        self.chars.next();

        let mut args = Vec::new();
        loop {
            args.push(self.parse_type()?);
            self.skip_whitespace();
            match self.chars.next() {
                Some(',') => continue,
                Some('>') => return Ok(args),
                _ => return Err(self.error("unterminated type argument list")),
            }
        }
    }
}
