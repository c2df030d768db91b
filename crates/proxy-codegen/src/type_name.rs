//! Qualified type-name resolution.
//!
//! Type names in the description model are dotted, fully-qualified strings
//! that may carry generic argument lists, e.g.
//! `System.Collections.Generic.Dictionary<System.String,Acme.Books.BookDto>`.
//! This module parses them into a [`TypeName`] tree and renders the short
//! form used in emitted signatures, registering every referenced namespace
//! in an [`ImportSet`] along the way.
//!
//! Parsing never fails. Malformed input (unbalanced delimiters, stray
//! commas) yields a best-effort rendering: a missing `>` is treated as
//! closed at end of input and unparsed trailing text is appended verbatim.
//!
//! # Examples
//!
//! ```
//! use proxy_gen_codegen::type_name::{resolve, ImportSet};
//!
//! let mut imports = ImportSet::new();
//! let short = resolve("System.Collections.Generic.List<System.String>", &mut imports);
//!
//! assert_eq!(short, "List<string>");
//! assert_eq!(
//!     imports.iter().collect::<Vec<_>>(),
//!     vec!["System.Collections.Generic", "System"]
//! );
//! ```

use indexmap::IndexSet;
use std::fmt;

/// Nesting depth past which generic argument lists are kept as raw text.
const MAX_GENERIC_DEPTH: usize = 64;

/// Ordered, deduplicated set of namespace imports for one generated file.
///
/// Entries keep first-insertion order. The set is append-only: a composer
/// creates one per file and drops it once the file is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
    namespaces: IndexSet<String>,
}

impl ImportSet {
    /// Creates an empty import set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an import set seeded with the given namespaces, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use proxy_gen_codegen::type_name::ImportSet;
    ///
    /// let imports = ImportSet::with_namespaces(["System", "System.Threading.Tasks", "System"]);
    /// assert_eq!(imports.len(), 2);
    /// ```
    #[must_use]
    pub fn with_namespaces<I, S>(namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for namespace in namespaces {
            set.insert(namespace.as_ref());
        }
        set
    }

    /// Adds a namespace. Returns `false` if it was already present or blank.
    pub fn insert(&mut self, namespace: &str) -> bool {
        let namespace = namespace.trim();
        if namespace.is_empty() || self.namespaces.contains(namespace) {
            return false;
        }
        self.namespaces.insert(namespace.to_string())
    }

    /// Adds the namespace of a fully-qualified, non-generic type name.
    ///
    /// Names without a namespace register nothing.
    pub fn insert_type_namespace(&mut self, full_name: &str) -> bool {
        type_namespace(full_name).is_some_and(|namespace| self.insert(namespace))
    }

    /// Returns `true` if the namespace is present.
    #[must_use]
    pub fn contains(&self, namespace: &str) -> bool {
        self.namespaces.contains(namespace.trim())
    }

    /// Iterates over the namespaces in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.namespaces.iter().map(String::as_str)
    }

    /// Returns the number of namespaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    /// Returns `true` if no namespace has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }
}

/// Returns the namespace part of a dotted type name (everything before the last `.`).
///
/// # Examples
///
/// ```
/// use proxy_gen_codegen::type_name::type_namespace;
///
/// assert_eq!(type_namespace("Acme.Books.IBookAppService"), Some("Acme.Books"));
/// assert_eq!(type_namespace("Guid"), None);
/// ```
#[must_use]
pub fn type_namespace(full_name: &str) -> Option<&str> {
    full_name
        .rsplit_once('.')
        .map(|(namespace, _)| namespace.trim())
        .filter(|namespace| !namespace.is_empty())
}

/// Returns the last dotted segment of a type name.
#[must_use]
pub fn short_name(full_name: &str) -> &str {
    full_name
        .rsplit_once('.')
        .map_or(full_name, |(_, name)| name)
        .trim()
}

/// Maps canonical framework type names to their C# keyword spelling.
///
/// All other names pass through unchanged.
///
/// # Examples
///
/// ```
/// use proxy_gen_codegen::type_name::primitive_alias;
///
/// assert_eq!(primitive_alias("Int32"), "int");
/// assert_eq!(primitive_alias("Guid"), "Guid");
/// ```
#[must_use]
pub fn primitive_alias(name: &str) -> &str {
    match name {
        "Void" => "void",
        "Boolean" => "bool",
        "String" => "string",
        "Int32" => "int",
        "Int64" => "long",
        "Double" => "double",
        "Object" => "object",
        "Byte" => "byte",
        "Char" => "char",
        _ => name,
    }
}

/// A parsed type name: a qualified name plus its ordered generic arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeName {
    /// Namespace (all segments but the last), if any
    pub namespace: Option<String>,
    /// Last segment of the qualified name
    pub name: String,
    /// Generic arguments, empty for non-generic types
    pub arguments: Vec<TypeName>,
    /// Array and nullable markers that followed the name (`[]`, `?`)
    pub suffix: String,
}

impl TypeName {
    /// Parses a type name, ignoring any unparsed trailing text.
    ///
    /// # Examples
    ///
    /// ```
    /// use proxy_gen_codegen::type_name::TypeName;
    ///
    /// let ty = TypeName::parse("Volo.Abp.Application.Dtos.PagedResultDto<Acme.Books.BookDto>");
    /// assert_eq!(ty.namespace.as_deref(), Some("Volo.Abp.Application.Dtos"));
    /// assert_eq!(ty.name, "PagedResultDto");
    /// assert_eq!(ty.arguments[0].name, "BookDto");
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Self {
        Parser::new(input).parse_type(0)
    }

    /// Returns `true` if the type has a generic argument list.
    #[must_use]
    pub fn is_generic(&self) -> bool {
        !self.arguments.is_empty()
    }

    /// Renders the short form, registering every referenced namespace.
    ///
    /// The generic head and each argument contribute their own namespace;
    /// leaf names go through [`primitive_alias`].
    pub fn render(&self, imports: &mut ImportSet) -> String {
        let mut out = String::new();
        self.render_into(imports, &mut out);
        out
    }

    fn render_into(&self, imports: &mut ImportSet, out: &mut String) {
        if let Some(namespace) = &self.namespace {
            imports.insert(namespace);
        }

        if self.is_generic() {
            out.push_str(&self.name);
            out.push('<');
            for (i, argument) in self.arguments.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                argument.render_into(imports, out);
            }
            out.push('>');
        } else {
            out.push_str(primitive_alias(&self.name));
        }

        out.push_str(&self.suffix);
    }
}

impl fmt::Display for TypeName {
    /// Writes the fully-qualified form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(namespace) = &self.namespace {
            write!(f, "{namespace}.")?;
        }
        f.write_str(&self.name)?;
        if self.is_generic() {
            f.write_str("<")?;
            for (i, argument) in self.arguments.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{argument}")?;
            }
            f.write_str(">")?;
        }
        f.write_str(&self.suffix)
    }
}

/// Resolves a type reference to its short form, registering imports.
///
/// This is the entry point used by the method emitter for every parameter
/// and return type.
///
/// # Examples
///
/// ```
/// use proxy_gen_codegen::type_name::{resolve, ImportSet};
///
/// let mut imports = ImportSet::new();
/// assert_eq!(resolve("System.Int32", &mut imports), "int");
/// assert_eq!(resolve("System.Guid", &mut imports), "Guid");
/// assert_eq!(imports.len(), 1);
/// ```
pub fn resolve(type_ref: &str, imports: &mut ImportSet) -> String {
    let mut parser = Parser::new(type_ref);
    let ty = parser.parse_type(0);
    let mut rendered = ty.render(imports);
    rendered.push_str(parser.rest());
    rendered
}

/// Recursive-descent parser over `name ('<' type (',' type)* '>')? suffix*`.
struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn rest(&self) -> &'a str {
        let input = self.input;
        &input[self.pos..]
    }

    fn parse_type(&mut self, depth: usize) -> TypeName {
        if depth >= MAX_GENERIC_DEPTH {
            // Keep the rest of this argument verbatim, up to the enclosing `,` or `>`
            let input = self.input;
            let start = self.pos;
            let mut level = 0usize;
            while let Some(c) = self.peek() {
                match c {
                    '<' => level += 1,
                    '>' | ',' if level == 0 => break,
                    '>' => level -= 1,
                    _ => {}
                }
                self.pos += c.len_utf8();
            }
            let raw = input[start..self.pos].trim();
            return TypeName {
                namespace: None,
                name: raw.to_string(),
                arguments: Vec::new(),
                suffix: String::new(),
            };
        }

        let input = self.input;
        let start = self.pos;
        while let Some(c) = self.peek() {
            if matches!(c, '<' | ',' | '>') {
                break;
            }
            self.pos += c.len_utf8();
        }
        let (qualified, mut suffix) = split_suffix(input[start..self.pos].trim());

        let mut arguments = Vec::new();
        if self.peek() == Some('<') {
            self.pos += 1;
            loop {
                arguments.push(self.parse_type(depth + 1));
                match self.peek() {
                    Some(',') => self.pos += 1,
                    Some('>') => {
                        self.pos += 1;
                        break;
                    }
                    _ => break,
                }
            }
            suffix.push_str(&self.take_suffix());
        }

        let (namespace, name) = match qualified.rsplit_once('.') {
            Some((namespace, name)) if !namespace.trim().is_empty() => {
                (Some(namespace.trim().to_string()), name.trim().to_string())
            }
            Some((_, name)) => (None, name.trim().to_string()),
            None => (None, qualified.to_string()),
        };

        TypeName {
            namespace,
            name,
            arguments,
            suffix,
        }
    }

    /// Consumes array and nullable markers following a generic argument list.
    fn take_suffix(&mut self) -> String {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !matches!(c, '[' | ']' | '?') {
                break;
            }
            self.pos += 1;
        }
        self.input[start..self.pos].to_string()
    }
}

/// Splits trailing `[]` / `?` markers off a name.
fn split_suffix(raw: &str) -> (&str, String) {
    let mut name = raw;
    let mut markers = Vec::new();
    loop {
        if let Some(stripped) = name.strip_suffix("[]") {
            markers.push("[]");
            name = stripped;
        } else if let Some(stripped) = name.strip_suffix('?') {
            markers.push("?");
            name = stripped;
        } else {
            break;
        }
    }
    markers.reverse();
    (name, markers.concat())
}
