//! Types produced by proxy composition.
//!
//! # Examples
//!
//! ```
//! use proxy_gen_codegen::GeneratedFile;
//!
//! let file = GeneratedFile {
//!     path: "BookClientProxy.cs".to_string(),
//!     content: "namespace Acme.ClientProxies {}".to_string(),
//! };
//!
//! assert_eq!(file.path(), "BookClientProxy.cs");
//! ```

use crate::method::ProxyMethod;
use crate::type_name::ImportSet;
use serde::{Deserialize, Serialize};

/// A single generated file with path and content.
///
/// The path is relative to the output folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    /// Relative path where the file should be written
    pub path: String,
    /// File content
    pub content: String,
}

impl GeneratedFile {
    /// Returns the file path.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the file content.
    #[inline]
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Structured form of one client proxy source file, before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyFile {
    /// Namespace the class is declared in
    pub namespace: String,
    /// `using` directives, in emission order
    pub imports: ImportSet,
    /// The proxy class
    pub class: ProxyClass,
}

impl ProxyFile {
    /// File name of the generated source, e.g. `BookClientProxy.cs`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.class.name, crate::consts::SOURCE_EXTENSION)
    }
}

/// The generated proxy class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyClass {
    /// Class name, `<ControllerName>ClientProxy`
    pub name: String,
    /// Short name of the service interface the class implements
    pub service_interface: String,
    /// Emitted methods, in action order
    pub methods: Vec<ProxyMethod>,
}

/// Template context for the client proxy template.
#[derive(Debug, Serialize)]
pub(crate) struct ProxyFileContext<'a> {
    pub namespace: &'a str,
    pub imports: Vec<&'a str>,
    pub class_name: &'a str,
    pub service_interface: &'a str,
    pub methods: String,
}

impl<'a> From<&'a ProxyFile> for ProxyFileContext<'a> {
    fn from(file: &'a ProxyFile) -> Self {
        let methods = file
            .class
            .methods
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n\n");

        Self {
            namespace: &file.namespace,
            imports: file.imports.iter().collect(),
            class_name: &file.class.name,
            service_interface: &file.class.service_interface,
            methods,
        }
    }
}

/// Template context for the customization (partial) template.
#[derive(Debug, Serialize)]
pub(crate) struct PartialFileContext<'a> {
    pub namespace: &'a str,
    pub class_name: &'a str,
}
