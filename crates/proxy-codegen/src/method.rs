//! Proxy method synthesis.
//!
//! Every proxied action becomes one [`ProxyMethod`]. Actions whose name ends
//! in `Async` become forwarding calls to the remote service; all others
//! become stubs that throw, since the client proxy only supports the
//! asynchronous calling convention.
//!
//! The synchronous stub lists the action's *declared* parameters, while the
//! asynchronous forwarder lists its *method* parameters and forwards them in
//! the same order. The two lists can differ.
//!
//! # Examples
//!
//! ```
//! use proxy_gen_codegen::method::emit;
//! use proxy_gen_codegen::type_name::ImportSet;
//! use proxy_gen_core::{ActionApiDescription, MethodParameterApiDescription, ReturnValueApiDescription};
//!
//! let action = ActionApiDescription {
//!     name: "GetAsync".to_string(),
//!     parameters_on_method: vec![MethodParameterApiDescription::new("id", "System.Guid")],
//!     return_value: ReturnValueApiDescription::new("Acme.Books.BookDto"),
//!     ..Default::default()
//! };
//!
//! let mut imports = ImportSet::new();
//! let method = emit(&action, &mut imports);
//!
//! assert!(method.is_async());
//! assert!(method.to_string().contains("return await RequestAsync<BookDto>(nameof(GetAsync), id);"));
//! ```

use crate::consts::ASYNC_SUFFIX;
use crate::type_name::{ImportSet, resolve};
use proxy_gen_core::ActionApiDescription;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Indentation of members inside the generated class.
const MEMBER_INDENT: &str = "        ";

/// Indentation of statements inside a generated method body.
const BODY_INDENT: &str = "            ";

/// Calling convention of an emitted method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
    /// Stub that throws `NotImplementedException`
    Synchronous,
    /// Awaits a remote request
    Asynchronous,
}

/// One parameter in an emitted signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProxyParameter {
    /// Short type expression
    pub type_name: String,
    /// Parameter name
    pub name: String,
}

impl fmt::Display for ProxyParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.type_name, self.name)
    }
}

/// An emitted proxy method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProxyMethod {
    /// Calling convention
    pub kind: MethodKind,
    /// Method name (same as the action name)
    pub name: String,
    /// Short return type expression (`void` for no result)
    pub return_type: String,
    /// Signature parameters
    pub parameters: Vec<ProxyParameter>,
    /// Names forwarded to the remote request, in order
    pub arguments: Vec<String>,
}

impl ProxyMethod {
    /// Returns `true` for asynchronous forwarders.
    #[must_use]
    pub fn is_async(&self) -> bool {
        self.kind == MethodKind::Asynchronous
    }

    /// Returns `true` if the method produces no value.
    #[must_use]
    pub fn is_void(&self) -> bool {
        self.return_type == "void"
    }

    /// Returns the type written before the method name in the signature.
    #[must_use]
    pub fn signature_return_type(&self) -> String {
        match (self.kind, self.is_void()) {
            (MethodKind::Synchronous, _) => self.return_type.clone(),
            (MethodKind::Asynchronous, true) => "Task".to_string(),
            (MethodKind::Asynchronous, false) => format!("Task<{}>", self.return_type),
        }
    }

    fn request_arguments(&self) -> String {
        let mut args = format!("nameof({})", self.name);
        for argument in &self.arguments {
            args.push_str(", ");
            args.push_str(argument);
        }
        args
    }
}

impl fmt::Display for ProxyMethod {
    /// Writes the method at class-member indentation, without a trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parameters = self
            .parameters
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let modifiers = match self.kind {
            MethodKind::Synchronous => "public virtual",
            MethodKind::Asynchronous => "public virtual async",
        };

        writeln!(
            f,
            "{MEMBER_INDENT}{modifiers} {} {}({parameters})",
            self.signature_return_type(),
            self.name
        )?;
        writeln!(f, "{MEMBER_INDENT}{{")?;

        match self.kind {
            MethodKind::Synchronous => {
                writeln!(
                    f,
                    "{BODY_INDENT}//Client Proxy does not support the synchronization method, you should always use asynchronous methods as a best practice"
                )?;
                writeln!(f, "{BODY_INDENT}throw new System.NotImplementedException();")?;
            }
            MethodKind::Asynchronous if self.is_void() => {
                writeln!(
                    f,
                    "{BODY_INDENT}await RequestAsync({});",
                    self.request_arguments()
                )?;
            }
            MethodKind::Asynchronous => {
                writeln!(
                    f,
                    "{BODY_INDENT}return await RequestAsync<{}>({});",
                    self.return_type,
                    self.request_arguments()
                )?;
            }
        }

        write!(f, "{MEMBER_INDENT}}}")
    }
}

/// Returns `true` if the action name follows the asynchronous convention.
#[must_use]
pub fn is_async_action(action: &ActionApiDescription) -> bool {
    action.name.ends_with(ASYNC_SUFFIX)
}

/// Emits the proxy method for one action.
///
/// The return type is resolved first, then every parameter type; each
/// registers its namespaces in `imports`.
pub fn emit(action: &ActionApiDescription, imports: &mut ImportSet) -> ProxyMethod {
    let return_type = resolve(&action.return_value.type_name, imports);

    if is_async_action(action) {
        emit_asynchronous(action, return_type, imports)
    } else {
        emit_synchronous(action, return_type, imports)
    }
}

/// Declared parameters, first occurrence of each name wins.
fn emit_synchronous(
    action: &ActionApiDescription,
    return_type: String,
    imports: &mut ImportSet,
) -> ProxyMethod {
    let mut seen = HashSet::new();
    let parameters = action
        .parameters
        .iter()
        .filter(|parameter| seen.insert(parameter.name.as_str()))
        .map(|parameter| ProxyParameter {
            type_name: resolve(&parameter.type_name, imports),
            name: parameter.name.clone(),
        })
        .collect();

    ProxyMethod {
        kind: MethodKind::Synchronous,
        name: action.name.clone(),
        return_type,
        parameters,
        arguments: Vec::new(),
    }
}

/// Method parameters in order, forwarded in the same order.
fn emit_asynchronous(
    action: &ActionApiDescription,
    return_type: String,
    imports: &mut ImportSet,
) -> ProxyMethod {
    let parameters = action
        .parameters_on_method
        .iter()
        .map(|parameter| ProxyParameter {
            type_name: resolve(&parameter.type_name, imports),
            name: parameter.name.clone(),
        })
        .collect();
    let arguments = action
        .parameters_on_method
        .iter()
        .map(|parameter| parameter.name.clone())
        .collect();

    ProxyMethod {
        kind: MethodKind::Asynchronous,
        name: action.name.clone(),
        return_type,
        parameters,
        arguments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proxy_gen_core::{
        MethodParameterApiDescription, ParameterApiDescription, ReturnValueApiDescription,
    };

    fn action(name: &str, return_type: &str) -> ActionApiDescription {
        ActionApiDescription {
            unique_name: name.to_string(),
            name: name.to_string(),
            return_value: ReturnValueApiDescription::new(return_type),
            implement_from: "Acme.Books.IBookAppService".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_async_void_without_parameters() {
        let mut imports = ImportSet::new();
        let method = emit(&action("GetAsync", "System.Void"), &mut imports);

        assert_eq!(method.kind, MethodKind::Asynchronous);
        assert!(method.is_void());
        assert_eq!(
            method.to_string(),
            "        public virtual async Task GetAsync()\n        {\n            await RequestAsync(nameof(GetAsync));\n        }"
        );
        assert!(!method.to_string().contains("return"));
    }

    #[test]
    fn test_async_with_result_returns_typed_value() {
        let mut action = action("GetListAsync", "System.Collections.Generic.List<System.String>");
        action.parameters_on_method = vec![
            MethodParameterApiDescription::new("skip", "System.Int32"),
            MethodParameterApiDescription::new("filter", "System.String"),
        ];

        let mut imports = ImportSet::new();
        let method = emit(&action, &mut imports);
        let text = method.to_string();

        assert!(text.contains("public virtual async Task<List<string>> GetListAsync(int skip, string filter)"));
        assert!(text.contains(
            "return await RequestAsync<List<string>>(nameof(GetListAsync), skip, filter);"
        ));
        assert_eq!(
            imports.iter().collect::<Vec<_>>(),
            vec!["System.Collections.Generic", "System"]
        );
    }

    #[test]
    fn test_sync_action_is_stub() {
        let mut action = action("GetList", "System.Collections.Generic.List<System.String>");
        action.parameters = vec![ParameterApiDescription::new("skip", "System.Int32")];

        let mut imports = ImportSet::new();
        let method = emit(&action, &mut imports);
        let text = method.to_string();

        assert_eq!(method.kind, MethodKind::Synchronous);
        assert!(text.contains("public virtual List<string> GetList(int skip)"));
        assert!(text.contains("throw new System.NotImplementedException();"));
        assert!(!text.contains("RequestAsync"));
        assert!(imports.contains("System.Collections.Generic"));
        assert!(imports.contains("System"));
    }

    #[test]
    fn test_sync_stub_regardless_of_types() {
        let mut imports = ImportSet::new();
        let method = emit(&action("Delete", "System.Void"), &mut imports);
        assert_eq!(
            method.to_string(),
            "        public virtual void Delete()\n        {\n            //Client Proxy does not support the synchronization method, you should always use asynchronous methods as a best practice\n            throw new System.NotImplementedException();\n        }"
        );
    }

    #[test]
    fn test_sync_declared_parameters_deduplicated_by_name() {
        let mut action = action("Update", "System.Void");
        action.parameters = vec![
            ParameterApiDescription::new("id", "System.Guid"),
            ParameterApiDescription::new("input", "Acme.Books.UpdateBookDto"),
            ParameterApiDescription::new("id", "System.String"),
        ];
        action.parameters_on_method = vec![MethodParameterApiDescription::new(
            "ignored",
            "Acme.Other.Ignored",
        )];

        let mut imports = ImportSet::new();
        let method = emit(&action, &mut imports);

        assert_eq!(method.parameters.len(), 2);
        assert_eq!(method.parameters[0].to_string(), "Guid id");
        assert_eq!(method.parameters[1].to_string(), "UpdateBookDto input");
        assert!(!imports.contains("Acme.Other"));
    }

    #[test]
    fn test_async_uses_method_parameters_not_declared() {
        let mut action = action("CreateAsync", "Acme.Books.BookDto");
        action.parameters = vec![
            ParameterApiDescription::new("Name", "System.String"),
            ParameterApiDescription::new("Price", "System.Single"),
        ];
        action.parameters_on_method = vec![MethodParameterApiDescription::new(
            "input",
            "Acme.Books.CreateBookDto",
        )];

        let mut imports = ImportSet::new();
        let method = emit(&action, &mut imports);

        assert_eq!(method.arguments, vec!["input"]);
        assert!(method
            .to_string()
            .contains("Task<BookDto> CreateAsync(CreateBookDto input)"));
        assert!(method
            .to_string()
            .contains("RequestAsync<BookDto>(nameof(CreateAsync), input);"));
    }

    #[test]
    fn test_signature_return_type() {
        let mut imports = ImportSet::new();
        assert_eq!(
            emit(&action("GetAsync", "System.Int64"), &mut imports).signature_return_type(),
            "Task<long>"
        );
        assert_eq!(
            emit(&action("Get", "System.Int64"), &mut imports).signature_return_type(),
            "long"
        );
    }
}
