//! Api description model.
//!
//! The description model is the read-only input of a generation run: modules
//! contain controllers, controllers contain actions, and every parameter and
//! return value carries a fully-qualified type name. The JSON wire format is
//! camelCase; missing collections default to empty. Fields the generator does
//! not read are kept in each entity's `extra` map, so the saved model is a
//! faithful copy of what the service returned.
//!
//! Maps are [`IndexMap`]s because controller and action order is the
//! generation order.
//!
//! # Examples
//!
//! ```
//! use proxy_gen_core::ApiDescriptionModel;
//!
//! let json = r#"{
//!   "modules": {
//!     "app": {
//!       "rootPath": "app",
//!       "remoteServiceName": "Default",
//!       "controllers": {
//!         "Acme.BookStore.Books.BookAppService": {
//!           "controllerName": "Book",
//!           "type": "Acme.BookStore.Books.BookAppService",
//!           "interfaces": [{ "type": "Acme.BookStore.Books.IBookAppService" }],
//!           "actions": {}
//!         }
//!       }
//!     }
//!   }
//! }"#;
//!
//! let model = ApiDescriptionModel::from_json_str(json).unwrap();
//! let (module, controller) = model.controllers().next().unwrap();
//! assert_eq!(module, "app");
//! assert_eq!(controller.controller_name, "Book");
//! ```

use crate::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Root of the api description model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDescriptionModel {
    /// Modules keyed by module name
    #[serde(default)]
    pub modules: IndexMap<String, ModuleApiDescription>,
    /// Type descriptions, carried through untouched for the debug artifact
    #[serde(default)]
    pub types: IndexMap<String, Value>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ApiDescriptionModel {
    /// Parses a model from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializationError`] if the JSON is malformed or does
    /// not match the model shape.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::SerializationError {
            message: format!("Invalid api description model: {e}"),
            source: Some(e),
        })
    }

    /// Serializes the model as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializationError`] if serialization fails.
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Iterates over every controller of every module, in model order.
    ///
    /// Yields `(module name, controller)` pairs.
    pub fn controllers(&self) -> impl Iterator<Item = (&str, &ControllerApiDescription)> {
        self.modules.iter().flat_map(|(module_name, module)| {
            module
                .controllers
                .values()
                .map(move |controller| (module_name.as_str(), controller))
        })
    }

    /// Returns the total number of controllers across all modules.
    #[must_use]
    pub fn controller_count(&self) -> usize {
        self.modules.values().map(|m| m.controllers.len()).sum()
    }
}

/// One remote module.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleApiDescription {
    /// Root route of the module
    #[serde(default)]
    pub root_path: String,
    /// Remote service name used by the client configuration
    #[serde(default)]
    pub remote_service_name: String,
    /// Controllers keyed by their full type name
    #[serde(default)]
    pub controllers: IndexMap<String, ControllerApiDescription>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One controller of a module.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerApiDescription {
    /// Short controller name (`Book` for `BookAppService`)
    pub controller_name: String,
    /// Full type name of the controller implementation
    #[serde(rename = "type", default)]
    pub type_name: String,
    /// Implemented interfaces; the last one is the primary service interface
    #[serde(default)]
    pub interfaces: Vec<ControllerInterfaceApiDescription>,
    /// Actions keyed by unique name
    #[serde(default)]
    pub actions: IndexMap<String, ActionApiDescription>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ControllerApiDescription {
    /// Returns the primary service interface, if the controller has any.
    #[must_use]
    pub fn service_interface(&self) -> Option<&ControllerInterfaceApiDescription> {
        self.interfaces.last()
    }
}

/// An interface implemented by a controller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControllerInterfaceApiDescription {
    /// Full type name of the interface
    #[serde(rename = "type")]
    pub type_name: String,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ControllerInterfaceApiDescription {
    /// Creates an interface description from a full type name.
    #[must_use]
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            extra: Map::new(),
        }
    }
}

/// One action of a controller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionApiDescription {
    /// Unique action key within the controller
    #[serde(default)]
    pub unique_name: String,
    /// Method name on the service interface
    pub name: String,
    /// HTTP verb
    #[serde(default)]
    pub http_method: Option<String>,
    /// Route template
    #[serde(default)]
    pub url: String,
    /// Supported api versions
    #[serde(default)]
    pub supported_versions: Vec<String>,
    /// Parameters present on the forwarding call signature
    #[serde(default)]
    pub parameters_on_method: Vec<MethodParameterApiDescription>,
    /// Declared (http-bound) parameters
    #[serde(default)]
    pub parameters: Vec<ParameterApiDescription>,
    /// Return value
    #[serde(default)]
    pub return_value: ReturnValueApiDescription,
    /// Full name of the type that originally declared the action
    #[serde(default)]
    pub implement_from: String,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A parameter as it appears on the service method.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodParameterApiDescription {
    /// Parameter name
    pub name: String,
    /// Type name in assembly-qualified form
    #[serde(default)]
    pub type_as_string: String,
    /// Full type name
    #[serde(rename = "type")]
    pub type_name: String,
    /// Simplified type name
    #[serde(default)]
    pub type_simple: String,
    /// Whether the parameter is optional
    #[serde(default)]
    pub is_optional: bool,
    /// Default value, if any
    #[serde(default)]
    pub default_value: Option<Value>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MethodParameterApiDescription {
    /// Creates a method parameter from a name and full type name.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            ..Self::default()
        }
    }
}

/// A declared parameter of an action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterApiDescription {
    /// Name of the method parameter this one binds to
    #[serde(default)]
    pub name_on_method: String,
    /// Parameter name
    pub name: String,
    /// JSON property name, if different
    #[serde(default)]
    pub json_name: Option<String>,
    /// Full type name
    #[serde(rename = "type")]
    pub type_name: String,
    /// Simplified type name
    #[serde(default)]
    pub type_simple: String,
    /// Whether the parameter is optional
    #[serde(default)]
    pub is_optional: bool,
    /// Default value, if any
    #[serde(default)]
    pub default_value: Option<Value>,
    /// Route constraint types
    #[serde(default)]
    pub constraint_types: Option<Vec<String>>,
    /// Binding source (`Path`, `Query`, `Body`, ...)
    #[serde(default)]
    pub binding_source_id: Option<String>,
    /// Name of the descriptor the parameter belongs to
    #[serde(default)]
    pub descriptor_name: String,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ParameterApiDescription {
    /// Creates a declared parameter from a name and full type name.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            name_on_method: name.clone(),
            name,
            type_name: type_name.into(),
            ..Self::default()
        }
    }
}

/// Return value of an action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnValueApiDescription {
    /// Full type name
    #[serde(rename = "type")]
    pub type_name: String,
    /// Simplified type name
    #[serde(default)]
    pub type_simple: String,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ReturnValueApiDescription {
    /// Creates a return value from a full type name.
    #[must_use]
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            type_simple: String::new(),
            extra: Map::new(),
        }
    }
}

impl Default for ReturnValueApiDescription {
    fn default() -> Self {
        Self::new("System.Void")
    }
}
