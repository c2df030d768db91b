//! Client proxy file composition.
//!
//! Decides which controllers and actions are proxied, builds the structured
//! [`ProxyFile`] for a controller and renders it through the template engine.
//!
//! # Examples
//!
//! ```
//! use proxy_gen_codegen::ProxyFileComposer;
//! use proxy_gen_core::{ControllerApiDescription, ControllerInterfaceApiDescription};
//!
//! let controller = ControllerApiDescription {
//!     controller_name: "Book".to_string(),
//!     interfaces: vec![ControllerInterfaceApiDescription::new("Acme.Books.IBookAppService")],
//!     ..Default::default()
//! };
//!
//! let composer = ProxyFileComposer::new().unwrap();
//! let composed = composer.compose(&controller, "Acme.ClientProxies").unwrap().unwrap();
//!
//! assert_eq!(composed.file.path, "BookClientProxy.cs");
//! assert!(composed.file.content.contains("using Acme.Books;"));
//! ```

use crate::consts::{APP_SERVICE_PREFIX, BASELINE_IMPORTS, CLIENT_PROXY_SUFFIX, SERVICE_SUFFIX};
use crate::method;
use crate::template_engine::{CLIENT_PROXY_PARTIAL_TEMPLATE, CLIENT_PROXY_TEMPLATE, TemplateEngine};
use crate::type_name::{ImportSet, short_name};
use crate::types::{GeneratedFile, PartialFileContext, ProxyClass, ProxyFile, ProxyFileContext};
use proxy_gen_core::{ActionApiDescription, ControllerApiDescription, ProxyFolder, Result};
use tracing::debug;

/// Returns `true` if a client proxy is generated for the controller.
///
/// The controller must implement at least one interface, and its last
/// interface must be an application service.
#[must_use]
pub fn should_generate_proxy(controller: &ControllerApiDescription) -> bool {
    match controller.service_interface() {
        Some(interface) if interface.type_name.ends_with(SERVICE_SUFFIX) => true,
        Some(interface) => {
            debug!(
                controller = %controller.controller_name,
                interface = %interface.type_name,
                "skipping controller: primary interface is not an application service"
            );
            false
        }
        None => {
            debug!(
                controller = %controller.controller_name,
                "skipping controller: no interfaces"
            );
            false
        }
    }
}

/// Returns `true` if the action is implemented by the proxied interface.
#[must_use]
pub fn should_generate_method(service_interface: &str, action: &ActionApiDescription) -> bool {
    let eligible = action.implement_from.starts_with(APP_SERVICE_PREFIX)
        || action.implement_from.starts_with(service_interface);

    if !eligible {
        debug!(
            action = %action.name,
            implement_from = %action.implement_from,
            "skipping action: not implemented by the service interface"
        );
    }

    eligible
}

/// Namespace of generated proxies: the root namespace followed by the
/// folder path with separators turned into dots.
///
/// # Examples
///
/// ```
/// use proxy_gen_codegen::composer::proxy_namespace;
/// use proxy_gen_core::ProxyFolder;
///
/// let folder = ProxyFolder::new("Proxies/Books").unwrap();
/// assert_eq!(proxy_namespace("Acme.HttpApi.Client", &folder), "Acme.HttpApi.Client.Proxies.Books");
/// ```
#[must_use]
pub fn proxy_namespace(root_namespace: &str, folder: &ProxyFolder) -> String {
    format!("{root_namespace}.{}", folder.namespace_suffix())
}

/// Class name of the proxy generated for a controller.
#[must_use]
pub fn client_proxy_name(controller: &ControllerApiDescription) -> String {
    format!("{}{CLIENT_PROXY_SUFFIX}", controller.controller_name)
}

/// A rendered client proxy together with what its partial file needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedProxy {
    /// The generated source file
    pub file: GeneratedFile,
    /// Proxy class name
    pub class_name: String,
    /// Namespace the class lives in
    pub namespace: String,
}

/// Builds and renders client proxy files.
#[derive(Debug)]
pub struct ProxyFileComposer<'a> {
    engine: TemplateEngine<'a>,
}

impl ProxyFileComposer<'_> {
    /// Creates a composer with the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails.
    pub fn new() -> Result<Self> {
        Ok(Self {
            engine: TemplateEngine::new()?,
        })
    }

    /// Builds the structured proxy file for a controller.
    ///
    /// Returns `None` if the controller is not eligible.
    #[must_use]
    pub fn build_file(
        &self,
        controller: &ControllerApiDescription,
        namespace: &str,
    ) -> Option<ProxyFile> {
        if !should_generate_proxy(controller) {
            return None;
        }
        let interface = controller.service_interface()?.type_name.as_str();

        let mut imports = ImportSet::with_namespaces(BASELINE_IMPORTS);
        imports.insert_type_namespace(interface);

        let methods = controller
            .actions
            .values()
            .filter(|action| should_generate_method(interface, action))
            .map(|action| method::emit(action, &mut imports))
            .collect();

        Some(ProxyFile {
            namespace: namespace.to_string(),
            imports,
            class: ProxyClass {
                name: client_proxy_name(controller),
                service_interface: short_name(interface).to_string(),
                methods,
            },
        })
    }

    /// Renders a structured proxy file to C# source.
    ///
    /// # Errors
    ///
    /// Returns error if template rendering fails.
    pub fn render(&self, file: &ProxyFile) -> Result<String> {
        self.engine
            .render(CLIENT_PROXY_TEMPLATE, &ProxyFileContext::from(file))
    }

    /// Builds and renders the proxy for a controller.
    ///
    /// Returns `Ok(None)` if the controller is not eligible.
    ///
    /// # Errors
    ///
    /// Returns error if template rendering fails.
    pub fn compose(
        &self,
        controller: &ControllerApiDescription,
        namespace: &str,
    ) -> Result<Option<ComposedProxy>> {
        let Some(file) = self.build_file(controller, namespace) else {
            return Ok(None);
        };

        let content = self.render(&file)?;
        debug!(
            class = %file.class.name,
            methods = file.class.methods.len(),
            imports = file.imports.len(),
            "composed client proxy"
        );

        Ok(Some(ComposedProxy {
            file: GeneratedFile {
                path: file.file_name(),
                content,
            },
            class_name: file.class.name,
            namespace: file.namespace,
        }))
    }

    /// Renders the customization file for a proxy class.
    ///
    /// # Errors
    ///
    /// Returns error if template rendering fails.
    pub fn render_partial(&self, class_name: &str, namespace: &str) -> Result<String> {
        self.engine.render(
            CLIENT_PROXY_PARTIAL_TEMPLATE,
            &PartialFileContext {
                namespace,
                class_name,
            },
        )
    }
}
