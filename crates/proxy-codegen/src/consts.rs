//! Naming conventions shared by the composer and the method emitter.

/// Suffix a primary service interface must carry for its controller to get a proxy.
pub const SERVICE_SUFFIX: &str = "AppService";

/// Suffix of asynchronous action names.
pub const ASYNC_SUFFIX: &str = "Async";

/// Actions declared under this namespace are always proxied.
pub const APP_SERVICE_PREFIX: &str = "Volo.Abp.Application.Services";

/// Suffix appended to the controller name to form the proxy class name.
pub const CLIENT_PROXY_SUFFIX: &str = "ClientProxy";

/// Extension of generated source files.
pub const SOURCE_EXTENSION: &str = "cs";

/// Imports every proxy file starts with, in order.
pub const BASELINE_IMPORTS: &[&str] = &[
    "System",
    "System.Threading.Tasks",
    "Volo.Abp.DependencyInjection",
    "Volo.Abp.Application.Dtos",
    "Volo.Abp.Http.Client",
    "Volo.Abp.Http.Client.ClientProxying",
    "Volo.Abp.Http.Modeling",
];
