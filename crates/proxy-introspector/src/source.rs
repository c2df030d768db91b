//! Sources of api description models.
//!
//! A model is either read from a JSON file (typically the
//! `<module>-generate-proxy.json` artifact of an earlier run) or fetched
//! from a running service's api definition endpoint.

use async_trait::async_trait;
use proxy_gen_core::{ApiDescriptionModel, Error, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Path of the api definition endpoint, relative to the service url.
pub const API_DEFINITION_PATH: &str = "api/abp/api-definition";

/// Default timeout for fetching a model.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Something that can produce an api description model.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use proxy_gen_core::{ApiDescriptionModel, Result};
/// use proxy_gen_introspector::DescriptionSource;
///
/// #[derive(Debug)]
/// struct Empty;
///
/// #[async_trait]
/// impl DescriptionSource for Empty {
///     async fn load(&self) -> Result<ApiDescriptionModel> {
///         Ok(ApiDescriptionModel::default())
///     }
///
///     fn describe(&self) -> String {
///         "empty".to_string()
///     }
/// }
/// ```
#[async_trait]
pub trait DescriptionSource: Send + Sync + std::fmt::Debug {
    /// Loads the model.
    ///
    /// # Errors
    ///
    /// Returns an error if the model cannot be read or parsed.
    async fn load(&self) -> Result<ApiDescriptionModel>;

    /// Human-readable location of the source, for logs.
    fn describe(&self) -> String;
}

/// Reads a model from a JSON file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source for the given file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DescriptionSource for FileSource {
    async fn load(&self) -> Result<ApiDescriptionModel> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| Error::io(&self.path, e))?;

        debug!(path = %self.path.display(), bytes = text.len(), "read description model");
        ApiDescriptionModel::from_json_str(&text)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Fetches a model from a service's api definition endpoint.
#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: String,
    timeout: Duration,
}

impl HttpSource {
    /// Creates a source for the service at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full url of the api definition endpoint.
    ///
    /// # Examples
    ///
    /// ```
    /// use proxy_gen_introspector::HttpSource;
    ///
    /// let source = HttpSource::new("https://localhost:44300/");
    /// assert_eq!(source.endpoint(), "https://localhost:44300/api/abp/api-definition");
    /// ```
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}/{API_DEFINITION_PATH}", self.base_url.trim_end_matches('/'))
    }

    fn fetch_error(&self, source: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::ModelFetch {
            url: self.endpoint(),
            source: Box::new(source),
        }
    }
}

#[async_trait]
impl DescriptionSource for HttpSource {
    async fn load(&self) -> Result<ApiDescriptionModel> {
        let url = self.endpoint();
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| self.fetch_error(e))?;

        debug!(url = %url, "fetching description model");

        let response = client
            .get(&url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| self.fetch_error(e))?;

        let text = response.text().await.map_err(|e| self.fetch_error(e))?;
        ApiDescriptionModel::from_json_str(&text)
    }

    fn describe(&self) -> String {
        self.endpoint()
    }
}
