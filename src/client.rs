use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

use crate::{
    logger::{Field, Logger, NoopLogger},
    Configuration, Result, ServiceError,
};

const GET_DATA_LATENCY: Duration = Duration::from_millis(100);
const POST_DATA_LATENCY: Duration = Duration::from_millis(150);
const VALIDATE_CONNECTION_LATENCY: Duration = Duration::from_millis(50);

/// Lifecycle state of a [`ServiceClient`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClientState {
    Active,
    Disposed,
}

/// Session client bound to one [`Configuration`] and one [`Logger`].
///
/// Every operation suspends once for a fixed simulated latency and can be
/// aborted through a [`CancellationToken`]. After [`ServiceClient::dispose`]
/// (or drop) all operations fail with [`ServiceError::Disposed`].
///
/// The configuration is taken as-is; call [`Configuration::validate`] first.
pub struct ServiceClient {
    configuration: Configuration,
    logger: Arc<dyn Logger>,
    state: ClientState,
}

impl fmt::Debug for ServiceClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceClient")
            .field("configuration", &self.configuration)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl ServiceClient {
    /// Creates a client that discards its log output.
    pub fn new(configuration: Configuration) -> Self {
        Self::with_logger(configuration, Arc::new(NoopLogger))
    }

    /// Creates a client that reports through `logger`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use std::sync::Arc;
    /// use service_client::{Configuration, NoopLogger, ServiceClient};
    ///
    /// let config = Configuration::new("my-key");
    /// config.validate().expect("invalid configuration");
    /// let client = ServiceClient::with_logger(config, Arc::new(NoopLogger));
    /// ```
    pub fn with_logger(configuration: Configuration, logger: Arc<dyn Logger>) -> Self {
        logger.info(
            "ServiceClient initialized",
            &[Field::new("base_url", &configuration.base_url)],
        );
        Self {
            configuration,
            logger,
            state: ClientState::Active,
        }
    }

    /// Starts a builder where both the configuration and the logger are optional.
    pub fn builder() -> ServiceClientBuilder {
        ServiceClientBuilder::default()
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn state(&self) -> ClientState {
        self.state
    }

    pub fn is_disposed(&self) -> bool {
        self.state == ClientState::Disposed
    }

    /// Fetches the resource identified by `resource_id`.
    pub async fn get_data(&self, resource_id: &str, cancel: &CancellationToken) -> Result<String> {
        self.ensure_active()?;
        require_non_blank(resource_id, "resource_id", "Resource ID cannot be null or empty")?;

        self.logger
            .debug("fetching data", &[Field::new("resource_id", resource_id)]);

        suspend(GET_DATA_LATENCY, cancel).await?;

        let data = format!(
            "Data for {resource_id} from {}",
            self.configuration.base_url
        );

        self.logger
            .info("retrieved data", &[Field::new("resource_id", resource_id)]);

        Ok(data)
    }

    /// Sends `data` to the resource identified by `resource_id`.
    ///
    /// Always reports success once the simulated request completes.
    pub async fn post_data(
        &self,
        resource_id: &str,
        data: &str,
        cancel: &CancellationToken,
    ) -> Result<bool> {
        self.ensure_active()?;
        require_non_blank(resource_id, "resource_id", "Resource ID cannot be null or empty")?;
        require_non_blank(data, "data", "Data cannot be null or empty")?;

        self.logger
            .debug("posting data", &[Field::new("resource_id", resource_id)]);

        suspend(POST_DATA_LATENCY, cancel).await?;

        self.logger
            .info("posted data", &[Field::new("resource_id", resource_id)]);

        Ok(true)
    }

    /// Checks that the service at the configured base URL is reachable.
    pub async fn validate_connection(&self, cancel: &CancellationToken) -> Result<bool> {
        self.ensure_active()?;

        self.logger.debug(
            "validating connection",
            &[Field::new("base_url", &self.configuration.base_url)],
        );

        suspend(VALIDATE_CONNECTION_LATENCY, cancel).await?;

        self.logger.info("connection validation successful", &[]);

        Ok(true)
    }

    /// Moves the client to [`ClientState::Disposed`]. Repeated calls are no-ops.
    pub fn dispose(&mut self) {
        if self.state == ClientState::Disposed {
            return;
        }

        self.logger.debug("disposing ServiceClient", &[]);
        self.state = ClientState::Disposed;
    }

    fn ensure_active(&self) -> Result<()> {
        match self.state {
            ClientState::Active => Ok(()),
            ClientState::Disposed => Err(ServiceError::Disposed),
        }
    }
}

impl Drop for ServiceClient {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Builder for [`ServiceClient`] that tolerates a missing logger but not a
/// missing configuration.
#[derive(Default)]
pub struct ServiceClientBuilder {
    configuration: Option<Configuration>,
    logger: Option<Arc<dyn Logger>>,
}

impl fmt::Debug for ServiceClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceClientBuilder")
            .field("configuration", &self.configuration)
            .field("logger", &self.logger.as_ref().map(|_| "<dyn Logger>"))
            .finish()
    }
}

impl ServiceClientBuilder {
    pub fn configuration(mut self, configuration: Configuration) -> Self {
        self.configuration = Some(configuration);
        self
    }

    pub fn logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Builds the client, falling back to [`NoopLogger`] when no logger was set.
    pub fn build(self) -> Result<ServiceClient> {
        let configuration = self
            .configuration
            .ok_or_else(|| ServiceError::argument("configuration", "configuration is required"))?;
        let logger = self.logger.unwrap_or_else(|| Arc::new(NoopLogger));
        Ok(ServiceClient::with_logger(configuration, logger))
    }
}

fn require_non_blank(value: &str, name: &'static str, message: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ServiceError::argument(name, message));
    }
    Ok(())
}

/// The single suspension point of every operation.
///
/// Resolves after `latency` unless `cancel` fires first; a token that is
/// already cancelled fails without waiting.
async fn suspend(latency: Duration, cancel: &CancellationToken) -> Result<()> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(ServiceError::Cancelled),
        _ = sleep(latency) => Ok(()),
    }
}
