use tracing::{debug, instrument};
use zbus::{
    blocking::{Connection, fdo},
    names::InterfaceName,
    proxy::CacheProperties,
    zvariant::OwnedValue,
};

use super::{MPRIS_PATH, MediaError, PlayerId};

/// Synchronous access to the message bus.
///
/// Every call blocks until the bus answers or the transport's own timeout
/// expires. No additional timeout is applied.
pub trait BusClient {
    /// Lists every name currently registered on the bus
    ///
    /// # Errors
    /// Returns `MediaError::Discovery` if the bus cannot be queried
    fn list_names(&self) -> Result<Vec<String>, MediaError>;

    /// Reads a property from the MPRIS object of `service`
    ///
    /// # Errors
    /// Returns `MediaError::PropertyRead` if the service is gone or does not
    /// expose the property
    fn get_property(
        &self,
        service: &PlayerId,
        interface: &str,
        property: &str,
    ) -> Result<OwnedValue, MediaError>;

    /// Invokes an argument-less method on the MPRIS object of `service`
    ///
    /// # Errors
    /// Returns `MediaError::MethodCall` if the call is rejected
    fn call_method(&self, service: &PlayerId, interface: &str, method: &str)
    -> Result<(), MediaError>;
}

/// [`BusClient`] backed by a session bus connection.
///
/// The connection is opened once and closed when the client is dropped.
pub struct DbusClient {
    connection: Connection,
}

impl DbusClient {
    /// Connects to the session bus
    ///
    /// # Errors
    /// Returns `MediaError::ConnectionFailed` if the session bus is unreachable
    #[instrument]
    pub fn session() -> Result<Self, MediaError> {
        let connection = Connection::session().map_err(MediaError::ConnectionFailed)?;
        debug!("Connected to session bus");
        Ok(Self { connection })
    }

    fn properties_proxy<'a>(
        &'a self,
        service: &'a PlayerId,
    ) -> zbus::Result<fdo::PropertiesProxy<'a>> {
        fdo::PropertiesProxy::builder(&self.connection)
            .destination(service.bus_name())?
            .path(MPRIS_PATH)?
            .cache_properties(CacheProperties::No)
            .build()
    }
}

impl BusClient for DbusClient {
    #[instrument(skip(self))]
    fn list_names(&self) -> Result<Vec<String>, MediaError> {
        let proxy = fdo::DBusProxy::new(&self.connection).map_err(MediaError::Discovery)?;
        let names = proxy
            .list_names()
            .map_err(|e| MediaError::Discovery(e.into()))?;

        Ok(names.into_iter().map(|name| name.to_string()).collect())
    }

    #[instrument(skip(self), fields(bus_name = %service))]
    fn get_property(
        &self,
        service: &PlayerId,
        interface: &str,
        property: &str,
    ) -> Result<OwnedValue, MediaError> {
        let to_error = |source: zbus::Error| MediaError::PropertyRead {
            player: service.clone(),
            interface: interface.to_string(),
            property: property.to_string(),
            source,
        };

        let proxy = self.properties_proxy(service).map_err(to_error)?;
        let interface_name =
            InterfaceName::try_from(interface).map_err(|e| to_error(e.into()))?;

        proxy
            .get(interface_name, property)
            .map_err(|e| to_error(e.into()))
    }

    #[instrument(skip(self), fields(bus_name = %service))]
    fn call_method(
        &self,
        service: &PlayerId,
        interface: &str,
        method: &str,
    ) -> Result<(), MediaError> {
        self.connection
            .call_method(
                Some(service.bus_name()),
                MPRIS_PATH,
                Some(interface),
                method,
                &(),
            )
            .map(|_| ())
            .map_err(|source| MediaError::MethodCall {
                player: service.clone(),
                interface: interface.to_string(),
                method: method.to_string(),
                source,
            })
    }
}

impl Drop for DbusClient {
    fn drop(&mut self) {
        debug!("Closing session bus connection");
    }
}
