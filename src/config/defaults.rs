//! Default values for configuration options.
//!
//! Centralized constants so the built-in layer is defined in one place.

/// Default RabbitMQ management API base URL.
pub const RABBIT_URL: &str = "http://localhost:15672";

/// Default broker username.
pub const RABBIT_USER: &str = "guest";

/// Default broker password.
pub const RABBIT_PASSWORD: &str = "guest";

/// Default publish port for the metrics endpoint.
pub const PUBLISH_PORT: &str = "9090";

/// Default value of the `--web.listen-address` flag.
///
/// Note this is a flag default, not a built-in: it shadows [`PUBLISH_PORT`]
/// and `PUBLISH_PORT` from the environment unless the flag is passed empty.
pub const LISTEN_ADDRESS_FLAG: &str = "127.0.0.1:9090";

/// Default output format.
pub const OUTPUT_FORMAT: &str = "TTY";

/// Default CA certificate file.
pub const CA_FILE: &str = "ca.pem";

/// Default for skipping TLS certificate verification.
pub const INSECURE_SKIP_VERIFY: bool = false;

/// Default skip-queues pattern (matches nothing).
pub const SKIP_QUEUES: &str = "^$";

/// Default include-queues pattern (matches everything).
pub const INCLUDE_QUEUES: &str = ".*";

/// Host used when the listen setting is a bare port.
pub const BIND_HOST: &str = "0.0.0.0";
