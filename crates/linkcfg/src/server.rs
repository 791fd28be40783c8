//! Server configuration schema.
//!
//! [`ServerConfig`] is the typed view of every server option. The option
//! table below is the single source of names, kinds, defaults, environment
//! aliases and usage texts; the struct's derived field table binds onto it.

use linkcfg_core::{
    Configurable, ConfigResult, MinLength, OneOf, OptionDescriptor, OptionRegistry, Validator,
};

/// Layer-3 tunnel device.
pub const LINK_MODE_TUN: &str = "tun";
/// Layer-2 tap device.
pub const LINK_MODE_TAP: &str = "tap";

/// Shortest accepted `jwt_secret`, in characters.
pub const JWT_SECRET_MIN_LEN: usize = 20;

/// Every option the server accepts.
pub static OPTIONS: &[OptionDescriptor] = &[
    OptionDescriptor::string("conf", "./conf/server.toml", "config file").env("LINK_CONF"),
    OptionDescriptor::string("server_addr", ":443", "VPN service listen address")
        .env("LINK_SERVER_ADDR"),
    OptionDescriptor::string("admin_addr", ":8800", "admin backend listen address")
        .env("LINK_ADMIN_ADDR"),
    OptionDescriptor::boolean("proxy_protocol", false, "enable TCP proxy protocol")
        .env("LINK_PROXY_PROTOCOL"),
    OptionDescriptor::string("db_file", "./conf/data.db", "database file").env("LINK_DB_FILE"),
    OptionDescriptor::string("cert_file", "./conf/vpn_cert.pem", "TLS certificate file")
        .env("LINK_CERT_FILE"),
    OptionDescriptor::string("cert_key", "./conf/vpn_cert.key", "TLS private key file")
        .env("LINK_CERT_KEY"),
    OptionDescriptor::string("ui_path", "./conf/", "admin UI directory").env("LINK_UI_PATH"),
    OptionDescriptor::string("files_path", "./conf/files", "external download directory")
        .env("LINK_FILES_PATH"),
    OptionDescriptor::string("log_path", "", "log directory, empty logs to stderr")
        .env("LINK_LOG_PATH"),
    OptionDescriptor::string("log_level", "info", "log level: debug, info, warn, error, fatal")
        .env("LINK_LOG_LEVEL"),
    OptionDescriptor::string("issuer", "XX Company VPN", "system name").env("LINK_ISSUER"),
    OptionDescriptor::string("admin_user", "admin", "admin username").env("LINK_ADMIN_USER"),
    OptionDescriptor::string(
        "admin_pass",
        "$2a$10$UQ7C.EoPifDeJh6d8.31TeSPQU7hM/NOM2/Gy0Pl0DmZ7Zpgn6l2W",
        "admin password hash (bcrypt)",
    )
    .env("LINK_ADMIN_PASS"),
    OptionDescriptor::string("jwt_secret", "", "JWT signing secret, at least 20 characters")
        .env("LINK_JWT_SECRET"),
    OptionDescriptor::string("link_mode", LINK_MODE_TUN, "virtual network mode: tun or tap")
        .env("LINK_LINK_MODE"),
    OptionDescriptor::string("ipv4_cidr", "192.168.10.0/24", "client IPv4 network")
        .env("LINK_IPV4_CIDR"),
    OptionDescriptor::string("ipv4_gateway", "192.168.10.1", "client IPv4 gateway")
        .env("LINK_IPV4_GATEWAY"),
    OptionDescriptor::string("ipv4_start", "192.168.10.100", "first leasable IPv4 address")
        .env("LINK_IPV4_START"),
    OptionDescriptor::string("ipv4_end", "192.168.10.200", "last leasable IPv4 address")
        .env("LINK_IPV4_END"),
    OptionDescriptor::int("ip_lease", 1_209_600, "IP lease time in seconds").env("LINK_IP_LEASE"),
    OptionDescriptor::int("max_client", 100, "maximum concurrent clients")
        .env("LINK_MAX_CLIENT"),
    OptionDescriptor::int("max_user_client", 3, "maximum concurrent clients per user")
        .env("LINK_MAX_USER_CLIENT"),
    OptionDescriptor::string("default_group", "one", "default user group")
        .env("LINK_DEFAULT_GROUP"),
    OptionDescriptor::int("cstp_keepalive", 20, "keepalive interval in seconds")
        .env("LINK_CSTP_KEEPALIVE"),
    OptionDescriptor::int("cstp_dpd", 30, "dead peer detection interval in seconds")
        .env("LINK_CSTP_DPD"),
    OptionDescriptor::int("mobile_keepalive", 50, "mobile keepalive interval in seconds")
        .env("LINK_MOBILE_KEEPALIVE"),
    OptionDescriptor::int("mobile_dpd", 60, "mobile dead peer detection interval in seconds")
        .env("LINK_MOBILE_DPD"),
    OptionDescriptor::int("session_timeout", 3600, "session timeout in seconds")
        .env("LINK_SESSION_TIMEOUT"),
    OptionDescriptor::int("auth_timeout", 0, "authentication timeout in seconds, 0 disables")
        .env("LINK_AUTH_TIMEOUT"),
];

/// Typed server configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Configurable)]
pub struct ServerConfig {
    pub server_addr: String,
    pub admin_addr: String,
    pub proxy_protocol: bool,
    #[option(path)]
    pub db_file: String,
    #[option(path)]
    pub cert_file: String,
    #[option(path)]
    pub cert_key: String,
    #[option(path)]
    pub ui_path: String,
    #[option(path)]
    pub files_path: String,
    #[option(path)]
    pub log_path: String,
    pub log_level: String,
    pub issuer: String,
    pub admin_user: String,
    pub admin_pass: String,
    pub jwt_secret: String,

    /// `tun` or `tap`.
    pub link_mode: String,
    pub ipv4_cidr: String,
    pub ipv4_gateway: String,
    pub ipv4_start: String,
    pub ipv4_end: String,
    pub ip_lease: i64,

    pub max_client: i64,
    pub max_user_client: i64,
    pub default_group: String,
    pub cstp_keepalive: i64,
    pub cstp_dpd: i64,
    pub mobile_keepalive: i64,
    pub mobile_dpd: i64,

    pub session_timeout: i64,
    pub auth_timeout: i64,
}

impl ServerConfig {
    pub fn is_tap(&self) -> bool {
        self.link_mode == LINK_MODE_TAP
    }
}

/// Builds the registry over [`OPTIONS`].
pub fn registry() -> ConfigResult<OptionRegistry> {
    OptionRegistry::new(OPTIONS)
}

/// Rules checked before the server starts.
pub fn validator() -> Validator<ServerConfig> {
    Validator::new()
        .with_rule(MinLength::new("jwt_secret", JWT_SECRET_MIN_LEN))
        .with_rule(OneOf::new("link_mode", &[LINK_MODE_TUN, LINK_MODE_TAP]))
}
