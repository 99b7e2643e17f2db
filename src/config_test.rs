use super::*;

#[test]
fn parse_host_defaults_when_absent_or_blank() {
    assert_eq!(parse_host(None).unwrap(), DEFAULT_HOST);
    assert_eq!(parse_host(Some("  ")).unwrap(), DEFAULT_HOST);
}

#[test]
fn parse_host_accepts_ip_literals() {
    assert_eq!(parse_host(Some("127.0.0.1")).unwrap(), IpAddr::V4(Ipv4Addr::LOCALHOST));
    assert!(parse_host(Some("::1")).unwrap().is_ipv6());
}

#[test]
fn parse_host_rejects_names() {
    let err = parse_host(Some("localhost")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidHost(ref v) if v == "localhost"));
    assert_eq!(err.to_string(), "invalid HOST: localhost");
}

#[test]
fn parse_port_defaults_and_parses() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
}

#[test]
fn parse_port_rejects_out_of_range_and_garbage() {
    assert!(matches!(parse_port(Some("70000")), Err(ConfigError::InvalidPort(_))));
    assert!(matches!(parse_port(Some("http")), Err(ConfigError::InvalidPort(_))));
}

/// Only test in this crate that touches `HOST`/`PORT`.
#[test]
fn from_env_combines_host_and_port() {
    unsafe {
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", "4100");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.addr, SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 4100));

    unsafe {
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");
    }
}
