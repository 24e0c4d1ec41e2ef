use std::net::SocketAddr;

#[derive(Debug, thiserror::Error)]
pub(crate) enum HttpConfigError {
    #[error("invalid ROSTER_PORT: {0}")]
    InvalidPort(String),
    #[error("invalid ROSTER_BIND: {0}")]
    InvalidBind(String),
    #[error("invalid ROSTER_EVENTS_CAP: {0}")]
    InvalidEventsCapacity(String),
}

#[derive(Debug)]
pub(crate) struct HttpConfig {
    pub addr: SocketAddr,
    pub events_capacity: usize,
}

pub(crate) fn http_config_from_env() -> Result<HttpConfig, HttpConfigError> {
    build_config(
        std::env::var("ROSTER_BIND").ok().as_deref(),
        std::env::var("ROSTER_PORT").ok().as_deref(),
        std::env::var("ROSTER_EVENTS_CAP").ok().as_deref(),
    )
}

fn build_config(
    bind: Option<&str>,
    port: Option<&str>,
    events_cap: Option<&str>,
) -> Result<HttpConfig, HttpConfigError> {
    let bind = bind.unwrap_or("127.0.0.1");
    let port_raw = port.unwrap_or("8090");
    let port: u16 = port_raw
        .parse()
        .map_err(|_| HttpConfigError::InvalidPort(port_raw.to_string()))?;

    let events_capacity = events_cap
        .map(|raw| {
            raw.parse::<usize>()
                .ok()
                .filter(|cap| *cap > 0)
                .ok_or_else(|| HttpConfigError::InvalidEventsCapacity(raw.to_string()))
        })
        .transpose()? // Option<Result> -> Result<Option>
        .unwrap_or(256);

    let addr = format!("{bind}:{port}")
        .parse()
        .map_err(|_| HttpConfigError::InvalidBind(bind.to_string()))?;

    Ok(HttpConfig {
        addr,
        events_capacity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_env_is_unset() {
        let cfg = build_config(None, None, None).unwrap();
        assert_eq!(cfg.addr.to_string(), "127.0.0.1:8090");
        assert_eq!(cfg.events_capacity, 256);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let cfg = build_config(Some("0.0.0.0"), Some("9000"), Some("32")).unwrap();
        assert_eq!(cfg.addr.to_string(), "0.0.0.0:9000");
        assert_eq!(cfg.events_capacity, 32);
    }

    #[test]
    fn bad_values_are_rejected_with_the_offending_input() {
        let err = build_config(None, Some("not-a-port"), None).unwrap_err();
        assert_eq!(err.to_string(), "invalid ROSTER_PORT: not-a-port");
        let err = build_config(Some("nowhere"), None, None).unwrap_err();
        assert_eq!(err.to_string(), "invalid ROSTER_BIND: nowhere");
        let err = build_config(None, None, Some("0")).unwrap_err();
        assert_eq!(err.to_string(), "invalid ROSTER_EVENTS_CAP: 0");
    }
}
