//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check every manifest entry names a well-formed location and a known view
//! - Detect duplicate route locations
//! - Validate value ranges (timeouts > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;
use std::str::FromStr;

use thiserror::Error;

use crate::config::schema::ServerConfig;
use crate::routing::matcher::{LocationError, ModuleLocation};
use crate::views::ViewId;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid bind address `{0}`")]
    InvalidBindAddress(String),

    #[error("invalid metrics address `{0}`")]
    InvalidMetricsAddress(String),

    #[error("request timeout must be greater than zero")]
    ZeroTimeout,

    #[error("body size limit must be greater than zero")]
    ZeroBodyLimit,

    #[error("site title must not be empty")]
    EmptyTitle,

    #[error("route `{location}`: {reason}")]
    InvalidRoute {
        location: String,
        reason: LocationError,
    },

    #[error("route `{location}` names unknown view `{view}`")]
    UnknownView { location: String, view: String },

    #[error("duplicate route location `{0}`")]
    DuplicateRoute(String),
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.limits.max_body_bytes == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if config.site.title.trim().is_empty() {
        errors.push(ValidationError::EmptyTitle);
    }

    let mut seen = HashSet::new();
    for route in &config.routes.entries {
        match ModuleLocation::parse(&route.location) {
            Ok(location) => {
                if !seen.insert(location.clone()) {
                    errors.push(ValidationError::DuplicateRoute(location.to_string()));
                }
            }
            Err(reason) => errors.push(ValidationError::InvalidRoute {
                location: route.location.clone(),
                reason,
            }),
        }

        if ViewId::from_str(&route.view).is_err() {
            errors.push(ValidationError::UnknownView {
                location: route.location.clone(),
                view: route.view.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RouteConfig;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ServerConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ServerConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.timeouts.request_secs = 0;
        config.site.title = "  ".into();
        config.routes.entries = vec![
            RouteConfig::new("admin", "admin"),
            RouteConfig::new("admin", "post_list"),
            RouteConfig::new("admin//posts", "post_list"),
            RouteConfig::new("post", "gallery"),
        ];

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::InvalidBindAddress("not-an-address".into()),
                ValidationError::ZeroTimeout,
                ValidationError::EmptyTitle,
                ValidationError::DuplicateRoute("admin".into()),
                ValidationError::InvalidRoute {
                    location: "admin//posts".into(),
                    reason: LocationError::EmptySegment,
                },
                ValidationError::UnknownView {
                    location: "post".into(),
                    view: "gallery".into(),
                },
            ]
        );
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = ServerConfig::default();
        config.observability.metrics_address = "nowhere".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::InvalidMetricsAddress("nowhere".into())]
        );
    }
}
