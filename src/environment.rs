use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the deployments of the learning platform the client can talk to.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Local development server.
    Local,
    /// The public platform.
    #[default]
    Production,
    /// Any other deployment, addressed by its base URL.
    Custom { base_url: String },
}

impl Environment {
    /// Resolves the environment from `ACADEMY_API_URL` and `ACADEMY_ENVIRONMENT`.
    ///
    /// An explicit API URL always wins over the named environment.
    pub fn from_env() -> Self {
        if let Ok(url) = std::env::var("ACADEMY_API_URL") {
            if !url.trim().is_empty() {
                return Environment::Custom {
                    base_url: url.trim().to_string(),
                };
            }
        }
        std::env::var("ACADEMY_ENVIRONMENT")
            .unwrap_or_default()
            .parse::<Environment>()
            .unwrap_or_default()
    }

    /// Returns the platform base URL associated with the environment.
    pub fn base_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:5000".to_string(),
            Environment::Production => "https://academy.example.com".to_string(),
            Environment::Custom { base_url } => base_url.clone(),
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Production => write!(f, "Production"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.base_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_environments() {
        assert_eq!("local".parse::<Environment>(), Ok(Environment::Local));
        assert_eq!(
            "Production".parse::<Environment>(),
            Ok(Environment::Production)
        );
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn test_custom_environment_uses_given_url() {
        let env = Environment::Custom {
            base_url: "http://10.0.0.2:8080".to_string(),
        };
        assert_eq!(env.base_url(), "http://10.0.0.2:8080");
        assert_eq!(env.to_string(), "Custom");
    }
}
