use crate::{Error, Result};

const DEFAULT_NODE: &str = "smartroom";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub auth: Option<String>,
    pub node: String,
}

impl Config {
    /// Reads `FIREBASE_DATABASE_URL`, `FIREBASE_AUTH` and `SMARTROOM_NODE`.
    pub fn from_env() -> Result<Config> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let present = |name| lookup(name).filter(|value| !value.trim().is_empty());

        let database_url = present("FIREBASE_DATABASE_URL")
            .ok_or(Error::MissingVariable("FIREBASE_DATABASE_URL"))?;

        Ok(Config {
            database_url,
            auth: present("FIREBASE_AUTH"),
            node: present("SMARTROOM_NODE").unwrap_or_else(|| DEFAULT_NODE.to_string()),
        })
    }

    pub fn reference(&self) -> Result<firebase::Reference> {
        let database = firebase::Database::new(&self.database_url, self.auth.clone())?;
        Ok(database.reference(self.node.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&'static str, &str)]) -> Result<Config> {
        let vars: HashMap<&str, String> = vars
            .iter()
            .map(|(name, value)| (*name, value.to_string()))
            .collect();

        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[("FIREBASE_DATABASE_URL", "https://smartfan.firebaseio.com")]).unwrap();

        assert_eq!(
            config,
            Config {
                database_url: "https://smartfan.firebaseio.com".to_string(),
                auth: None,
                node: "smartroom".to_string(),
            }
        );
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("FIREBASE_DATABASE_URL", "https://smartfan.firebaseio.com"),
            ("FIREBASE_AUTH", "token"),
            ("SMARTROOM_NODE", "rooms/bedroom"),
        ])
        .unwrap();

        assert_eq!(config.auth.as_deref(), Some("token"));
        assert_eq!(config.node, "rooms/bedroom");

        let reference = config.reference().unwrap();
        assert_eq!(reference.path().to_string(), "/rooms/bedroom");
    }

    #[test]
    fn test_missing_url() {
        let result = config(&[("FIREBASE_DATABASE_URL", "  "), ("FIREBASE_AUTH", "token")]);

        assert!(matches!(
            result,
            Err(Error::MissingVariable("FIREBASE_DATABASE_URL"))
        ));
    }

    #[test]
    fn test_invalid_url() {
        let config = config(&[("FIREBASE_DATABASE_URL", "not a url")]).unwrap();

        assert!(matches!(config.reference(), Err(Error::Firebase(_))));
    }
}
