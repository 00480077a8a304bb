mod display;

pub mod app;
pub mod github;
pub mod storage;

use anyhow::{bail, Error};
use core::fmt;
use std::str::FromStr;

/// Identifies a repository by the login of its owner and its name.
#[derive(PartialEq, Clone, Debug)]
pub struct RepositoryId {
    pub owner: String,
    pub name: String,
}

impl RepositoryId {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        let owner = owner.into();
        let name = name.into();
        Self { owner, name }
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepositoryId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sep = s.find('/');
        let r = match sep {
            Some(x) => {
                let name = &s[x + 1..];
                if name.is_empty() {
                    bail!("Expecting in `:owner/:name` format, but was `{}`.", s)
                }
                let name = name.to_owned();
                let owner = s[..x].to_owned();
                if owner.is_empty() {
                    bail!("Expecting in `:owner/:name` format, but was `{}`.", s)
                }
                Self { owner, name }
            }
            None => {
                bail!("Expecting in `:owner/:name` format, but was `{}`.", s)
            }
        };
        Ok(r)
    }
}

#[cfg(test)]
#[test]
fn test_repository_id_display() {
    assert_eq!(
        RepositoryId::new("facebook", "react").to_string(),
        "facebook/react"
    );
}

#[cfg(test)]
#[test]
fn test_parse_repository_id() {
    // trivial case
    assert_eq!(
        RepositoryId {
            owner: "facebook".to_owned(),
            name: "react".to_owned()
        },
        "facebook/react".parse().unwrap()
    );
    // missing owner
    assert_eq!(
        "Expecting in `:owner/:name` format, but was `react`.",
        "react".parse::<RepositoryId>().unwrap_err().to_string()
    );
    // missing name
    assert_eq!(
        "Expecting in `:owner/:name` format, but was `facebook/`.",
        "facebook/".parse::<RepositoryId>().unwrap_err().to_string()
    );
    // empty owner
    assert_eq!(
        "Expecting in `:owner/:name` format, but was `/react`.",
        "/react".parse::<RepositoryId>().unwrap_err().to_string()
    );
    // double separator, name keeps the rest
    assert_eq!(
        RepositoryId {
            owner: "facebook".to_owned(),
            name: "re/act".to_owned()
        },
        "facebook/re/act".parse().unwrap()
    );
}
