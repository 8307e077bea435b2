//! # Project Identifiers
//!
//! Resolution of user-typed project names into `org/repo` references.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectError {
    #[error("I need a project name")]
    Empty,
    #[error("No default organization is configured, so `{0}` needs to be written as org/repo")]
    NoDefaultOrg(String),
    #[error("`{0}` doesn't look like org/repo")]
    Malformed(String),
}

/// A resolved `org/repo` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRef {
    org: String,
    repo: String,
}

impl ProjectRef {
    /// Bare names get `default_org` prepended; `org/repo` is taken as is.
    pub fn resolve(name: &str, default_org: Option<&str>) -> Result<Self, ProjectError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ProjectError::Empty);
        }

        let (org, repo) = match name.split_once('/') {
            Some((org, repo)) => (org.to_string(), repo.to_string()),
            None => {
                let org = default_org
                    .filter(|org| !org.is_empty())
                    .ok_or_else(|| ProjectError::NoDefaultOrg(name.to_string()))?;
                (org.to_string(), name.to_string())
            }
        };

        if org.is_empty() || repo.is_empty() || repo.contains('/') {
            return Err(ProjectError::Malformed(name.to_string()));
        }

        Ok(Self { org, repo })
    }

    pub fn from_parts(org: &str, repo: &str) -> Self {
        Self {
            org: org.to_string(),
            repo: repo.to_string(),
        }
    }

    /// Percent-encoded `org/repo` for use as URL path segments.
    pub fn url_path(&self) -> String {
        format!(
            "{}/{}",
            urlencoding::encode(&self.org),
            urlencoding::encode(&self.repo)
        )
    }
}

impl fmt::Display for ProjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.org, self.repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_name_gets_default_org() {
        for name in ["widgets", "gadgets", "a", "with-dash.and.dots"] {
            let project = ProjectRef::resolve(name, Some("acme")).unwrap();
            assert_eq!(project.to_string(), format!("acme/{name}"));
        }
    }

    #[test]
    fn test_qualified_name_is_identity() {
        for name in ["acme/widgets", "other/thing", "x/y"] {
            let project = ProjectRef::resolve(name, Some("acme")).unwrap();
            assert_eq!(project.to_string(), name);
            assert_eq!(project.to_string().matches('/').count(), 1);
        }
    }

    #[test]
    fn test_bare_name_without_default_org() {
        assert_eq!(
            ProjectRef::resolve("widgets", None),
            Err(ProjectError::NoDefaultOrg("widgets".to_string()))
        );
        assert_eq!(
            ProjectRef::resolve("widgets", Some("")),
            Err(ProjectError::NoDefaultOrg("widgets".to_string()))
        );
    }

    #[test]
    fn test_malformed_names() {
        for name in ["/widgets", "acme/", "acme/widgets/extra"] {
            assert!(matches!(
                ProjectRef::resolve(name, Some("acme")),
                Err(ProjectError::Malformed(_))
            ));
        }
        assert_eq!(ProjectRef::resolve("  ", Some("acme")), Err(ProjectError::Empty));
    }

    #[test]
    fn test_url_path_escapes_segments() {
        let project = ProjectRef::from_parts("acme corp", "wid?gets");
        assert_eq!(project.url_path(), "acme%20corp/wid%3Fgets");
        assert_eq!(project.to_string(), "acme corp/wid?gets");
    }
}
