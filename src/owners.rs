//! OWNERS files and the URLs subprojects use to point at them.
//!
//! Accepted URL shapes:
//!   https://raw.githubusercontent.com/<org>/<repo>/<branch>/<path>
//!   https://github.com/<org>/<repo>/(blob|tree)/<branch>/<path>

use crate::Result;
use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeMap;

pub const RAW_GITHUB_URL_RE: &str =
    r"^https://raw\.githubusercontent\.com/(?P<org>[^/]+)/(?P<repo>[^/]+)/(?P<branch>[^/]+)/(?P<path>.*)";
pub const GITHUB_URL_RE: &str =
    r"^https://github\.com/(?P<org>[^/]+)/(?P<repo>[^/]+)/(blob|tree)/(?P<branch>[^/]+)/(?P<path>.*)";

/// Parsed OWNERS file. Only the keys the audit looks at are modelled.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OwnersInfo {
    #[serde(default)]
    pub filters: BTreeMap<String, FiltersInfo>,

    #[serde(default)]
    pub approvers: Vec<String>,

    #[serde(default)]
    pub reviewers: Vec<String>,

    #[serde(default)]
    pub required_reviewers: Vec<String>,

    #[serde(default)]
    pub labels: Vec<String>,

    #[serde(default)]
    #[allow(dead_code)] // schema field, not audited
    pub emeritus_approvers: Vec<String>,

    #[serde(default)]
    #[allow(dead_code)] // schema field, not audited
    pub options: DirOptions,
}

/// Per-path-regex section of an OWNERS file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FiltersInfo {
    #[serde(default)]
    pub approvers: Vec<String>,

    #[serde(default)]
    pub reviewers: Vec<String>,

    #[serde(default)]
    pub required_reviewers: Vec<String>,

    #[serde(default)]
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[allow(dead_code)] // schema field, not audited
pub struct DirOptions {
    #[serde(default)]
    pub no_parent_owners: bool,
}

impl OwnersInfo {
    pub fn from_yaml(text: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    /// Top-level labels followed by the labels of every filter.
    pub fn all_labels(&self) -> impl Iterator<Item = &str> {
        self.labels
            .iter()
            .chain(self.filters.values().flat_map(|f| &f.labels))
            .map(String::as_str)
    }

    /// Approvers, reviewers and required reviewers, top level and filters.
    pub fn all_owners(&self) -> impl Iterator<Item = &str> {
        let top = self
            .approvers
            .iter()
            .chain(&self.reviewers)
            .chain(&self.required_reviewers);
        let filtered = self.filters.values().flat_map(|f| {
            f.approvers
                .iter()
                .chain(&f.reviewers)
                .chain(&f.required_reviewers)
        });
        top.chain(filtered).map(String::as_str)
    }
}

/// Components of an accepted owner URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerUrl {
    pub org: String,
    pub repo: String,
    pub branch: String,
    pub path: String,
}

impl OwnerUrl {
    /// `org/repo`
    pub fn repository(&self) -> String {
        format!("{}/{}", self.org, self.repo)
    }
}

/// The two accepted owner URL shapes, compiled once.
#[derive(Debug, Clone)]
pub struct OwnerUrlPatterns {
    raw: Regex,
    web: Regex,
}

impl OwnerUrlPatterns {
    pub fn new() -> Result<Self> {
        Ok(Self {
            raw: Regex::new(RAW_GITHUB_URL_RE)?,
            web: Regex::new(GITHUB_URL_RE)?,
        })
    }

    pub fn parse(&self, url: &str) -> Option<OwnerUrl> {
        let caps = self
            .raw
            .captures(url)
            .or_else(|| self.web.captures(url))?;
        Some(OwnerUrl {
            org: caps.name("org")?.as_str().to_string(),
            repo: caps.name("repo")?.as_str().to_string(),
            branch: caps.name("branch")?.as_str().to_string(),
            path: caps.name("path")?.as_str().to_string(),
        })
    }
}
