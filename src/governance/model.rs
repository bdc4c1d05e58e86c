//! sigs.yaml schema.
//!
//! All fields default to empty so that a partially filled file still loads;
//! the auditor is the one reporting what is missing.

use serde::Deserialize;

/// Group category, in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Sig,
    WorkingGroup,
    UserGroup,
    Committee,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Sig,
        Category::WorkingGroup,
        Category::UserGroup,
        Category::Committee,
    ];

    /// Short tag used in directory names and labels (`sig-apps`, `wg-...`).
    pub fn prefix(self) -> &'static str {
        match self {
            Category::Sig => "sig",
            Category::WorkingGroup => "wg",
            Category::UserGroup => "ug",
            Category::Committee => "committee",
        }
    }

    /// Only sigs and committees may own code.
    pub fn may_own_subprojects(self) -> bool {
        matches!(self, Category::Sig | Category::Committee)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Context {
    #[serde(default)]
    pub sigs: Vec<Group>,

    #[serde(default)]
    pub workinggroups: Vec<Group>,

    #[serde(default)]
    pub usergroups: Vec<Group>,

    #[serde(default)]
    pub committees: Vec<Group>,
}

impl Context {
    pub fn groups(&self, category: Category) -> &[Group] {
        match category {
            Category::Sig => &self.sigs,
            Category::WorkingGroup => &self.workinggroups,
            Category::UserGroup => &self.usergroups,
            Category::Committee => &self.committees,
        }
    }

    /// Every group tagged with its category, sigs first, then working groups,
    /// user groups and committees; file order within a category.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &Group)> + '_ {
        Category::ALL
            .into_iter()
            .flat_map(move |c| self.groups(c).iter().map(move |g| (c, g)))
    }

    pub fn group_count(&self) -> usize {
        Category::ALL.iter().map(|c| self.groups(*c).len()).sum()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Group {
    #[serde(default)]
    pub dir: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub mission_statement: String,

    /// URL or a path relative to the group directory.
    #[serde(default)]
    pub charter_link: String,

    /// Display names of sigs (working groups only).
    #[serde(default)]
    pub stakeholder_sigs: Vec<String>,

    #[serde(default)]
    pub label: String,

    #[serde(default)]
    pub leadership: Leadership,

    #[serde(default)]
    pub meetings: Vec<Meeting>,

    #[serde(default)]
    pub contact: Contact,

    #[serde(default)]
    pub subprojects: Vec<Subproject>,
}

impl Group {
    /// Expected directory, e.g. `("sig", "Cluster Lifecycle")` -> `sig-cluster-lifecycle`.
    pub fn dir_name(&self, category: Category) -> String {
        format!("{}-{}", category.prefix(), slug(&self.name))
    }

    /// Expected label: the directory name without its category prefix.
    pub fn label_name(&self, category: Category) -> String {
        let dir = self.dir_name(category);
        let prefix = format!("{}-", category.prefix());
        dir.replacen(&prefix, "", 1)
    }
}

fn slug(name: &str) -> String {
    name.replace(' ', "-").to_lowercase()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Leadership {
    #[serde(default)]
    pub chairs: Vec<Person>,

    #[serde(default)]
    pub tech_leads: Vec<Person>,

    #[serde(default)]
    pub emeritus_leads: Vec<Person>,
}

impl Leadership {
    /// Chairs, then technical leads, then emeritus leads.
    pub fn everyone(&self) -> impl Iterator<Item = &Person> {
        self.chairs
            .iter()
            .chain(&self.tech_leads)
            .chain(&self.emeritus_leads)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub name: String,

    /// GitHub handle.
    #[serde(default)]
    pub github: String,

    #[serde(default)]
    pub company: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub slack: String,

    #[serde(default)]
    pub mailing_list: String,

    #[serde(default)]
    pub private_mailing_list: String,

    #[serde(default, rename = "teams")]
    pub github_teams: Vec<GithubTeam>,

    #[serde(default)]
    pub liaison: Option<Person>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[allow(dead_code)] // schema fields, not audited
pub struct GithubTeam {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[allow(dead_code)] // schema fields, not audited
pub struct Meeting {
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub day: String,

    #[serde(default)]
    pub time: String,

    #[serde(default)]
    pub tz: String,

    #[serde(default)]
    pub frequency: String,

    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub archive_url: String,

    #[serde(default)]
    pub recordings_url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Subproject {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// No fallback to the group contact when absent.
    #[serde(default)]
    pub contact: Option<Contact>,

    /// OWNERS file URLs.
    #[serde(default)]
    pub owners: Vec<String>,

    #[serde(default)]
    pub meetings: Vec<Meeting>,
}
