use super::Auditor;
use crate::Result;
use crate::fetch::{FetchError, Fetcher};
use crate::governance::{Category, Contact, Group, Person};
use std::io::Write;

impl<F: Fetcher, W: Write> Auditor<'_, F, W> {
    pub(super) fn audit_group(&mut self, category: Category, group: &Group) -> Result<()> {
        tracing::debug!(category = category.prefix(), dir = %group.dir, "auditing group");

        if group.dir.is_empty() {
            self.out.warning("missing 'dir' key")?;
        }
        if group.name.is_empty() {
            self.out.warning("missing 'name' key")?;
        }
        self.out.section(format!(
            "Processing {} [{}/{}]",
            category.prefix(),
            group.dir,
            group.name
        ))?;

        // Derived names are meaningless without a display name, and an empty
        // stored value has already been reported as missing.
        if !group.name.is_empty() {
            let expected_dir = group.dir_name(category);
            if !group.dir.is_empty() && expected_dir != group.dir {
                self.out
                    .error(format!("expected dir: {}, got: {}", expected_dir, group.dir))?;
            }
            let expected_label = group.label_name(category);
            if !group.label.is_empty() && expected_label != group.label {
                self.out.error(format!(
                    "expected label: {}, got: {}",
                    expected_label, group.label
                ))?;
            }
        }

        if category == Category::Sig {
            if group.mission_statement.trim().is_empty() {
                self.out.error("missing 'mission_statement' key")?;
            }
            if group.charter_link.is_empty() {
                self.out.error("missing 'charter_link' key")?;
            } else {
                self.audit_charter_link(group)?;
            }
        }
        self.audit_stakeholders(category, group)?;
        if group.label.is_empty() {
            self.out.warning("missing 'label' key")?;
        }
        self.audit_leadership(category, group)?;
        if group.meetings.is_empty() {
            self.out.warning("missing 'meetings' key")?;
        }
        self.audit_contact(&group.contact)?;

        if category.may_own_subprojects() {
            if group.subprojects.is_empty() {
                self.out.warning("missing 'subprojects' key")?;
            } else {
                self.audit_subprojects(group)?;
            }
        } else if !group.subprojects.is_empty() {
            self.out.error(format!(
                "only sigs and committees can own code / have subprojects, found: {} subprojects",
                group.subprojects.len()
            ))?;
        }
        Ok(())
    }

    fn audit_leadership(&mut self, category: Category, group: &Group) -> Result<()> {
        let leadership = &group.leadership;
        let sig = category == Category::Sig;

        match leadership.chairs.len() {
            0 => self
                .out
                .warning("missing 'chairs' key (in 'leadership' section)")?,
            1 if sig => self.out.warning(
                "please consider adding more folks in as 'chairs' (in 'leadership' section)",
            )?,
            _ => {}
        }
        if leadership.tech_leads.is_empty() {
            self.out
                .warning("missing 'tech_leads' key (in 'leadership' section)")?;
            if sig {
                self.out.warning(
                    "if chairs are serving as tech leads, please add them explicitly in 'tech_leads' key (in 'leadership' section)",
                )?;
            }
        }
        for person in leadership.everyone() {
            self.audit_person("leadership", person)?;
        }
        Ok(())
    }

    pub(super) fn audit_person(&mut self, section: &str, person: &Person) -> Result<()> {
        let who = if person.name.is_empty() {
            String::new()
        } else {
            format!(" for {}", person.name)
        };
        if person.name.is_empty() {
            self.out
                .warning(format!("missing 'name' key in {}", section))?;
        }
        if person.github.is_empty() {
            self.out
                .warning(format!("missing 'github' key in {}{}", section, who))?;
        }
        if person.company.is_empty() {
            self.out
                .optional(format!("missing 'company' key in {}{}", section, who))?;
        }
        Ok(())
    }

    pub(super) fn audit_contact(&mut self, contact: &Contact) -> Result<()> {
        if contact.slack.is_empty() {
            self.out.warning("missing 'slack' in contact")?;
        }
        if contact.mailing_list.is_empty() {
            self.out.warning("missing 'mailing_list' in contact")?;
        }
        if contact.private_mailing_list.is_empty() {
            self.out.optional("missing 'private_mailing_list' in contact")?;
        }
        if contact.github_teams.is_empty() {
            self.out.optional("missing 'teams' in contact")?;
        }
        if let Some(liaison) = &contact.liaison {
            self.audit_person("contact/liaison", liaison)?;
        }
        Ok(())
    }

    fn audit_charter_link(&mut self, group: &Group) -> Result<()> {
        let link = group.charter_link.as_str();
        if link.starts_with("http://") || link.starts_with("https://") {
            match self.fetcher.fetch(link) {
                Ok(_) | Err(FetchError::Body(_)) => {}
                Err(e) => self.out.warning(format!(
                    "unable to reach url for 'charter_link' - {} - {}",
                    link, e
                ))?,
            }
        } else {
            let path = self.config.working_dir.join(&group.dir).join(link);
            if !path.exists() {
                self.out.warning(format!(
                    "missing file for 'charter_link' - {}",
                    path.display()
                ))?;
            }
        }
        Ok(())
    }

    /// Working groups must list stakeholder sigs, each matching a sig by
    /// exact display name or exact directory name. Other categories may not
    /// list any.
    fn audit_stakeholders(&mut self, category: Category, group: &Group) -> Result<()> {
        if category != Category::WorkingGroup {
            if !group.stakeholder_sigs.is_empty() {
                self.out.error(format!(
                    "only 'workinggroups' may have stakeholder_sigs, found: {} entries",
                    group.stakeholder_sigs.len()
                ))?;
            }
            return Ok(());
        }

        if group.stakeholder_sigs.is_empty() {
            return self.out.warning("missing 'stakeholder_sigs' key");
        }
        let context = self.context;
        let sigs = context.groups(Category::Sig);
        for stakeholder in &group.stakeholder_sigs {
            let known = sigs
                .iter()
                .any(|sig| sig.name == *stakeholder || sig.dir == *stakeholder);
            if !known {
                self.out.warning(format!(
                    "stakeholder_sigs entry '{}' not found (typo?)",
                    stakeholder
                ))?;
            }
        }
        Ok(())
    }
}
