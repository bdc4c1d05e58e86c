use super::Auditor;
use crate::Result;
use crate::fetch::{FetchError, Fetcher};
use crate::governance::{Group, Subproject};
use crate::owners::{GITHUB_URL_RE, OwnersInfo, RAW_GITHUB_URL_RE};
use std::io::Write;

impl<F: Fetcher, W: Write> Auditor<'_, F, W> {
    pub(super) fn audit_subprojects(&mut self, group: &Group) -> Result<()> {
        for subproject in &group.subprojects {
            self.out.section(format!(
                "Processing subproject {} under {}",
                subproject.name, group.dir
            ))?;
            if subproject.name.is_empty() {
                self.out.warning("missing 'name' key")?;
            }
            if subproject.description.is_empty() {
                self.out.warning("missing 'description' key")?;
            }
            match &subproject.contact {
                Some(contact) => self.audit_contact(contact)?,
                None => self.out.warning("missing 'contact' key")?,
            }
            if subproject.owners.is_empty() {
                self.out.error("missing 'owners' key")?;
            } else {
                self.audit_owners_files(group, subproject)?;
            }
            if subproject.meetings.is_empty() {
                self.out.warning("missing 'meetings' key")?;
            }
        }
        Ok(())
    }

    fn audit_owners_files(&mut self, group: &Group, subproject: &Subproject) -> Result<()> {
        self.out.section(format!(
            "Processing owners files for {}/{}",
            group.dir, subproject.name
        ))?;

        for url in &subproject.owners {
            let Some(owner_url) = self.patterns.parse(url) else {
                self.out.error(format!(
                    "owner urls should match regexp {} or {}, found: {}",
                    RAW_GITHUB_URL_RE, GITHUB_URL_RE, url
                ))?;
                continue;
            };

            let body = match self.fetcher.fetch(url) {
                Ok(body) => body,
                Err(e @ FetchError::Body(_)) => {
                    self.out.error(format!(
                        "unable to read owners file at {} url - {}",
                        url, e
                    ))?;
                    continue;
                }
                Err(e) => {
                    self.out.warning(format!("stale url {} - {}", url, e))?;
                    continue;
                }
            };

            let info = match OwnersInfo::from_yaml(&body) {
                Ok(info) => info,
                Err(e) => {
                    self.out.error(format!(
                        "unable to parse owners file at {} url - {}",
                        url, e
                    ))?;
                    continue;
                }
            };

            // Only the primary repository's OWNERS files are held to group labels.
            if owner_url.repository() != self.config.primary_repository {
                tracing::debug!(
                    repository = %owner_url.repository(),
                    branch = %owner_url.branch,
                    path = %owner_url.path,
                    "skipping label checks"
                );
                continue;
            }
            self.audit_owners_info(group, &info, url)?;
        }
        Ok(())
    }

    fn audit_owners_info(&mut self, group: &Group, info: &OwnersInfo, url: &str) -> Result<()> {
        let labels: Vec<&str> = info.all_labels().collect();
        if labels.is_empty() {
            self.out.warning(format!(
                "file at url does not have any labels. Please ensure OWNERS file has labels reflecting {} - {}",
                group.dir, url
            ))?;
        }

        // A group without a label was already reported; nothing to match against.
        let label = group.label.as_str();
        if label.is_empty() {
            return Ok(());
        }

        if !labels.is_empty() && !labels.iter().any(|l| l.ends_with(label)) {
            self.out.warning(format!(
                "file does not have a label that ends with {}. Please ensure OWNERS file has labels reflecting {} - {}",
                label, group.dir, url
            ))?;
        }
        if !info.all_owners().any(|owner| owner.contains(label)) {
            self.out.warning(format!(
                "file at url does not seem to have approvers/reviewers with the sig alias (defined in OWNERS_ALIASES). \
                 Please consider adding a sig alias to OWNERS_ALIASES and add them to approvers/reviewers in this file - {}",
                url
            ))?;
        }
        Ok(())
    }
}
