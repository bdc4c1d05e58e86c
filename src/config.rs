use crate::Result;
use anyhow::bail;
use clap::Args;
use std::ffi::OsString;
use std::path::PathBuf;

pub const DEFAULT_PRIMARY_REPOSITORY: &str = "kubernetes/kubernetes";

#[derive(Debug, Clone, Args)]
pub struct AuditArgs {
    /// Group names or directories to audit (substring match), or `all`.
    #[arg(required = true, value_name = "NAME|all")]
    pub names: Vec<String>,

    /// Path to the kubernetes source checkout [default: $GOPATH/src/k8s.io/kubernetes]
    #[arg(long, env = "KUBERNETES_DIRECTORY")]
    pub kubernetes_directory: Option<PathBuf>,

    /// sigs.yaml to audit; searched upward from the working directory by default.
    #[arg(long)]
    pub sigs_yaml: Option<PathBuf>,

    /// Repository whose OWNERS files must carry the group label and alias.
    #[arg(long, default_value = DEFAULT_PRIMARY_REPOSITORY)]
    pub primary_repository: String,
}

/// Everything an audit run needs, resolved before any group is examined.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Base for relative charter links (`<working_dir>/<group dir>/<link>`).
    pub working_dir: PathBuf,
    pub kubernetes_directory: PathBuf,
    pub sigs_yaml: Option<PathBuf>,
    pub primary_repository: String,
    pub names: Vec<String>,
}

impl AuditConfig {
    pub fn resolve(args: AuditArgs, working_dir: PathBuf, gopath: Option<OsString>) -> Result<Self> {
        let kubernetes_directory = args
            .kubernetes_directory
            .or_else(|| default_kubernetes_directory(gopath))
            .unwrap_or_default();
        if kubernetes_directory.as_os_str().is_empty() || !kubernetes_directory.exists() {
            bail!(
                "please use --kubernetes-directory to set the path to the kubernetes directory. {} does not exist",
                kubernetes_directory.display()
            );
        }

        check_repository(&args.primary_repository)?;

        Ok(Self {
            working_dir,
            kubernetes_directory,
            sigs_yaml: args.sigs_yaml,
            primary_repository: args.primary_repository,
            names: args.names,
        })
    }
}

/// `$GOPATH/src/k8s.io/kubernetes`, when GOPATH is set.
pub fn default_kubernetes_directory(gopath: Option<OsString>) -> Option<PathBuf> {
    gopath
        .filter(|v| !v.is_empty())
        .map(|v| PathBuf::from(v).join("src").join("k8s.io").join("kubernetes"))
}

fn check_repository(repo: &str) -> Result<()> {
    match repo.split_once('/') {
        Some((org, name)) if !org.is_empty() && !name.is_empty() && !name.contains('/') => Ok(()),
        _ => bail!("--primary-repository must look like org/repo, got: {}", repo),
    }
}
