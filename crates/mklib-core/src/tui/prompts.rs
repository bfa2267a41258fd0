//! Scaffolding flow: resolve the target, confirm, write files, install, init

use super::confirm::confirm;
use crate::args::{allowed_values, parse_args};
use crate::runtime::{self, PackageManager, DEV_DEPENDENCIES};
use crate::templates::files::MANIFEST_FILE;
use crate::templates::{GeneratedFiles, ProjectOptions};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

/// How a run ended without an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Project created in this directory
    Created(PathBuf),
    /// The operator rejected the confirmation prompt
    Cancelled,
    /// Help or version text was printed
    Help,
}

/// Problems with how the tool was invoked
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error(
        "{} already contains a package.json. Pass a project name to create it in a new folder: mklib <name>",
        .dir.display()
    )]
    ExistingProject { dir: PathBuf },

    #[error(
        "{} is not empty. Pass a project name or run mklib in an empty directory: mklib <name>",
        .dir.display()
    )]
    NotEmpty { dir: PathBuf },

    #[error("cannot derive a project name from {}", .dir.display())]
    InvalidName { dir: PathBuf },
}

/// Where the project goes and what it is called
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub dir: PathBuf,
    pub name: String,
}

/// Pick the project directory and name.
///
/// An explicit `name` is created below `cwd`. Without one, an empty `cwd`
/// becomes the project itself.
pub fn resolve_target(
    cwd: &Path,
    name: Option<&str>,
    cwd_is_empty: bool,
    cwd_has_manifest: bool,
) -> Result<Target, UsageError> {
    let dir = match name {
        Some(name) => cwd.join(name),
        None if cwd_is_empty => cwd.to_path_buf(),
        None if cwd_has_manifest => {
            return Err(UsageError::ExistingProject {
                dir: cwd.to_path_buf(),
            })
        }
        None => {
            return Err(UsageError::NotEmpty {
                dir: cwd.to_path_buf(),
            })
        }
    };

    let name = dir
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .ok_or_else(|| UsageError::InvalidName { dir: dir.clone() })?
        .to_string();

    Ok(Target { dir, name })
}

/// Usage text
pub fn usage() -> String {
    format!(
        "Usage: mklib [name] [flags]\n\n\
         Creates a TypeScript library project in ./name, or in the current\n\
         directory when it is empty and no name is given.\n\n\
         Flags:\n  \
         -y, --y             Skip the confirmation prompt\n  \
         -p, --p=<manager>   Package manager: {} (default: {})\n  \
         -h, --help          Show this help\n      \
         --version       Show the version",
        allowed_values::<PackageManager>().join(", "),
        PackageManager::default()
    )
}

/// Run the scaffolder for raw command-line `argv` (program name excluded)
pub async fn run(argv: Vec<String>, cwd: &Path, cli_version: &str) -> Result<Outcome> {
    let cwd_is_empty = dir_is_empty(cwd).await?;
    let (flags, positionals) = parse_args(argv);

    if flags.bool_or("help", false)? || flags.bool_or("h", false)? {
        println!("{}", usage());
        return Ok(Outcome::Help);
    }
    if flags.bool_or("version", false)? {
        println!("mklib {}", cli_version);
        return Ok(Outcome::Help);
    }

    let manifest_path = cwd.join(MANIFEST_FILE);
    let cwd_has_manifest = fs::try_exists(&manifest_path)
        .await
        .with_context(|| format!("Failed to check for {}", manifest_path.display()))?;
    let target = resolve_target(
        cwd,
        positionals.first().map(String::as_str),
        cwd_is_empty,
        cwd_has_manifest,
    )?;

    let skip_confirm = flags.bool_or("y", false)?;
    let manager = if flags.contains("p") {
        flags.one_of::<PackageManager>("p")?
    } else {
        PackageManager::default()
    };

    cliclack::intro("mklib")?;

    if positionals.len() > 1 {
        cliclack::log::warning(format!(
            "Ignoring extra arguments: {}",
            positionals[1..].join(" ")
        ))?;
    }

    if target.dir != cwd && !dir_is_empty(&target.dir).await.unwrap_or(true) {
        cliclack::log::warning(format!(
            "{} already exists and is not empty",
            target.dir.display()
        ))?;
    }

    if !skip_confirm {
        cliclack::log::info(format!(
            "Directory:       {}\nName:            {}\nPackage manager: {}",
            target.dir.display(),
            target.name,
            manager
        ))?;

        if !confirm("Create project? (Y/n) ", true)? {
            cliclack::outro_cancel("Setup cancelled.")?;
            return Ok(Outcome::Cancelled);
        }
    }

    let identity = runtime::lookup_identity().await?;
    match (identity.name(), identity.email()) {
        (Some(name), Some(email)) => cliclack::log::info(format!("Author: {} <{}>", name, email))?,
        (Some(name), None) => cliclack::log::info(format!("Author: {}", name))?,
        _ => cliclack::log::warning("No git user.name configured, leaving the author out")?,
    }

    let options = ProjectOptions::new(target.name.clone(), manager, identity);
    create_project(&options, &target.dir).await?;

    cliclack::log::step(format!(
        "Installing {} with {}",
        DEV_DEPENDENCIES.join(", "),
        manager
    ))?;
    manager.install_dev_dependencies(&target.dir).await?;

    cliclack::log::step("Initializing git repository")?;
    runtime::init_repository(&target.dir).await?;

    print_next_steps(cwd, &target.dir, manager)?;

    Ok(Outcome::Created(target.dir))
}

async fn create_project(options: &ProjectOptions, project_dir: &Path) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Creating project...");

    let files = GeneratedFiles::for_project(options)?;
    match files.write_all(project_dir).await {
        Ok(written) => {
            spinner.stop(format!(
                "Created {} files in {}",
                written.len(),
                project_dir.display()
            ));
            Ok(())
        }
        Err(e) => {
            spinner.stop("Failed to create project");
            Err(e)
        }
    }
}

async fn dir_is_empty(dir: &Path) -> Result<bool> {
    let mut entries = fs::read_dir(dir)
        .await
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;
    Ok(entries.next_entry().await?.is_none())
}

fn print_next_steps(cwd: &Path, project_dir: &Path, manager: PackageManager) -> Result<()> {
    let mut steps = Vec::new();
    if project_dir != cwd {
        steps.push(format!("cd {}", project_dir.display()));
    }
    steps.push(format!("{} run build", manager));

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_name() {
        let target = resolve_target(Path::new("/work"), Some("my-lib"), false, true).unwrap();
        assert_eq!(target.dir, PathBuf::from("/work/my-lib"));
        assert_eq!(target.name, "my-lib");
    }

    #[test]
    fn test_empty_cwd_becomes_project() {
        let target = resolve_target(Path::new("/work/fresh"), None, true, false).unwrap();
        assert_eq!(target.dir, PathBuf::from("/work/fresh"));
        assert_eq!(target.name, "fresh");
    }

    #[test]
    fn test_non_empty_cwd_without_name() {
        let err = resolve_target(Path::new("/work/stuff"), None, false, false).unwrap_err();
        assert_eq!(
            err,
            UsageError::NotEmpty {
                dir: PathBuf::from("/work/stuff")
            }
        );
        assert!(err.to_string().contains("not empty"));
    }

    #[test]
    fn test_existing_project_without_name() {
        let err = resolve_target(Path::new("/work/app"), None, false, true).unwrap_err();
        assert!(matches!(err, UsageError::ExistingProject { .. }));
        assert!(err.to_string().contains("package.json"));
    }

    #[test]
    fn test_root_has_no_name() {
        let err = resolve_target(Path::new("/"), None, true, false).unwrap_err();
        assert!(matches!(err, UsageError::InvalidName { .. }));
    }

    #[test]
    fn test_usage_lists_managers() {
        let text = usage();
        assert!(text.contains("bun, pnpm, npm, yarn"));
        assert!(text.contains("(default: bun)"));
    }

    #[tokio::test]
    async fn test_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(dir_is_empty(dir.path()).await.unwrap());

        std::fs::write(dir.path().join("file.txt"), "x").unwrap();
        assert!(!dir_is_empty(dir.path()).await.unwrap());
    }

    #[tokio::test]
    async fn test_help_returns_without_touching_cwd() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = run(vec!["--help".to_string()], dir.path(), "0.1.0")
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::Help);
        assert!(dir_is_empty(dir.path()).await.unwrap());
    }

    #[tokio::test]
    async fn test_non_empty_cwd_fails_before_prompting() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "x").unwrap();

        let err = run(vec!["-y".to_string()], dir.path(), "0.1.0")
            .await
            .unwrap_err();
        assert!(err.downcast_ref::<UsageError>().is_some());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_manifest_check_error_is_reported() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().join("locked");
        std::fs::create_dir(&cwd).unwrap();
        std::fs::write(cwd.join("notes.txt"), "x").unwrap();
        // Listable but not searchable: entries can be read, not stat'ed
        std::fs::set_permissions(&cwd, std::fs::Permissions::from_mode(0o400)).unwrap();

        // Permission bits do not bind root
        let enforced = std::fs::metadata(cwd.join("notes.txt")).is_err();
        let result = run(vec!["-y".to_string()], &cwd, "0.1.0").await;
        std::fs::set_permissions(&cwd, std::fs::Permissions::from_mode(0o755)).unwrap();
        if !enforced {
            return;
        }

        let err = result.unwrap_err();
        assert!(err.downcast_ref::<UsageError>().is_none());
        assert!(err.to_string().contains("package.json"));
    }

    #[tokio::test]
    async fn test_unknown_package_manager_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(vec!["-y".to_string(), "-p=pip".to_string()], dir.path(), "0.1.0")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("pip"));
    }
}
