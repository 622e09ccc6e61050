use crate::services::config::{config_path, Config};
use log::{debug, info, warn};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::NamedTempFile;

#[derive(thiserror::Error, Debug)]
pub enum DumpError {
    #[error("no dump executable configured; pass --iccdump or set `iccdump` in {0}")]
    NotConfigured(String),
    #[error("dump executable not found at {}", .0.display())]
    ToolMissing(PathBuf),
    #[error("failed to launch {}: {}", .tool.display(), .source)]
    Launch {
        tool: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} exited with {} for {}", .tool.display(), .status, .profile.display())]
    Failed {
        tool: PathBuf,
        profile: PathBuf,
        status: std::process::ExitStatus,
    },
}

/// Resolve the dump executable from the flag or the config file, in that
/// order. There is no fallback path; an unresolved or missing tool fails
/// before any processing starts.
pub fn resolve_tool(flag: Option<&Path>, config: &Config) -> Result<PathBuf, DumpError> {
    let tool = flag
        .map(Path::to_path_buf)
        .or_else(|| config.iccdump.clone());
    let Some(tool) = tool else {
        let hint = config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| "$HOME/.config/icclut/config.toml".to_string());
        return Err(DumpError::NotConfigured(hint));
    };
    if !tool.is_file() {
        return Err(DumpError::ToolMissing(tool));
    }
    Ok(tool)
}

/// A profile ready to hand to the dump tool. Stdin input is spilled to a
/// named temp file that is removed on drop, on every exit path.
pub enum ProfileSource {
    OnDisk(PathBuf),
    Spilled(NamedTempFile),
}

impl ProfileSource {
    pub fn path(&self) -> &Path {
        match self {
            ProfileSource::OnDisk(path) => path,
            ProfileSource::Spilled(file) => file.path(),
        }
    }
}

/// Stage the profile input: `-` reads the profile bytes from stdin into a
/// scoped temp file, anything else is used in place.
pub fn stage_profile(input: &Path) -> anyhow::Result<ProfileSource> {
    if input.as_os_str() != "-" {
        return Ok(ProfileSource::OnDisk(input.to_path_buf()));
    }
    let mut bytes = Vec::new();
    std::io::stdin().read_to_end(&mut bytes)?;
    let mut file = NamedTempFile::new()?;
    file.write_all(&bytes)?;
    file.flush()?;
    debug!(
        "spilled {} profile bytes to {}",
        bytes.len(),
        file.path().display()
    );
    Ok(ProfileSource::Spilled(file))
}

/// Run `<tool> <profile>` and capture stdout as the report text. Spawn
/// failures and non-zero exits are surfaced as distinct errors instead of
/// being absorbed into an empty report.
pub fn produce_report(tool: &Path, profile: &Path) -> Result<String, DumpError> {
    info!("running {} {}", tool.display(), profile.display());
    let output = Command::new(tool)
        .arg(profile)
        .output()
        .map_err(|source| DumpError::Launch {
            tool: tool.to_path_buf(),
            source,
        })?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            warn!("{} stderr: {}", tool.display(), stderr.trim());
        }
        return Err(DumpError::Failed {
            tool: tool.to_path_buf(),
            profile: profile.to_path_buf(),
            status: output.status,
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Produce the report text for a subcommand input: read a saved report
/// directly, or resolve the tool, stage the profile and invoke it.
pub fn load_report(
    saved_report: bool,
    input: &Path,
    flag_tool: Option<&Path>,
    config: &Config,
) -> anyhow::Result<String> {
    if saved_report {
        if input.as_os_str() == "-" {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            return Ok(text);
        }
        return Ok(std::fs::read_to_string(input)?);
    }
    let tool = resolve_tool(flag_tool, config)?;
    let profile = stage_profile(input)?;
    Ok(produce_report(&tool, profile.path())?)
}
