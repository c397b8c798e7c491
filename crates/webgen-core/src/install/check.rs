//! Detection of the package managers the installer delegates to

use crate::error::Error;
use std::fmt;
use std::process::Command;

/// An external command-line tool the installer runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tool {
    /// Binary name looked up on PATH
    pub binary: &'static str,
    /// Display name for user-facing messages
    pub display_name: &'static str,
    /// How to get the tool when it is missing
    pub install_hint: &'static str,
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name)
    }
}

pub const YARN: Tool = Tool {
    binary: "yarn",
    display_name: "Yarn",
    install_hint: "Install it with `npm install -g yarn` (https://yarnpkg.com)",
};

pub const BOWER: Tool = Tool {
    binary: "bower",
    display_name: "Bower",
    install_hint: "Install it with `npm install -g bower` (https://bower.io)",
};

/// Tool detection result
#[derive(Debug, Clone)]
pub struct ToolInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

impl ToolInfo {
    /// Name and reported version, e.g. `Yarn 1.22.19`
    pub fn summary(&self) -> String {
        match &self.version {
            Some(version) if !version.is_empty() => format!("{} {}", self.name, version),
            _ => self.name.to_string(),
        }
    }
}

/// Check whether a tool answers `--version`
pub fn check_tool(tool: &Tool) -> ToolInfo {
    let output = Command::new(tool.binary).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            ToolInfo {
                name: tool.display_name,
                version: Some(version),
                available: true,
            }
        }
        _ => ToolInfo {
            name: tool.display_name,
            version: None,
            available: false,
        },
    }
}

/// Check each distinct tool once; the first missing one is an error
pub fn check_tools(tools: &[Tool]) -> Result<Vec<ToolInfo>, Error> {
    let mut results: Vec<ToolInfo> = Vec::new();

    for tool in tools {
        if results.iter().any(|r| r.name == tool.display_name) {
            continue;
        }

        let info = check_tool(tool);
        if !info.available {
            return Err(Error::ToolMissing {
                tool: tool.display_name,
                hint: tool.install_hint,
            });
        }
        results.push(info);
    }

    Ok(results)
}
