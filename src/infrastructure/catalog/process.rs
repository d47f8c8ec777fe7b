//! Process-backed catalog
//!
//! Shells out to the GIS command line tools:
//! - `g.list type=<kind> mapset=<mapset>` prints one element per line
//! - `g.mapsets -p` prints the search path, whitespace separated
//! - `g.gisenv get=MAPSET` prints the current mapset

use std::process::{Command, Stdio};

use tracing::debug;

use crate::config::CatalogConfig;
use crate::domain::ports::{CatalogError, CatalogResult, ElementCatalog};
use crate::domain::value_objects::ElementKind;

/// Catalog that runs the GIS command line tools
pub struct ProcessCatalog {
    config: CatalogConfig,
}

impl ProcessCatalog {
    pub fn new(config: CatalogConfig) -> Self {
        Self { config }
    }

    fn run(&self, program: &str, args: &[String]) -> CatalogResult<String> {
        let command_line = std::iter::once(program.to_string())
            .chain(args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ");
        debug!(command = %command_line, "running catalog query");

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| CatalogError::Spawn {
                command: command_line.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(CatalogError::CommandFailed {
                command: command_line,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for ProcessCatalog {
    fn default() -> Self {
        Self::new(CatalogConfig::default())
    }
}

impl ElementCatalog for ProcessCatalog {
    fn list_mapsets(&self) -> CatalogResult<Vec<String>> {
        let stdout = self.run(&self.config.mapsets_command, &["-p".to_string()])?;
        Ok(parse_mapsets(&stdout))
    }

    fn current_mapset(&self) -> CatalogResult<Option<String>> {
        let stdout = self.run(&self.config.gisenv_command, &["get=MAPSET".to_string()])?;
        Ok(parse_lines(&stdout).into_iter().next())
    }

    fn list_elements(&self, kind: ElementKind, mapset: &str) -> CatalogResult<Vec<String>> {
        let args = [
            format!("type={}", kind.query_type()),
            format!("mapset={}", mapset),
        ];
        let stdout = self.run(&self.config.list_command, &args)?;
        Ok(parse_lines(&stdout))
    }
}

/// Non-empty trimmed lines
fn parse_lines(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_mapsets(stdout: &str) -> Vec<String> {
    stdout.split_whitespace().map(str::to_string).collect()
}
