//! Persisted field layouts.
//!
//! A [`Layout`] is the outcome of guessing every field of one input file. It
//! is written as YAML, or as JSON when the target path ends in `.json`.

use std::{
    collections::HashSet,
    fs::File,
    io::BufReader,
    path::Path,
};

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use crate::field::FieldDescriptor;

pub const CURRENT_LAYOUT_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayoutKind {
    Delimited { delimiter: char },
    FixedWidth,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,
    pub kind: LayoutKind,
    #[serde(default = "Layout::default_has_headers")]
    pub has_headers: bool,
    pub fields: Vec<FieldDescriptor>,
}

impl Layout {
    pub fn new(kind: LayoutKind, has_headers: bool, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            schema_version: None,
            kind,
            has_headers,
            fields,
        }
    }

    pub const fn default_has_headers() -> bool {
        true
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Fields that a reader should emit, in position order.
    pub fn active_fields(&self) -> Vec<&FieldDescriptor> {
        let mut active = self
            .fields
            .iter()
            .filter(|field| !field.ignore)
            .collect::<Vec<_>>();
        active.sort_by(|a, b| a.cmp_position(b));
        active
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            ensure!(!field.name.is_empty(), "Layout contains a field without a name");
            ensure!(
                seen.insert(field.name.as_str()),
                "Duplicate field name '{}' in layout",
                field.name
            );
        }
        if self.kind == LayoutKind::FixedWidth {
            for field in &self.fields {
                ensure!(
                    field.position >= 0,
                    "Fixed-width field '{}' needs a position",
                    field.name
                );
            }
        }
        Ok(())
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yaml::to_string(&self.stamped()?).context("Serializing layout to YAML string")
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let layout = self.stamped()?;
        let file = File::create(path).with_context(|| format!("Creating layout file {path:?}"))?;
        if is_json(path) {
            serde_json::to_writer_pretty(file, &layout).context("Writing layout JSON")
        } else {
            serde_yaml::to_writer(file, &layout).context("Writing layout YAML")
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("Opening layout file {path:?}"))?;
        let reader = BufReader::new(file);
        let layout: Layout = if is_json(path) {
            serde_json::from_reader(reader).context("Parsing layout JSON")?
        } else {
            serde_yaml::from_reader(reader).context("Parsing layout YAML")?
        };
        layout.validate()?;
        Ok(layout)
    }

    fn stamped(&self) -> Result<Self> {
        self.validate()?;
        let mut layout = self.clone();
        if layout.schema_version.is_none() {
            layout.schema_version = Some(CURRENT_LAYOUT_VERSION.to_string());
        }
        Ok(layout)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
