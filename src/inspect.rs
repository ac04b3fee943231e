//! Catalog queries behind the command line tool.

use log::{debug, error};
use serde::Serialize;
use thiserror::Error;

use steven_materials::{Catalog, FamilyView, RegistryError, VariantCode, VariantInfo};

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("no family {0}")]
    UnknownFamily(String),
    #[error("{family} has no variant with code {code}")]
    UnknownCode { family: &'static str, code: u16 },
    #[error("{family} has no variant named {name}")]
    UnknownName { family: &'static str, name: String },
    #[error("catalog failed verification: {0}")]
    Verify(#[from] RegistryError),
    #[error("failed to load settings from {path}: {source}")]
    Config {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("failed to write output: {0}")]
    Output(#[from] serde_json::Error),
}

/// Every registered variant of one family, as written by `dump`.
#[derive(Debug, Serialize)]
pub struct FamilyDump {
    pub family_id: u16,
    pub namespaced_id: &'static str,
    pub variants: Vec<VariantInfo>,
}

impl FamilyDump {
    fn of(family: &dyn FamilyView) -> FamilyDump {
        FamilyDump {
            family_id: family.family_id(),
            namespaced_id: family.namespaced_id(),
            variants: family.describe_all(),
        }
    }
}

/// Resolves a family by legacy id (`69`), namespaced id (`minecraft:lever`)
/// or bare name (`lever`, taken to be in the `minecraft` namespace).
pub fn resolve_family<'a>(catalog: &'a Catalog, family: &str) -> Result<&'a dyn FamilyView, ToolError> {
    let found = if let Ok(id) = family.parse::<u16>() {
        catalog.family(id)
    } else if family.contains(':') {
        catalog.family_by_namespaced_id(family)
    } else {
        catalog.family_by_namespaced_id(&format!("minecraft:{}", family))
    };
    found.ok_or_else(|| ToolError::UnknownFamily(family.to_owned()))
}

pub fn lookup(catalog: &Catalog, family: &str, code: u16) -> Result<VariantInfo, ToolError> {
    let view = resolve_family(catalog, family)?;
    view.describe(VariantCode(code)).ok_or(ToolError::UnknownCode {
        family: view.namespaced_id(),
        code,
    })
}

pub fn lookup_name(catalog: &Catalog, family: &str, name: &str) -> Result<VariantInfo, ToolError> {
    let view = resolve_family(catalog, family)?;
    view.describe_by_name(name).ok_or_else(|| ToolError::UnknownName {
        family: view.namespaced_id(),
        name: name.to_owned(),
    })
}

/// One family when `family` is given, otherwise all of them in id order.
pub fn dump(catalog: &Catalog, family: Option<&str>) -> Result<Vec<FamilyDump>, ToolError> {
    match family {
        Some(family) => Ok(vec![FamilyDump::of(resolve_family(catalog, family)?)]),
        None => Ok(catalog.families().into_iter().map(FamilyDump::of).collect()),
    }
}

/// Checks every family and logs each violation. Returns the first one.
pub fn verify(catalog: &Catalog) -> Result<usize, ToolError> {
    let mut first = None;
    let mut checked = 0;
    for family in catalog.families() {
        match family.verify() {
            Ok(()) => {
                debug!("{} ({}): {} variants ok", family.namespaced_id(), family.family_id(), family.len());
                checked += 1;
            }
            Err(err) => {
                error!("{}", err);
                first.get_or_insert(err);
            }
        }
    }
    match first {
        Some(err) => Err(err.into()),
        None => Ok(checked),
    }
}

pub fn render<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, ToolError> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}
