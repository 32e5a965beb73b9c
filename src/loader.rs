use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::code::{CodeUnit, Value};
use crate::error::ReportError;

pub const MAX_REPR_LEN: usize = 64;

#[derive(Deserialize)]
struct ModuleDump {
    objects: BTreeMap<String, ObjectDump>,
}

#[derive(Deserialize)]
struct ObjectDump {
    #[serde(default)]
    code: Option<CodeUnit>,
}

/// Resolves `object_name` inside a JSON module dump to its code unit.
pub fn load_code_unit(path: &Path, object_name: &str) -> Result<CodeUnit, ReportError> {
    let raw = fs::read_to_string(path)?;
    parse_code_unit(&raw, object_name)
}

fn parse_code_unit(raw: &str, object_name: &str) -> Result<CodeUnit, ReportError> {
    let mut dump: ModuleDump = serde_json::from_str(raw)?;
    let object = dump
        .objects
        .remove(object_name)
        .ok_or_else(|| ReportError::NotFound(object_name.to_string()))?;
    let mut unit = object
        .code
        .ok_or_else(|| ReportError::Unsupported(object_name.to_string()))?;
    clamp_reprs(&mut unit);
    Ok(unit)
}

fn clamp_reprs(unit: &mut CodeUnit) {
    let mut worklist = vec![unit];
    while let Some(unit) = worklist.pop() {
        for value in unit.consts.iter_mut() {
            match value {
                Value::Scalar { repr, .. } => {
                    if repr.chars().count() > MAX_REPR_LEN {
                        let mut clamped: String = repr.chars().take(MAX_REPR_LEN).collect();
                        clamped.push('…');
                        *repr = clamped;
                    }
                }
                Value::Code(nested) => worklist.push(nested),
            }
        }
    }
}
