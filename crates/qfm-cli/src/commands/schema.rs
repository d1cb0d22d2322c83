//! Schema command implementation.

use anyhow::{Context, Result};

use qfm_encode::{FeatureMapDescriptor, FeatureMapKind};

/// Execute the schema command.
pub fn execute(kind: Option<&str>) -> Result<()> {
    let descriptors = descriptors(kind)?;
    let json = match descriptors.as_slice() {
        [single] => serde_json::to_string_pretty(single),
        all => serde_json::to_string_pretty(all),
    }
    .context("Failed to serialize schema")?;
    println!("{json}");
    Ok(())
}

fn descriptors(kind: Option<&str>) -> Result<Vec<FeatureMapDescriptor>> {
    match kind {
        Some(kind) => {
            let kind: FeatureMapKind = kind.parse()?;
            Ok(vec![kind.descriptor()])
        }
        None => Ok(FeatureMapKind::ALL.iter().map(|k| k.descriptor()).collect()),
    }
}
