//! Encode command implementation.

use anyhow::{Context, Result};
use console::style;
use serde_json::Value;
use std::fs;
use tracing::info;

use qfm_encode::{Entanglement, FeatureMap, FeatureMapBuilder, FeatureMapDocument, FeatureMapKind};
use qfm_ir::Circuit;

/// Arguments of the encode command.
pub struct EncodeArgs<'a> {
    pub data: &'a str,
    pub kind: &'a str,
    pub depth: Option<u32>,
    pub entanglement: Option<&'a str>,
    pub config: Option<&'a str>,
    pub inverse: bool,
    pub format: &'a str,
    pub output: Option<&'a str>,
}

/// Execute the encode command.
pub fn execute(args: &EncodeArgs<'_>) -> Result<()> {
    let format = OutputFormat::parse(args.format)?;
    let data = parse_data(args.data)?;
    let doc = load_document(args, &data)?;

    let map = FeatureMap::from_document(&doc)?;
    info!(
        "Encoding with {} ({} qubits, depth {})",
        map.kind(),
        map.num_qubits(),
        map.depth()
    );

    let circuit = map.construct_circuit(&data, None, args.inverse)?;
    let rendered = render(&circuit, format)?;

    match args.output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write file: {path}"))?;
            println!(
                "{} Encoded {} ops on {} qubits, depth {}",
                style("✓").green().bold(),
                circuit.num_ops(),
                circuit.num_qubits(),
                circuit.depth()
            );
            println!("  Output: {}", style(path).green());
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => anyhow::bail!("Unknown format: '{other}'. Available: text, json"),
        }
    }
}

/// Parse a comma separated list of numbers or a JSON value.
///
/// JSON is passed through untouched so that type and shape errors are
/// reported by the feature map itself.
fn parse_data(raw: &str) -> Result<Value> {
    let trimmed = raw.trim();
    if trimmed.starts_with(['[', '{', '"']) {
        return serde_json::from_str(trimmed)
            .with_context(|| format!("Invalid JSON data: {trimmed}"));
    }

    let values = trimmed
        .split(',')
        .map(|item| {
            let item = item.trim();
            item.parse::<f64>()
                .with_context(|| format!("Invalid data value: '{item}'"))
        })
        .collect::<Result<Vec<f64>>>()?;
    Ok(Value::from(values))
}

/// Build the feature map document.
///
/// Precedence, lowest first: config file (or `--kind` with defaults), the
/// `QFM_DEPTH` environment variable, command-line flags.
fn load_document(args: &EncodeArgs<'_>, data: &Value) -> Result<FeatureMapDocument> {
    let mut doc = match args.config {
        Some(path) => FeatureMapDocument::from_path(path)
            .with_context(|| format!("Failed to load feature map from {path}"))?,
        None => {
            let kind: FeatureMapKind = args.kind.parse()?;
            // Non-arrays get a placeholder width; they fail input validation later.
            let num_qubits = data.as_array().map_or(1, Vec::len);
            let num_qubits = u32::try_from(num_qubits).context("Data vector is too long")?;
            FeatureMapDocument::new(kind, num_qubits)
        }
    };

    doc.apply_env_overrides()?;

    if let Some(depth) = args.depth {
        doc.set_option("depth", depth)?;
    }
    if let Some(entanglement) = args.entanglement {
        let entanglement: Entanglement = entanglement.parse()?;
        doc.set_option("entanglement", entanglement.to_string())?;
    }

    Ok(doc)
}

fn render(circuit: &Circuit, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(circuit.to_string()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&circuit.snapshot())
                .context("Failed to serialize circuit")?;
            json.push('\n');
            Ok(json)
        }
    }
}
