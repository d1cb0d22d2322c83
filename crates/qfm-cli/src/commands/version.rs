//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - quantum feature map encoding",
        style("QFM").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qfm-ir      Circuit representation and gate inversion");
    println!("  qfm-encode  Feature maps and their configuration");
    println!("  qfm-cli     Command-line interface");
    println!();
    println!("Feature maps:");
    for kind in qfm_encode::FeatureMapKind::ALL {
        println!("  {:<22}{}", kind.name(), style(kind.descriptor().description).dim());
    }
}
