// Plots one raw spectrum per bench recording on a shared figure.
use anyhow::Context;
use log::info;
use scopespec::analysis::{run_comparison, ComparisonPlan, GroupSpec, PlotStyle};
const OUTPUT: &str = "spectrum_comparison.png";
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let plan = ComparisonPlan {
        title: "Frequency Spectrum Comparison".into(),
        smoothing: None,
        groups: vec![
            GroupSpec::single("base no noise", "tempfile/base.csv"),
            // GroupSpec::single("1.5Vpp 8Khz", "tempfile/1.5.csv"),
            // GroupSpec::single("100mVpp 8Khz just noise", "tempfile/arb8khzNoise.csv"),
            // GroupSpec::single("ARB 8kHz 3Vpp", "bench test sd card/arb8kHz3Vpp.csv"),
            // GroupSpec::single("glv2", "car testing flash/glv2.csv"),
        ],
    };
    let png = run_comparison(&plan, PlotStyle::default())?;
    std::fs::write(OUTPUT, &png).with_context(|| format!("failed to write {OUTPUT}"))?;
    info!("wrote {OUTPUT}");
    Ok(())
}
