// Same comparison as straight-compare, with a Savitzky-Golay pre-filter on
// the voltage column. Window/order control how aggressively noise is removed;
// odd windows like 21, 51 or 101 are the useful range for these captures.
use anyhow::Context;
use log::info;
use scopespec::analysis::{
    run_comparison, ComparisonPlan, GroupSpec, PlotStyle, SmoothingParams,
};
const OUTPUT: &str = "smoothed_spectrum_comparison.png";
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let plan = ComparisonPlan {
        title: "Frequency Spectrum Comparison".into(),
        smoothing: Some(SmoothingParams::new(101, 4)),
        groups: vec![
            GroupSpec::single("base no noise", "tempfile/base.csv"),
            GroupSpec::single("1.5Vpp 8Khz", "tempfile/1.5.csv"),
        ],
    };
    let png = run_comparison(&plan, PlotStyle::default())?;
    std::fs::write(OUTPUT, &png).with_context(|| format!("failed to write {OUTPUT}"))?;
    info!("wrote {OUTPUT}");
    Ok(())
}
