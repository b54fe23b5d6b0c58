// Averages repeated captures of each test condition before plotting, one
// curve per condition.
use anyhow::Context;
use log::info;
use scopespec::analysis::{run_comparison, ComparisonPlan, GroupSpec, PlotStyle};
const OUTPUT: &str = "average_spectrum_comparison.png";
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let plan = ComparisonPlan {
        title: "Average Frequency Spectrum Comparison".into(),
        smoothing: None,
        groups: vec![
            GroupSpec::repeated("Baseline", ["bench test sd card/baseline.csv"]),
            GroupSpec::repeated("glv", ["car testing flash/glv2.csv"]),
            GroupSpec::repeated(
                "rtd",
                [
                    "car testing flash/rtd1.csv",
                    "car testing flash/rtd2.csv",
                    "car testing flash/rtd3.csv",
                    "car testing flash/rtd4.csv",
                ],
            ),
            GroupSpec::repeated(
                "TSactive",
                [
                    "car testing flash/TSactive1.csv",
                    "car testing flash/TSactive2.csv",
                    "car testing flash/TSactive3.csv",
                    "car testing flash/TSactive4.csv",
                    "car testing flash/TSactive5.csv",
                    "car testing flash/TSactive6.csv",
                    "car testing flash/TSactive7.csv",
                ],
            ),
        ],
    };
    let png = run_comparison(&plan, PlotStyle::default())?;
    std::fs::write(OUTPUT, &png).with_context(|| format!("failed to write {OUTPUT}"))?;
    info!("wrote {OUTPUT}");
    Ok(())
}
