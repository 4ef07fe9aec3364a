use aliasdraw::LabeledTable;
use std::collections::HashMap;

/// A toy calibrated radiocarbon posterior: probability mass over calendar
/// years, bimodal the way calibration-curve wiggles often make them.
fn posterior(years: &[i32]) -> Vec<f64> {
    let bump = |y: f64, mu: f64, sd: f64| (-((y - mu) / sd).powi(2) / 2.0).exp();
    let raw: Vec<f64> = years
        .iter()
        .map(|&y| {
            let y = y as f64;
            bump(y, 1655.0, 4.0) + 0.6 * bump(y, 1681.0, 6.0)
        })
        .collect();
    let sum: f64 = raw.iter().sum();
    raw.into_iter().map(|w| w / sum).collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let years: Vec<i32> = (1640..1700).collect();
    let dist = posterior(&years);

    let table = LabeledTable::new(&dist, years)?;

    let mut rng = rand::rng();
    let mut hist: HashMap<i32, u64> = HashMap::default();
    for year in table.sample_labels(&mut rng, 200_000)? {
        *hist.entry(year).or_default() += 1;
    }

    let mut values: Vec<(i32, u64)> = hist.into_iter().collect();
    values.sort_by(|(_, ca), (_, cb)| cb.cmp(ca));

    println!("Most-sampled calendar years:");
    for (year, count) in values.iter().take(10) {
        println!("{count: >6} AD {year}");
    }

    Ok(())
}
