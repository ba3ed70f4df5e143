//! Generates a sample pair of model artifacts so the app can be exercised
//! without the real trained model:
//!
//! * `pollution_model.json`   – intercepts + coefficient matrix
//! * `model_columns.json`     – ordered input column list
//!
//! Coefficients are drawn from a seeded PRNG, so output is reproducible.

use serde_json::json;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // Station ids as found in the original monitoring dataset.
    let stations: Vec<String> = (1..=22).map(|i| i.to_string()).collect();

    let mut columns: Vec<String> = vec!["year".to_string()];
    columns.extend(stations.iter().map(|s| format!("id_{s}")));

    // (pollutant, typical level, per-year drift, station spread)
    let profiles: [(&str, f64, f64, f64); 9] = [
        ("NH4", 0.35, -0.002, 0.15),
        ("BSK5", 2.4, -0.01, 0.8),
        ("Suspended", 6.0, 0.02, 2.0),
        ("O2", 8.5, -0.01, 0.9),
        ("NO3", 12.0, 0.05, 4.0),
        ("NO2", 0.3, 0.001, 0.15),
        ("SO4", 120.0, 0.2, 30.0),
        ("PO4", 0.2, 0.001, 0.1),
        ("CL", 90.0, 0.3, 25.0),
    ];

    let mut intercepts: Vec<f64> = Vec::with_capacity(profiles.len());
    let mut coefficients: Vec<Vec<f64>> = Vec::with_capacity(profiles.len());

    for (_, base, drift, spread) in profiles {
        // Intercept absorbs the year-2000 baseline so the drift term stays small.
        intercepts.push(base - drift * 2000.0);

        let mut row: Vec<f64> = Vec::with_capacity(columns.len());
        row.push(drift);
        for _ in &stations {
            row.push(rng.gauss(0.0, spread));
        }
        coefficients.push(row);
    }

    let model = json!({
        "intercepts": intercepts,
        "coefficients": coefficients,
    });

    std::fs::write(
        "pollution_model.json",
        serde_json::to_string_pretty(&model).expect("serializing model"),
    )
    .expect("writing pollution_model.json");

    std::fs::write(
        "model_columns.json",
        serde_json::to_string_pretty(&columns).expect("serializing columns"),
    )
    .expect("writing model_columns.json");

    println!(
        "Wrote pollution_model.json ({} outputs × {} columns) and model_columns.json ({} stations)",
        profiles.len(),
        columns.len(),
        stations.len()
    );
}
