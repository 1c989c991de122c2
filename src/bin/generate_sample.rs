//! Writes a deterministic sample launch-records CSV with the default
//! column headers, for trying the dashboard without the real dataset.

use anyhow::{Context, Result};

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
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let sites = [
        "CCAFS LC-40",
        "CCAFS SLC-40",
        "KSC LC-39A",
        "VAFB SLC-4E",
    ];
    // (booster category, success probability) – later boosters land more.
    let boosters = [
        ("v1.0", 0.0),
        ("v1.1", 0.15),
        ("FT", 0.65),
        ("B4", 0.55),
        ("B5", 0.9),
    ];

    let output_path = "sample_launches.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    writer.write_record([
        "Flight Number",
        "Launch Site",
        "class",
        "Payload Mass (kg)",
        "Booster Version Category",
    ])?;

    let mut flight = 1u32;
    for (booster, p_success) in boosters {
        // A handful of flights per booster generation, spread over sites.
        let flights = 8 + (rng.next_u64() % 5) as usize;
        for _ in 0..flights {
            let site = sites[(rng.next_u64() % sites.len() as u64) as usize];
            let payload = (rng.next_f64() * 9300.0 + 300.0).round();
            let class = u8::from(rng.next_f64() < p_success);

            writer.write_record([
                flight.to_string(),
                site.to_string(),
                class.to_string(),
                format!("{payload}"),
                booster.to_string(),
            ])?;
            flight += 1;
        }
    }

    writer.flush().context("flushing CSV")?;
    println!("Wrote {} launches to {output_path}", flight - 1);
    Ok(())
}
