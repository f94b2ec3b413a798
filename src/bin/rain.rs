use std::time::Instant;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use rainwords::constants::{DAYS_PER_YEAR, DEFAULT_SEED, DEFAULT_SIMULATIONS, DEFAULT_THRESHOLD};
use rainwords::env_config::init_rayon_threads;
use rainwords::poisson_binomial::tail_probability;
use rainwords::simulation::{aggregate_statistics, save_statistics, simulate_batch, tail_estimate};

struct Args {
    days: usize,
    threshold: i64,
    num_simulations: usize,
    seed: u64,
    wet: Option<f64>,
    output: Option<String>,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = Args {
        days: DAYS_PER_YEAR,
        threshold: DEFAULT_THRESHOLD,
        num_simulations: DEFAULT_SIMULATIONS,
        seed: DEFAULT_SEED,
        wet: None,
        output: None,
    };

    let usage =
        "Usage: rain [--days N] [--threshold N] [--sims N] [--seed S] [--wet P] [--output DIR]";

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--days" => {
                i += 1;
                if i < args.len() {
                    parsed.days = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --days value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--threshold" => {
                i += 1;
                if i < args.len() {
                    parsed.threshold = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --threshold value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--sims" => {
                i += 1;
                if i < args.len() {
                    parsed.num_simulations = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --sims value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    parsed.seed = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --seed value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--wet" => {
                i += 1;
                if i < args.len() {
                    let p: f64 = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --wet value: {}", args[i]);
                        std::process::exit(1);
                    });
                    if !(0.0..=1.0).contains(&p) {
                        eprintln!("--wet must be in [0,1], got {}", p);
                        std::process::exit(1);
                    }
                    parsed.wet = Some(p);
                }
            }
            "--output" => {
                i += 1;
                if i < args.len() {
                    parsed.output = Some(args[i].clone());
                }
            }
            "--help" | "-h" => {
                println!("{}", usage);
                println!();
                println!("Options:");
                println!("  --days N       Trials per replication (default: 365)");
                println!("  --threshold N  Report P(rainy days > N) (default: 188)");
                println!("  --sims N       Monte Carlo replications (default: 5000)");
                println!("  --seed S       RNG seed (default: 42)");
                println!("  --wet P        Same rain probability P every day (default: random per day)");
                println!("  --output DIR   Write cross-check statistics JSON to DIR");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("{}", usage);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    parsed
}

fn main() {
    let args = parse_args();
    let num_threads = init_rayon_threads();

    // Per-day rain probabilities: constant with --wet, else one uniform
    // draw per day from the seed.
    let p: Vec<f64> = match args.wet {
        Some(wet) => vec![wet; args.days],
        None => {
            let mut rng = SmallRng::seed_from_u64(args.seed);
            (0..args.days).map(|_| rng.gen::<f64>()).collect()
        }
    };

    println!(
        "Rain probability: {} days, threshold {}",
        args.days, args.threshold
    );

    let t0 = Instant::now();
    let exact = tail_probability(&p, args.threshold);
    let exact_ms = t0.elapsed().as_secs_f64() * 1000.0;
    println!(
        "  Exact P(S > {}):  {:.6}  ({:.1} ms)",
        args.threshold, exact, exact_ms
    );

    println!(
        "Simulating {} years ({} threads)...",
        args.num_simulations, num_threads
    );
    let result = simulate_batch(&p, args.num_simulations, args.seed);
    let estimate = tail_estimate(&result, args.threshold);
    println!(
        "  Monte Carlo:      {:.6}  ({:.1} ms)",
        estimate,
        result.elapsed.as_secs_f64() * 1000.0
    );
    println!(
        "  Rainy days:       mean {:.2}, std dev {:.2}, median {}",
        result.mean, result.std_dev, result.median
    );

    let stats = aggregate_statistics(&result, args.threshold, exact, args.seed);
    println!();
    println!(
        "  Std error:   {:.4}  (z = {:+.2}, |z| < 3.0 expected)",
        stats.std_error, stats.z_score
    );
    if stats.z_score.abs() > 3.5 {
        eprintln!(
            "WARNING: Estimate deviates from exact value by {:.1} standard errors — possible bug!",
            stats.z_score.abs()
        );
    }

    if let Some(ref output_dir) = args.output {
        let json_path = format!("{}/cross_check.json", output_dir);
        save_statistics(&stats, &json_path);
        println!();
        println!("  Statistics saved: {}", json_path);
    }
}
