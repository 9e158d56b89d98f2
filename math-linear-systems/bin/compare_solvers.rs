//! Solver comparison harness
//!
//! Generates a random dense system, runs the selected solvers on it and reports
//! wall-clock time, residual and agreement with the first successful method.
//!
//! Cramer's rule is O(n!), so it is skipped above `--max-cramer-size`.
//!
//! Usage:
//!     cargo run --release --features cli --bin compare_solvers -- --size 10
//!     cargo run --release --features cli --bin compare_solvers -- --size 500 --methods gaussian-sequential,gaussian-parallel
//!     RUST_LOG=debug cargo run --features cli --bin compare_solvers -- --size 6 --seed 42 --output report.json

use clap::{Parser, ValueEnum};
use linear_systems::parallel::current_num_threads;
use linear_systems::{Algorithm, SolverMethod, residual_norm, solve};
use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "compare_solvers")]
#[command(about = "Compare sequential and parallel Gaussian elimination and Cramer's rule on a random system", long_about = None)]
struct Args {
    /// Order n of the generated n×n system
    #[arg(short = 'n', long, default_value_t = 8)]
    size: usize,

    /// Solvers to run (comma separated); defaults to all four
    #[arg(short, long, value_delimiter = ',')]
    methods: Vec<MethodChoice>,

    /// Distribution of the generated entries
    #[arg(long, value_enum, default_value_t = Distribution::Integer)]
    distribution: Distribution,

    /// Optional random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Number of parallel threads (default: all cores)
    #[arg(short = 't', long)]
    threads: Option<usize>,

    /// Largest system Cramer's rule is attempted on
    #[arg(long, default_value_t = 10)]
    max_cramer_size: usize,

    /// Write the report as JSON to this path
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MethodChoice {
    GaussianSequential,
    GaussianParallel,
    CramerSequential,
    CramerParallel,
}

impl From<MethodChoice> for SolverMethod {
    fn from(choice: MethodChoice) -> Self {
        match choice {
            MethodChoice::GaussianSequential => SolverMethod::GaussianSequential,
            MethodChoice::GaussianParallel => SolverMethod::GaussianParallel,
            MethodChoice::CramerSequential => SolverMethod::CramerSequential,
            MethodChoice::CramerParallel => SolverMethod::CramerParallel,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Distribution {
    /// Whole numbers in [0, 100)
    Integer,
    /// Uniform reals in [0, 10)
    Uniform,
}

#[derive(Debug, Clone, Serialize)]
pub struct MethodResult {
    pub method: String,
    pub duration_ms: f64,
    pub residual: Option<f64>,
    pub max_deviation: Option<f64>,
    pub error: Option<String>,
    pub skipped: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub size: usize,
    pub threads: usize,
    pub seed: Option<u64>,
    pub results: Vec<MethodResult>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.size == 0 {
        anyhow::bail!("--size must be at least 1");
    }

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    let methods: Vec<SolverMethod> = if args.methods.is_empty() {
        SolverMethod::ALL.to_vec()
    } else {
        args.methods.iter().copied().map(SolverMethod::from).collect()
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let (a, b) = random_system(args.size, args.distribution, &mut rng);

    println!("Dense solver comparison");
    println!("=======================");
    println!(
        "n = {}, threads = {}, distribution = {:?}",
        args.size,
        current_num_threads(),
        args.distribution
    );
    println!();

    let mut results = Vec::with_capacity(methods.len());
    let mut baseline: Option<Array1<f64>> = None;

    for method in methods {
        if method.algorithm() == Algorithm::Cramer && args.size > args.max_cramer_size {
            log::warn!(
                "skipping {} for n = {} (limit {})",
                method,
                args.size,
                args.max_cramer_size
            );
            results.push(MethodResult {
                method: method.to_string(),
                duration_ms: 0.0,
                residual: None,
                max_deviation: None,
                error: None,
                skipped: true,
            });
            continue;
        }

        let start = Instant::now();
        let outcome = solve(&a, &b, method);
        let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

        let result = match outcome {
            Ok(x) => {
                let residual = residual_norm(&a, &x, &b)?;
                let max_deviation = baseline.as_ref().map(|reference| max_abs_diff(reference, &x));
                if baseline.is_none() {
                    baseline = Some(x);
                }
                MethodResult {
                    method: method.to_string(),
                    duration_ms,
                    residual: Some(residual),
                    max_deviation,
                    error: None,
                    skipped: false,
                }
            }
            Err(e) => MethodResult {
                method: method.to_string(),
                duration_ms,
                residual: None,
                max_deviation: None,
                error: Some(e.to_string()),
                skipped: false,
            },
        };
        results.push(result);
    }

    print_summary(&results);

    let report = Report {
        size: args.size,
        threads: current_num_threads(),
        seed: args.seed,
        results,
    };

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(path, json)?;
        println!("\nReport written to {}", path.display());
    }

    Ok(())
}

fn random_system<R: Rng>(n: usize, distribution: Distribution, rng: &mut R) -> (Array2<f64>, Array1<f64>) {
    let mut sample = || match distribution {
        Distribution::Integer => rng.random_range(0..100) as f64,
        Distribution::Uniform => rng.random::<f64>() * 10.0,
    };
    let a = Array2::from_shape_fn((n, n), |_| sample());
    let b = Array1::from_shape_fn(n, |_| sample());
    (a, b)
}

fn max_abs_diff(lhs: &Array1<f64>, rhs: &Array1<f64>) -> f64 {
    lhs.iter()
        .zip(rhs.iter())
        .fold(0.0, |acc, (l, r)| acc.max((l - r).abs()))
}

fn print_summary(results: &[MethodResult]) {
    println!(
        "{:<22} | {:>12} | {:>12} | {:>12} | Status",
        "Method", "Time (ms)", "Residual", "Deviation"
    );
    println!("{}", "-".repeat(80));

    for res in results {
        let status = if res.skipped {
            "SKIPPED".to_string()
        } else if let Some(err) = &res.error {
            format!("ERROR: {}", err)
        } else {
            "OK".to_string()
        };
        println!(
            "{:<22} | {:>12.3} | {:>12} | {:>12} | {}",
            res.method,
            res.duration_ms,
            res.residual.map_or("-".to_string(), |r| format!("{:.3e}", r)),
            res.max_deviation.map_or("-".to_string(), |d| format!("{:.3e}", d)),
            status
        );
    }
}
