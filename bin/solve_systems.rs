use anyhow::{Context, Result};
use clap::Parser;
use linsys::{
    GaussianConfig, GaussianSolver, JacobiConfig, JacobiSolver, LinearSolver, parse_systems,
};
use ndarray::Array1;
use std::fmt::Write as FmtWrite;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "solve_systems",
    about = "Solve square linear systems from a text file with Gaussian elimination and Jacobi iteration"
)]
struct Cli {
    /// Text file of augmented-matrix systems, separated by blank lines
    input: PathBuf,

    /// Convergence tolerance on the largest per-component change (Jacobi)
    #[arg(long, default_value_t = 1e-10)]
    tolerance: f64,

    /// Maximum number of Jacobi iterations
    #[arg(long, default_value_t = 1000)]
    max_iterations: usize,

    /// Pivot magnitude below which a matrix is reported singular (Gaussian)
    #[arg(long, default_value_t = 1e-30)]
    pivot_epsilon: f64,

    /// Print Jacobi progress every N iterations (0 = no output)
    #[arg(long, default_value_t = 0)]
    progress_every: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Cli::parse();

    let input = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let systems = parse_systems(&input).context("failed to parse input")?;

    let gaussian = GaussianSolver::new(GaussianConfig {
        pivot_epsilon: args.pivot_epsilon,
    });
    let jacobi = JacobiSolver::new(JacobiConfig {
        max_iterations: args.max_iterations,
        tolerance: args.tolerance,
        print_interval: args.progress_every,
    });

    for system in &systems {
        match gaussian.solve(system) {
            Ok(x) => println!("Gaussian method solution: {}", format_solution(&x)),
            Err(err) => println!("Gaussian method error: {err}"),
        }

        match jacobi.solve(system) {
            Ok(x) => println!("Jacobi method solution: {}", format_solution(&x)),
            Err(err) => println!("Jacobi method error: {err}"),
        }

        println!();
    }

    Ok(())
}

fn format_solution(x: &Array1<f64>) -> String {
    let mut buffer = String::new();
    for (idx, value) in x.iter().enumerate() {
        if idx > 0 {
            buffer.push_str(", ");
        }
        let _ = write!(&mut buffer, "{value}");
    }
    buffer
}
