//! Illustrative run of explicit Euler on `du/dt + u = 2 + t`.
//!
//! With no arguments this reproduces the reference run: `A = 2`, `T = 2`,
//! `N = 100`, printing the final value next to the exact solution.

mod cli;
mod reference;
mod report;

use clap::Parser;
use log::Level;
use lode_core::Observer;
use lode_observers::{DivergenceGuard, LogSteps};
use lode_solvers::{
    one_step::{self, Action, Config, Event},
    schemes::ExplicitEuler,
};

use crate::cli::LodeCli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = LodeCli::parse();

    env_logger::builder()
        .format_timestamp(None)
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    let ivp = reference::problem(args.initial_condition, args.expiry);
    let config = Config::default()
        .with_terminal_step(args.terminal_step.into())
        .with_history(args.trace);

    let mut guard = args.divergence_bound.map(DivergenceGuard::new).transpose()?;
    let mut log_steps = LogSteps::new(Level::Debug);
    let observer = |event: &Event| -> Option<Action> {
        let _: Option<Action> = log_steps.observe(event);
        guard.as_mut().and_then(|guard| guard.observe(event))
    };

    log::info!(
        "solving with A = {}, T = {}, N = {}",
        args.initial_condition,
        args.expiry,
        args.steps
    );

    let solution = one_step::solve(&ivp, ExplicitEuler, args.steps, config, observer)?;

    if args.print_mesh {
        println!("{}", report::mesh_line(&solution.mesh));
    }
    for event in &solution.history {
        println!("{}", report::step_line(event));
    }

    // The terminal step and early stops both move the time the value belongs to.
    let reached = solution.steps as f64 * solution.mesh.delta();
    let exact = reference::exact(args.initial_condition, reached);
    println!("{}", report::summary(&solution, exact));

    Ok(())
}
