use sir_epidemic::io::{calendar, reporting};
use sir_epidemic::render::implementations::{ConsoleReporter, SirChartRenderer};
use sir_epidemic::render::traits::{RenderFrame, SummaryReporter, TrajectoryRenderer};
use sir_epidemic::simulation::config::SimulationParameters;
use sir_epidemic::simulation::engine::EpidemicSimulation;

fn main() {
    println!("=== SIR Epidemic Simulation in Rust ===");

    // 1. SETUP PARAMETERS
    // The reference scenario: a city of 10,000, beta 0.21, gamma 0.14
    // (R0 = 1.5), simulated for up to a year from a single case.
    let params = SimulationParameters {
        population: 10_000,
        infection_rate: 0.21,
        recovery_rate: 0.14,
        horizon_days: 365,
        initial_infected: 1,
    };

    // 2. INITIALIZE SIMULATION
    let sim = match EpidemicSimulation::new(params) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("Cannot start simulation: {}", e);
            std::process::exit(1);
        }
    };

    // 3. RUN SIMULATION
    println!("Running for up to {} days...", sim.params().horizon_days);
    let outcome = sim.run();

    // 4. EXPORT RESULTS
    let output_file = "trajectory.csv";
    match reporting::write_trajectory_log(output_file, &outcome.trajectory.records()) {
        Ok(_) => println!("Success! Data written to ./{}", output_file),
        Err(e) => eprintln!("Error writing CSV: {}", e),
    }

    // 5. RENDER CHART
    // The dashed marker shows how many days the reference outbreak has been
    // running as of today, when that still falls inside the plotted window.
    let marker = calendar::today_marker(
        calendar::reference_date(),
        outcome.summary.termination_day,
    );
    let frame = RenderFrame::new(&outcome.trajectory, marker);
    let renderer: Box<dyn TrajectoryRenderer> = Box::new(SirChartRenderer::new("sir_epidemics.png"));
    match renderer.render(&frame) {
        Ok(_) => println!("Chart written to ./sir_epidemics.png"),
        Err(e) => eprintln!("Error rendering chart: {}", e),
    }

    // 6. PRINT SUMMARY
    println!("\n=== Outbreak Summary ===");
    let reporter: Box<dyn SummaryReporter> = Box::new(ConsoleReporter);
    reporter.report(&outcome.summary, sim.params().population);

    println!("\nSimulation Complete.");
}
