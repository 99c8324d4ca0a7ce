// src/render/implementations.rs

use crate::render::traits::{RenderFrame, SummaryReporter, TrajectoryRenderer};
use crate::simulation::engine::SimulationSummary;
use plotters::prelude::*;
use std::error::Error;

// =========================================================================
// 1. PNG Chart Renderer
// =========================================================================

/// Draws the classic three-curve epidemic chart to a PNG file, with the
/// x axis clipped to the termination day and an optional dashed "Today"
/// marker.
#[derive(Debug, Clone)]
pub struct SirChartRenderer {
    output_path: String,
    width: u32,
    height: u32,
}

impl SirChartRenderer {
    pub fn new(output_path: impl Into<String>) -> Self {
        Self {
            output_path: output_path.into(),
            width: 960,
            height: 640,
        }
    }

    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

impl TrajectoryRenderer for SirChartRenderer {
    fn render(&self, frame: &RenderFrame) -> Result<(), Box<dyn Error>> {
        let root = BitMapBackend::new(&self.output_path, (self.width, self.height))
            .into_drawing_area();
        root.fill(&WHITE)?;

        // A zero-length outbreak still needs a non-empty axis.
        let x_max = (frame.termination_day as i32).max(1);
        let mut chart = ChartBuilder::on(&root)
            .caption("SIR Epidemics Model", ("sans-serif", 30))
            .margin(12)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(0..x_max, 0.0..frame.population)?;

        chart
            .configure_mesh()
            .x_desc("days")
            .y_desc("population")
            .draw()?;

        let curves = [
            ("Susceptible", &frame.susceptible, BLUE),
            ("Infected", &frame.infected, RED),
            ("Recovered", &frame.recovered, GREEN),
        ];
        for (label, values, color) in curves {
            chart
                .draw_series(LineSeries::new(
                    frame
                        .days
                        .iter()
                        .zip(values.iter())
                        .map(|(&day, &count)| (day as i32, count)),
                    &color,
                ))?
                .label(label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
        }

        if let Some(marker) = frame.marker_day {
            if marker < frame.termination_day {
                chart
                    .draw_series(DashedLineSeries::new(
                        [(marker as i32, 0.0), (marker as i32, frame.population)],
                        4,
                        4,
                        RED.stroke_width(1),
                    ))?
                    .label("Today")
                    .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));
            }
        }

        chart
            .configure_series_labels()
            .border_style(&BLACK)
            .background_style(&WHITE.mix(0.8))
            .draw()?;
        root.present()?;
        Ok(())
    }
}

// =========================================================================
// 2. Console Summary Reporter
// =========================================================================

/// Prints the run summary in the classic four-line report format.
#[derive(Debug, Clone, Default)]
pub struct ConsoleReporter;

impl SummaryReporter for ConsoleReporter {
    fn report(&self, summary: &SimulationSummary, population: u64) {
        println!(
            "Basic reproduction number (R0): {}",
            summary.basic_reproduction_number
        );
        println!(
            "Number of infected people: {}/{} ({}%)",
            summary.total_infections as u64,
            population,
            (summary.total_infections * 100.0 / population as f64) as u64
        );
        println!(
            "Peak: {} patients, day {}",
            summary.peak_infected as u64, summary.peak_day
        );
        println!("Outbreak end: day {}", summary.termination_day);
    }
}
