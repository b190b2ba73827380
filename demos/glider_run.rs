//! Example demonstrating superposed-glider evolution with checkpoint
//! diagnostics and a thresholded collapse rendered as ASCII.

use qlife::{analysis, patterns, QlifeError, Simulator};

fn main() -> Result<(), QlifeError> {
    println!("--- qlife Example: Superposed Glider Evolution ---");

    // A 16x16 toroidal lattice seeded with the superposed glider: the
    // classical 5-cell shape plus two cells in genuine superposition.
    let grid = patterns::superposed_glider(16, 16, true)?;
    println!("\nInitial entropy: {:.6}", analysis::entropy(&grid));
    println!("Initial total probability: {:.6}", analysis::total_probability(&grid));

    // Advance 20 generations, capturing snapshots along the way.
    let simulator = Simulator::new();
    let result = simulator.run(&grid, 20, &[0, 5, 10, 20]);

    println!("\n{}", result); // Uses the Display impl for SimulationResult

    // Render the final snapshot as a thresholded collapse. The threshold is
    // a presentation choice; the engine itself never collapses anything.
    if let Some(checkpoint) = result.checkpoint(20) {
        println!("Collapse of generation 20 at threshold 0.25:");
        for row in analysis::measure(checkpoint.grid(), 0.25) {
            let line: String = row.iter().map(|&alive| if alive { '#' } else { '.' }).collect();
            println!("  {}", line);
        }
    }

    Ok(())
}
