use std::time::Instant;

use crate::simulation::engine::Arena;
use crate::simulation::field::{place_sources, sample_grid};
use crate::simulation::params::{ParameterSet, ScenarioKind};
use crate::simulation::scheduler::ManualScheduler;
use crate::simulation::session::Session;

/// Time `ticks` fixed steps of every scenario with default parameters
pub fn bench_ticks() {
    let ticks = 100_000;
    let arena = Arena::default();

    for kind in ScenarioKind::ALL {
        let mut session = Session::new(ParameterSet::defaults(kind), arena, ManualScheduler::new());
        session.start();

        // Warm up
        for _ in 0..100 {
            session.tick();
        }

        let t0 = Instant::now();
        for _ in 0..ticks {
            session.tick();
        }
        let secs = t0.elapsed().as_secs_f64();

        println!(
            "{:<10} {ticks} ticks in {:8.6} s, {:10.0} ticks/s",
            kind.name(),
            secs,
            ticks as f64 / secs
        );
    }
}

/// Time one full grid sample of the field scenario for shrinking spacings
/// Paste output directly into a spreadsheet to graph
pub fn bench_field_grid() {
    let arena = Arena::default();
    let sources = place_sources(&arena, 3.0, -3.0);
    let spacings = [80.0, 40.0, 20.0, 10.0, 5.0, 2.5];
    let reps = 20;

    println!("spacing,cells,ms");

    for spacing in spacings {
        // Warm up
        let cells = sample_grid(&sources, &arena, spacing).len();

        let t0 = Instant::now();
        for _ in 0..reps {
            let _ = sample_grid(&sources, &arena, spacing);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / reps as f64;

        println!("{},{},{:.6}", spacing, cells, ms);
    }
}
