//! Cricket Flight entry point
//!
//! Native: headless driver that flies one launch (or a seeded batch of random
//! launches) at a fixed tick rate and prints the resulting stats.
//! WASM: the browser host drives `platform::web::FlightSim` directly.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use clap::Parser;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use cricket_flight::consts::*;
    use cricket_flight::export::{stats_csv, stats_rows};
    use cricket_flight::sim::{FlightEvent, FlightPhase, Simulation, SimulationConfig, Stats};
    use cricket_flight::{Settings, SettingsError};

    /// Headless projectile flight simulator
    #[derive(Debug, Parser)]
    #[command(name = "cricket-flight", version, about)]
    pub struct Cli {
        /// JSON settings file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Launch angle (degrees)
        #[arg(long)]
        angle: Option<f32>,
        /// Launch speed (m/s)
        #[arg(long)]
        speed: Option<f32>,
        /// Gravity (m/s²)
        #[arg(long)]
        gravity: Option<f32>,
        /// Bounce restitution
        #[arg(long)]
        restitution: Option<f32>,
        /// Tick rate (Hz)
        #[arg(long)]
        hz: Option<f32>,
        /// Print the stats export instead of a summary
        #[arg(long)]
        csv: bool,
        /// Fly this many random launches instead of one
        #[arg(long)]
        demo: Option<u32>,
        /// Seed for --demo
        #[arg(long, default_value_t = 42)]
        seed: u64,
    }

    impl Cli {
        /// Settings from the file (if any) with command-line overrides applied
        fn settings(&self) -> Result<Settings, SettingsError> {
            let mut settings = match &self.config {
                Some(path) => Settings::load(path)?,
                None => Settings::default(),
            };
            let sim = &mut settings.simulation;
            if let Some(angle) = self.angle {
                sim.angle = angle;
            }
            if let Some(speed) = self.speed {
                sim.speed = speed;
            }
            if let Some(gravity) = self.gravity {
                sim.gravity = gravity;
            }
            if let Some(restitution) = self.restitution {
                sim.restitution = restitution;
            }
            if let Some(hz) = self.hz {
                settings.tick_hz = hz;
            }
            Ok(settings.sanitized())
        }
    }

    /// Fly one launch to rest; returns final stats and the bounce count
    fn fly(sim: &mut Simulation, dt: f32) -> (Stats, u32) {
        sim.launch();
        while sim.phase() == FlightPhase::Flying {
            sim.tick(dt);
        }
        let bounces = sim
            .drain_events()
            .iter()
            .filter(|e| matches!(e, FlightEvent::Bounced { .. }))
            .count() as u32;
        (sim.stats(), bounces)
    }

    fn random_config(rng: &mut Pcg32) -> SimulationConfig {
        SimulationConfig::new(
            rng.random_range(MIN_ANGLE..=MAX_ANGLE),
            rng.random_range(MIN_SPEED..=MAX_SPEED),
            rng.random_range(1.0..=MAX_GRAVITY),
            rng.random_range(MIN_RESTITUTION..=MAX_RESTITUTION),
        )
    }

    pub fn run() -> Result<(), SettingsError> {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

        let cli = Cli::parse();
        let settings = cli.settings()?;
        let dt = settings.tick_dt();

        if let Some(count) = cli.demo {
            log::info!("Demo: {} launches, seed {}", count, cli.seed);
            let mut rng = Pcg32::seed_from_u64(cli.seed);
            let mut sim = Simulation::default();
            for i in 0..count {
                let config = random_config(&mut rng);
                sim.set_config(config);
                let (stats, bounces) = fly(&mut sim, dt);
                println!(
                    "#{:<3} {:>5.1}° {:>5.1} m/s g={:>5.2} e={:.2} -> range {:>7.2} m, max {:>6.2} m, {:>6.2} s, {} bounce(s)",
                    i + 1,
                    config.angle,
                    config.speed,
                    config.gravity,
                    config.restitution,
                    stats.range,
                    stats.max_height,
                    stats.elapsed_time,
                    bounces
                );
            }
            return Ok(());
        }

        let mut sim = Simulation::new(settings.simulation);
        if let Some(preview) = sim.preview() {
            log::info!(
                "Predicted: apex {:.2} m at x = {:.2}, first arc range {:.2} m",
                preview.apex_height(),
                preview.apex.x,
                preview.range()
            );
        }

        let (stats, bounces) = fly(&mut sim, dt);
        if cli.csv {
            println!("{}", stats_csv(&sim.config(), &stats, "cricket-flight (headless)"));
        } else {
            for (label, value, unit) in stats_rows(&stats) {
                println!("{:<18} {:>10} {}", label, value, unit);
            }
            println!("{:<18} {:>10}", "Bounces", bounces);
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), cricket_flight::SettingsError> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::start, this is just to satisfy the compiler
}
