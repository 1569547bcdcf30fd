//! Series engine task
//!
//! One instance per algorithm. Pure polling design: the engine never
//! blocks on a command, it drains its command channel and advances one
//! series term every 10 ms tick, then publishes its state for the
//! controller.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};

use perimetron_core::config::RunConfig;
use perimetron_core::series::{Algorithm, SeriesEngine};

use crate::channels::{self, CommandChannel};
use crate::shared::SharedSeries;

/// Engine step interval
const ENGINE_TICK_MS: u64 = 10;

#[embassy_executor::task(pool_size = 2)]
pub async fn engine_task(
    algorithm: Algorithm,
    commands: &'static CommandChannel,
    state: &'static SharedSeries,
    config: RunConfig,
) {
    info!("Engine task started: {}", algorithm);

    let mut engine = SeriesEngine::with_policy(algorithm, config.timer_reset);
    let mut ticker = Ticker::every(Duration::from_millis(ENGINE_TICK_MS));

    loop {
        // Drained every tick, suspended or not: signals latch until
        // taken, and a command given while this engine was inactive
        // must not replay on the tick it becomes active again.
        let pending = commands.take_pending();

        if config.schedule.runs(algorithm, channels::active_algorithm()) {
            let was_accurate = engine.accuracy_reached();

            engine.tick(pending, Instant::now().as_millis());
            state.publish(&engine);

            if engine.accuracy_reached() && !was_accurate {
                info!(
                    "{} reached target accuracy after {} iterations in {} ms",
                    algorithm,
                    engine.iteration(),
                    engine.elapsed_ticks()
                );
            }
        }

        ticker.next().await;
    }
}
