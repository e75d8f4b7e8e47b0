use std::time::Duration;

use tokio::sync::broadcast;

use crate::clock::Clock;
use crate::error::Error;
use crate::fetcher::Fetcher;

use super::EngineState;

/// Run cycles back to back, sleeping `poll_interval_secs` in between, until
/// a stop message is received. A fatal cycle error ends the loop.
pub(super) async fn run_polling_loop<F, C>(
    state: &mut EngineState<F, C>,
    stop_rx: &mut broadcast::Receiver<()>,
) -> Result<(), Error>
where
    F: Fetcher,
    C: Clock,
{
    let interval = Duration::from_secs(state.config.poll_interval_secs);
    'run: loop {
        if stop_rx.try_recv().is_ok() {
            break 'run;
        }

        let outcome = state.run_cycle().await?;
        log::debug!(
            "{:?}, {} cycles, {} known projects, {}s elapsed",
            outcome,
            state.stats.total_cycles(),
            state.known.len(),
            state.stats.elapsed_time(state.clock.now()),
        );

        let sleep = state.clock.sleep(interval);
        tokio::select! {
            biased;
            _ = stop_rx.recv() => {
                break 'run;
            }
            _ = sleep => {}
        }
    }
    Ok(())
}
