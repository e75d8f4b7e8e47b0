use tokio::sync::broadcast;

mod cycle;
mod polling_task;

use crate::Config;
use crate::clock::Clock;
use crate::error::Error;
use crate::extractor::Extractor;
use crate::fetcher::Fetcher;
use crate::record::ProjectRecord;
use crate::renderer::Renderer;
use crate::stats::Stats;
use crate::store::Store;

pub use cycle::CycleOutcome;

/// Everything a cycle needs, passed explicitly from one cycle to the next.
struct EngineState<F, C>
where
    F: Fetcher,
    C: Clock,
{
    config: Config,
    store: Store,
    extractor: Extractor,
    renderer: Renderer,
    fetcher: F,
    clock: C,
    /// Known projects, oldest first. Mirrors the content of `store`.
    known: Vec<ProjectRecord>,
    stats: Stats,
}

pub struct Engine<F, C>
where
    F: Fetcher,
    C: Clock,
{
    state: EngineState<F, C>,
    stop_tx: broadcast::Sender<()>,
    /// Subscribed at construction so a stop sent before `run` is not lost.
    stop_rx: broadcast::Receiver<()>,
}

impl<F, C> Engine<F, C>
where
    F: Fetcher,
    C: Clock,
{
    /// Validate `config` and load the known projects from the store.
    ///
    /// A malformed store is an error, a missing one is not.
    pub fn new(config: Config, fetcher: F, clock: C) -> Result<Self, Error> {
        config.sanity_check()?;

        let store = Store::new(config.store_path.clone());
        let known = store.load()?;
        log::debug!(
            "{} known projects loaded from {}",
            known.len(),
            store.path().display()
        );

        let extractor = Extractor::new(&config)?;
        let renderer = Renderer::new(&config);
        let stats = Stats::new(clock.now());
        let (stop_tx, stop_rx) = broadcast::channel::<()>(32);

        Ok(Self {
            state: EngineState {
                config,
                store,
                extractor,
                renderer,
                fetcher,
                clock,
                known,
                stats,
            },
            stop_tx,
            stop_rx,
        })
    }

    /// Known projects, oldest first.
    pub fn known_records(&self) -> &[ProjectRecord] {
        &self.state.known
    }

    pub fn stats(&self) -> &Stats {
        &self.state.stats
    }

    /// Sending on the returned channel stops `run` after the cycle in flight.
    /// A stop sent before `run` is called makes it return without a cycle.
    pub fn stop_handle(&self) -> broadcast::Sender<()> {
        self.stop_tx.clone()
    }

    /// Run a single fetch, extract, merge pass.
    pub async fn run_cycle(&mut self) -> Result<CycleOutcome, Error> {
        self.state.run_cycle().await
    }

    /// Poll until Ctrl-C.
    pub async fn start(&mut self) -> Result<(), Error> {
        let tx = self.stop_tx.clone();
        ctrlc::set_handler(move || {
            let _ = tx.send(());
        })?;
        self.run().await
    }

    /// Poll until a message arrives on `stop_handle()`.
    pub async fn run(&mut self) -> Result<(), Error> {
        polling_task::run_polling_loop(&mut self.state, &mut self.stop_rx).await?;

        let stats = &self.state.stats;
        log::info!(
            "Exit gracefully after {} cycles, {} new projects, {} failed fetches",
            stats.total_cycles(),
            stats.total_new_projects(),
            stats.fetch_failures(),
        );
        Ok(())
    }
}
