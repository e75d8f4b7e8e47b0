mod config;
mod engine;
mod stats;

pub mod clock;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod merge;
pub mod record;
pub mod renderer;
pub mod store;
pub mod util;

// (Re) Exports
pub use clock::{Clock, SystemClock};
pub use config::Config;
pub use engine::{CycleOutcome, Engine};
pub use error::Error;
pub use fetcher::{Fetcher, HttpFetcher};
pub use record::ProjectRecord;
pub use stats::Stats;

/// Engine fetching over HTTP on the system clock.
pub fn engine(config: Config) -> Result<Engine<HttpFetcher, SystemClock>, Error> {
    let fetcher = HttpFetcher::new(&config)?;
    Engine::new(config, fetcher, SystemClock)
}
