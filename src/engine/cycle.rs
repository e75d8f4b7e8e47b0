use crate::clock::Clock;
use crate::error::Error;
use crate::fetcher::Fetcher;
use crate::merge;

use super::EngineState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The page could not be fetched, nothing else was attempted.
    FetchFailed,
    /// Nothing was persisted or rendered.
    NoNewProjects,
    /// That many records were appended, saved and rendered.
    NewProjects(usize),
}

impl<F, C> EngineState<F, C>
where
    F: Fetcher,
    C: Clock,
{
    pub(super) async fn run_cycle(&mut self) -> Result<CycleOutcome, Error> {
        log::info!("Scanning for new projects...");
        self.stats.incr_total_cycles();

        let document = match self.fetcher.fetch(&self.config.url).await {
            Ok(document) => document,
            Err(e) => {
                log::error!("Cannot fetch {}: {}", self.config.url, e);
                self.stats.incr_fetch_failures();
                log::info!("No new project found.");
                return Ok(CycleOutcome::FetchFailed);
            }
        };

        let extracted = self.extractor.extract(&document, self.clock.now());
        let num_new = merge::merge(&mut self.known, extracted);
        if num_new == 0 {
            log::info!("No new project found.");
            return Ok(CycleOutcome::NoNewProjects);
        }

        log::info!("{} new projects found.", num_new);
        self.stats.add_new_projects(num_new as u64);
        self.store.save(&self.known)?;

        let output_path = &self.config.output_path;
        self.renderer.render(self.known.iter().rev(), output_path)?;
        log::info!("HTML file generated: {}", output_path.display());

        Ok(CycleOutcome::NewProjects(num_new))
    }
}
