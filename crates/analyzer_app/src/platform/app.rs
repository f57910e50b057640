use std::io::{self, Write};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use analyzer_core::{update, AppState, AvailabilityStatus, Msg, Phase, ResumeFile};
use analyzer_engine::load_resume;
use analyzer_logging::{analyzer_error, analyzer_info, analyzer_warn};
use chrono::Datelike;
use clap::Parser;

use super::cli::Cli;
use super::config::AppConfig;
use super::effects::EffectRunner;
use super::error::AppError;
use super::logging;
use super::ui::render::{render_progress, render_report};

/// Granularity of the event loop while waiting on the engine.
const POLL_STEP: Duration = Duration::from_millis(250);
/// Extra time allowed past the request timeout before giving up on the engine.
const REPLY_GRACE: Duration = Duration::from_secs(15);

pub fn run_app() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(Phase::Succeeded) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(err) => {
            analyzer_error!("{}", err);
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<Phase, AppError> {
    let config = AppConfig::load(cli.config.as_deref())?.with_overrides(cli);
    logging::initialize(config.log, cli.verbose);
    analyzer_info!(
        "Starting: endpoint={} config={:?}",
        config.endpoint,
        cli.config
    );

    let job_description = cli.read_job_description()?;
    let resume = load_resume(&cli.resume)?;
    let settings = config.engine_settings();
    let runner = EffectRunner::new(&settings)?;

    let mut session = Session::new(runner, io::stdout().lock());
    session.dispatch(Msg::FileSelected(ResumeFile::new(
        resume.name,
        resume.media_type,
        resume.bytes,
    )))?;
    session.dispatch(Msg::JobDescriptionChanged(job_description))?;
    session.wait_for_server(config.wait_for_server())?;
    session.dispatch(Msg::SubmitClicked)?;
    session.wait_for_reply(settings.request_timeout + REPLY_GRACE)?;

    let view = session.state.view();
    let year = chrono::Local::now().year();
    session.write_lines(&render_report(&view, cli.raw, &config.footer_links, year))?;

    match &view.error {
        Some(error) => analyzer_warn!("Finished with {:?}: {}", error.kind, error.message),
        None => analyzer_info!("Finished with {:?}", view.phase),
    }
    Ok(view.phase)
}

/// Owns the state and feeds it messages, the way a UI event loop would.
struct Session<W: Write> {
    state: AppState,
    runner: EffectRunner,
    out: W,
}

impl<W: Write> Session<W> {
    fn new(runner: EffectRunner, out: W) -> Self {
        Self {
            state: AppState::new(),
            runner,
            out,
        }
    }

    fn dispatch(&mut self, msg: Msg) -> Result<(), AppError> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;
        self.runner.enqueue(effects);

        if was_dirty {
            writeln!(self.out, "{}", render_progress(&self.state.view()))?;
        }
        Ok(())
    }

    /// Waits until the poller has a definite answer. A waking server gets
    /// up to `limit` to come up; after that the submit goes ahead and the
    /// controller reports the status.
    fn wait_for_server(&mut self, limit: Duration) -> Result<(), AppError> {
        let deadline = Instant::now() + limit;
        loop {
            match self.state.availability() {
                AvailabilityStatus::Live | AvailabilityStatus::Offline => return Ok(()),
                AvailabilityStatus::Checking | AvailabilityStatus::Waking => {}
            }
            let now = Instant::now();
            if now >= deadline {
                analyzer_warn!(
                    "Server still {:?} after {:?}",
                    self.state.availability(),
                    limit
                );
                return Ok(());
            }
            if let Some(msg) = self.runner.next_msg(POLL_STEP.min(deadline - now)) {
                self.dispatch(msg)?;
            }
        }
    }

    fn wait_for_reply(&mut self, limit: Duration) -> Result<(), AppError> {
        let deadline = Instant::now() + limit;
        while self.state.phase() == Phase::InFlight {
            if Instant::now() >= deadline {
                return Err(AppError::EngineStalled);
            }
            if let Some(msg) = self.runner.next_msg(POLL_STEP) {
                self.dispatch(msg)?;
            }
        }
        Ok(())
    }

    fn write_lines(&mut self, lines: &[String]) -> Result<(), AppError> {
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()?;
        Ok(())
    }
}
