//! planner — size an elevator fleet for a building, then dispatch riders.
//!
//! ```text
//! planner                                   interactive profile + requests
//! planner profile.json                      profile from file, interactive requests
//! planner profile.json --simulate N [--seed S]
//!                                           profile from file, N random requests
//! ```
//!
//! Set `LIFT_LOG=debug` to see selection and movement events on stderr.

mod logging;
mod prompt;
mod report;

#[cfg(test)]
mod tests;

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use lift_estimate::BuildingProfile;
use lift_sim::{Session, SessionBuilder, TrafficGenerator};
use tracing::{info, warn};

use prompt::Prompter;

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_SEED: u64 = 42;

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Debug, Default, PartialEq)]
struct Args {
    profile:  Option<PathBuf>,
    simulate: Option<usize>,
    seed:     u64,
}

impl Args {
    fn parse<I: IntoIterator<Item = String>>(raw: I) -> Result<Self> {
        let mut args = Args { seed: DEFAULT_SEED, ..Args::default() };
        let mut it = raw.into_iter();
        while let Some(arg) = it.next() {
            match arg.as_str() {
                "--simulate" => {
                    let n = it.next().context("--simulate needs a request count")?;
                    args.simulate = Some(n.parse().with_context(|| format!("bad request count {n:?}"))?);
                }
                "--seed" => {
                    let s = it.next().context("--seed needs a value")?;
                    args.seed = s.parse().with_context(|| format!("bad seed {s:?}"))?;
                }
                flag if flag.starts_with("--") => bail!("unknown option {flag}"),
                path => {
                    if args.profile.is_some() {
                        bail!("only one profile file may be given");
                    }
                    args.profile = Some(PathBuf::from(path));
                }
            }
        }
        if args.simulate.is_some() && args.profile.is_none() {
            bail!("--simulate needs a profile file");
        }
        Ok(args)
    }
}

fn load_profile(path: &Path) -> Result<BuildingProfile> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Build a session from the file profile if it loads and validates, otherwise
/// from prompted values, re-prompting until the profile is accepted.
/// `None` when the input ends first.
fn start_session<R: BufRead, W: Write>(
    prompter:  &mut Prompter<R, W>,
    from_file: Option<Result<BuildingProfile>>,
) -> Result<Option<(BuildingProfile, Session)>> {
    let mut from_file = from_file;
    loop {
        let profile = match from_file.take() {
            Some(Ok(p)) => p,
            Some(Err(e)) => {
                warn!(error = %e, "profile file rejected");
                prompter.say(&format!("Could not use the profile file ({e:#}). Enter the building details instead.\n"))?;
                continue;
            }
            None => match prompter.building_profile()? {
                Some(p) => p,
                None => return Ok(None),
            },
        };
        match SessionBuilder::new(profile.clone()).build() {
            Ok(session) => return Ok(Some((profile, session))),
            Err(e) => {
                warn!(error = %e, "building profile rejected");
                prompter.say(&format!("{e}. Please enter the building details again.\n"))?;
            }
        }
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse(std::env::args().skip(1))?;

    let stdin  = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    println!("\n=== Elevator Management System ===\n");

    let from_file = args.profile.as_deref().map(load_profile);
    let Some((profile, mut session)) = start_session(&mut prompter, from_file)? else {
        return Ok(());
    };
    report::recommendation(&mut io::stdout(), &profile, &session.recommendation)?;

    if let Some(n) = args.simulate {
        info!(requests = n, seed = args.seed, "batch run");
        let traffic = TrafficGenerator::new(args.seed, profile.floors);
        let stats = session.run(traffic.take(n)).clone();
        report::stats(&mut io::stdout(), &stats)?;
        return Ok(());
    }

    println!("--- Elevator Scheduling ---");
    while let Some(request) = prompter.request(profile.floors)? {
        let mut out = io::stdout();
        match session.dispatch(&request) {
            Ok(outcome) => report::outcome(&mut out, &outcome)?,
            Err(e)      => writeln!(out, "Request {request} rejected: {e}\n")?,
        }
    }

    report::stats(&mut io::stdout(), session.stats())?;
    Ok(())
}
