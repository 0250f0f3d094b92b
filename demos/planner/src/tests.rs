//! Tests for the planner shell: argument parsing and prompt handling.

use std::io::Cursor;

use lift_core::{Direction, Floor};

use lift_estimate::BuildingProfile;

use crate::prompt::Prompter;
use crate::{Args, start_session};

fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
    Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn args(raw: &[&str]) -> anyhow::Result<Args> {
    Args::parse(raw.iter().map(|s| s.to_string()))
}

#[cfg(test)]
mod cli_args {
    use super::*;

    #[test]
    fn no_args_is_interactive() {
        let a = args(&[]).unwrap();
        assert_eq!(a.profile, None);
        assert_eq!(a.simulate, None);
        assert_eq!(a.seed, 42);
    }

    #[test]
    fn simulate_with_seed() {
        let a = args(&["tower.json", "--simulate", "100", "--seed", "7"]).unwrap();
        assert_eq!(a.profile.as_deref(), Some(std::path::Path::new("tower.json")));
        assert_eq!(a.simulate, Some(100));
        assert_eq!(a.seed, 7);
    }

    #[test]
    fn simulate_without_profile_rejected() {
        assert!(args(&["--simulate", "10"]).is_err());
    }

    #[test]
    fn unknown_flag_rejected() {
        assert!(args(&["--fast"]).is_err());
        assert!(args(&["a.json", "b.json"]).is_err());
        assert!(args(&["a.json", "--simulate", "many"]).is_err());
    }
}

#[cfg(test)]
mod prompts {
    use super::*;

    #[test]
    fn positive_int_reasks_until_valid() {
        let mut p = prompter("abc\n0\n-3\n7\n");
        assert_eq!(p.positive_int("n: ").unwrap(), Some(7));
    }

    #[test]
    fn positive_number_rejects_nan() {
        let mut p = prompter("NaN\n-1.5\n3.5\n");
        assert_eq!(p.positive_number("h: ").unwrap(), Some(3.5));
    }

    #[test]
    fn optional_capacity_blank_or_invalid_is_none() {
        assert_eq!(prompter("\n").optional_positive_int("c: ").unwrap(), None);
        assert_eq!(prompter("zero\n").optional_positive_int("c: ").unwrap(), None);
        assert_eq!(prompter("0\n").optional_positive_int("c: ").unwrap(), None);
        assert_eq!(prompter("16\n").optional_positive_int("c: ").unwrap(), Some(16));
    }

    #[test]
    fn full_profile() {
        let mut p = prompter("1\n10\n100\n60\n4\n\n");
        let profile = p.building_profile().unwrap().unwrap();
        assert_eq!(profile.floors, 10);
        assert_eq!(profile.peak_riders, 100);
        assert_eq!(profile.max_wait_secs, 60.0);
        assert_eq!(profile.floor_height_m, 4.0);
        assert_eq!(profile.preferred_capacity, None);
    }

    #[test]
    fn profile_eof_is_none() {
        assert!(prompter("10\n").building_profile().unwrap().is_none());
    }

    #[test]
    fn ground_floor_request_skips_direction_prompt() {
        let mut p = prompter("1\n5\n");
        let req = p.request(10).unwrap().unwrap();
        assert_eq!(req.origin, Floor(1));
        assert_eq!(req.direction, Direction::Up);
        assert_eq!(req.destination, Floor(5));
    }

    #[test]
    fn intermediate_floor_asks_direction_and_bounds_destination() {
        let mut p = prompter("5\nsideways\nd\n7\n2\n");
        let req = p.request(10).unwrap().unwrap();
        assert_eq!(req.direction, Direction::Down);
        assert_eq!(req.destination, Floor(2));
        assert_eq!(req.validate(10), Ok(()));
    }

    #[test]
    fn quit_ends_requests() {
        assert!(prompter("q\n").request(10).unwrap().is_none());
        assert!(prompter("").request(10).unwrap().is_none());
    }
}

#[cfg(test)]
mod session_start {
    use super::*;

    fn file_profile(floor_height_m: f64) -> BuildingProfile {
        BuildingProfile {
            floors:             10,
            peak_riders:        100,
            max_wait_secs:      30.0,
            floor_height_m,
            preferred_capacity: None,
        }
    }

    #[test]
    fn valid_file_profile_used_without_prompting() {
        let mut p = prompter("");
        let (profile, session) = start_session(&mut p, Some(Ok(file_profile(4.0)))).unwrap().unwrap();
        assert_eq!(profile.floors, 10);
        assert_eq!(session.recommendation.elevator_count, 3);
    }

    #[test]
    fn invalid_file_profile_falls_back_to_prompts() {
        let mut p = prompter("8\n50\n20\n3\n\n");
        let (profile, session) = start_session(&mut p, Some(Ok(file_profile(0.0)))).unwrap().unwrap();
        assert_eq!(profile.floors, 8);
        assert_eq!(profile.floor_height_m, 3.0);
        assert_eq!(session.fleet().floor_count(), 8);
    }

    #[test]
    fn unreadable_file_falls_back_to_prompts() {
        let mut p = prompter("4\n10\n20\n3\n6\n");
        let failed = Err(anyhow::anyhow!("missing.json not found"));
        let (profile, _) = start_session(&mut p, Some(failed)).unwrap().unwrap();
        assert_eq!(profile.floors, 4);
        assert_eq!(profile.preferred_capacity, Some(6));
    }

    #[test]
    fn input_ending_after_rejection_is_none() {
        let mut p = prompter("");
        assert!(start_session(&mut p, Some(Ok(file_profile(-1.0)))).unwrap().is_none());
    }
}
