//! Human-readable output.

use std::io::{self, Write};

use lift_dispatch::AssignmentOutcome;
use lift_estimate::{BuildingProfile, FleetRecommendation};
use lift_sim::SessionStats;

pub fn recommendation(
    out:     &mut impl Write,
    profile: &BuildingProfile,
    rec:     &FleetRecommendation,
) -> io::Result<()> {
    let a = &rec.assumptions;
    writeln!(out, "\n--- Elevator System Recommendation ---")?;
    writeln!(out, "Number of floors: {}", profile.floors)?;
    writeln!(out, "Total people (peak): {}", profile.peak_riders)?;
    writeln!(out, "Max acceptable wait time: {} seconds", rec.max_wait_secs)?;
    writeln!(out, "Floor height: {} meters", profile.floor_height_m)?;
    writeln!(out, "Elevator capacity: {} persons", rec.capacity)?;
    writeln!(out, "Assumed average round trip time: {:.1} seconds", rec.round_trip_secs)?;
    writeln!(out, "Estimated trips per elevator in peak period: {:.2}", rec.trips_per_car)?;
    writeln!(out, "People served per elevator in peak period: {:.2}", rec.riders_per_car)?;
    writeln!(out, "\nRecommended number of elevators: {}", rec.elevator_count)?;
    writeln!(out, "Recommended capacity per elevator: {} persons", rec.capacity)?;
    writeln!(out, "\n--- Calculation Logic & Assumptions ---")?;
    writeln!(out, "- Average stop time per floor: {} seconds", a.dwell_secs)?;
    writeln!(out, "- Elevator speed: {} m/s", a.speed_mps)?;
    writeln!(out, "- Peak period: {} seconds ({} minutes)", a.peak_window_secs, a.peak_window_secs / 60.0)?;
    writeln!(out, "- Default elevator capacity: {} persons", a.default_capacity)?;
    writeln!(out, "\nThis tool is intended for preliminary planning and estimation purposes only.\n")
}

pub fn outcome(out: &mut impl Write, o: &AssignmentOutcome) -> io::Result<()> {
    writeln!(
        out,
        "{} assigned (was at floor {}, {}, {} aboard).",
        o.elevator, o.before.floor, o.before.status, o.before.occupancy
    )?;
    writeln!(out, "Estimated arrival: {:.1} seconds", o.estimated_arrival_display())?;
    writeln!(out, "Ride time: {:.1} seconds", o.ride_secs)?;
    writeln!(out, "{} is now at floor {} ({}).\n", o.elevator, o.final_floor, o.final_status)
}

pub fn stats(out: &mut impl Write, s: &SessionStats) -> io::Result<()> {
    writeln!(out, "\n--- Session Summary ---")?;
    writeln!(out, "Requests served: {}", s.served)?;
    writeln!(out, "Requests rejected: {}", s.rejected)?;
    writeln!(out, "Mean estimated wait: {:.1} seconds", s.mean_wait_secs())?;
    writeln!(out, "Longest estimated wait: {:.1} seconds", s.longest_wait_secs)?;
    writeln!(out, "Pickups over the wait target: {}", s.over_target)
}
