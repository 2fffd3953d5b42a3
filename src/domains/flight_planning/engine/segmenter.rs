use super::geometry::NormalizedField;
use crate::common::{DomainError, DomainResult};
use crate::domains::flight_planning::aggregate::plan::{FlightSegment, ResupplyKind};
use crate::domains::flight_planning::aggregate::types::{CoveragePass, LocalPoint, PlanningInput};
use ordered_float::OrderedFloat;

/// Simulated per-drone state: where the vehicle is, what is left in its
/// budgets, and how far its wall clock has advanced.
#[derive(Debug, Clone)]
struct DroneCursor {
    location: LocalPoint,
    battery_minutes_remaining: f64,
    tank_liters_remaining: f64,
    wall_clock_minutes: f64,
}

/// Stage-3 output: globally ordered segments plus each drone's final wall
/// clock (the aggregator takes the max, drones fly concurrently).
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentationOutcome {
    pub segments: Vec<FlightSegment>,
    pub drone_wall_clock_minutes: Vec<f64>,
}

/// Walk the ordered passes and convert them into flight segments bounded by
/// the battery-time and tank-volume budgets, inserting resupply detours
/// whenever a budget would be exceeded.
///
/// Passes are assigned round-robin (pass i -> drone i mod n) so each drone
/// flies a spatially coherent sub-sweep. A pass is never split mid-flight:
/// one that cannot be flown on full budgets fails the whole plan.
pub fn segment(
    passes: &[CoveragePass],
    input: &PlanningInput,
    field: &NormalizedField,
) -> DomainResult<SegmentationOutcome> {
    let resupply_local = field.project_to_local(&input.resupply_site);
    let speed = input.ground_speed_meters_per_minute();
    let turn_minutes = input.turn_duration_minutes();
    let drone_count = input.drone_count as usize;

    let mut cursors: Vec<DroneCursor> = (0..drone_count)
        .map(|_| DroneCursor {
            location: resupply_local,
            battery_minutes_remaining: input.battery_endurance_minutes,
            tank_liters_remaining: input.tank_capacity_liters,
            wall_clock_minutes: 0.0,
        })
        .collect();
    let mut streams: Vec<Vec<(f64, FlightSegment)>> = vec![Vec::new(); drone_count];

    for (i, pass) in passes.iter().enumerate() {
        let drone = i % drone_count;

        let flight_minutes = pass.length_meters / speed + turn_minutes;
        let volume_liters = pass.length_meters * input.track_spacing_meters / 10_000.0
            * input.application_rate_l_per_ha;

        // A pass that does not fit a full budget needs different equipment,
        // not a detour. Partial spraying of a pass is a correctness hazard.
        if volume_liters > input.tank_capacity_liters {
            return Err(DomainError::InfeasiblePlan {
                pass_index: pass.index,
                resource: "tank volume".to_string(),
                shortfall: volume_liters - input.tank_capacity_liters,
            });
        }
        if flight_minutes > input.battery_endurance_minutes {
            return Err(DomainError::InfeasiblePlan {
                pass_index: pass.index,
                resource: "battery time".to_string(),
                shortfall: flight_minutes - input.battery_endurance_minutes,
            });
        }

        let cursor = &mut cursors[drone];
        let stream = &mut streams[drone];

        if stream.is_empty() {
            // Ferry from the resupply site to the first pass. Charged to the
            // wall clock only; segment distance covers the productive leg.
            cursor.wall_clock_minutes += cursor.location.distance_to(&pass.start) / speed;
        }

        let battery_short = cursor.battery_minutes_remaining < flight_minutes;
        let tank_short = cursor.tank_liters_remaining < volume_liters;
        if battery_short || tank_short {
            let kind = if battery_short && tank_short {
                ResupplyKind::Both
            } else if battery_short {
                ResupplyKind::Battery
            } else {
                ResupplyKind::Product
            };

            let detour_meters = cursor.location.distance_to(&resupply_local)
                + resupply_local.distance_to(&pass.start);
            cursor.wall_clock_minutes +=
                detour_meters / speed + input.resupply_duration_minutes;
            if battery_short {
                cursor.battery_minutes_remaining = input.battery_endurance_minutes;
            }
            if tank_short {
                cursor.tank_liters_remaining = input.tank_capacity_liters;
            }

            if let Some((_, previous)) = stream.last_mut() {
                previous.requires_resupply = true;
                previous.resupply_kind = Some(kind);
                previous.comment = Some(resupply_comment(kind).to_string());
            }
        }

        cursor.battery_minutes_remaining -= flight_minutes;
        cursor.tank_liters_remaining -= volume_liters;
        cursor.wall_clock_minutes += flight_minutes;
        cursor.location = pass.end;

        let segment = FlightSegment {
            sequence_number: 0, // assigned at merge time
            drone_index: drone as u32,
            start: field.to_geo(&pass.start),
            end: field.to_geo(&pass.end),
            distance_meters: pass.length_meters,
            flight_duration_minutes: flight_minutes,
            area_covered_hectares: pass.length_meters * input.track_spacing_meters / 10_000.0,
            volume_dispensed_liters: volume_liters,
            requires_resupply: false,
            resupply_kind: None,
            comment: None,
        };
        stream.push((cursor.wall_clock_minutes, segment));
    }

    // Merge the per-drone streams in wall-clock completion order so the
    // plan reflects realistic interleaving of concurrent drones. Each
    // stream is already non-decreasing; drone index breaks ties.
    let mut merged: Vec<(OrderedFloat<f64>, usize, FlightSegment)> = streams
        .into_iter()
        .enumerate()
        .flat_map(|(drone, stream)| {
            stream
                .into_iter()
                .map(move |(completed_at, segment)| (OrderedFloat(completed_at), drone, segment))
        })
        .collect();
    merged.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));

    let segments = merged
        .into_iter()
        .enumerate()
        .map(|(i, (_, _, mut segment))| {
            segment.sequence_number = i as u32 + 1;
            segment
        })
        .collect();

    Ok(SegmentationOutcome {
        segments,
        drone_wall_clock_minutes: cursors.into_iter().map(|c| c.wall_clock_minutes).collect(),
    })
}

fn resupply_comment(kind: ResupplyKind) -> &'static str {
    match kind {
        ResupplyKind::Battery => "battery swap before the next pass",
        ResupplyKind::Product => "tank refill before the next pass",
        ResupplyKind::Both => "battery swap and tank refill before the next pass",
    }
}
