use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::{Departure, ScheduleError, StopTime, TransitRouteId, TransitRouteStop};

/// a stop pattern of a transit line, served by a single transport mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitRoute {
    pub id: TransitRouteId,
    /// schedule transport mode, for example "bus" or "rail". link candidate
    /// parameters are configured per schedule mode.
    pub transport_mode: String,
    pub stops: Vec<TransitRouteStop>,
    #[serde(default)]
    pub departures: Vec<Departure>,
}

impl TransitRoute {
    pub fn new(
        id: TransitRouteId,
        transport_mode: &str,
        stops: Vec<TransitRouteStop>,
    ) -> TransitRoute {
        TransitRoute {
            id,
            transport_mode: String::from(transport_mode),
            stops,
            departures: vec![],
        }
    }

    /// expands every departure of this route into its stop times, in ascending
    /// [`StopTime`] order. fails when a departure time plus an offset overflows
    /// the seconds counter.
    pub fn stop_times(&self) -> Result<Vec<StopTime>, ScheduleError> {
        let stop_times = self
            .departures
            .iter()
            .flat_map(|departure| {
                self.stops.iter().enumerate().map(
                    move |(idx, stop)| -> Result<StopTime, ScheduleError> {
                        let offset_time = |offset: u32| {
                            departure.departure_time.checked_add(offset).ok_or_else(|| {
                                ScheduleError::TimeOverflow(
                                    departure.id.clone(),
                                    stop.stop_facility_id.clone(),
                                    departure.departure_time,
                                    offset,
                                )
                            })
                        };
                        Ok(StopTime::new(
                            idx as u32,
                            offset_time(stop.get_arrival_offset())?,
                            offset_time(stop.get_departure_offset())?,
                            stop.stop_facility_id.clone(),
                            departure.id.clone(),
                        ))
                    },
                )
            })
            .collect::<Result<Vec<_>, ScheduleError>>()?;
        Ok(stop_times.into_iter().sorted().collect_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::TransitRoute;
    use crate::model::schedule::{Departure, ScheduleError, TransitRouteStop};

    #[test]
    fn test_stop_times_sorted_by_departure() {
        let mut route = TransitRoute::new(
            "r".into(),
            "bus",
            vec![
                TransitRouteStop::new("a".into()).with_offsets(0, 0),
                TransitRouteStop::new("b".into()).with_offsets(120, 150),
            ],
        );
        route.departures = vec![
            Departure {
                id: "late".into(),
                departure_time: 3600,
            },
            Departure {
                id: "early".into(),
                departure_time: 600,
            },
        ];
        let stop_times = route
            .stop_times()
            .expect("test invariant failed: offsets overflow");
        assert_eq!(stop_times.len(), 4);
        assert_eq!(stop_times[0].trip_id().0, "early");
        assert_eq!(stop_times[1].stop_facility_id().0, "b");
        assert_eq!(stop_times[1].arrival_time(), 720);
        assert_eq!(stop_times[1].departure_time(), 750);
        assert_eq!(stop_times[2].trip_id().0, "late");
        assert!(stop_times.is_sorted());
    }

    #[test]
    fn test_stop_time_overflow_is_error() {
        let mut route = TransitRoute::new(
            "r".into(),
            "bus",
            vec![TransitRouteStop::new("a".into()).with_offsets(10, 20)],
        );
        route.departures = vec![Departure {
            id: "t".into(),
            departure_time: u32::MAX - 5,
        }];
        assert!(matches!(
            route.stop_times(),
            Err(ScheduleError::TimeOverflow(trip, stop, _, 10)) if trip.0 == "t" && stop.0 == "a"
        ));
    }
}
