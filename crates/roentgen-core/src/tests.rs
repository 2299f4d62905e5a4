#[cfg(test)]
mod tests {
    use crate::config::RadiationConfig;
    use crate::constants::*;
    use crate::events::SimEvent;
    use crate::ray::RadiationRay;
    use crate::state::PulseReport;
    use crate::types::{Aabb, GridId, MapId, SimTime, TileCoord, WorldPos};

    #[test]
    fn test_world_pos_range() {
        let a = WorldPos::new(0.0, 0.0);
        let b = WorldPos::new(3.0, 4.0);
        assert!((a.range_to(&b) - 5.0).abs() < 1e-10);
        assert!((b.range_to(&a) - 5.0).abs() < 1e-10);
        assert_eq!(a.range_to(&a), 0.0);
    }

    #[test]
    fn test_world_pos_dvec2_round_trip() {
        let p = WorldPos::new(-2.5, 7.25);
        let back = WorldPos::from_dvec2(p.to_dvec2());
        assert_eq!(p, back);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);

        for _ in 0..5 {
            time.advance(DEFAULT_TICK_INTERVAL_SECS);
        }
        assert_eq!(time.tick, 5);
        assert!((time.elapsed_secs - 5.0 * DEFAULT_TICK_INTERVAL_SECS).abs() < 1e-10);
    }

    #[test]
    fn test_aabb_from_points_normalizes_corners() {
        let b = Aabb::from_points(WorldPos::new(5.0, -1.0), WorldPos::new(-3.0, 2.0));
        assert_eq!(b.min, WorldPos::new(-3.0, -1.0));
        assert_eq!(b.max, WorldPos::new(5.0, 2.0));
    }

    #[test]
    fn test_aabb_intersects() {
        let a = Aabb::from_points(WorldPos::new(0.0, 0.0), WorldPos::new(4.0, 4.0));
        let overlapping = Aabb::from_points(WorldPos::new(3.0, 3.0), WorldPos::new(6.0, 6.0));
        let touching = Aabb::from_points(WorldPos::new(4.0, 0.0), WorldPos::new(8.0, 4.0));
        let separate = Aabb::from_points(WorldPos::new(5.0, 5.0), WorldPos::new(6.0, 6.0));

        assert!(a.intersects(&overlapping));
        assert!(overlapping.intersects(&a));
        // Edge contact counts: a ray along a grid's border is still tested.
        assert!(a.intersects(&touching));
        assert!(!a.intersects(&separate));
    }

    #[test]
    fn test_aabb_of_points() {
        assert!(Aabb::of(&[]).is_none());

        let b = Aabb::of(&[
            WorldPos::new(1.0, 1.0),
            WorldPos::new(-2.0, 5.0),
            WorldPos::new(0.0, -3.0),
        ])
        .unwrap();
        assert_eq!(b.min, WorldPos::new(-2.0, -3.0));
        assert_eq!(b.max, WorldPos::new(1.0, 5.0));
    }

    #[test]
    fn test_ray_record_disabled_allocates_nothing() {
        let ray = RadiationRay::new(
            MapId(0),
            WorldPos::new(0.0, 0.0),
            WorldPos::new(1.0, 0.0),
            10.0,
            false,
        );
        assert!(ray.blockers.is_none());
    }

    #[test]
    fn test_ray_deplete_clamps_and_marks() {
        let mut ray = RadiationRay::new(
            MapId(0),
            WorldPos::new(0.0, 0.0),
            WorldPos::new(1.0, 0.0),
            10.0,
            true,
        );
        ray.rads = 0.05;
        ray.deplete();
        assert_eq!(ray.rads, 0.0);
        assert!(ray.is_depleted());
        assert!(!ray.reached_destination);
    }

    #[test]
    fn test_ray_blocker_recording_order() {
        let grid = GridId(3);
        let mut ray = RadiationRay::new(
            MapId(0),
            WorldPos::new(0.0, 0.0),
            WorldPos::new(4.0, 0.0),
            10.0,
            true,
        );

        ray.rads = 7.0;
        ray.record_blocker(grid, TileCoord::new(1, 0));
        ray.rads = 2.0;
        ray.record_blocker(grid, TileCoord::new(2, 0));

        let blockers = &ray.blockers.as_ref().unwrap()[&grid];
        assert_eq!(blockers.len(), 2);
        assert_eq!(blockers[0].tile, TileCoord::new(1, 0));
        assert_eq!(blockers[0].rads_after, 7.0);
        assert_eq!(blockers[1].tile, TileCoord::new(2, 0));
        assert_eq!(blockers[1].rads_after, 2.0);
    }

    #[test]
    fn test_config_defaults_match_constants() {
        let config = RadiationConfig::default();
        assert_eq!(config.max_distance, DEFAULT_MAX_RADIATION_DISTANCE);
        assert_eq!(config.min_intensity, MIN_RAY_INTENSITY);
        assert!(config.simplified_same_grid);
        assert_eq!(config.tick_interval_secs, DEFAULT_TICK_INTERVAL_SECS);
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = RadiationConfig {
            max_distance: 50.0,
            min_intensity: 0.5,
            simplified_same_grid: false,
            tick_interval_secs: 0.5,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: RadiationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.max_distance, 50.0);
        assert!(!back.simplified_same_grid);
    }

    /// Verify SimEvent round-trips through serde (tagged union).
    #[test]
    fn test_sim_event_serde() {
        let events = vec![
            SimEvent::PulseCompleted { tick: 7 },
            SimEvent::ReceiverDosed {
                receiver: 42,
                exposure: 13.5,
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: SimEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify PulseReport can be serialized to JSON and stays small when empty.
    #[test]
    fn test_pulse_report_serde() {
        let report = PulseReport::default();
        let json = serde_json::to_string(&report).unwrap();
        let back: PulseReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report.time.tick, back.time.tick);
        assert!(
            json.len() < 512,
            "Empty report should be <512 bytes, was {} bytes",
            json.len()
        );
    }
}
