#[cfg(test)]
mod tests {
    use crate::commands::{DifficultyModifiers, MapModifiers, PlayerCommand};
    use crate::enums::*;
    use crate::events::SimEvent;
    use crate::path::{distance_to_segment, Path, PathSet};
    use crate::state::GameStateSnapshot;
    use crate::status::StatusState;
    use crate::types::{turn_toward, wrap_angle, Position, SimTime};

    /// Verify enums round-trip through serde_json.
    #[test]
    fn test_tower_kind_serde() {
        let variants = vec![
            TowerKind::Striker,
            TowerKind::Maul,
            TowerKind::Slam,
            TowerKind::Frost,
            TowerKind::Leaper,
            TowerKind::Rusher,
            TowerKind::Spitter,
            TowerKind::Spiker,
            TowerKind::Treasury,
            TowerKind::Artillery,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: TowerKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_enemy_phase_serde() {
        let variants = vec![EnemyPhase::Marching, EnemyPhase::Dead, EnemyPhase::Escaped];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: EnemyPhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::PlaceTower {
                kind: TowerKind::Leaper,
                position: Position::new(100.0, 200.0),
            },
            PlayerCommand::StartWave,
            PlayerCommand::SetSpeed { multiplier: 2.0 },
            PlayerCommand::SetAutoWave { enabled: true },
            PlayerCommand::SetMapModifiers {
                modifiers: MapModifiers::default(),
            },
            PlayerCommand::SetDifficultyModifiers {
                modifiers: DifficultyModifiers::default(),
            },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_sim_event_serde() {
        let events = vec![
            SimEvent::WaveStarted { wave: 3 },
            SimEvent::EnemyKilled { id: 7, bounty: 12 },
            SimEvent::PlacementRejected {
                reason: PlacementError::BlocksPath,
            },
            SimEvent::Defeat { wave: 11 },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let _back: SimEvent = serde_json::from_str(&json).unwrap();
        }
    }

    /// Verify GameStateSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    // ---- Geometry ----

    #[test]
    fn test_position_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_wrap_angle_range() {
        assert!((wrap_angle(3.0 * std::f64::consts::PI) - std::f64::consts::PI).abs() < 1e-10);
        assert!((wrap_angle(-std::f64::consts::FRAC_PI_2) + std::f64::consts::FRAC_PI_2).abs() < 1e-10);
        assert!((wrap_angle(0.0)).abs() < 1e-10);
    }

    #[test]
    fn test_turn_toward_clamps_and_takes_short_way() {
        // Within the budget: lands exactly on the desired heading.
        let h = turn_toward(0.0, 0.05, 0.1);
        assert!((h - 0.05).abs() < 1e-10);

        // Beyond the budget: moves by exactly max_step.
        let h = turn_toward(0.0, 1.0, 0.1);
        assert!((h - 0.1).abs() < 1e-10);

        // Short way around the wrap: from just below +PI toward just
        // above -PI should rotate forward, not back through zero.
        let from = std::f64::consts::PI - 0.05;
        let to = -std::f64::consts::PI + 0.05;
        let h = turn_toward(from, to, 0.2);
        assert!((wrap_angle(h - to)).abs() < 1e-10);
    }

    #[test]
    fn test_distance_to_segment() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(10.0, 0.0);

        // Perpendicular from the middle.
        assert!((distance_to_segment(&Position::new(5.0, 3.0), &a, &b) - 3.0).abs() < 1e-10);
        // Past the end: distance to the endpoint.
        assert!((distance_to_segment(&Position::new(13.0, 4.0), &a, &b) - 5.0).abs() < 1e-10);
        // On the segment.
        assert!(distance_to_segment(&Position::new(2.0, 0.0), &a, &b) < 1e-10);
    }

    // ---- Path model ----

    fn two_path_set() -> PathSet {
        PathSet::new(
            vec![
                Path::new(
                    "north",
                    vec![
                        Position::new(0.0, 0.0),
                        Position::new(100.0, 0.0),
                        Position::new(100.0, 100.0),
                    ],
                ),
                Path::new(
                    "south",
                    vec![Position::new(0.0, 50.0), Position::new(100.0, 50.0)],
                ),
            ],
            vec![3.0, 1.0],
        )
    }

    #[test]
    fn test_path_point_past_end_is_none() {
        let set = two_path_set();
        assert!(set.get(0).point(2).is_some());
        assert!(set.get(0).point(3).is_none());
        assert_eq!(set.get(0).last_index(), 2);
    }

    #[test]
    fn test_pick_respects_weight_boundaries() {
        let set = two_path_set();
        // Total weight 4.0; path 0 owns [0, 0.75), path 1 owns [0.75, 1).
        assert_eq!(set.pick(0.0), 0);
        assert_eq!(set.pick(0.74), 0);
        assert_eq!(set.pick(0.75), 1);
        assert_eq!(set.pick(0.999), 1);
    }

    #[test]
    fn test_pick_skips_zero_weight_paths() {
        let set = PathSet::new(
            vec![
                Path::new("a", vec![Position::new(0.0, 0.0), Position::new(1.0, 0.0)]),
                Path::new("b", vec![Position::new(0.0, 1.0), Position::new(1.0, 1.0)]),
            ],
            vec![0.0, 5.0],
        );
        for i in 0..10 {
            assert_eq!(set.pick(i as f64 / 10.0), 1);
        }
    }

    #[test]
    fn test_pathset_min_distance_considers_all_paths() {
        let set = two_path_set();
        // This point is 50 away from path 0 but only 10 from path 1.
        let p = Position::new(50.0, 40.0);
        assert!((set.min_distance_to(&p) - 10.0).abs() < 1e-10);
    }

    // ---- Status model ----

    #[test]
    fn test_bleed_strongest_wins_refresh_not_stack() {
        let mut status = StatusState::default();
        status.apply_bleed(4.0, 2.0);
        status.apply_bleed(6.0, 1.0);
        assert_eq!(status.bleed_dps, 6.0);
        assert_eq!(status.bleed_secs, 2.0);
    }

    #[test]
    fn test_slow_stronger_factor_and_longer_duration_win() {
        let mut status = StatusState::default();
        status.apply_slow(0.6, 1.0);
        status.apply_slow(0.8, 3.0);
        assert_eq!(status.slow_factor, 0.6);
        assert_eq!(status.slow_secs, 3.0);
    }

    #[test]
    fn test_stun_longest_wins() {
        let mut status = StatusState::default();
        status.apply_stun(0.5);
        status.apply_stun(0.2);
        assert_eq!(status.stun_secs, 0.5);
    }

    #[test]
    fn test_decay_resets_to_neutral_on_expiry() {
        let mut status = StatusState::default();
        status.apply_bleed(10.0, 0.1);
        status.apply_slow(0.5, 0.1);
        status.apply_stun(0.1);

        let damage = status.decay(0.2);
        // Bleed only accrues for the 0.1s it was active.
        assert!((damage - 1.0).abs() < 1e-10);
        assert_eq!(status.bleed_dps, 0.0);
        assert_eq!(status.slow_factor, 1.0);
        assert_eq!(status.stun_secs, 0.0);
        assert!(!status.is_stunned());
        assert!(!status.is_slowed());
        assert!(!status.is_bleeding());
    }

    #[test]
    fn test_decay_accrues_bleed_damage() {
        let mut status = StatusState::default();
        status.apply_bleed(5.0, 2.0);
        let mut total = 0.0;
        for _ in 0..30 {
            total += status.decay(1.0 / 30.0);
        }
        // One second of 5 dps.
        assert!((total - 5.0).abs() < 1e-9);
        assert!(status.is_bleeding());
    }

    // ---- SimTime ----

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..30 {
            time.advance(crate::constants::DT);
        }
        assert_eq!(time.tick, 30);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }
}
