#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::commands::PlayerCommand;
    use crate::constants::*;
    use crate::events::SessionEvent;
    use crate::state::FrameSnapshot;
    use crate::types::{PointerTracker, SimTime, ViewerState};

    /// Verify SimTime advancement accumulates ticks and seconds.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        assert_eq!(time.elapsed_secs, 0.0);

        for _ in 0..60 {
            time.advance(TICK_DT);
        }
        assert_eq!(time.tick, 60);
        assert!(
            (time.elapsed_secs - 1.0).abs() < 1e-5,
            "60 ticks at 60Hz should equal 1 second, got {}",
            time.elapsed_secs
        );
    }

    /// The first sample only records the baseline and yields no delta.
    #[test]
    fn test_pointer_tracker_first_sample_is_baseline() {
        let mut tracker = PointerTracker::default();
        assert_eq!(tracker.observe(400.0, 300.0), None);
        // Second sample produces a delta relative to the first.
        assert!(tracker.observe(410.0, 300.0).is_some());
    }

    /// Delta signs: pointer right is +dx, pointer down (screen y grows
    /// downward) is -dy.
    #[test]
    fn test_pointer_tracker_delta_signs() {
        let mut tracker = PointerTracker::default();
        tracker.observe(100.0, 100.0);

        let (dx, dy) = tracker.observe(110.0, 125.0).unwrap();
        assert!((dx - 10.0).abs() < 1e-6);
        assert!((dy + 25.0).abs() < 1e-6, "downward motion must invert: {dy}");
    }

    /// After a reset the next sample is a baseline again.
    #[test]
    fn test_pointer_tracker_reset() {
        let mut tracker = PointerTracker::default();
        tracker.observe(0.0, 0.0);
        tracker.observe(50.0, 50.0);

        tracker.reset();
        assert_eq!(tracker.observe(999.0, 999.0), None);
    }

    /// The default pose looks straight down -Z from (0, 1, 3).
    #[test]
    fn test_viewer_default_pose() {
        let viewer = ViewerState::default();
        assert_eq!(viewer.position, VIEWER_SPAWN);

        let forward = viewer.forward();
        assert!(
            (forward - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5,
            "default forward should be -Z, got {forward:?}"
        );
    }

    /// Forward stays unit length across yaw/pitch combinations.
    #[test]
    fn test_viewer_forward_unit_length() {
        let mut viewer = ViewerState::default();
        for (yaw, pitch) in [(0.0, 0.0), (37.5, 45.0), (-270.0, -89.0), (720.0, 89.0)] {
            viewer.yaw_deg = yaw;
            viewer.pitch_deg = pitch;
            let len = viewer.forward().length();
            assert!((len - 1.0).abs() < 1e-5, "forward not unit at ({yaw}, {pitch}): {len}");
        }
    }

    /// Ground movement direction depends on yaw only.
    #[test]
    fn test_horizontal_forward_ignores_pitch() {
        let mut viewer = ViewerState::default();
        viewer.pitch_deg = 0.0;
        let level = viewer.horizontal_forward();

        viewer.pitch_deg = 85.0;
        let steep = viewer.horizontal_forward();

        assert!((level - steep).length() < 1e-6);
        assert_eq!(steep.y, 0.0);
        assert!((steep.length() - 1.0).abs() < 1e-5);
    }

    /// The view matrix maps the eye to the origin and a point one unit ahead
    /// to (0, 0, -1) in camera space.
    #[test]
    fn test_view_matrix_maps_eye_to_origin() {
        let viewer = ViewerState::default();
        let view = viewer.view_matrix();

        let eye = view.transform_point3(viewer.position);
        assert!(eye.length() < 1e-4, "eye should map to origin, got {eye:?}");

        let ahead = view.transform_point3(viewer.position + viewer.forward());
        assert!(
            (ahead - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-4,
            "point ahead should map to -Z, got {ahead:?}"
        );
    }

    /// Projection parameters produce a finite matrix.
    #[test]
    fn test_projection_matrix_finite() {
        let proj = ViewerState::default().projection_matrix();
        for col in 0..4 {
            assert!(proj.col(col).is_finite(), "projection column {col} not finite");
        }
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::PointerMoved { x: 412.5, y: 299.0 },
            PlayerCommand::SetMovement {
                forward: true,
                backward: false,
            },
            PlayerCommand::ResetPointer,
            PlayerCommand::SetAspect { aspect: 16.0 / 9.0 },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify SessionEvent round-trips through serde.
    #[test]
    fn test_session_event_serde() {
        let events = vec![
            SessionEvent::WaveSpawned {
                wave_index: 3,
                count: WAVE_SIZE,
            },
            SessionEvent::Contact {
                pursuer_id: 11,
                distance: 0.82,
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: SessionEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    /// Verify FrameSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = FrameSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: FrameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.status, back.status);
        // An empty snapshot should stay comfortably small on the wire.
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }
}
