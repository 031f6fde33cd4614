/*
 * Unit tests for the elevator controller
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_controller_init
 * - test_submit_valid_requests
 * - test_submit_invalid_requests
 * - test_start_twice
 * - test_stop_twice
 * - test_restart_clears_counters
 * - test_status_codes
 * - test_status_report
 * - test_status_json
 * - test_status_floor_out_of_range
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod controller_tests {
    use crate::config::ElevatorConfig;
    use crate::elevator::{ElevatorController, Shutdown};
    use crate::shared::Mode::{Idle, Offline};
    use crate::shared::{EngineError, MAX_FLOOR, MIN_FLOOR};
    use std::thread::sleep;
    use std::time::{Duration, Instant};

    fn setup_controller() -> ElevatorController {
        setup_controller_with(2, 4)
    }

    fn setup_controller_with(door_open_time: u64, travel_time: u64) -> ElevatorController {
        let config = ElevatorConfig {
            door_open_time,
            travel_time,
        };
        ElevatorController::new(&config)
    }

    fn wait_for_serviced(controller: &ElevatorController, floor: u8, count: u32) {
        let deadline = Instant::now() + Duration::from_secs(10);
        while controller.snapshot().floor(floor).serviced < count {
            assert!(Instant::now() < deadline, "Timed out waiting for floor {}", floor);
            sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn test_controller_init() {
        let controller = setup_controller();

        let snapshot = controller.snapshot();

        assert_eq!(snapshot.mode, Offline);
        assert_eq!(snapshot.current_floor, 1);
        assert_eq!(snapshot.waiting, 0);
        assert_eq!(snapshot.floors.len(), 10);
        assert_eq!(controller.join(), None);
    }

    #[test]
    fn test_submit_valid_requests() {
        // Purpose: Verify that every valid request adds exactly one passenger
        // to its start floor

        // Arrange
        let controller = setup_controller();
        let mut expected = 0;

        for start in MIN_FLOOR..=MAX_FLOOR {
            for destination in MIN_FLOOR..=MAX_FLOOR {
                if start == destination {
                    continue;
                }
                let kind = 1 + ((start + destination) % 4) as i32;
                let before = controller.snapshot().floor(start).waiting;

                // Act
                let result = controller.submit_request(kind, start as i32, destination as i32);

                // Assert
                assert_eq!(result, Ok(()));
                assert_eq!(controller.snapshot().floor(start).waiting, before + 1);
                expected += 1;
            }
        }
        assert_eq!(controller.snapshot().waiting, expected);
    }

    #[test]
    fn test_submit_invalid_requests() {
        // Purpose: Verify that invalid requests are rejected and change nothing

        // Arrange
        let controller = setup_controller();
        controller.submit_request(1, 2, 3).unwrap();
        let before = controller.snapshot();

        // Act + Assert
        assert_eq!(controller.submit_request(1, 4, 4), Err(EngineError::SameFloor(4)));
        assert_eq!(controller.submit_request(1, 0, 4), Err(EngineError::FloorOutOfRange(0)));
        assert_eq!(controller.submit_request(2, 3, 11), Err(EngineError::FloorOutOfRange(11)));
        assert_eq!(controller.submit_request(3, -1, 2), Err(EngineError::FloorOutOfRange(-1)));
        assert_eq!(controller.submit_request(3, 300, 2), Err(EngineError::FloorOutOfRange(300)));
        assert_eq!(controller.submit_request(0, 1, 2), Err(EngineError::InvalidPassengerKind(0)));
        assert_eq!(controller.submit_request(5, 1, 2), Err(EngineError::InvalidPassengerKind(5)));
        assert_eq!(controller.issue_request(5, 1, 2), 1);

        assert_eq!(controller.snapshot(), before);
    }

    #[test]
    fn test_start_twice() {
        // Purpose: Verify that starting a running elevator is a conflict and
        // does not reset anything

        // Arrange
        let controller = setup_controller();
        controller.submit_request(1, 1, 2).unwrap();
        controller.start().unwrap();
        wait_for_serviced(&controller, 2, 1);

        // Act
        let result = controller.start();

        // Assert
        assert_eq!(result, Err(EngineError::AlreadyRunning));
        assert_ne!(controller.snapshot().mode, Offline);
        assert_eq!(controller.snapshot().floor(2).serviced, 1);

        // Cleanup
        controller.stop().unwrap();
        assert_eq!(controller.join(), Some(Shutdown::Drained));
    }

    #[test]
    fn test_stop_twice() {
        // Arrange
        let controller = setup_controller();
        controller.start().unwrap();

        // Act
        let first = controller.stop();
        let second = controller.stop();

        // Assert
        assert_eq!(first, Ok(()));
        assert_eq!(second, Err(EngineError::AlreadyStopping));
        assert!(controller.snapshot().stop_requested);
        assert_eq!(controller.join(), Some(Shutdown::Drained));
    }

    #[test]
    fn test_restart_clears_counters() {
        // Purpose: Verify that starting again after a full stop resets the
        // car but keeps passengers still waiting

        // Arrange
        let controller = setup_controller_with(2, 50);
        controller.submit_request(2, 1, 3).unwrap();
        controller.start().unwrap();
        wait_for_serviced(&controller, 3, 1);
        controller.stop().unwrap();
        controller.join();
        controller.submit_request(2, 6, 4).unwrap();

        // Act
        let result = controller.start();

        // Assert
        let snapshot = controller.snapshot();
        assert_eq!(result, Ok(()));
        assert_eq!(snapshot.floor(3).serviced, 0);
        assert_eq!(snapshot.current_floor, 1);
        assert!(!snapshot.stop_requested);
        assert_eq!(snapshot.floor(6).waiting, 1);
        assert_ne!(snapshot.mode, Offline);

        // Cleanup
        controller.force_stop();
        controller.join();
    }

    #[test]
    fn test_status_codes() {
        // Purpose: Verify the integer codes of the command entry points

        // Arrange
        let controller = setup_controller();

        // Act + Assert
        assert_eq!(controller.issue_request(1, 1, 2), 0);
        assert_eq!(controller.issue_request(1, 2, 2), 1);
        assert_eq!(controller.start_elevator(), 0);
        assert_eq!(controller.start_elevator(), 1);
        assert_eq!(controller.stop_elevator(), 0);
        assert_eq!(controller.stop_elevator(), 1);
        assert_eq!(EngineError::SpawnFailed("no threads".into()).code(), -1);
        assert!(EngineError::AlreadyRunning.is_conflict());
        assert!(!EngineError::SameFloor(3).is_conflict());

        controller.join();
    }

    #[test]
    fn test_status_report() {
        // Purpose: Verify the layout of the textual status report

        // Arrange
        let controller = setup_controller();
        controller.submit_request(2, 3, 7).unwrap();
        controller.submit_request(3, 3, 1).unwrap();

        // Act
        let report = controller.snapshot().to_string();

        // Assert
        assert!(report.starts_with("Elevator state: OFFLINE\n"));
        assert!(report.contains("Current floor: 1\n"));
        assert!(report.contains("Destination floor: 1\n"));
        assert!(report.contains("Current passenger load: 0\n"));
        assert!(report.contains("Current weight load: 0.0\n"));
        assert!(report.contains("Floor 3:\n\tPassenger load: 3\n\tWeight load: 2.5\n\tPassengers serviced: 0\n"));

        let top = report.find("Floor 10:").unwrap();
        let bottom = report.find("Floor 1:").unwrap();
        assert!(top < bottom);
    }

    #[test]
    fn test_status_json() {
        // Arrange
        let controller = setup_controller();
        controller.start().unwrap();
        sleep(Duration::from_millis(10));

        // Act
        let json = controller.snapshot().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        // Assert
        assert_eq!(value["mode"], "idle");
        assert_eq!(value["currentFloor"], 1);
        assert_eq!(value["floors"].as_array().unwrap().len(), 10);
        assert_eq!(value["floors"][0]["serviced"], 0);
        assert_eq!(controller.snapshot().mode, Idle);

        controller.stop().unwrap();
        controller.join();
    }

    #[test]
    #[should_panic]
    fn test_status_floor_out_of_range() {
        let controller = setup_controller();

        controller.snapshot().floor(MAX_FLOOR + 1);
    }
}
