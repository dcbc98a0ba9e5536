//! Tests for the submit / start / stop / reset controller

#[cfg(test)]
mod tests {
    use stepsort::StepsortError;
    use stepsort::engine::algorithm::Algorithm;
    use stepsort::engine::session::Session;
    use stepsort::engine::step::RunState;

    fn submitted(text: &str) -> Session {
        let mut session = Session::new();
        session.set_input(text);
        assert!(session.submit().is_ok());
        session
    }

    // Tests submit parses the input into the displayed array
    // Verified by leaving the array untouched on submit
    #[test]
    fn test_submit_parses_input() {
        let session = submitted("5, 3, x, 1");

        assert_eq!(session.array(), &[5.0, 3.0, 1.0]);
        assert_eq!(session.input(), "5, 3, x, 1");
        assert!(!session.is_sorting());
    }

    // Tests ticking a run to completion leaves the sorted array
    // Verified by not clearing the active run when it finishes
    #[test]
    fn test_run_to_completion() {
        let mut session = submitted("5,3,1");
        assert!(session.start(Algorithm::Bubble).is_ok());
        assert_eq!(session.description(), Algorithm::Bubble.description());
        assert_eq!(session.last_state(), RunState::Running);

        let mut steps = 0;
        while session.tick().is_some() {
            steps += 1;
        }

        assert_eq!(steps, 3);
        assert_eq!(session.array(), &[1.0, 3.0, 5.0]);
        assert!(!session.is_sorting());
        assert_eq!(session.last_state(), RunState::Completed);
    }

    // Tests the session is idle as soon as the final step arrives
    // Verified by settling the run only on the tick after the last step
    #[test]
    fn test_idle_after_final_step() {
        let mut session = submitted("2,1");
        assert!(session.start(Algorithm::Bubble).is_ok());

        assert!(session.tick().is_some());
        assert!(!session.is_sorting());
        assert_eq!(session.last_state(), RunState::Completed);

        session.stop();
        assert_eq!(session.last_state(), RunState::Completed);
        assert_eq!(session.array(), &[1.0, 2.0]);
    }

    // Tests start and submit are rejected while sorting
    // Verified by removing the busy check
    #[test]
    fn test_controls_rejected_while_sorting() {
        let mut session = submitted("2,1");
        assert!(session.start(Algorithm::Quick).is_ok());

        assert!(matches!(
            session.start(Algorithm::Merge),
            Err(StepsortError::SessionBusy { action: "start" })
        ));
        assert!(matches!(
            session.submit(),
            Err(StepsortError::SessionBusy { action: "submit" })
        ));
    }

    // Tests stop keeps the partially sorted array
    // Verified by re-parsing the input on stop
    #[test]
    fn test_stop_keeps_partial_state() {
        let mut session = submitted("4,3,2,1");
        assert!(session.start(Algorithm::Bubble).is_ok());
        assert!(session.tick().is_some());

        session.stop();

        assert!(!session.is_sorting());
        assert_eq!(session.last_state(), RunState::Cancelled);
        assert_eq!(session.array(), &[3.0, 4.0, 2.0, 1.0]);
        assert!(session.tick().is_none());
    }

    // Tests reset discards the run and restores the parsed input
    // Verified by keeping the description on reset
    #[test]
    fn test_reset_restores_input() {
        let mut session = submitted("4,3,2,1");
        assert!(session.start(Algorithm::Selection).is_ok());
        assert!(session.tick().is_some());

        session.set_input("9,8");
        session.reset();

        assert_eq!(session.array(), &[9.0, 8.0]);
        assert_eq!(session.description(), "");
        assert_eq!(session.last_state(), RunState::Idle);
        assert!(session.start(Algorithm::Insertion).is_ok());
    }

    // Tests stop while idle changes nothing
    // Verified by clearing the array on stop
    #[test]
    fn test_stop_when_idle() {
        let mut session = submitted("1,2");
        session.stop();

        assert_eq!(session.array(), &[1.0, 2.0]);
        assert_eq!(session.last_state(), RunState::Idle);
    }

    // Tests an empty array completes on the first tick
    // Verified by reporting running after an empty run
    #[test]
    fn test_empty_array_completes() {
        let mut session = Session::new();
        assert!(session.start(Algorithm::Merge).is_ok());

        assert!(session.tick().is_none());
        assert_eq!(session.last_state(), RunState::Completed);
        assert!(session.array().is_empty());
    }
}
