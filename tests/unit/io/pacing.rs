//! Tests for delay-paced driving of a run

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};
    use stepsort::engine::algorithm::Algorithm;
    use stepsort::engine::cancel::CancellationToken;
    use stepsort::engine::run::SortRun;
    use stepsort::engine::step::RunState;
    use stepsort::io::configuration::DEFAULT_STEP_DELAY_MS;
    use stepsort::io::pacing::Pacer;

    fn reversed_run(algorithm: Algorithm) -> SortRun<f64> {
        SortRun::new(
            vec![6.0, 5.0, 4.0, 3.0, 2.0, 1.0],
            algorithm,
            CancellationToken::new(),
        )
    }

    // Tests an unpaced drive completes and reports every step
    // Verified by dropping the final event
    #[test]
    fn test_drive_to_completion() {
        let mut seen = Vec::new();
        let summary = Pacer::immediate().drive(reversed_run(Algorithm::Merge), |event| {
            seen.push(event.step);
        });

        assert_eq!(summary.state, RunState::Completed);
        assert_eq!(summary.steps, seen.len());
        assert_eq!(summary.final_sequence, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    // Tests stop_after cancels after exactly that many steps
    // Verified by checking the limit after pulling
    #[test]
    fn test_stop_after() {
        let mut snapshots = Vec::new();
        let summary = Pacer::immediate()
            .with_stop_after(Some(4))
            .drive(reversed_run(Algorithm::Bubble), |event| {
                snapshots.push(event.snapshot.clone());
            });

        assert_eq!(summary.state, RunState::Cancelled);
        assert_eq!(summary.steps, 4);
        assert_eq!(snapshots.len(), 4);
        assert_eq!(snapshots.last(), Some(&summary.final_sequence));
    }

    // Tests a zero stop_after emits nothing
    // Verified by cancelling only after the first step
    #[test]
    fn test_stop_after_zero() {
        let summary = Pacer::immediate()
            .with_stop_after(Some(0))
            .drive(reversed_run(Algorithm::Quick), |_| {});

        assert_eq!(summary.state, RunState::Cancelled);
        assert_eq!(summary.steps, 0);
        assert_eq!(summary.final_sequence, vec![6.0, 5.0, 4.0, 3.0, 2.0, 1.0]);
    }

    // Tests the delay is slept between steps
    // Verified by sleeping zero regardless of configuration
    #[test]
    fn test_delay_between_steps() {
        let pacer = Pacer::new(Duration::from_millis(5));
        let started = Instant::now();
        let run = SortRun::new(vec![3.0, 2.0, 1.0], Algorithm::Bubble, CancellationToken::new());
        let summary = pacer.drive(run, |_| {});

        // Three steps with a gap between each pair
        assert_eq!(summary.steps, 3);
        assert!(started.elapsed() >= Duration::from_millis(10));
    }

    // Tests no delay follows the final step
    // Verified by sleeping before the pull that finds the run finished
    #[test]
    fn test_no_delay_after_final_step() {
        let pacer = Pacer::new(Duration::from_millis(400));
        let started = Instant::now();
        let run = SortRun::new(vec![2.0, 1.0], Algorithm::Bubble, CancellationToken::new());
        let summary = pacer.drive(run, |_| {});

        assert_eq!(summary.steps, 1);
        assert_eq!(summary.state, RunState::Completed);
        assert!(started.elapsed() < Duration::from_millis(400));
    }

    // Tests a limit equal to the step count leaves the run completed
    // Verified by cancelling once the limit is reached regardless of state
    #[test]
    fn test_stop_after_total_completes() {
        let total = reversed_run(Algorithm::Insertion).count();
        let summary = Pacer::immediate()
            .with_stop_after(Some(total))
            .drive(reversed_run(Algorithm::Insertion), |_| {});

        assert_eq!(summary.state, RunState::Completed);
        assert_eq!(summary.steps, total);
        assert_eq!(summary.final_sequence, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    // Tests the default delay matches configuration
    // Verified by changing the default constructor
    #[test]
    fn test_default_delay() {
        assert_eq!(
            Pacer::default().delay(),
            Duration::from_millis(DEFAULT_STEP_DELAY_MS)
        );
        assert_eq!(Pacer::immediate().delay(), Duration::ZERO);
    }
}
