//! Tests for selection sort stepping

#[cfg(test)]
mod tests {
    use stepsort::engine::step::Mutation;
    use stepsort::strategy::{SelectionSort, Strategy};

    fn drain(values: &mut [i32]) -> Vec<(Vec<i32>, Mutation)> {
        let mut strategy = SelectionSort::new();
        let mut steps = Vec::new();
        while let Some(mutation) = strategy.advance(values) {
            steps.push((values.to_vec(), mutation));
        }
        steps
    }

    // Tests one swap per index, including in-place swaps
    // Verified by skipping swaps where the minimum is already placed
    #[test]
    fn test_one_step_per_index() {
        let mut values = vec![3, 1, 2];
        let steps = drain(&mut values);

        let mutations: Vec<Mutation> = steps.iter().map(|(_, m)| *m).collect();
        assert_eq!(
            mutations,
            vec![
                Mutation::Swap { a: 0, b: 1 },
                Mutation::Swap { a: 1, b: 2 },
                Mutation::Swap { a: 2, b: 2 },
            ]
        );
        assert_eq!(values, vec![1, 2, 3]);
    }

    // Tests the first of several equal minima is chosen
    // Verified by using <= when tracking the minimum
    #[test]
    fn test_first_minimum_wins() {
        let mut values = vec![5, 1, 3, 1];
        let steps = drain(&mut values);

        assert_eq!(steps.first().map(|(_, m)| *m), Some(Mutation::Swap { a: 0, b: 1 }));
        assert_eq!(steps.get(1).map(|(_, m)| *m), Some(Mutation::Swap { a: 1, b: 3 }));
    }

    // Tests sorted input only performs in-place swaps
    // Verified by starting the minimum search at index zero
    #[test]
    fn test_sorted_input_self_swaps() {
        let mut values = vec![-2, 0, 8];
        let steps = drain(&mut values);

        assert_eq!(steps.len(), 3);
        assert!(steps.iter().all(|(snapshot, _)| snapshot == &vec![-2, 0, 8]));
    }

    // Tests empty input emits nothing
    // Verified by emitting before the bounds check
    #[test]
    fn test_empty_input() {
        let mut values: Vec<i32> = Vec::new();
        assert!(drain(&mut values).is_empty());
    }
}
