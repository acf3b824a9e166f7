use rand::Rng;
use std::str::FromStr;
use stepsort::prelude::*;

fn run_silent(algorithm: Algorithm, seq: &mut Sequence) {
    sort_steps(algorithm, seq, &mut |_: &Sequence, _: Step| {
        Ok::<(), SortError>(())
    })
    .unwrap();
}

#[test]
fn test_all_variants_sort() {
    let input = vec![38, 27, 43, 3, 9, 82, 10];
    for algorithm in Algorithm::ALL {
        let mut seq = Sequence::from_values(input.clone());
        run_silent(algorithm, &mut seq);
        assert_eq!(
            seq.values(),
            &[3, 9, 10, 27, 38, 43, 82],
            "{algorithm} failed"
        );
    }
}

#[test]
fn test_fuzz_sorts_and_permutes() {
    let mut rng = rand::rng();

    for _ in 0..200 {
        let len = rng.random_range(0..32);
        let input: Vec<u32> = (0..len).map(|_| rng.random_range(5..=400)).collect();

        let mut expected = input.clone();
        expected.sort();

        for algorithm in Algorithm::ALL {
            let mut seq = Sequence::from_values(input.clone());
            run_silent(algorithm, &mut seq);

            // Sorted output that is a permutation of the input.
            assert!(seq.is_sorted(), "{algorithm} left {:?} unsorted", seq.values());
            assert_eq!(
                seq.values(),
                expected.as_slice(),
                "{algorithm} lost or invented values on {input:?}"
            );
        }
    }
}

#[test]
fn test_sorted_input_is_left_untouched() {
    // On already-sorted input no step may change the sequence: bubble,
    // selection, and insertion emit no swaps at all, and merge/quick emit
    // only value-preserving writes and self-swaps.
    let input: Vec<u32> = (1..=20).map(|i| i * 3).collect();

    for algorithm in Algorithm::ALL {
        let mut seq = Sequence::from_values(input.clone());
        let mut swaps = 0u32;
        sort_steps(algorithm, &mut seq, &mut |seq: &Sequence, step: Step| {
            if let Step::Swap(..) = step {
                swaps += 1;
            }
            assert_eq!(seq.values(), input.as_slice(), "{algorithm} mutated sorted input");
            Ok::<(), SortError>(())
        })
        .unwrap();

        if matches!(
            algorithm,
            Algorithm::Bubble | Algorithm::Selection | Algorithm::Insertion
        ) {
            assert_eq!(swaps, 0, "{algorithm} swapped on sorted input");
        }
    }
}

#[test]
fn test_boundary_lengths_emit_no_steps() {
    for algorithm in Algorithm::ALL {
        for input in [vec![], vec![7]] {
            let mut seq = Sequence::from_values(input.clone());
            let mut steps = 0u32;
            sort_steps(algorithm, &mut seq, &mut |_: &Sequence, _: Step| {
                steps += 1;
                Ok::<(), SortError>(())
            })
            .unwrap();
            assert_eq!(steps, 0, "{algorithm} emitted steps for {input:?}");
            assert_eq!(seq.values(), input.as_slice());
        }
    }
}

#[test]
fn test_sink_error_aborts_run() {
    let mut seq = Sequence::from_values(vec![9, 7, 5, 3, 1]);
    let mut seen = 0u32;
    let result = sort_steps(Algorithm::Bubble, &mut seq, &mut |_: &Sequence, _: Step| {
        seen += 1;
        if seen == 3 {
            Err(SortError::Cancelled)
        } else {
            Ok(())
        }
    });

    assert_eq!(result, Err(SortError::Cancelled));
    assert_eq!(seen, 3);
    // The sequence keeps whatever state the aborted run last wrote.
    let mut recovered: Vec<u32> = seq.values().to_vec();
    recovered.sort();
    assert_eq!(recovered, vec![1, 3, 5, 7, 9]);
}

#[test]
fn test_generate_respects_bounds() {
    let seq = Sequence::generate(500, 5, 400).unwrap();
    assert_eq!(seq.len(), 500);
    assert!(seq.values().iter().all(|&v| (5..=400).contains(&v)));

    let empty = Sequence::generate(0, 5, 400).unwrap();
    assert!(empty.is_empty());
}

#[test]
fn test_generate_clamps_to_visual_floor() {
    // Values below the floor are pulled up so no bar renders at zero height.
    let seq = Sequence::generate(100, 0, 10).unwrap();
    assert!(seq.values().iter().all(|&v| (MIN_BAR_VALUE..=10).contains(&v)));

    // A degenerate range collapses onto the floor instead of erroring.
    let floor = Sequence::generate(10, 0, 0).unwrap();
    assert!(floor.values().iter().all(|&v| v == MIN_BAR_VALUE));
}

#[test]
fn test_generate_rejects_inverted_range() {
    assert_eq!(
        Sequence::generate(10, 300, 200),
        Err(SortError::InvalidRange { min: 300, max: 200 })
    );
}

#[test]
fn test_sequence_bounds_checks() {
    let mut seq = Sequence::from_values(vec![1, 2, 3]);

    assert_eq!(
        seq.swap(0, 3),
        Err(SortError::IndexOutOfBounds { index: 3, len: 3 })
    );
    assert_eq!(
        seq.set_at(5, 10),
        Err(SortError::IndexOutOfBounds { index: 5, len: 3 })
    );
    assert_eq!(
        seq.get(3),
        Err(SortError::IndexOutOfBounds { index: 3, len: 3 })
    );

    // Failed mutations leave the values untouched.
    assert_eq!(seq.values(), &[1, 2, 3]);

    seq.swap(0, 2).unwrap();
    assert_eq!(seq.values(), &[3, 2, 1]);
    seq.set_at(1, 9).unwrap();
    assert_eq!(seq.values(), &[3, 9, 1]);
}

#[test]
fn test_algorithm_identifiers() {
    for algorithm in Algorithm::ALL {
        assert_eq!(Algorithm::from_str(algorithm.name()), Ok(algorithm));
    }
    assert_eq!(
        Algorithm::from_str("bogo"),
        Err(SortError::UnknownAlgorithm("bogo".to_string()))
    );
}
