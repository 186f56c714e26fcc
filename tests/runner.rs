use {
    pagesim::{Algorithm, Outcome, Page, ReplacementPolicy, Runner, RunnerConfig, Workload},
    proptest::{collection::vec, prelude::*},
};

const REQUESTS: [Page; 16] = [1, 2, 3, 4, 5, 6, 1, 6, 3, 8, 7, 3, 4, 8, 10, 2];

#[test]
fn all_algorithms() {
    let workload = Workload::new(6, REQUESTS.to_vec());
    let reports = Runner::default().run(&workload).unwrap();

    let algorithms: Vec<_> = reports.iter().map(|report| report.algorithm).collect();
    assert_eq!(algorithms, Algorithm::ALL.to_vec());

    assert_eq!(reports[0].answers(), vec![0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 0, 0, 3, 4]);
    assert_eq!(reports[1].answers(), vec![0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 4, 0, 5, 0, 1, 6]);
    assert_eq!(reports[2].answers(), vec![0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 5, 0, 0, 0, 3, 0]);
    assert_eq!(
        reports.iter().map(|report| report.faults()).collect::<Vec<_>>(),
        vec![4, 5, 3]
    );
}

#[test]
fn fill_with_repeated_page() {
    // Page 1 is placed into both frames before memory is full.
    let workload = Workload::new(2, vec![1, 1, 2, 3]);
    let reports = Runner::default().run(&workload).unwrap();

    let answers: Vec<_> = reports.iter().map(|report| report.answers()).collect();
    assert_eq!(answers, vec![vec![0, 0, 1, 2], vec![0, 0, 2, 1], vec![0, 0, 1, 2]]);
}

#[test]
fn parallel_matches_sequential() {
    let workload = Workload::new(3, vec![7, 1, 2, 7, 3, 1, 4, 2, 7, 5, 1, 3, 3, 6, 2]);
    let sequential = Runner::default().run(&workload).unwrap();
    let parallel = Runner::new(RunnerConfig { parallel: true }).run(&workload).unwrap();
    assert_eq!(sequential, parallel);
}

fn workloads() -> impl Strategy<Value = Workload> {
    (1_usize..8, 1_u32..16).prop_flat_map(|(frame_count, pages)| {
        vec(1..=pages, 1..200).prop_map(move |requests| Workload::new(frame_count, requests))
    })
}

/// Workloads whose first `frame_count` requests are distinct pages, so that no
/// page is placed into two frames while memory fills up.
fn distinct_fill_workloads() -> impl Strategy<Value = Workload> {
    (1_usize..8, 0_u32..8).prop_flat_map(|(frame_count, extra)| {
        let pages = frame_count as Page + extra;
        let fill = Just((1..=pages).collect::<Vec<_>>())
            .prop_shuffle()
            .prop_map(move |order| order[..frame_count].to_vec());
        (fill, vec(1..=pages, 0..200)).prop_map(move |(mut requests, rest)| {
            requests.extend(rest);
            Workload::new(frame_count, requests)
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn answers_cover_every_request(workload in workloads()) {
        for report in Runner::default().run(&workload).unwrap() {
            prop_assert_eq!(report.outcomes.len(), workload.requests.len());
            for answer in report.answers() {
                prop_assert!(answer <= workload.frame_count);
            }
        }
    }

    #[test]
    fn optimal_never_loses(workload in distinct_fill_workloads()) {
        let reports = Runner::default().run(&workload).unwrap();
        let optimal = reports[2].faults();
        prop_assert!(optimal <= reports[0].faults());
        prop_assert!(optimal <= reports[1].faults());
    }

    #[test]
    fn repeated_request_is_a_hit(workload in workloads()) {
        for report in Runner::default().run(&workload).unwrap() {
            for (i, pair) in workload.requests.windows(2).enumerate() {
                if pair[0] == pair[1] {
                    prop_assert_eq!(report.outcomes[i + 1], Outcome::Hit);
                }
            }
        }
    }

    #[test]
    fn run_equals_single_requests(workload in workloads()) {
        for algorithm in Algorithm::ALL {
            let batch = algorithm
                .policy(&workload)
                .unwrap()
                .run(&workload.requests)
                .unwrap();

            let mut policy = algorithm.policy(&workload).unwrap();
            let single: Vec<_> = workload
                .requests
                .iter()
                .map(|&page| policy.request(page).unwrap())
                .collect();
            prop_assert_eq!(batch, single);
        }
    }

    #[test]
    fn frames_never_exceed_capacity(workload in workloads()) {
        for algorithm in Algorithm::ALL {
            let mut policy = algorithm.policy(&workload).unwrap();
            policy.run(&workload.requests).unwrap();

            let frames = policy.frames();
            prop_assert!(frames.len() <= workload.frame_count);
            let mut slots: Vec<_> = frames.iter().map(|frame| frame.slot).collect();
            slots.sort_unstable();
            prop_assert_eq!(slots, (1..=frames.len()).collect::<Vec<_>>());
        }
    }
}
