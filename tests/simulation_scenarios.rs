//! Scenario tests for the three replacement policies.
//!
//! The 12-reference trace used throughout is the one Belady's anomaly is
//! usually demonstrated with.

use pagesim::report::{record_all, FileSink, MemorySink};
use pagesim::simulation;
use pagesim::{
    Error, FrameCapacity, Outcome, PageId, PolicyKind, SimulationConfig, Simulator, Trace,
};
use tempfile::tempdir;

const ALL: [PolicyKind; 3] = [PolicyKind::Fifo, PolicyKind::Lru, PolicyKind::Optimal];

fn trace(ids: &[u32]) -> Trace {
    Trace::from(ids)
}

fn faults(trace: &Trace, frames: usize) -> Vec<usize> {
    ALL.iter()
        .map(|&p| simulation::run(trace, FrameCapacity::from(frames), p).faults())
        .collect()
}

fn victims(trace: &Trace, frames: usize, policy: PolicyKind) -> Vec<u32> {
    simulation::run(trace, FrameCapacity::from(frames), policy)
        .evicted_pages()
        .map(|p| p.0)
        .collect()
}

// ============================================================================
// Reference strings
// ============================================================================

#[test]
fn test_belady_trace_three_frames() {
    let t = trace(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);
    assert_eq!(faults(&t, 3), vec![9, 10, 7]);
}

#[test]
fn test_belady_anomaly_four_frames() {
    // FIFO gets worse with more frames on this trace.
    let t = trace(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);
    assert_eq!(faults(&t, 4), vec![10, 8, 6]);
}

#[test]
fn test_sample_trace() {
    let t = Trace::parse(pagesim::common::config::DEFAULT_TRACE).unwrap();
    // 7 0 1 2 0 3 4 2 3 0 3 2 with 3 frames
    assert_eq!(faults(&t, 3), vec![8, 8, 7]);
}

#[test]
fn test_victim_sequences() {
    let t = trace(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);

    assert_eq!(victims(&t, 3, PolicyKind::Fifo), vec![1, 2, 3, 4, 1, 2]);
    assert_eq!(victims(&t, 3, PolicyKind::Lru), vec![1, 2, 3, 4, 5, 1, 2]);
    // Optimal: 3 (next use 9), 4 (10), then 1 and 2 are never used again.
    assert_eq!(victims(&t, 3, PolicyKind::Optimal), vec![3, 4, 1, 2]);
}

// ============================================================================
// Degenerate inputs
// ============================================================================

#[test]
fn test_repeated_single_page() {
    let t = trace(&[1, 1, 1, 1]);
    for policy in ALL {
        let result = simulation::run(&t, FrameCapacity::from(1), policy);
        assert_eq!(result.faults(), 1, "{}", policy);
        assert_eq!(result.evictions(), 0, "{}", policy);
        assert_eq!(result.hits(), 3, "{}", policy);
    }
}

#[test]
fn test_zero_frames_faults_everywhere() {
    let t = trace(&[3, 3, 1, 2, 3]);
    for policy in ALL {
        let result = simulation::run(&t, FrameCapacity::from(0), policy);
        assert_eq!(result.faults(), t.len());
        assert!(result
            .events()
            .iter()
            .all(|e| e.outcome == Outcome::Fault { evicted: None }));
    }
}

#[test]
fn test_empty_trace() {
    let t = Trace::default();
    for frames in [0, 1, 5] {
        assert_eq!(faults(&t, frames), vec![0, 0, 0]);
    }
}

#[test]
fn test_capacity_covers_trace() {
    let t = trace(&[9, 8, 7, 6]);
    for policy in ALL {
        let result = simulation::run(&t, FrameCapacity::from(10), policy);
        assert_eq!(result.faults(), 4);
        assert_eq!(result.evictions(), 0);
    }
}

#[test]
fn test_cumulative_faults() {
    let t = trace(&[1, 2, 1, 3]);
    let result = simulation::run(&t, FrameCapacity::from(2), PolicyKind::Lru);
    assert_eq!(result.cumulative_faults(), vec![1, 2, 2, 3]);
    assert_eq!(result.events()[3].outcome.evicted(), Some(PageId::new(2)));
}

// ============================================================================
// Configuration and output collaborators
// ============================================================================

#[test]
fn test_negative_capacity_fails_fast() {
    let err = SimulationConfig::with_default_policies(-1).unwrap_err();
    assert!(matches!(err, Error::InvalidConfiguration { capacity: -1 }));
}

#[test]
fn test_empty_policy_set() {
    let err = SimulationConfig::new(3, vec![]).unwrap_err();
    assert!(matches!(err, Error::EmptyPolicySet));
}

#[test]
fn test_results_reach_memory_sink_in_order() {
    let simulator = Simulator::new(SimulationConfig::with_default_policies(3).unwrap());
    let t = trace(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);

    let sink = MemorySink::new();
    record_all(&sink, &simulator.run(&t)).unwrap();

    assert_eq!(
        sink.records(),
        vec![
            (PolicyKind::Fifo, 9),
            (PolicyKind::Lru, 10),
            (PolicyKind::Optimal, 7)
        ]
    );
}

#[test]
fn test_file_sink_replaces_previous_run() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("results.txt");
    let simulator = Simulator::new(SimulationConfig::with_default_policies(3).unwrap());

    for t in [trace(&[1, 1, 1]), trace(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5])] {
        let sink = FileSink::create(&path).unwrap();
        record_all(&sink, &simulator.run(&t)).unwrap();
    }

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "FIFO 9\nLRU 10\nOptimal 7\n");
}
