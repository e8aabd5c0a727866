//! Rendering results for people and tools.

use std::io::Write;

use crate::common::Result;
use crate::simulation::{Outcome, SimulationResult};

/// One `NAME Page Faults: N` line per policy.
pub fn write_summary<W: Write>(mut out: W, results: &[SimulationResult]) -> Result<()> {
    for result in results {
        writeln!(out, "{} Page Faults: {}", result.policy(), result.faults())?;
    }
    Ok(())
}

/// Step-by-step table of one run: reference, outcome, victim, frames.
///
/// The frames column is `-` for runs recorded without frame snapshots.
pub fn write_events<W: Write>(mut out: W, result: &SimulationResult) -> Result<()> {
    writeln!(out, "{} ({})", result.policy(), result.capacity())?;
    writeln!(out, "{:>6}  {:>6}  {:<5}  {:>7}  frames", "step", "page", "", "evicted")?;

    for event in result.events() {
        let (label, evicted) = match event.outcome {
            Outcome::Hit => ("hit", String::from("-")),
            Outcome::Fault { evicted } => (
                "fault",
                evicted.map_or_else(|| String::from("-"), |p| p.to_string()),
            ),
        };
        let frames = match &event.resident {
            Some(pages) => {
                let pages: Vec<String> = pages.iter().map(ToString::to_string).collect();
                format!("[{}]", pages.join(", "))
            }
            None => String::from("-"),
        };
        writeln!(
            out,
            "{:>6}  {:>6}  {:<5}  {:>7}  {}",
            event.index, event.page, label, evicted, frames
        )?;
    }

    writeln!(out, "{}", result.stats())?;
    Ok(())
}

/// Metrics table as CSV: `Algorithm,Page Faults,Hit Rate,Fault Rate`.
pub fn write_metrics_csv<W: Write>(mut out: W, results: &[SimulationResult]) -> Result<()> {
    writeln!(out, "Algorithm,Page Faults,Hit Rate,Fault Rate")?;
    for result in results {
        let stats = result.stats();
        writeln!(
            out,
            "{},{},{:.2}%,{:.2}%",
            stats.policy,
            stats.faults,
            stats.hit_rate() * 100.0,
            stats.fault_rate() * 100.0
        )?;
    }
    Ok(())
}

/// Full results, events included, as pretty-printed JSON.
pub fn write_json<W: Write>(mut out: W, results: &[SimulationResult]) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, results)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::FrameCapacity;
    use crate::policy::PolicyKind;
    use crate::simulation;
    use crate::trace::Trace;

    fn results() -> Vec<SimulationResult> {
        let trace = Trace::from(&[1, 2, 1, 3][..]);
        [PolicyKind::Fifo, PolicyKind::Lru]
            .into_iter()
            .map(|p| simulation::run(&trace, FrameCapacity::from(2), p))
            .collect()
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_summary() {
        let text = render(|buf| write_summary(buf, &results()));
        assert_eq!(text, "FIFO Page Faults: 3\nLRU Page Faults: 3\n");
    }

    #[test]
    fn test_metrics_csv() {
        let text = render(|buf| write_metrics_csv(buf, &results()));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Algorithm,Page Faults,Hit Rate,Fault Rate");
        assert_eq!(lines[1], "FIFO,3,25.00%,75.00%");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_events_table() {
        let trace = Trace::from(&[1, 2, 1, 3][..]);
        let result = simulation::run_with(&trace, FrameCapacity::from(2), PolicyKind::Fifo, true);
        let text = render(|buf| write_events(buf, &result));
        assert!(text.starts_with("FIFO (2 frames)"));
        assert!(text.contains("hit"));
        // FIFO evicts page 1 on the last reference.
        assert!(text.contains("[2, 3]"));
    }

    #[test]
    fn test_events_table_without_snapshots() {
        let results = results();
        let text = render(|buf| write_events(buf, &results[1]));
        assert!(text.starts_with("LRU (2 frames)"));
        assert!(!text.contains('['));
        assert_eq!(text.lines().count(), 2 + 4 + 1);
    }

    #[test]
    fn test_json_round_trip() {
        let results = results();
        let text = render(|buf| write_json(buf, &results));
        let parsed: Vec<SimulationResult> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, results);
        assert!(text.contains("\"policy\": \"FIFO\""));
    }
}
