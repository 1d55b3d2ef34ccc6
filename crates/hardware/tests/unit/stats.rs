//! # Statistics Tests
//!
//! The counters in [`SimStats`] and the two report formats.

use ls8_core::isa::InstClass;
use ls8_core::stats::SimStats;

#[test]
fn test_record_counts_cycles_and_classes() {
    let mut stats = SimStats::default();
    stats.record(Some(InstClass::Load));
    stats.record(Some(InstClass::Load));
    stats.record(Some(InstClass::Alu));
    stats.record(Some(InstClass::Branch));
    stats.record(None);

    assert_eq!(stats.cycles, 5);
    assert_eq!(stats.inst_load, 2);
    assert_eq!(stats.inst_alu, 1);
    assert_eq!(stats.inst_branch, 1);
    assert_eq!(stats.inst_unknown, 1);
    assert_eq!(stats.inst_io, 0);
}

#[test]
fn test_json_report() {
    let mut stats = SimStats::default();
    stats.record(Some(InstClass::Io));
    stats.branches_taken = 3;

    let json: serde_json::Value = serde_json::from_str(&stats.to_json().unwrap()).unwrap();
    assert_eq!(json["cycles"], 1);
    assert_eq!(json["inst_io"], 1);
    assert_eq!(json["branches_taken"], 3);
    assert!(json.get("start_time").is_none());
}

#[test]
fn test_text_report() {
    let mut stats = SimStats::default();
    stats.record(Some(InstClass::System));

    let report = stats.report();
    assert!(report.contains("LS-8 SIMULATION STATISTICS"));
    assert!(report.contains("sim_cycles               1"));
    assert!(report.contains("op.system"));
    assert!(report.contains("(100.00%)"));
}
