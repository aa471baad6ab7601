//! Tests for report/parser

use super::*;
use crate::stats::{DataDigest, Stat};
use proptest::prelude::*;
use std::io::Cursor;

fn entries(stats: &Stats, owner_group: &str, name: &str, include: DataDigest) -> Vec<(String, f64)> {
    stats
        .find(owner_group, name)
        .unwrap_or_else(|| panic!("missing stat {}.{}", owner_group, name))
        .data_points(include)
        .map(|(owner, value)| (owner.to_string(), value.as_scalar().unwrap()))
        .collect()
}

#[test]
fn test_parse_line_full_record() {
    let line = "core0.ipc               1.5           # instructions per cycle";
    let record = ReportParser::parse_line(line, 1).unwrap().unwrap();
    assert_eq!(record.owner, "core0");
    assert_eq!(record.name, "ipc");
    assert_eq!(record.value, 1.5);
    assert_eq!(record.desc, "instructions per cycle");
    assert_eq!(record.owner_group(), "core");
}

#[test]
fn test_parse_line_splits_on_last_dot() {
    let record = ReportParser::parse_line("system.cpu3.dcache.misses 42 0 cache misses", 1)
        .unwrap()
        .unwrap();
    assert_eq!(record.owner, "system.cpu3.dcache");
    assert_eq!(record.name, "misses");
    assert_eq!(record.owner_group(), "system.cpu.dcache");
    assert_eq!(record.desc, "cache misses");
}

#[test]
fn test_parse_line_joins_description_with_single_spaces() {
    let record = ReportParser::parse_line("a.b 1 flags   several\twords   here ", 1)
        .unwrap()
        .unwrap();
    assert_eq!(record.desc, "several words here");
}

#[test]
fn test_parse_line_without_flags_or_description() {
    let record = ReportParser::parse_line("core0.ipc 2", 1).unwrap().unwrap();
    assert_eq!(record.value, 2.0);
    assert_eq!(record.desc, "");

    let record = ReportParser::parse_line("core0.ipc 2 0", 1).unwrap().unwrap();
    assert_eq!(record.desc, "");
}

#[test]
fn test_parse_line_skips_non_records() {
    let skipped = [
        "",
        "   ",
        "# not a stat line",
        "---------- Begin Simulation Statistics ----------",
        "core0.ipc",
        "nodot 1.5 0 desc",
        "core0.ipc|x 1.5 0 desc",
        "core0.ipc |1.5 0 desc",
        "core0. 1.5 0 desc",
        ".ipc 1.5 0 desc",
        "system.op_class::IntAlu 10 0 desc",
    ];
    for line in skipped {
        assert!(
            ReportParser::parse_line(line, 1).unwrap().is_none(),
            "line should be skipped: {:?}",
            line
        );
    }
}

#[test]
fn test_parse_line_rejects_non_numeric_value() {
    let err = ReportParser::parse_line("core0.ipc abc 0 desc", 12).unwrap_err();
    match err {
        StatsError::InvalidValue { line, token } => {
            assert_eq!(line, 12);
            assert_eq!(token, "abc");
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_parse_two_cores_end_to_end() {
    let mut stats = parse([
        "core0.ipc 1.5 0 cycles-per-instr",
        "core1.ipc 2.5 0 cycles-per-instr",
    ])
    .unwrap();
    stats.aggregate();
    stats.post_process();

    assert_eq!(stats.len(), 1);
    assert_eq!(
        entries(&stats, "core", "ipc", DataDigest::WithoutAggregate),
        vec![("core0".to_string(), 1.5), ("core1".to_string(), 2.5)]
    );
    assert_eq!(
        entries(&stats, "core", "ipc", DataDigest::JustAggregate),
        vec![("aggregate".to_string(), 4.0)]
    );
    assert_eq!(stats.find("core", "ipc").unwrap().desc(), "cycles-per-instr");
}

#[test]
fn test_comment_line_contributes_nothing() {
    let stats = parse(["system.power 10.0 0 watts", "# not a stat line"]).unwrap();

    assert_eq!(stats.len(), 1);
    assert!(stats.find("system", "power").is_some());
    assert_eq!(
        entries(&stats, "system", "power", DataDigest::WithAggregate),
        vec![("system".to_string(), 10.0)]
    );
}

#[test]
fn test_first_description_wins() {
    let stats = parse(["core0.ipc 1 0 first", "core1.ipc 2 0 second"]).unwrap();
    assert_eq!(stats.find("core", "ipc").unwrap().desc(), "first");
}

#[test]
fn test_same_name_in_different_groups() {
    let stats = parse([
        "core0.ipc 1 0 per core",
        "system.ipc 3 0 whole system",
        "core1.ipc 2 0 per core",
    ])
    .unwrap();

    let mut groups = stats.query("ipc");
    groups.sort();
    assert_eq!(groups, vec!["core", "system"]);
}

#[test]
fn test_duplicate_owner_last_write_wins() {
    let stats = parse(["core0.ipc 1 0 d", "core0.ipc 5 0 d"]).unwrap();
    assert_eq!(
        entries(&stats, "core", "ipc", DataDigest::WithoutAggregate),
        vec![("core0".to_string(), 5.0)]
    );
}

#[test]
fn test_owner_named_aggregate_yields_one_aggregate_entry() {
    let mut stats = parse(["aggregate.ipc 5.0 0 x", "aggregate1.ipc 1.0 0 x"]).unwrap();
    stats.aggregate();
    stats.aggregate();
    stats.post_process();

    assert_eq!(stats.len(), 1);
    assert_eq!(
        entries(&stats, "aggregate", "ipc", DataDigest::WithAggregate),
        vec![("aggregate1".to_string(), 1.0), ("aggregate".to_string(), 1.0)]
    );
}

#[test]
fn test_invalid_value_aborts_parse_with_line_number() {
    let err = parse(["header", "core0.ipc 1 0 d", "core1.ipc oops 0 d"]).unwrap_err();
    assert!(matches!(err, StatsError::InvalidValue { line: 3, .. }));
}

#[test]
fn test_non_finite_values_skipped_by_default() {
    let stats = parse(["core0.ipc nan 0 d", "core1.ipc 2 0 d", "core2.ipc inf 0 d"]).unwrap();
    assert_eq!(
        entries(&stats, "core", "ipc", DataDigest::WithoutAggregate),
        vec![("core1".to_string(), 2.0)]
    );
}

#[test]
fn test_non_finite_only_lines_create_no_stat() {
    let stats = parse(["core0.ipc nan 0 d"]).unwrap();
    assert!(stats.is_empty());
}

#[test]
fn test_non_finite_values_rejected_when_configured() {
    let parser = ReportParser::new(ParserConfig {
        non_finite: NonFinitePolicy::Reject,
    });
    let err = parser.parse(["core0.ipc 1 0 d", "core1.ipc -inf 0 d"]).unwrap_err();
    match err {
        StatsError::NonFiniteValue { line, token } => {
            assert_eq!(line, 2);
            assert_eq!(token, "-inf");
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_parse_reader_matches_parse() {
    let report = "\
---------- Begin Simulation Statistics ----------
sim_seconds                                  0.5 # no dot, skipped
core1.ipc 2.5 0 cycles-per-instr

core0.ipc 1.5 0 cycles-per-instr
---------- End Simulation Statistics   ----------
";
    let from_reader = ReportParser::default()
        .parse_reader(Cursor::new(report))
        .unwrap();
    let from_lines = parse(report.lines()).unwrap();

    assert_eq!(from_reader.len(), 1);
    assert_eq!(
        entries(&from_reader, "core", "ipc", DataDigest::WithoutAggregate),
        entries(&from_lines, "core", "ipc", DataDigest::WithoutAggregate)
    );
}

#[test]
fn test_parse_reader_counts_lines_from_one() {
    let report = "header\ncore0.ipc 1 0 d\ncore1.ipc oops 0 d\n";
    let err = ReportParser::default()
        .parse_reader(Cursor::new(report))
        .unwrap_err();
    assert!(matches!(err, StatsError::InvalidValue { line: 3, .. }));
}

#[test]
fn test_parse_reader_surfaces_invalid_utf8() {
    let bytes: &[u8] = b"core0.ipc 1 0 d\n\xff\xfe 2 0 d\n";
    let err = ReportParser::default().parse_reader(Cursor::new(bytes)).unwrap_err();
    assert!(matches!(err, StatsError::Io(_)));
}

/// Strategy for a record line with a known owner index and value
fn arb_record() -> impl Strategy<Value = (u32, i32, String)> {
    (0u32..64, -1000i32..1000, "[a-z]{0,8}").prop_map(|(idx, value, word)| {
        let line = format!("cpu{}.committed   {}   0   {}", idx, value, word);
        (idx, value, line)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Every record lands in the single `cpu` group, keyed by its owner.
    #[test]
    fn prop_records_group_by_stripped_owner(
        records in prop::collection::vec(arb_record(), 1..30),
        noise in prop::collection::vec("[A-Z =-]{0,20}", 0..5)
    ) {
        let mut lines: Vec<String> = noise.clone();
        lines.extend(records.iter().map(|(_, _, line)| line.clone()));

        let mut stats = parse(&lines).unwrap();
        stats.aggregate();
        stats.post_process();

        prop_assert_eq!(stats.len(), 1);

        let mut expected = std::collections::BTreeMap::new();
        for (idx, value, _) in &records {
            expected.insert(*idx, f64::from(*value));
        }

        let got = entries(&stats, "cpu", "committed", DataDigest::WithoutAggregate);
        let want: Vec<(String, f64)> = expected
            .iter()
            .map(|(idx, value)| (format!("cpu{}", idx), *value))
            .collect();
        prop_assert_eq!(got, want);

        let sum: f64 = expected.values().sum();
        let aggregate = entries(&stats, "cpu", "committed", DataDigest::JustAggregate);
        prop_assert_eq!(aggregate, vec![("aggregate".to_string(), sum)]);
    }
}
