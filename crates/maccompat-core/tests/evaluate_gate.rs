use maccompat_core::{
    evaluate, HostFacts, OsVersion, Release, RuleOutcome, SupportRule,
};

const GIB: u64 = 1024 * 1024 * 1024;

/// Baseline facts: a machine every release in the window accepts.
fn baseline() -> HostFacts {
    HostFacts {
        board_id: Some("Mac-F2268DC8".to_string()),
        model_id: "MacBookPro10,1".to_string(),
        cpu_64bit_capable: true,
        physical_memory_bytes: 8 * GIB,
        os_product_name: "Mac OS X".to_string(),
        os_product_version: v("10.9.5"),
        virtual_machine: false,
    }
}

fn v(s: &str) -> OsVersion {
    OsVersion::parse(s).unwrap()
}

fn outcome_of(verdict: &maccompat_core::Verdict, rule: SupportRule) -> RuleOutcome {
    verdict
        .evidence
        .iter()
        .find(|e| e.rule == rule)
        .unwrap_or_else(|| panic!("no evidence for {rule:?}"))
        .outcome
}

// ── End-to-end scenarios ─────────────────────────────────────────────────

#[test]
fn yosemite_accepts_the_baseline_machine() {
    let verdict = evaluate(&Release::Yosemite.rule_set(), &baseline());
    assert!(verdict.supported);
    assert_eq!(verdict.evidence.len(), 4);
    assert!(verdict.evidence.iter().all(|e| e.outcome == RuleOutcome::Pass));
    // Evidence order mirrors check order: board, memory, cpu, version.
    let order: Vec<SupportRule> = verdict.evidence.iter().map(|e| e.rule).collect();
    assert_eq!(
        order,
        vec![
            SupportRule::BoardId,
            SupportRule::Memory,
            SupportRule::Cpu64Bit,
            SupportRule::SystemVersion
        ]
    );
}

#[test]
fn high_sierra_rejects_a_denylisted_model() {
    let facts = HostFacts {
        model_id: "iMac4,1".to_string(),
        ..baseline()
    };
    let verdict = evaluate(&Release::HighSierra.rule_set(), &facts);
    assert!(!verdict.supported);
    let model = verdict
        .evidence
        .iter()
        .find(|e| e.rule == SupportRule::Model)
        .unwrap();
    assert_eq!(model.outcome, RuleOutcome::Fail);
    assert!(model.status.contains("iMac4,1"));
    // Board id and version were fine; the model alone sank it.
    assert_eq!(outcome_of(&verdict, SupportRule::BoardId), RuleOutcome::Pass);
    assert_eq!(
        outcome_of(&verdict, SupportRule::SystemVersion),
        RuleOutcome::Pass
    );
}

#[test]
fn verdict_is_deterministic() {
    let rule_set = Release::Yosemite.rule_set();
    let facts = baseline();
    assert_eq!(evaluate(&rule_set, &facts), evaluate(&rule_set, &facts));
}

// ── Virtual machines ─────────────────────────────────────────────────────

#[test]
fn high_sierra_supports_any_virtual_machine() {
    // Denylisted model, unknown board, out-of-window version: the VM
    // override wins regardless.
    let facts = HostFacts {
        board_id: Some("Mac-DEADBEEF".to_string()),
        model_id: "iMac4,1".to_string(),
        os_product_version: v("10.6"),
        virtual_machine: true,
        ..baseline()
    };
    let verdict = evaluate(&Release::HighSierra.rule_set(), &facts);
    assert!(verdict.supported);
    let last = verdict.evidence.last().unwrap();
    assert_eq!(last.status, "Virtual machine");
    assert_eq!(last.outcome, RuleOutcome::Pass);
}

#[test]
fn yosemite_vm_is_exempt_from_the_board_rule_only() {
    // A VM with too little memory still fails the allowlist-shaped gate;
    // the exemption covers the board id, nothing else.
    let facts = HostFacts {
        board_id: None,
        physical_memory_bytes: GIB,
        virtual_machine: true,
        ..baseline()
    };
    let verdict = evaluate(&Release::Yosemite.rule_set(), &facts);
    assert!(!verdict.supported);
    assert_eq!(outcome_of(&verdict, SupportRule::BoardId), RuleOutcome::Pass);
    assert_eq!(outcome_of(&verdict, SupportRule::Memory), RuleOutcome::Fail);

    let board = verdict
        .evidence
        .iter()
        .find(|e| e.rule == SupportRule::BoardId)
        .unwrap();
    assert_eq!(board.status, "Virtual machine");
}

#[test]
fn high_sierra_non_vm_still_needs_a_known_board() {
    let facts = HostFacts {
        board_id: None,
        ..baseline()
    };
    let verdict = evaluate(&Release::HighSierra.rule_set(), &facts);
    assert!(!verdict.supported);
    assert_eq!(outcome_of(&verdict, SupportRule::BoardId), RuleOutcome::Fail);
}

// ── AND-composition monotonicity ─────────────────────────────────────────

#[test]
fn flipping_any_single_fact_flips_the_yosemite_verdict() {
    let rule_set = Release::Yosemite.rule_set();
    assert!(evaluate(&rule_set, &baseline()).supported);

    let failing = [
        HostFacts {
            board_id: Some("Mac-0123456789ABCDEF".to_string()),
            ..baseline()
        },
        HostFacts {
            cpu_64bit_capable: false,
            ..baseline()
        },
        HostFacts {
            physical_memory_bytes: 2 * GIB - 1,
            ..baseline()
        },
        HostFacts {
            os_product_version: v("10.10"),
            ..baseline()
        },
        HostFacts {
            os_product_version: v("10.6.5"),
            ..baseline()
        },
    ];
    for facts in failing {
        let verdict = evaluate(&rule_set, &facts);
        assert!(!verdict.supported, "expected unsupported for {facts:?}");
    }
}

// ── Memory boundary ──────────────────────────────────────────────────────

#[test]
fn memory_boundary_is_exactly_two_binary_gigabytes() {
    let rule_set = Release::Yosemite.rule_set();

    let at_minimum = HostFacts {
        physical_memory_bytes: 2 * GIB,
        ..baseline()
    };
    let verdict = evaluate(&rule_set, &at_minimum);
    assert_eq!(outcome_of(&verdict, SupportRule::Memory), RuleOutcome::Pass);
    assert!(verdict.supported);

    let below = HostFacts {
        physical_memory_bytes: 2 * GIB - 1,
        ..baseline()
    };
    let verdict = evaluate(&rule_set, &below);
    let memory = verdict
        .evidence
        .iter()
        .find(|e| e.rule == SupportRule::Memory)
        .unwrap();
    assert_eq!(memory.outcome, RuleOutcome::Fail);
    assert!(memory.status.contains("2 GB required"));
    assert!(!verdict.supported);
}

// ── Board-id matching ────────────────────────────────────────────────────

#[test]
fn board_id_match_is_case_sensitive() {
    let facts = HostFacts {
        board_id: Some("mac-f2268dc8".to_string()),
        ..baseline()
    };
    let verdict = evaluate(&Release::Yosemite.rule_set(), &facts);
    assert!(!verdict.supported);
}

#[test]
fn unknown_board_id_failure_carries_the_literal_id() {
    // Correct platform prefix, absent from the table.
    let facts = HostFacts {
        board_id: Some("Mac-0123456789ABCDEF".to_string()),
        ..baseline()
    };
    let verdict = evaluate(&Release::Yosemite.rule_set(), &facts);
    let board = verdict
        .evidence
        .iter()
        .find(|e| e.rule == SupportRule::BoardId)
        .unwrap();
    assert_eq!(board.outcome, RuleOutcome::Fail);
    assert!(board.status.contains("Mac-0123456789ABCDEF"));
    assert!(board.status.contains("is not supported"));
}

#[test]
fn absent_board_id_fails_with_explicit_evidence() {
    let facts = HostFacts {
        board_id: None,
        ..baseline()
    };
    let verdict = evaluate(&Release::Yosemite.rule_set(), &facts);
    let board = verdict
        .evidence
        .iter()
        .find(|e| e.rule == SupportRule::BoardId)
        .unwrap();
    assert_eq!(board.outcome, RuleOutcome::Fail);
    assert_eq!(board.status, "board id not available");
}

#[test]
fn repaired_allowlist_entries_match() {
    // Mac-F2218FA9 was unmatchable upstream; it must match here.
    for release in [Release::Mavericks, Release::Yosemite] {
        let facts = HostFacts {
            board_id: Some("Mac-F2218FA9".to_string()),
            os_product_version: v("10.6.8"),
            ..baseline()
        };
        let verdict = evaluate(&release.rule_set(), &facts);
        assert!(verdict.supported, "{release} should accept Mac-F2218FA9");
    }
}

// ── Model rule ───────────────────────────────────────────────────────────

#[test]
fn missing_model_identifier_fails_the_model_rule() {
    let facts = HostFacts {
        model_id: String::new(),
        ..baseline()
    };
    let verdict = evaluate(&Release::HighSierra.rule_set(), &facts);
    assert!(!verdict.supported);
    let model = verdict
        .evidence
        .iter()
        .find(|e| e.rule == SupportRule::Model)
        .unwrap();
    assert_eq!(model.outcome, RuleOutcome::Fail);
    assert_eq!(model.status, "model identifier not available");
}

// ── Version windows ──────────────────────────────────────────────────────

#[test]
fn mountain_lion_upper_bound_is_inclusive() {
    let at_bound = HostFacts {
        os_product_version: v("10.8"),
        ..baseline()
    };
    assert!(evaluate(&Release::MountainLion.rule_set(), &at_bound).supported);

    let past_bound = HostFacts {
        os_product_version: v("10.8.1"),
        ..baseline()
    };
    assert!(!evaluate(&Release::MountainLion.rule_set(), &past_bound).supported);
}

#[test]
fn mavericks_upper_bound_is_exclusive() {
    let inside = HostFacts {
        os_product_version: v("10.8.5"),
        ..baseline()
    };
    assert!(evaluate(&Release::Mavericks.rule_set(), &inside).supported);

    let at_target = HostFacts {
        os_product_version: v("10.9"),
        ..baseline()
    };
    assert!(!evaluate(&Release::Mavericks.rule_set(), &at_target).supported);
}

#[test]
fn high_sierra_window_floor_is_ten_eight() {
    let below = HostFacts {
        os_product_version: v("10.7.5"),
        ..baseline()
    };
    let verdict = evaluate(&Release::HighSierra.rule_set(), &below);
    assert!(!verdict.supported);
    assert_eq!(
        outcome_of(&verdict, SupportRule::SystemVersion),
        RuleOutcome::Fail
    );
}

#[test]
fn version_evidence_carries_the_product_name() {
    let verdict = evaluate(&Release::Yosemite.rule_set(), &baseline());
    let system = verdict
        .evidence
        .iter()
        .find(|e| e.rule == SupportRule::SystemVersion)
        .unwrap();
    assert_eq!(system.status, "Mac OS X 10.9.5");
}
