//! End-to-end pairing sessions driven through the public API.
use heartlink_game::{
    Command, CommandReply, Outcome, Pair, PairingTracker, TrackerError,
};

fn seeded(names: &[&str]) -> PairingTracker {
    let mut tracker = PairingTracker::new();
    for name in names {
        tracker.add(name).unwrap();
    }
    tracker
}

#[test]
fn last_player_standing_gets_the_callout() {
    let mut tracker = seeded(&["Akira", "Botan", "Chiyo"]);
    let report = tracker
        .attempt_pair("Akira", "Botan", Outcome::Success)
        .unwrap();
    // Chiyo's only possible partners just retired each other.
    assert_eq!(report.newly_exhausted, ["Chiyo"]);
    assert!(report.game_over);
    assert!(tracker.candidates_for("Chiyo").unwrap().is_empty());

    let summary = tracker.summary();
    assert_eq!(summary.sole_unmatched(), Some("Chiyo"));
    assert_eq!(summary.closing_pair(), None);
    assert_eq!(summary.pairs, [Pair::new("Akira", "Botan")]);
}

#[test]
fn mutual_failure_strands_both() {
    let mut tracker = seeded(&["Akira", "Botan"]);
    let report = tracker
        .attempt_pair("Akira", "Botan", Outcome::Failure)
        .unwrap();
    assert_eq!(report.newly_exhausted, ["Akira", "Botan"]);
    assert!(report.game_over);
    assert!(tracker.candidates_for("Akira").unwrap().is_empty());
    assert!(tracker.candidates_for("Botan").unwrap().is_empty());

    let summary = tracker.summary();
    assert_eq!(summary.unmatched, ["Akira", "Botan"]);
    assert_eq!(summary.sole_unmatched(), None);
    assert!(summary.pairs.is_empty());
}

#[test]
fn removing_a_failed_partner_frees_the_slot() {
    let mut tracker = seeded(&["Akira", "Botan", "Chiyo"]);
    tracker
        .attempt_pair("Akira", "Botan", Outcome::Failure)
        .unwrap();
    tracker.remove("Botan").unwrap();

    // Botan is gone entirely: no candidate entry, no stale attempt block.
    assert_eq!(tracker.candidates_for("Akira").unwrap(), ["Chiyo"]);
    assert!(!tracker.has_attempted("Akira", "Botan"));
    assert_eq!(
        tracker.candidates_for("Botan"),
        Err(TrackerError::NotFound {
            name: "Botan".to_string()
        })
    );
}

#[test]
fn self_pairing_is_rejected_without_side_effects() {
    let mut tracker = seeded(&["Akira", "Botan"]);
    assert_eq!(
        tracker.attempt_pair("Akira", "Akira", Outcome::Success),
        Err(TrackerError::SelfPairing {
            name: "Akira".to_string()
        })
    );
    assert!(!tracker.participant("Akira").unwrap().paired);
    assert!(!tracker.is_game_over());
    assert_eq!(tracker.candidates_for("Akira").unwrap(), ["Botan"]);
}

#[test]
fn attempt_symmetry_holds_across_a_whole_session() {
    let mut tracker = seeded(&["Akira", "Botan", "Chiyo", "Daiki", "Emi"]);
    tracker
        .attempt_pair("Akira", "Botan", Outcome::Failure)
        .unwrap();
    tracker
        .attempt_pair("Chiyo", "Akira", Outcome::Failure)
        .unwrap();
    tracker
        .attempt_pair("Daiki", "Emi", Outcome::Failure)
        .unwrap();
    tracker.remove("Botan").unwrap();
    tracker
        .attempt_pair("Emi", "Akira", Outcome::Failure)
        .unwrap();

    let names: Vec<String> = tracker.participants().map(|p| p.name.clone()).collect();
    for a in &names {
        for b in &names {
            assert_eq!(
                tracker.has_attempted(a, b),
                tracker.has_attempted(b, a),
                "asymmetric attempt record for {a}/{b}"
            );
        }
    }
}

#[test]
fn paired_participants_never_reappear() {
    let mut tracker = seeded(&["Akira", "Botan", "Chiyo", "Daiki"]);
    tracker
        .attempt_pair("Akira", "Botan", Outcome::Success)
        .unwrap();

    for asker in ["Chiyo", "Daiki"] {
        let candidates = tracker.candidates_for(asker).unwrap();
        assert!(!candidates.contains(&"Akira".to_string()));
        assert!(!candidates.contains(&"Botan".to_string()));
    }
    assert_eq!(
        tracker.attempt_pair("Chiyo", "Botan", Outcome::Failure),
        Err(TrackerError::NotEligible {
            name: "Botan".to_string()
        })
    );
}

#[test]
fn game_over_matches_candidate_emptiness_everywhere() {
    let mut tracker = seeded(&["Akira", "Botan", "Chiyo", "Daiki"]);
    let steps = [
        ("Akira", "Botan", Outcome::Failure),
        ("Chiyo", "Daiki", Outcome::Failure),
        ("Akira", "Chiyo", Outcome::Failure),
        ("Botan", "Daiki", Outcome::Failure),
        ("Botan", "Chiyo", Outcome::Failure),
        ("Akira", "Daiki", Outcome::Success),
    ];
    for (selector, target, outcome) in steps {
        tracker.attempt_pair(selector, target, outcome).unwrap();
        let expected = tracker
            .participants()
            .filter(|p| p.is_eligible())
            .all(|p| tracker.candidates_for(&p.name).unwrap().is_empty());
        assert_eq!(tracker.is_game_over(), expected);
    }
    // Botan and Chiyo remain, but they already failed with each other.
    assert!(tracker.is_game_over());
    assert_eq!(tracker.summary().unmatched, ["Botan", "Chiyo"]);
}

#[test]
fn full_session_reports_the_closing_pair() {
    let mut tracker = seeded(&["Akira", "Botan", "Chiyo", "Daiki"]);
    tracker
        .attempt_pair("Chiyo", "Akira", Outcome::Success)
        .unwrap();
    let report = tracker
        .attempt_pair("Daiki", "Botan", Outcome::Success)
        .unwrap();
    assert!(report.game_over);

    let summary = tracker.summary();
    assert!(summary.unmatched.is_empty());
    assert_eq!(summary.closing_pair(), Some(&Pair::new("Daiki", "Botan")));
    assert_eq!(
        summary.pairs,
        [Pair::new("Akira", "Chiyo"), Pair::new("Botan", "Daiki")]
    );
}

#[test]
fn command_stream_drives_a_session_like_a_shell_would() {
    let mut tracker = PairingTracker::new();
    let script = [
        Command::Add {
            name: "Akira".to_string(),
        },
        Command::Add {
            name: "Botan".to_string(),
        },
        Command::Add {
            name: "Chiyo".to_string(),
        },
        Command::Attempt {
            selector: "Akira".to_string(),
            target: "Botan".to_string(),
            outcome: Outcome::Failure,
        },
        Command::Attempt {
            selector: "Akira".to_string(),
            target: "Chiyo".to_string(),
            outcome: Outcome::Success,
        },
    ];
    for command in script {
        tracker.apply(command).unwrap();
    }

    let reply = tracker.apply(Command::Summary).unwrap();
    let CommandReply::Summary { game_over, summary } = reply else {
        panic!("expected summary reply");
    };
    assert!(game_over);
    assert_eq!(summary.sole_unmatched(), Some("Botan"));
}

#[test]
fn tracker_state_round_trips_through_json() {
    let mut tracker = seeded(&["Akira", "Botan", "Chiyo"]);
    tracker
        .attempt_pair("Akira", "Botan", Outcome::Failure)
        .unwrap();
    tracker
        .attempt_pair("Akira", "Chiyo", Outcome::Success)
        .unwrap();

    let saved = serde_json::to_string(&tracker).unwrap();
    let restored: PairingTracker = serde_json::from_str(&saved).unwrap();

    assert_eq!(restored.summary(), tracker.summary());
    assert_eq!(restored.is_game_over(), tracker.is_game_over());
    assert!(restored.has_attempted("Akira", "Botan"));
    assert_eq!(
        restored.participant("Chiyo").unwrap().partner.as_deref(),
        Some("Akira")
    );
}
