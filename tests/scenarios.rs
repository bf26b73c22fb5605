//! End-to-end allocation scenarios.

use u_allot::allocation::{allocate, AllocationConfig, AllocationError, AllocationRunner};
use u_allot::model::{Applicant, Assignment, SlotOffering};
use u_allot::report::{write_summary_csv, AllocationReport, SlotLabels};
use u_allot::roster::{read_applicants, read_offerings};

fn config(max: usize, seed: u64) -> AllocationConfig {
    AllocationConfig::default()
        .with_max_per_applicant(max)
        .with_seed(seed)
}

fn programs_of<'a>(assignments: &'a [Assignment], id: &str) -> Vec<&'a str> {
    assignments
        .iter()
        .filter(|a| a.applicant_id == id)
        .map(|a| a.program.as_str())
        .collect()
}

#[test]
fn test_no_contention_everyone_assigned() {
    let offerings = vec![SlotOffering::new("Art", 2, "Mon", 1)];
    let applicants = vec![
        Applicant::new("Alice", ["Art"]),
        Applicant::new("Bob", ["Art"]),
    ];

    for seed in 0..8 {
        let assignments = allocate(&applicants, &offerings, &config(1, seed)).unwrap();
        assert_eq!(assignments.len(), 2);
        for a in &assignments {
            assert_eq!((a.program.as_str(), a.day.as_str(), a.time_slot), ("Art", "Mon", 1));
        }
        assert_eq!(programs_of(&assignments, "Alice"), vec!["Art"]);
        assert_eq!(programs_of(&assignments, "Bob"), vec!["Art"]);
    }
}

#[test]
fn test_conflict_avoidance() {
    let offerings = vec![
        SlotOffering::new("Art", 5, "Mon", 1),
        SlotOffering::new("Choir", 5, "Mon", 1),
    ];
    let applicants = vec![Applicant::new("Alice", ["Art", "Choir"])];

    for seed in 0..8 {
        let assignments = allocate(&applicants, &offerings, &config(2, seed)).unwrap();
        assert_eq!(programs_of(&assignments, "Alice"), vec!["Art"]);
    }
}

#[test]
fn test_capacity_gate() {
    let offerings = vec![
        SlotOffering::new("Art", 0, "Mon", 1),
        SlotOffering::new("Choir", 5, "Tue", 2),
    ];
    let applicants = vec![Applicant::new("Alice", ["Art", "Choir"])];

    let assignments = allocate(&applicants, &offerings, &config(1, 42)).unwrap();
    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0].program, "Choir");
    assert_eq!(assignments[0].round, 2);
}

#[test]
fn test_lottery_under_oversubscription() {
    let offerings = vec![SlotOffering::new("Art", 1, "Mon", 1)];
    let applicants = vec![
        Applicant::new("Alice", ["Art"]),
        Applicant::new("Bob", ["Art"]),
        Applicant::new("Carol", ["Art"]),
    ];

    let mut winners = std::collections::HashSet::new();
    for seed in 0..64 {
        let assignments = allocate(&applicants, &offerings, &config(1, seed)).unwrap();
        assert_eq!(assignments.len(), 1, "seed {seed}");
        winners.insert(assignments[0].applicant_id.clone());
    }
    // The winner is up to the seed, and every bidder can win.
    assert_eq!(winners.len(), 3);
}

#[test]
fn test_rank_exhaustion_cap() {
    let offerings = vec![
        SlotOffering::new("A", 5, "Mon", 1),
        SlotOffering::new("B", 5, "Tue", 1),
        SlotOffering::new("C", 5, "Wed", 1),
    ];
    let applicants = vec![Applicant::new("Alice", ["A", "B", "C"])];

    let assignments = allocate(&applicants, &offerings, &config(2, 7)).unwrap();
    assert_eq!(programs_of(&assignments, "Alice"), vec!["A", "B"]);
}

#[test]
fn test_inert_inputs() {
    let offerings = vec![SlotOffering::new("Art", 3, "Mon", 1)];
    let applicants = vec![
        Applicant::new("Alice", ["Robotics"]),
        Applicant::new("Bob", Vec::<String>::new()),
        Applicant::new("Carol", ["Robotics", "Art"]),
    ];

    let assignments = allocate(&applicants, &offerings, &config(3, 1)).unwrap();
    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0].applicant_id, "Carol");
    assert_eq!(assignments[0].round, 2);
}

#[test]
fn test_max_above_list_length() {
    let offerings = vec![
        SlotOffering::new("Art", 1, "Mon", 1),
        SlotOffering::new("Choir", 1, "Tue", 1),
    ];
    let applicants = vec![Applicant::new("Alice", ["Art", "Choir"])];

    let assignments = allocate(&applicants, &offerings, &config(10, 1)).unwrap();
    assert_eq!(programs_of(&assignments, "Alice"), vec!["Art", "Choir"]);
}

#[test]
fn test_contract_violations() {
    let offerings = vec![SlotOffering::new("Art", 1, "Mon", 1)];
    let applicants = vec![Applicant::new("Alice", ["Art"])];

    assert_eq!(
        allocate(&applicants, &offerings, &config(0, 1)),
        Err(AllocationError::InvalidMaxPerApplicant(0))
    );
    assert_eq!(
        allocate(&[], &offerings, &config(1, 1)),
        Err(AllocationError::NoApplicants)
    );
    assert_eq!(
        allocate(&applicants, &[], &config(1, 1)),
        Err(AllocationError::NoOfferings)
    );
}

#[test]
fn test_same_seed_same_result() {
    let offerings = vec![
        SlotOffering::new("Art", 2, "Mon", 1),
        SlotOffering::new("Art", 2, "Tue", 1),
        SlotOffering::new("Choir", 3, "Mon", 1),
        SlotOffering::new("Dance", 1, "Tue", 1),
    ];
    let applicants: Vec<Applicant> = (0..12)
        .map(|i| {
            let prefs = match i % 3 {
                0 => vec!["Art", "Dance", "Choir"],
                1 => vec!["Dance", "Art"],
                _ => vec!["Choir", "Art", "Dance"],
            };
            Applicant::new(format!("kid{i}"), prefs)
        })
        .collect();

    let a = AllocationRunner::run(&applicants, &offerings, &config(2, 99)).unwrap();
    let b = AllocationRunner::run(&applicants, &offerings, &config(2, 99)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_csv_round_trip_through_engine() {
    let programs = "\
ProgramName,Capacity,Day,TimeSlot
Art,1,Mon,1
Choir,2,Tue,2
";
    let kids = "\
KidName,Preference1,Preference2
Alice,Art,Choir
Bob,Choir
";
    let offerings = read_offerings(programs.as_bytes()).unwrap();
    let applicants = read_applicants(kids.as_bytes()).unwrap();
    let result = AllocationRunner::run(&applicants, &offerings, &config(2, 5)).unwrap();
    let report = AllocationReport::build(&applicants, &offerings, &result.assignments);

    let mut buf = Vec::new();
    write_summary_csv(&mut buf, &report, &SlotLabels::default()).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(
        text,
        "Applicant,AssignedPrograms\n\
         Alice,\"Art (Mon slot 1, 12:50-2:20), Choir (Tue slot 2, 2:20-3:50)\"\n\
         Bob,\"Choir (Tue slot 2, 2:20-3:50)\"\n"
    );
}

#[test]
fn test_combining_accent_matches_precomposed_program() {
    let programs = "ProgramName,Capacity,Day,TimeSlot\nCaf\u{e9} Club,3,Mon,1\n";
    let kids = "KidName,Preference1\nAlice,Cafe\u{301} Club\n";
    let offerings = read_offerings(programs.as_bytes()).unwrap();
    let applicants = read_applicants(kids.as_bytes()).unwrap();
    assert_eq!(applicants[0].preferences[0], offerings[0].program);

    let assignments = allocate(&applicants, &offerings, &config(1, 3)).unwrap();
    assert_eq!(programs_of(&assignments, "Alice"), vec!["Caf\u{e9} Club"]);
}
