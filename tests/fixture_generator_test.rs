use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, TimeZone, Timelike, Utc};
use chrono_tz::Europe::Berlin;
use league_manager::config::fixtures::{FixtureSettings, MAX_DAYS_BETWEEN_ROUNDS};
use league_manager::league::schedule::{
    initial_seats, persist_fixtures, plan_fixtures, rotate, round_pairings, tomorrow_midnight,
    FixtureError, Leg, ScheduleService, Seat,
};

mod common;
use common::memory_store::{teams, InMemoryStore};

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 6, 0, 0, 0).unwrap()
}

fn league_of(n: usize) -> Vec<league_manager::models::team::Team> {
    let names: Vec<String> = (1..=n).map(|i| format!("Team {}", i)).collect();
    let refs: Vec<&str> = names.iter().map(|s| s.as_str()).collect();
    teams(&refs)
}

#[test]
fn test_rotation_keeps_first_seat_and_moves_last_to_second() {
    let seats = initial_seats(4);
    assert_eq!(seats, vec![Seat::Team(0), Seat::Team(1), Seat::Team(2), Seat::Team(3)]);

    let rotated = rotate(&seats);
    assert_eq!(rotated, vec![Seat::Team(0), Seat::Team(3), Seat::Team(1), Seat::Team(2)]);
    // The input is left alone
    assert_eq!(seats[1], Seat::Team(1));
}

#[test]
fn test_odd_team_count_gets_a_bye_seat() {
    let seats = initial_seats(5);
    assert_eq!(seats.len(), 6);
    assert_eq!(seats[5], Seat::Bye);
}

#[test]
fn test_pairings_match_opposite_seats_and_skip_bye() {
    let seats = vec![Seat::Team(0), Seat::Team(1), Seat::Team(2), Seat::Bye];
    assert_eq!(round_pairings(&seats), vec![(1, 2)]);

    let seats = initial_seats(4);
    assert_eq!(round_pairings(&seats), vec![(0, 3), (1, 2)]);
}

#[test]
fn test_four_teams_get_twelve_fixtures() {
    let league = league_of(4);
    let plan = plan_fixtures(&league, start(), &FixtureSettings::default()).unwrap();

    assert_eq!(plan.rounds_per_leg, 3);
    assert_eq!(plan.first_leg.len(), 6);
    assert_eq!(plan.return_leg.len(), 6);
    assert_eq!(plan.len(), 12);

    let mut directed: HashSet<(i64, i64)> = HashSet::new();
    let mut unordered: HashMap<(i64, i64), usize> = HashMap::new();
    for scheduled in plan.fixtures() {
        let f = &scheduled.fixture;
        assert_ne!(f.home_team_id, f.away_team_id);
        assert!(directed.insert((f.home_team_id, f.away_team_id)), "duplicate home fixture");
        let key = (f.home_team_id.min(f.away_team_id), f.home_team_id.max(f.away_team_id));
        *unordered.entry(key).or_default() += 1;
    }
    assert_eq!(unordered.len(), 6);
    assert!(unordered.values().all(|&count| count == 2));
}

#[test]
fn test_every_team_plays_once_per_round() {
    let league = league_of(6);
    let plan = plan_fixtures(&league, start(), &FixtureSettings::default()).unwrap();

    for round in 0..plan.rounds_per_leg {
        let mut seen = HashSet::new();
        for scheduled in plan.first_leg.iter().filter(|s| s.round == round) {
            assert!(seen.insert(scheduled.fixture.home_team_id));
            assert!(seen.insert(scheduled.fixture.away_team_id));
        }
        assert_eq!(seen.len(), 6);
    }
}

#[test]
fn test_round_dates_and_return_leg_offset() {
    let league = league_of(4);
    let plan = plan_fixtures(&league, start(), &FixtureSettings::default()).unwrap();

    for scheduled in &plan.first_leg {
        assert_eq!(scheduled.leg, Leg::First);
        assert_eq!(
            scheduled.fixture.match_date,
            start() + Duration::days(7 * scheduled.round as i64)
        );
    }

    let round_dates: HashSet<DateTime<Utc>> = plan.first_leg.iter().map(|s| s.fixture.match_date).collect();
    assert_eq!(round_dates.len(), 3);

    for (first, second) in plan.first_leg.iter().zip(plan.return_leg.iter()) {
        assert_eq!(second.leg, Leg::Return);
        assert_eq!(second.fixture.home_team_id, first.fixture.away_team_id);
        assert_eq!(second.fixture.away_team_id, first.fixture.home_team_id);
        assert_eq!(second.fixture.match_date, first.fixture.match_date + Duration::days(21));
    }
}

#[test]
fn test_custom_interval_is_used() {
    let settings = FixtureSettings { days_between_rounds: 3, two_team_return_leg: false };
    let plan = plan_fixtures(&league_of(4), start(), &settings).unwrap();

    let last = plan.first_leg.last().unwrap();
    assert_eq!(last.fixture.match_date, start() + Duration::days(6));
    let last_return = plan.return_leg.last().unwrap();
    assert_eq!(last_return.fixture.match_date, start() + Duration::days(15));
}

#[test]
fn test_five_teams_leave_one_idle_each_round() {
    let league = league_of(5);
    let plan = plan_fixtures(&league, start(), &FixtureSettings::default()).unwrap();

    assert_eq!(plan.rounds_per_leg, 5);
    assert_eq!(plan.first_leg.len(), 10);
    for round in 0..plan.rounds_per_leg {
        let in_round = plan.first_leg.iter().filter(|s| s.round == round).count();
        assert_eq!(in_round, 2);
    }
    assert_eq!(plan.return_leg.len(), 10);

    let pairs: HashSet<(i64, i64)> = plan
        .first_leg
        .iter()
        .map(|s| {
            let f = &s.fixture;
            (f.home_team_id.min(f.away_team_id), f.home_team_id.max(f.away_team_id))
        })
        .collect();
    assert_eq!(pairs.len(), 10);
}

#[test]
fn test_two_teams_play_once_unless_configured() {
    let league = league_of(2);

    let plan = plan_fixtures(&league, start(), &FixtureSettings::default()).unwrap();
    assert_eq!(plan.first_leg.len(), 1);
    assert!(plan.return_leg.is_empty());

    let settings = FixtureSettings { days_between_rounds: 7, two_team_return_leg: true };
    let plan = plan_fixtures(&league, start(), &settings).unwrap();
    assert_eq!(plan.return_leg.len(), 1);
    assert_eq!(plan.return_leg[0].fixture.match_date, start() + Duration::days(7));
}

#[test]
fn test_too_few_teams_is_rejected() {
    for n in 0..2 {
        let err = plan_fixtures(&league_of(n), start(), &FixtureSettings::default()).unwrap_err();
        assert!(matches!(err, FixtureError::NotEnoughTeams(count) if count == n));
    }
}

#[tokio::test]
async fn test_service_rejects_single_team_without_saving() {
    for n in 0..2 {
        let store = InMemoryStore::new(league_of(n));
        let service = ScheduleService::new(&store, FixtureSettings::default());
        let err = service.generate_schedule(start()).await.unwrap_err();
        assert!(matches!(err, FixtureError::NotEnoughTeams(_)));
        assert_eq!(err.saved(), 0);
        assert!(store.saved_matches().is_empty());
    }
}

#[tokio::test]
async fn test_fixtures_are_saved_in_plan_order() {
    let league = league_of(4);
    let store = InMemoryStore::new(league.clone());
    let plan = plan_fixtures(&league, start(), &FixtureSettings::default()).unwrap();

    let saved = persist_fixtures(&store, &plan).await.unwrap();
    assert_eq!(saved, 12);

    let stored = store.saved_matches();
    for (stored, planned) in stored.iter().zip(plan.fixtures()) {
        assert_eq!(stored.home_team_id, planned.fixture.home_team_id);
        assert_eq!(stored.away_team_id, planned.fixture.away_team_id);
        assert_eq!(stored.match_date, planned.fixture.match_date);
        assert!(!stored.is_played);
        assert_eq!((stored.home_score, stored.away_score), (0, 0));
    }
}

#[tokio::test]
async fn test_storage_failure_keeps_earlier_saves() {
    let store = InMemoryStore::failing_after(league_of(4), 4);
    let service = ScheduleService::new(&store, FixtureSettings::default());

    let err = service.generate_schedule(start()).await.unwrap_err();
    match &err {
        FixtureError::Storage { saved, total, .. } => {
            assert_eq!(*saved, 4);
            assert_eq!(*total, 12);
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(err.saved(), 4);
    assert_eq!(store.saved_matches().len(), 4);
}

#[tokio::test]
async fn test_service_summary() {
    let service = ScheduleService::new(InMemoryStore::new(league_of(5)), FixtureSettings::default());
    let summary = service.generate_schedule(start()).await.unwrap();

    assert_eq!(summary.teams, 5);
    assert_eq!(summary.rounds_per_leg, 5);
    assert_eq!(summary.first_leg_matches, 10);
    assert_eq!(summary.return_leg_matches, 10);
    assert_eq!(summary.saved, 20);
}

#[test]
fn test_start_is_next_local_midnight() {
    let east_africa = FixedOffset::east_opt(3 * 3600).unwrap();

    let evening = east_africa.with_ymd_and_hms(2025, 3, 10, 22, 30, 0).unwrap();
    let start = tomorrow_midnight(&evening).unwrap();
    assert_eq!(start, east_africa.with_ymd_and_hms(2025, 3, 11, 0, 0, 0).unwrap());

    // Already the 11th locally while still the 10th in UTC
    let after_midnight = east_africa.with_ymd_and_hms(2025, 3, 11, 1, 0, 0).unwrap();
    let start = tomorrow_midnight(&after_midnight).unwrap();
    assert_eq!(start, east_africa.with_ymd_and_hms(2025, 3, 12, 0, 0, 0).unwrap());
    assert_eq!(start.hour(), 0);
    assert_eq!(start.with_timezone(&Utc).hour(), 21);
}

fn berlin_day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn test_rounds_stay_at_local_midnight_when_clocks_go_back() {
    // Berlin leaves summer time on 2025-10-26
    let now = Berlin.with_ymd_and_hms(2025, 10, 19, 12, 0, 0).unwrap();
    let start = tomorrow_midnight(&now).unwrap();
    let plan = plan_fixtures(&league_of(4), start, &FixtureSettings::default()).unwrap();

    let expected_days = [
        berlin_day(2025, 10, 20),
        berlin_day(2025, 10, 27),
        berlin_day(2025, 11, 3),
    ];
    let expected_return_days = [
        berlin_day(2025, 11, 10),
        berlin_day(2025, 11, 17),
        berlin_day(2025, 11, 24),
    ];

    for scheduled in &plan.first_leg {
        let local = scheduled.fixture.match_date.with_timezone(&Berlin);
        assert_eq!(local.hour(), 0, "round {} not at local midnight", scheduled.round);
        assert_eq!(local.date_naive(), expected_days[scheduled.round]);
    }
    for scheduled in &plan.return_leg {
        let local = scheduled.fixture.match_date.with_timezone(&Berlin);
        assert_eq!(local.hour(), 0);
        assert_eq!(local.date_naive(), expected_return_days[scheduled.round]);
    }

    // Summer and winter midnights sit at different UTC hours
    let first = plan.first_leg.iter().find(|s| s.round == 0).unwrap();
    let second = plan.first_leg.iter().find(|s| s.round == 1).unwrap();
    assert_eq!(first.fixture.match_date, Utc.with_ymd_and_hms(2025, 10, 19, 22, 0, 0).unwrap());
    assert_eq!(second.fixture.match_date, Utc.with_ymd_and_hms(2025, 10, 26, 23, 0, 0).unwrap());
}

#[test]
fn test_rounds_stay_at_local_midnight_when_clocks_go_forward() {
    // Berlin enters summer time on 2025-03-30
    let start = Berlin.with_ymd_and_hms(2025, 3, 24, 0, 0, 0).unwrap();
    let plan = plan_fixtures(&league_of(4), start, &FixtureSettings::default()).unwrap();

    for scheduled in plan.fixtures() {
        assert_eq!(scheduled.fixture.match_date.with_timezone(&Berlin).hour(), 0);
    }

    let second = plan.first_leg.iter().find(|s| s.round == 1).unwrap();
    assert_eq!(second.fixture.match_date, Utc.with_ymd_and_hms(2025, 3, 30, 22, 0, 0).unwrap());
}

#[test]
fn test_unreachable_round_date_is_an_error() {
    let settings = FixtureSettings { days_between_rounds: u32::MAX, two_team_return_leg: false };
    let err = plan_fixtures(&league_of(4), start(), &settings).unwrap_err();
    assert!(matches!(err, FixtureError::RoundDate(_)));
}

#[test]
fn test_round_interval_must_be_within_a_year() {
    assert!(FixtureSettings::default().validate().is_ok());

    let mut settings = FixtureSettings::default();
    settings.days_between_rounds = MAX_DAYS_BETWEEN_ROUNDS;
    assert!(settings.validate().is_ok());

    settings.days_between_rounds = MAX_DAYS_BETWEEN_ROUNDS + 1;
    assert!(settings.validate().is_err());

    settings.days_between_rounds = 0;
    assert!(settings.validate().is_err());
}
