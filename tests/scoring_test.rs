use chrono::{TimeZone, Utc};
use league_manager::league::scoring::recompute_score;
use league_manager::models::event::Goal;
use league_manager::models::matches::{is_played_from_scores, Match};

fn fixture() -> Match {
    Match {
        id: 7,
        home_team_id: 1,
        away_team_id: 2,
        match_date: Utc.with_ymd_and_hms(2025, 4, 5, 14, 0, 0).unwrap(),
        venue: Some("Kinoru Stadium".into()),
        home_score: 0,
        away_score: 0,
        is_played: false,
        referee_id: None,
    }
}

fn goal(id: i64, match_id: i64, team_id: i64, minute: i32) -> Goal {
    Goal { id, match_id, scorer_id: 100 + id, team_id, minute }
}

#[test]
fn test_no_goals_means_goalless_and_not_played() {
    let score = recompute_score(&[], &fixture());
    assert_eq!(score, (0, 0));
    assert!(!is_played_from_scores(score.0, score.1));
}

#[test]
fn test_goals_are_counted_per_credited_team() {
    let goals = vec![
        goal(1, 7, 1, 12),
        goal(2, 7, 2, 30),
        goal(3, 7, 1, 77),
        goal(4, 7, 1, 90),
    ];
    assert_eq!(recompute_score(&goals, &fixture()), (3, 1));
}

#[test]
fn test_goals_from_other_matches_or_teams_are_ignored() {
    let goals = vec![
        goal(1, 7, 2, 5),
        goal(2, 8, 1, 10),
        goal(3, 7, 9, 15),
    ];
    assert_eq!(recompute_score(&goals, &fixture()), (0, 1));
}
