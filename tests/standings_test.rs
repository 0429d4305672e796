use chrono::{TimeZone, Utc};
use league_manager::league::standings::{compute_standings, StandingsService};
use league_manager::models::matches::{is_played_from_scores, Match};

mod common;
use common::memory_store::{teams, InMemoryStore};

fn result(id: i64, home: i64, away: i64, home_score: i32, away_score: i32) -> Match {
    Match {
        id,
        home_team_id: home,
        away_team_id: away,
        match_date: Utc.with_ymd_and_hms(2025, 2, 1, 15, 0, 0).unwrap() + chrono::Duration::days(id),
        venue: None,
        home_score,
        away_score,
        is_played: is_played_from_scores(home_score, away_score),
        referee_id: None,
    }
}

fn names(rows: &[league_manager::models::league::StandingRow]) -> Vec<String> {
    rows.iter().map(|r| r.team.name.clone()).collect()
}

#[test]
fn test_no_matches_gives_zero_rows_for_every_team() {
    let league = teams(&["Meru Stars", "Kisima FC", "Nkubu United"]);
    let rows = compute_standings(&league, &[]);

    assert_eq!(rows.len(), 3);
    for row in &rows {
        assert_eq!(
            (row.played, row.wins, row.draws, row.losses, row.points),
            (0, 0, 0, 0, 0)
        );
        assert_eq!((row.goals_for, row.goals_against, row.goal_difference), (0, 0, 0));
    }
    // Nothing to separate them, so input order is kept
    assert_eq!(names(&rows), vec!["Meru Stars", "Kisima FC", "Nkubu United"]);
}

#[test]
fn test_empty_league_gives_empty_table() {
    assert!(compute_standings(&[], &[]).is_empty());
}

#[test]
fn test_single_result_is_seen_from_both_sides() {
    let league = teams(&["Home Side", "Away Side"]);
    let rows = compute_standings(&league, &[result(1, 1, 2, 2, 1)]);

    let home = rows.iter().find(|r| r.team.id == 1).unwrap();
    let away = rows.iter().find(|r| r.team.id == 2).unwrap();

    assert_eq!((home.goals_for, home.goals_against, home.wins, home.points), (2, 1, 1, 3));
    assert_eq!((away.goals_for, away.goals_against, away.losses, away.points), (1, 2, 1, 0));
    assert_eq!(home.goal_difference, 1);
    assert_eq!(away.goal_difference, -1);
    assert_eq!(home.played, 1);
    assert_eq!(away.played, 1);
}

#[test]
fn test_points_law_holds_for_every_row() {
    let league = teams(&["A", "B", "C", "D"]);
    let results = vec![
        result(1, 1, 2, 3, 1),
        result(2, 3, 4, 2, 2),
        result(3, 1, 3, 0, 1),
        result(4, 2, 4, 1, 1),
        result(5, 4, 1, 4, 2),
        result(6, 2, 3, 2, 0),
    ];
    let rows = compute_standings(&league, &results);

    for row in &rows {
        assert_eq!(row.points, 3 * row.wins + row.draws);
        assert_eq!(row.played, row.wins + row.draws + row.losses);
        assert_eq!(row.goal_difference, row.goals_for - row.goals_against);
    }
    let total_played: u32 = rows.iter().map(|r| r.played).sum();
    assert_eq!(total_played, 12);
}

#[test]
fn test_points_then_goal_difference_decide_order() {
    // Input order deliberately differs from the expected ranking
    let league = teams(&["C", "B", "A", "D", "E"]);
    let (c, b, a, d, e) = (1, 2, 3, 4, 5);
    let results = vec![
        result(1, a, d, 1, 0),
        result(2, a, e, 1, 0),
        result(3, b, d, 5, 0),
        result(4, c, e, 1, 0),
    ];

    let rows = compute_standings(&league, &results);

    assert_eq!(names(&rows), vec!["A", "B", "C", "E", "D"]);
    assert_eq!((rows[0].points, rows[0].goal_difference), (6, 2));
    assert_eq!((rows[1].points, rows[1].goal_difference), (3, 5));
    assert_eq!((rows[2].points, rows[2].goal_difference), (3, 1));
}

#[test]
fn test_goals_for_breaks_goal_difference_tie() {
    let league = teams(&["Low Scoring", "High Scoring", "Opponent"]);
    let results = vec![
        result(1, 1, 3, 1, 0),
        result(2, 2, 3, 3, 2),
    ];
    let rows = compute_standings(&league, &results);

    assert_eq!(names(&rows), vec!["High Scoring", "Low Scoring", "Opponent"]);
}

#[test]
fn test_full_ties_keep_team_order() {
    let league = teams(&["First", "Second", "Third", "Fourth"]);
    let results = vec![
        result(1, 1, 3, 1, 1),
        result(2, 2, 4, 1, 1),
    ];
    let rows = compute_standings(&league, &results);
    assert_eq!(names(&rows), vec!["First", "Second", "Third", "Fourth"]);

    let mut reversed = league.clone();
    reversed.reverse();
    let rows = compute_standings(&reversed, &results);
    assert_eq!(names(&rows), vec!["Fourth", "Third", "Second", "First"]);
}

#[test]
fn test_unplayed_matches_are_ignored() {
    let league = teams(&["A", "B"]);
    let mut scheduled = result(1, 1, 2, 0, 0);
    scheduled.is_played = false;

    let rows = compute_standings(&league, &[scheduled]);
    assert!(rows.iter().all(|r| r.played == 0));
}

#[tokio::test]
async fn test_service_reads_played_matches_from_store() {
    let league = teams(&["Meru Stars", "Kisima FC"]);
    let mut upcoming = result(2, 2, 1, 0, 0);
    upcoming.is_played = false;
    let store = InMemoryStore::with_matches(league, vec![result(1, 1, 2, 0, 2), upcoming]);

    let rows = StandingsService::new(store).get_standings().await.unwrap();

    assert_eq!(names(&rows), vec!["Kisima FC", "Meru Stars"]);
    assert_eq!(rows[0].played, 1);
    assert_eq!(rows[0].wins, 1);
    assert_eq!(rows[1].losses, 1);
}
