use chrono::NaiveDate;
use league_recap::analysis::accumulator::Role;
use league_recap::analysis::build_recap;
use league_recap::analysis::timeline::TrendDirection;
use league_recap::champions::ChampionRoster;
use league_recap::input::models::{MatchDto, MatchInfo, MatchMetadata, ParticipantDto};
use pretty_assertions::assert_eq;

const ME: &str = "puuid-me";

fn ts(date: &str) -> i64 {
    date.parse::<NaiveDate>()
        .unwrap()
        .and_hms_opt(18, 30, 0)
        .unwrap()
        .and_utc()
        .timestamp_millis()
}

struct Fixture {
    id: &'static str,
    date: &'static str,
    champion_id: i32,
    role: &'static str,
    win: bool,
    kda: (u32, u32, u32),
}

fn record(f: &Fixture) -> MatchDto {
    MatchDto {
        metadata: MatchMetadata {
            match_id: f.id.to_string(),
        },
        info: MatchInfo {
            game_creation: ts(f.date),
            game_duration: 1920,
            participants: vec![
                ParticipantDto {
                    puuid: ME.to_string(),
                    champion_id: f.champion_id,
                    team_position: f.role.to_string(),
                    win: f.win,
                    kills: f.kda.0,
                    deaths: f.kda.1,
                    assists: f.kda.2,
                    total_damage_dealt_to_champions: 18_000,
                    total_damage_taken: 22_000,
                    gold_earned: 12_000,
                    total_minions_killed: 180,
                    neutral_minions_killed: 12,
                    vision_score: 30,
                    ..Default::default()
                },
                ParticipantDto {
                    puuid: "enemy".to_string(),
                    champion_id: 64,
                    win: !f.win,
                    ..Default::default()
                },
            ],
        },
    }
}

#[test]
fn ahri_scenario_matches_expected_profile() {
    // 3 games on Ahri, 2 wins, K/D/A totals 10/5/15.
    let fixtures = [
        Fixture { id: "m1", date: "2024-02-01", champion_id: 103, role: "MIDDLE", win: true, kda: (4, 2, 6) },
        Fixture { id: "m2", date: "2024-02-03", champion_id: 103, role: "MIDDLE", win: true, kda: (3, 1, 5) },
        Fixture { id: "m3", date: "2024-02-05", champion_id: 103, role: "MIDDLE", win: false, kda: (3, 2, 4) },
    ];
    let matches: Vec<MatchDto> = fixtures.iter().map(record).collect();

    let recap = build_recap(&matches, ME, &ChampionRoster::builtin());

    assert_eq!(recap.overview.total_games, 3);
    assert_eq!(recap.overview.win_rate, 66.67);
    assert_eq!(recap.overview.kda, 5.0);

    let top = &recap.top_champions[0];
    assert_eq!(top.name, "Ahri");
    assert_eq!(top.games, 3);
    assert_eq!(top.win_rate, 66.7);

    assert_eq!(recap.champion_pool.unique_champions, 1);
    assert_eq!(recap.champion_pool.most_played_percentage, 100.0);
    assert_eq!(recap.favorite_role, Role::Middle);
}

#[test]
fn conservation_holds_across_the_pipeline() {
    let fixtures = [
        Fixture { id: "m1", date: "2024-01-10", champion_id: 103, role: "MIDDLE", win: true, kda: (7, 2, 9) },
        Fixture { id: "m2", date: "2024-01-12", champion_id: 64, role: "JUNGLE", win: false, kda: (2, 5, 8) },
        Fixture { id: "m3", date: "2024-02-01", champion_id: 64, role: "JUNGLE", win: true, kda: (6, 1, 4) },
        Fixture { id: "m4", date: "2024-02-02", champion_id: 22, role: "BOTTOM", win: false, kda: (1, 7, 3) },
    ];
    let matches: Vec<MatchDto> = fixtures.iter().map(record).collect();

    let recap = build_recap(&matches, ME, &ChampionRoster::builtin());

    assert_eq!(recap.overview.wins + recap.overview.losses, recap.overview.total_games);
    assert_eq!(recap.match_history.len() as u32, recap.overview.total_games);

    let bucket_games: u32 = recap.top_champions.iter().map(|c| c.games).sum();
    assert_eq!(bucket_games, recap.overview.total_games);

    let monthly_games: u32 = recap.monthly_trends.iter().map(|t| t.games).sum();
    assert_eq!(monthly_games, recap.overview.total_games);
}

#[test]
fn history_spanning_two_months_buckets_independently() {
    // 2 games in January, 3 in February.
    let fixtures = [
        Fixture { id: "m1", date: "2024-01-05", champion_id: 103, role: "MIDDLE", win: true, kda: (5, 1, 5) },
        Fixture { id: "m2", date: "2024-01-25", champion_id: 103, role: "MIDDLE", win: false, kda: (2, 4, 3) },
        Fixture { id: "m3", date: "2024-02-02", champion_id: 64, role: "JUNGLE", win: true, kda: (7, 2, 9) },
        Fixture { id: "m4", date: "2024-02-10", champion_id: 64, role: "JUNGLE", win: true, kda: (4, 0, 6) },
        Fixture { id: "m5", date: "2024-02-20", champion_id: 64, role: "JUNGLE", win: false, kda: (1, 6, 2) },
    ];
    let matches: Vec<MatchDto> = fixtures.iter().map(record).collect();

    let recap = build_recap(&matches, ME, &ChampionRoster::builtin());

    assert_eq!(recap.monthly_trends.len(), 2);

    let january = &recap.monthly_trends[0];
    assert_eq!(january.month, "2024-01");
    assert_eq!(january.games, 2);
    assert_eq!(january.win_rate, 50.0);
    assert_eq!(january.kda, 3.0); // (7+8)/5

    let february = &recap.monthly_trends[1];
    assert_eq!(february.month, "2024-02");
    assert_eq!(february.games, 3);
    assert_eq!(february.win_rate, 66.7);
    assert_eq!(february.kda, 3.63); // (12+17)/8
}

#[test]
fn five_matches_split_into_one_early_and_one_late() {
    let fixtures = [
        Fixture { id: "m1", date: "2024-01-01", champion_id: 103, role: "MIDDLE", win: false, kda: (1, 5, 2) },
        Fixture { id: "m2", date: "2024-01-02", champion_id: 103, role: "MIDDLE", win: true, kda: (3, 2, 4) },
        Fixture { id: "m3", date: "2024-01-03", champion_id: 103, role: "MIDDLE", win: true, kda: (4, 3, 5) },
        Fixture { id: "m4", date: "2024-01-04", champion_id: 103, role: "MIDDLE", win: false, kda: (2, 4, 3) },
        Fixture { id: "m5", date: "2024-01-05", champion_id: 103, role: "MIDDLE", win: true, kda: (8, 2, 6) },
    ];
    let matches: Vec<MatchDto> = fixtures.iter().map(record).collect();

    let recap = build_recap(&matches, ME, &ChampionRoster::builtin());

    assert_eq!(recap.early_period.games, 1);
    assert_eq!(recap.late_period.games, 1);
    assert_eq!(recap.early_period.win_rate, 0.0);
    assert_eq!(recap.late_period.win_rate, 100.0);
    assert_eq!(recap.growth.win_rate_delta, 100.0);
}

#[test]
fn single_match_produces_empty_windows_without_fault() {
    let fixtures = [Fixture {
        id: "only",
        date: "2024-03-03",
        champion_id: 157,
        role: "MIDDLE",
        win: true,
        kda: (9, 0, 4),
    }];
    let matches: Vec<MatchDto> = fixtures.iter().map(record).collect();

    let recap = build_recap(&matches, ME, &ChampionRoster::builtin());

    assert_eq!(recap.early_period.games, 0);
    assert_eq!(recap.late_period.games, 0);
    assert_eq!(recap.growth.win_rate_delta, 0.0);
    assert_eq!(recap.growth.kda_delta, 0.0);
    // Zero deaths over one game: KDA is kills + assists.
    assert_eq!(recap.overview.kda, 13.0);
    assert_eq!(recap.highlights.longest_game_minutes, recap.highlights.shortest_game_minutes);
}

#[test]
fn chronological_order_drives_recent_window() {
    // Input deliberately newest-first; the pipeline re-sorts ascending.
    let fixtures = [
        Fixture { id: "newest", date: "2024-06-01", champion_id: 103, role: "MIDDLE", win: true, kda: (5, 1, 5) },
        Fixture { id: "middle", date: "2024-04-01", champion_id: 103, role: "MIDDLE", win: false, kda: (2, 3, 2) },
        Fixture { id: "oldest", date: "2024-02-01", champion_id: 103, role: "MIDDLE", win: false, kda: (1, 4, 1) },
    ];
    let matches: Vec<MatchDto> = fixtures.iter().map(record).collect();

    let recap = build_recap(&matches, ME, &ChampionRoster::builtin());

    let ids: Vec<&str> = recap.match_history.iter().map(|e| e.match_id.as_str()).collect();
    assert_eq!(ids, vec!["oldest", "middle", "newest"]);
    assert_eq!(recap.monthly_trends.first().unwrap().month, "2024-02");
    assert_eq!(recap.performance_trend.direction, TrendDirection::Stable);
}
