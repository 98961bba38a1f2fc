use crate::champions::ChampionRoster;
use crate::input::models::MatchDto;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Sentinel kept verbatim in history entries when a record carries no
/// recognizable position.
pub const UNKNOWN_ROLE: &str = "UNKNOWN";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Top,
    Jungle,
    Middle,
    Bottom,
    Utility,
}

impl Role {
    /// Enumeration order doubles as the tie-break order for favorite-role
    /// selection.
    pub const ALL: [Role; 5] = [
        Role::Top,
        Role::Jungle,
        Role::Middle,
        Role::Bottom,
        Role::Utility,
    ];

    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "TOP" => Some(Role::Top),
            "JUNGLE" => Some(Role::Jungle),
            "MIDDLE" => Some(Role::Middle),
            "BOTTOM" => Some(Role::Bottom),
            "UTILITY" => Some(Role::Utility),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Top => "TOP",
            Role::Jungle => "JUNGLE",
            Role::Middle => "MIDDLE",
            Role::Bottom => "BOTTOM",
            Role::Utility => "UTILITY",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Game counts per fixed role slot. Unrecognized roles increment nothing.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct RoleDistribution {
    pub top: u32,
    pub jungle: u32,
    pub middle: u32,
    pub bottom: u32,
    pub utility: u32,
}

impl RoleDistribution {
    pub fn record(&mut self, role: Role) {
        match role {
            Role::Top => self.top += 1,
            Role::Jungle => self.jungle += 1,
            Role::Middle => self.middle += 1,
            Role::Bottom => self.bottom += 1,
            Role::Utility => self.utility += 1,
        }
    }

    pub fn count(&self, role: Role) -> u32 {
        match role {
            Role::Top => self.top,
            Role::Jungle => self.jungle,
            Role::Middle => self.middle,
            Role::Bottom => self.bottom,
            Role::Utility => self.utility,
        }
    }

    /// Highest-count role. Ties resolve to the earliest entry in
    /// enumeration order, so an all-zero distribution yields TOP.
    pub fn favorite(&self) -> Role {
        let mut best = Role::Top;
        for role in Role::ALL {
            if self.count(role) > self.count(best) {
                best = role;
            }
        }
        best
    }

    pub fn roles_played(&self) -> usize {
        Role::ALL.iter().filter(|r| self.count(**r) > 0).count()
    }
}

/// Per-champion running totals across the player's history.
#[derive(Debug, Clone, Default)]
pub struct ChampionBucket {
    pub games: u32,
    pub wins: u32,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub damage: u64,
}

/// One normalized summary per processed match.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub match_id: String,
    pub champion: String,
    pub role: String,
    pub win: bool,
    /// Literal "K/D/A" triple, re-parsed exactly by the time-series pass.
    pub kda: String,
    pub duration_minutes: i64,
    pub date: NaiveDate,
}

/// Everything the single scan over the record sequence produces. The history
/// list is in input order; chronological ordering is derived later as an
/// explicit step, not by mutating this struct.
#[derive(Debug, Default)]
pub struct RecapTotals {
    pub total_games: u32,
    pub wins: u32,
    pub losses: u32,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub damage_dealt: u64,
    pub damage_taken: u64,
    pub gold_earned: u64,
    pub minions_killed: u64,
    pub vision_score: u64,
    pub penta_kills: u32,
    pub quadra_kills: u32,
    pub triple_kills: u32,
    pub double_kills: u32,
    pub first_bloods: u32,
    pub longest_game_secs: i64,
    /// Stays at `i64::MAX` until the first processed game so a single game
    /// becomes both longest and shortest.
    pub shortest_game_secs: i64,
    pub total_game_secs: i64,
    pub champions: BTreeMap<String, ChampionBucket>,
    pub roles: RoleDistribution,
    pub history: Vec<HistoryEntry>,
}

/// Scan every match once and fold the target participant's contribution into
/// running totals. Records without the target participant are skipped.
pub fn accumulate(matches: &[MatchDto], puuid: &str, roster: &ChampionRoster) -> RecapTotals {
    let mut totals = RecapTotals {
        shortest_game_secs: i64::MAX,
        ..Default::default()
    };

    for record in matches {
        let Some(p) = record.info.participants.iter().find(|p| p.puuid == puuid) else {
            continue;
        };

        let champion = roster.name_for(p.champion_id);
        let role = if !p.team_position.is_empty() {
            p.team_position.clone()
        } else if !p.individual_position.is_empty() {
            p.individual_position.clone()
        } else {
            UNKNOWN_ROLE.to_string()
        };
        let duration = record.info.game_duration;

        totals.total_games += 1;
        if p.win {
            totals.wins += 1;
        } else {
            totals.losses += 1;
        }

        totals.kills += p.kills;
        totals.deaths += p.deaths;
        totals.assists += p.assists;
        totals.damage_dealt += p.total_damage_dealt_to_champions;
        totals.damage_taken += p.total_damage_taken;
        totals.gold_earned += p.gold_earned;
        totals.minions_killed += (p.total_minions_killed + p.neutral_minions_killed) as u64;
        totals.vision_score += p.vision_score as u64;

        totals.penta_kills += p.penta_kills;
        totals.quadra_kills += p.quadra_kills;
        totals.triple_kills += p.triple_kills;
        totals.double_kills += p.double_kills;
        if p.first_blood_kill {
            totals.first_bloods += 1;
        }

        totals.longest_game_secs = totals.longest_game_secs.max(duration);
        totals.shortest_game_secs = totals.shortest_game_secs.min(duration);
        totals.total_game_secs += duration;

        let bucket = totals.champions.entry(champion.clone()).or_default();
        bucket.games += 1;
        if p.win {
            bucket.wins += 1;
        }
        bucket.kills += p.kills;
        bucket.deaths += p.deaths;
        bucket.assists += p.assists;
        bucket.damage += p.total_damage_dealt_to_champions;

        if let Some(slot) = Role::parse(&role) {
            totals.roles.record(slot);
        }

        totals.history.push(HistoryEntry {
            match_id: record.metadata.match_id.clone(),
            champion,
            role,
            win: p.win,
            kda: format!("{}/{}/{}", p.kills, p.deaths, p.assists),
            duration_minutes: duration / 60,
            date: creation_date(record.info.game_creation),
        });
    }

    totals
}

/// Calendar day (UTC) for an epoch-millisecond timestamp. An out-of-range
/// timestamp falls back to the epoch date.
fn creation_date(millis: i64) -> NaiveDate {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|dt| dt.date_naive())
        .unwrap_or_default()
}
