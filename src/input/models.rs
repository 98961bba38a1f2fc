use serde::Deserialize;

// Match V5 shaped records. Every numeric field defaults to zero so that a
// sparsely populated record still aggregates instead of failing
// deserialization.

#[derive(Debug, Deserialize, Clone, Default)]
pub struct MatchDto {
    #[serde(default)]
    pub metadata: MatchMetadata,
    #[serde(default)]
    pub info: MatchInfo,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct MatchMetadata {
    #[serde(default)]
    pub match_id: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    /// Epoch milliseconds.
    #[serde(default)]
    pub game_creation: i64,
    /// Seconds.
    #[serde(default)]
    pub game_duration: i64,
    #[serde(default)]
    pub participants: Vec<ParticipantDto>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    #[serde(default)]
    pub puuid: String,
    #[serde(default)]
    pub champion_id: i32,
    #[serde(default)]
    pub team_position: String, // TOP, JUNGLE, MIDDLE, BOTTOM, UTILITY
    #[serde(default)]
    pub individual_position: String,
    #[serde(default)]
    pub win: bool,
    #[serde(default)]
    pub kills: u32,
    #[serde(default)]
    pub deaths: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub total_damage_dealt_to_champions: u64,
    #[serde(default)]
    pub total_damage_taken: u64,
    #[serde(default)]
    pub gold_earned: u64,
    #[serde(default)]
    pub total_minions_killed: u32,
    #[serde(default)]
    pub neutral_minions_killed: u32,
    #[serde(default)]
    pub vision_score: u32,
    #[serde(default)]
    pub penta_kills: u32,
    #[serde(default)]
    pub quadra_kills: u32,
    #[serde(default)]
    pub triple_kills: u32,
    #[serde(default)]
    pub double_kills: u32,
    #[serde(default)]
    pub first_blood_kill: bool,
}
