/// ESPN API raw wire types, serde shapes for deserializing site v2 responses.
/// These map to the clean domain types via the mapping functions in client.rs.
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Scoreboard  (site v2 API)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScoreboardResponse {
    pub events: Option<Vec<EspnEvent>>,
}

/// One scheduled or played game. The single-game scoreboard endpoint
/// (`/scoreboard/{id}`) returns this shape directly, with no wrapper.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnEvent {
    pub id: Option<String>,
    pub name: Option<String>,
    pub date: Option<String>, // ISO 8601
    pub competitions: Option<Vec<EspnCompetition>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnCompetition {
    pub competitors: Option<Vec<EspnCompetitor>>,
    pub status: Option<EspnStatus>,
    /// Live in-game state; baseball only, and only while a game is underway.
    pub situation: Option<EspnSituation>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnStatus {
    pub clock: Option<f64>,
    #[serde(rename = "displayClock")]
    pub display_clock: Option<String>,
    pub period: Option<u8>,
    #[serde(rename = "type")]
    pub status_type: Option<EspnStatusType>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnStatusType {
    pub name: Option<String>, // "STATUS_SCHEDULED", "STATUS_IN_PROGRESS", ...
    #[serde(rename = "shortDetail")]
    pub short_detail: Option<String>, // "Bot 2nd", "Final", "6/14 - 7:10 PM EDT"
    pub completed: Option<bool>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EspnCompetitor {
    pub id: Option<String>,
    #[serde(rename = "homeAway")]
    pub home_away: Option<String>, // "home" | "away"
    pub team: Option<EspnTeam>,
    pub score: Option<String>, // ESPN sends scores as strings
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EspnTeam {
    pub id: Option<String>,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    #[serde(rename = "shortDisplayName")]
    pub short_display_name: Option<String>,
    pub abbreviation: Option<String>,
    pub location: Option<String>,
    pub color: Option<String>, // bare hex digits, no leading '#'
}

// ---------------------------------------------------------------------------
// Baseball situation  (nested in EspnCompetition while a game is live)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EspnSituation {
    pub balls: Option<u8>,
    pub strikes: Option<u8>,
    pub outs: Option<u8>,
    #[serde(rename = "onFirst")]
    pub on_first: Option<bool>,
    #[serde(rename = "onSecond")]
    pub on_second: Option<bool>,
    #[serde(rename = "onThird")]
    pub on_third: Option<bool>,
    pub pitcher: Option<EspnSituationPlayer>,
    pub batter: Option<EspnSituationPlayer>,
    #[serde(rename = "dueUp")]
    pub due_up: Option<Vec<EspnSituationPlayer>>,
}

/// Player reference inside a situation. The stat line ("2-3, HR") sits on
/// this wrapper, the display name one level down on the athlete.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct EspnSituationPlayer {
    pub athlete: Option<EspnAthlete>,
    pub summary: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EspnAthlete {
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
}

// ---------------------------------------------------------------------------
// Team list  (site v2 API, /teams)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct TeamsResponse {
    pub sports: Option<Vec<EspnSportListing>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnSportListing {
    pub leagues: Option<Vec<EspnLeagueListing>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnLeagueListing {
    pub teams: Option<Vec<EspnTeamListing>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnTeamListing {
    pub team: Option<EspnTeam>,
}

// ---------------------------------------------------------------------------
// Team schedule  (site v2 API, /teams/{id})
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct TeamScheduleResponse {
    pub team: Option<EspnTeamSchedule>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnTeamSchedule {
    #[serde(rename = "nextEvent")]
    pub next_event: Option<Vec<EspnEvent>>,
}
