pub mod client;
pub mod espn;
pub mod sport;

use chrono::{DateTime, Utc};

pub use crate::sport::{League, Sport};

// ---------------------------------------------------------------------------
// Domain types — clean model, independent of the ESPN wire format
// ---------------------------------------------------------------------------

/// Immutable snapshot of one game, taken at fetch time.
#[derive(Debug, Clone)]
pub struct GameEvent {
    pub id: String,
    pub name: String, // "New York Yankees at Boston Red Sox"
    pub date: Option<DateTime<Utc>>,
    pub home_team: TeamInfo,
    pub away_team: TeamInfo,
    pub state: EventState,
    pub sport: Sport,
    pub league: League,
    pub timing: TimingInfo,
}

#[derive(Debug, Clone, Default)]
pub struct TeamInfo {
    pub id: String,
    pub name: String,         // "Red Sox"
    pub abbreviation: String, // "BOS"
    pub full_name: String,    // "Boston Red Sox"
    pub location: String,     // "Boston"
    /// Derived asset key, `{league}-{abbreviation}.png`, always lowercase.
    pub logo: String,
    /// Hex color with a leading '#'. The raw value is passed through as-is.
    pub color: String,
}

#[derive(Debug, Clone, Default)]
pub struct TimingInfo {
    pub clock: f64, // seconds remaining in the period
    pub display_clock: String,
    pub period: u8,
}

/// Score record shared by every sport.
#[derive(Debug, Clone)]
pub struct GeneralScoreInfo {
    pub event: GameEvent,
    pub home_score: u16,
    pub away_score: u16,
    /// Free-text status line from the provider ("Bot 2nd", "Final").
    pub status_detail: String,
}

/// Baseball score record: the general record plus situational state.
/// Situational fields hold zeroed/empty defaults unless the game is live.
#[derive(Debug, Clone)]
pub struct BaseballScoreInfo {
    pub general: GeneralScoreInfo,
    pub on_first: bool,
    pub on_second: bool,
    pub on_third: bool,
    pub balls: u8,
    pub strikes: u8,
    pub outs: u8,
    pub pitcher: String,
    pub batter: String,
    pub pitcher_summary: String, // "5.2 IP, 2 ER"
    pub batter_summary: String,  // "2-3, HR"
    pub inning: u8,
    pub inning_half: InningHalf,
    pub due_up: String, // next batter's display name
}

/// What a scoreboard fetch yields for one event. Baseball leagues always get
/// the extended record, every other sport the general one.
#[derive(Debug, Clone)]
pub enum GameScore {
    General(GeneralScoreInfo),
    Baseball(BaseballScoreInfo),
}

impl GameScore {
    /// The general record, whichever variant this is.
    pub fn general(&self) -> &GeneralScoreInfo {
        match self {
            GameScore::General(info) => info,
            GameScore::Baseball(info) => &info.general,
        }
    }

    pub fn event(&self) -> &GameEvent {
        &self.general().event
    }

    pub fn is_live(&self) -> bool {
        self.event().state == EventState::Live
    }
}

/// Lifecycle state of an event, mapped from the provider's status-type name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EventState {
    #[default]
    Unknown,
    Pre,
    Live,
    Final,
    Delayed,
}

impl EventState {
    pub fn label(&self) -> &'static str {
        match self {
            EventState::Pre => "Scheduled",
            EventState::Live => "In Progress",
            EventState::Final => "Final",
            EventState::Delayed => "Delayed",
            EventState::Unknown => "",
        }
    }
}

/// Half-inning marker, parsed from the provider's short-detail string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InningHalf {
    #[default]
    Unknown,
    Top,
    Bottom,
    Mid,
    End,
}

/// Ordinal label for a period number ("1st" through "4th"); higher numbers
/// fall through to the bare number.
// TODO: overtime labels ("OT", "2OT") once a display surface needs them
pub fn period_ordinal(period: u8) -> String {
    match period {
        1 => "1st".to_owned(),
        2 => "2nd".to_owned(),
        3 => "3rd".to_owned(),
        4 => "4th".to_owned(),
        _ => period.to_string(),
    }
}
