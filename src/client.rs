use crate::espn::{
    EspnCompetition, EspnCompetitor, EspnEvent, EspnStatus, EspnTeam, ScoreboardResponse,
    TeamScheduleResponse, TeamsResponse,
};
use crate::sport::{League, Sport};
use crate::{
    BaseballScoreInfo, EventState, GameEvent, GameScore, GeneralScoreInfo, InningHalf, TeamInfo,
    TimingInfo,
};
use chrono::Utc;
use log::{debug, warn};
use reqwest::Client;
use std::fmt;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

const ESPN_SITE_V2: &str = "https://site.api.espn.com/apis/site/v2/sports";

/// Scoreboard client backed by ESPN's public site endpoints.
#[derive(Debug, Clone)]
pub struct EspnApi {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl Default for EspnApi {
    fn default() -> Self {
        Self {
            client: Client::builder()
                .user_agent("espn-api/0.1 (live scoreboard client)")
                .build()
                .unwrap_or_default(),
            base_url: ESPN_SITE_V2.to_owned(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    Api(reqwest::Error, String),
    Parsing(reqwest::Error, String),
    NotFound(String),
    Other(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Api(e, url) => write!(f, "API error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
            ApiError::NotFound(msg) => write!(f, "Not found: {msg}"),
            ApiError::Other(msg) => write!(f, "Error: {msg}"),
        }
    }
}

impl EspnApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at a different base URL (tests, proxies).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), ..Self::default() }
    }

    /// Fetch every event on the league's scoreboard, one score record per
    /// event. Baseball leagues yield the extended record.
    pub async fn fetch_active_games(&self, league: League) -> ApiResult<Vec<GameScore>> {
        let sport = league.sport();
        let url = format!("{}/{}/{}/scoreboard", self.base_url, sport.slug(), league.code());
        let raw: ScoreboardResponse = self.get(&url).await?;
        let games = raw
            .events
            .unwrap_or_default()
            .iter()
            .map(|event| map_score(event, league, sport))
            .collect();
        Ok(games)
    }

    /// Fetch the team's next scheduled event from its club page payload.
    /// A team with nothing on the schedule is `NotFound`.
    pub async fn fetch_next_event_for_team(
        &self,
        team_id: &str,
        league: League,
    ) -> ApiResult<GameEvent> {
        let sport = league.sport();
        let url = format!("{}/{}/{}/teams/{team_id}", self.base_url, sport.slug(), league.code());
        let raw: TeamScheduleResponse = self.get(&url).await?;
        let event = raw
            .team
            .and_then(|team| team.next_event)
            .and_then(|events| events.into_iter().next())
            .ok_or_else(|| ApiError::NotFound(format!("no upcoming event for team {team_id}")))?;
        Ok(map_event(&event, league, sport))
    }

    /// Fetch the score record for a single game. `Ok(None)` when the
    /// scoreboard has no such event.
    pub async fn fetch_score_for_game(
        &self,
        game_id: &str,
        league: League,
    ) -> ApiResult<Option<GameScore>> {
        let sport = league.sport();
        let url =
            format!("{}/{}/{}/scoreboard/{game_id}", self.base_url, sport.slug(), league.code());
        // The single-game endpoint returns the event object itself.
        let raw: EspnEvent = self.get(&url).await?;
        if raw.id.is_none() {
            return Ok(None);
        }
        Ok(Some(map_score(&raw, league, sport)))
    }

    /// Fetch the league's full team list.
    pub async fn fetch_all_teams(&self, league: League) -> ApiResult<Vec<TeamInfo>> {
        let sport = league.sport();
        let url = format!("{}/{}/{}/teams", self.base_url, sport.slug(), league.code());
        let raw: TeamsResponse = self.get(&url).await?;
        let teams = raw
            .sports
            .unwrap_or_default()
            .into_iter()
            .flat_map(|listing| listing.leagues.unwrap_or_default())
            .flat_map(|listing| listing.teams.unwrap_or_default())
            .filter_map(|entry| entry.team)
            .map(|team| map_team(league, &team))
            .collect();
        Ok(teams)
    }

    async fn get<T: Default + serde::de::DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                warn!("request failed for {url}: {e}");
                ApiError::Network(e, url.to_owned())
            })?;

        match response.error_for_status() {
            Ok(res) => res.json::<T>().await.map_err(|e| {
                warn!("unparseable response from {url}: {e}");
                ApiError::Parsing(e, url.to_owned())
            }),
            Err(e) => {
                // A missing resource is the empty case, not a transport error.
                if e.status().map(|s| s.is_client_error()).unwrap_or(false) {
                    Ok(T::default())
                } else {
                    warn!("api error from {url}: {e}");
                    Err(ApiError::Api(e, url.to_owned()))
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Mapping: ESPN wire types → clean domain types
// ---------------------------------------------------------------------------

fn map_score(event: &EspnEvent, league: League, sport: Sport) -> GameScore {
    let competition = event.competitions.as_deref().unwrap_or_default().first();
    let competitors = competition.and_then(|c| c.competitors.as_deref()).unwrap_or_default();

    let general = GeneralScoreInfo {
        event: map_event(event, league, sport),
        home_score: parse_score(find_side(competitors, "home")),
        away_score: parse_score(find_side(competitors, "away")),
        status_detail: competition.map(short_detail).unwrap_or_default(),
    };

    if sport.is_baseball() {
        GameScore::Baseball(map_baseball(general, competition))
    } else {
        GameScore::General(general)
    }
}

fn map_event(event: &EspnEvent, league: League, sport: Sport) -> GameEvent {
    let competition = event.competitions.as_deref().unwrap_or_default().first();
    let competitors = competition.and_then(|c| c.competitors.as_deref()).unwrap_or_default();

    let home_team = find_side(competitors, "home")
        .and_then(|c| c.team.as_ref())
        .map(|team| map_team(league, team))
        .unwrap_or_default();
    let away_team = find_side(competitors, "away")
        .and_then(|c| c.team.as_ref())
        .map(|team| map_team(league, team))
        .unwrap_or_default();

    let date = event
        .date
        .as_deref()
        .and_then(|d| chrono::DateTime::parse_from_rfc3339(d).ok())
        .map(|dt| dt.with_timezone(&Utc));

    let timing =
        competition.and_then(|c| c.status.as_ref()).map(map_timing).unwrap_or_default();

    GameEvent {
        id: event.id.clone().unwrap_or_default(),
        name: event.name.clone().unwrap_or_default(),
        date,
        home_team,
        away_team,
        state: parse_event_state(event),
        sport,
        league,
        timing,
    }
}

fn map_team(league: League, team: &EspnTeam) -> TeamInfo {
    let abbreviation = team.abbreviation.clone().unwrap_or_default();
    TeamInfo {
        id: team.id.clone().unwrap_or_default(),
        name: team.short_display_name.clone().unwrap_or_default(),
        full_name: team.display_name.clone().unwrap_or_default(),
        location: team.location.clone().unwrap_or_default(),
        logo: format!("{}-{}.png", league.code(), abbreviation.to_lowercase()),
        color: format!("#{}", team.color.as_deref().unwrap_or_default()),
        abbreviation,
    }
}

fn map_timing(status: &EspnStatus) -> TimingInfo {
    TimingInfo {
        clock: status.clock.unwrap_or_default(),
        display_clock: status.display_clock.clone().unwrap_or_default(),
        period: status.period.unwrap_or_default(),
    }
}

fn map_baseball(
    general: GeneralScoreInfo,
    competition: Option<&EspnCompetition>,
) -> BaseballScoreInfo {
    let situation = competition.and_then(|c| c.situation.as_ref());

    let due_up = situation
        .and_then(|s| s.due_up.as_deref())
        .and_then(|players| players.first())
        .map(player_name)
        .unwrap_or_default();

    let mut info = BaseballScoreInfo {
        inning: parse_inning(&general.status_detail),
        inning_half: parse_inning_half(&general.status_detail),
        due_up,
        on_first: false,
        on_second: false,
        on_third: false,
        balls: 0,
        strikes: 0,
        outs: 0,
        pitcher: String::new(),
        batter: String::new(),
        pitcher_summary: String::new(),
        batter_summary: String::new(),
        general,
    };

    // Count and runner state are only meaningful mid-game.
    if info.general.event.state == EventState::Live
        && let Some(situation) = situation
    {
        info.on_first = situation.on_first.unwrap_or_default();
        info.on_second = situation.on_second.unwrap_or_default();
        info.on_third = situation.on_third.unwrap_or_default();
        info.balls = situation.balls.unwrap_or_default();
        info.strikes = situation.strikes.unwrap_or_default();
        info.outs = situation.outs.unwrap_or_default();
        info.pitcher = situation.pitcher.as_ref().map(player_name).unwrap_or_default();
        info.batter = situation.batter.as_ref().map(player_name).unwrap_or_default();
        info.pitcher_summary = player_summary(situation.pitcher.as_ref());
        info.batter_summary = player_summary(situation.batter.as_ref());
    }

    info
}

fn player_name(player: &crate::espn::EspnSituationPlayer) -> String {
    player
        .athlete
        .as_ref()
        .and_then(|athlete| athlete.display_name.clone())
        .unwrap_or_default()
}

fn player_summary(player: Option<&crate::espn::EspnSituationPlayer>) -> String {
    player.and_then(|p| p.summary.clone()).unwrap_or_default()
}

fn find_side<'a>(competitors: &'a [EspnCompetitor], side: &str) -> Option<&'a EspnCompetitor> {
    competitors.iter().find(|c| c.home_away.as_deref() == Some(side))
}

fn parse_score(competitor: Option<&EspnCompetitor>) -> u16 {
    competitor
        .and_then(|c| c.score.as_ref())
        .and_then(|score| score.parse::<u16>().ok())
        .unwrap_or_default()
}

fn short_detail(competition: &EspnCompetition) -> String {
    competition
        .status
        .as_ref()
        .and_then(|s| s.status_type.as_ref())
        .and_then(|t| t.short_detail.clone())
        .unwrap_or_default()
}

fn parse_event_state(event: &EspnEvent) -> EventState {
    let name = event
        .competitions
        .as_deref()
        .unwrap_or_default()
        .first()
        .and_then(|c| c.status.as_ref())
        .and_then(|s| s.status_type.as_ref())
        .and_then(|t| t.name.as_deref());

    match name {
        Some("STATUS_SCHEDULED") => EventState::Pre,
        Some("STATUS_IN_PROGRESS") => EventState::Live,
        Some("STATUS_FINAL") => EventState::Final,
        Some("STATUS_DELAYED") | Some("STATUS_RAIN_DELAY") => EventState::Delayed,
        _ => EventState::Unknown,
    }
}

/// First run of digits in the short-detail string; 0 when there is none.
// TODO: the provider carries a structured situation.inning field, switch to
// it once the display contract no longer depends on the string form
fn parse_inning(detail: &str) -> u8 {
    let digits: String = detail
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or_default()
}

fn parse_inning_half(detail: &str) -> InningHalf {
    if detail.contains("Top") {
        InningHalf::Top
    } else if detail.contains("Bot") {
        InningHalf::Bottom
    } else if detail.contains("End") {
        InningHalf::End
    } else if detail.contains("Mid") {
        InningHalf::Mid
    } else {
        InningHalf::Unknown
    }
}
