/// League and sport tags for ESPN's site API URL scheme.
/// Every league code maps to exactly one sport category; both sides of the
/// pair appear as path segments in scoreboard/team URLs.
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum League {
    Mlb,
    CollegeBaseball,
    Nfl,
    CollegeFootball,
    Nba,
    Wnba,
    MensCollegeBasketball,
    WomensCollegeBasketball,
    Nhl,
    Mls,
    PremierLeague,
}

impl League {
    /// The short code ESPN uses in URLs ("mlb", "nfl", "eng.1", ...).
    pub fn code(&self) -> &'static str {
        match self {
            League::Mlb => "mlb",
            League::CollegeBaseball => "college-baseball",
            League::Nfl => "nfl",
            League::CollegeFootball => "college-football",
            League::Nba => "nba",
            League::Wnba => "wnba",
            League::MensCollegeBasketball => "mens-college-basketball",
            League::WomensCollegeBasketball => "womens-college-basketball",
            League::Nhl => "nhl",
            League::Mls => "usa.1",
            League::PremierLeague => "eng.1",
        }
    }

    /// Parse a league code string. Unknown codes are None, never a panic.
    pub fn from_code(code: &str) -> Option<League> {
        match code {
            "mlb" => Some(League::Mlb),
            "college-baseball" => Some(League::CollegeBaseball),
            "nfl" => Some(League::Nfl),
            "college-football" => Some(League::CollegeFootball),
            "nba" => Some(League::Nba),
            "wnba" => Some(League::Wnba),
            "mens-college-basketball" => Some(League::MensCollegeBasketball),
            "womens-college-basketball" => Some(League::WomensCollegeBasketball),
            "nhl" => Some(League::Nhl),
            "usa.1" => Some(League::Mls),
            "eng.1" => Some(League::PremierLeague),
            _ => None,
        }
    }

    /// The sport category the league belongs to.
    pub fn sport(&self) -> Sport {
        match self {
            League::Mlb | League::CollegeBaseball => Sport::Baseball,
            League::Nfl | League::CollegeFootball => Sport::Football,
            League::Nba
            | League::Wnba
            | League::MensCollegeBasketball
            | League::WomensCollegeBasketball => Sport::Basketball,
            League::Nhl => Sport::Hockey,
            League::Mls | League::PremierLeague => Sport::Soccer,
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sport {
    Baseball,
    Football,
    Basketball,
    Hockey,
    Soccer,
}

impl Sport {
    /// The URL path segment for the sport ("baseball", "hockey", ...).
    pub fn slug(&self) -> &'static str {
        match self {
            Sport::Baseball => "baseball",
            Sport::Football => "football",
            Sport::Basketball => "basketball",
            Sport::Hockey => "hockey",
            Sport::Soccer => "soccer",
        }
    }

    /// Baseball games carry extra situational state (runners, count, outs).
    pub fn is_baseball(&self) -> bool {
        self.slug().contains("baseball")
    }

    /// What the sport calls a scoring period, for display.
    pub fn period_label(&self) -> &'static str {
        match self {
            Sport::Football | Sport::Basketball => "Quarter",
            Sport::Soccer => "Half",
            Sport::Hockey | Sport::Baseball => "Period",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
