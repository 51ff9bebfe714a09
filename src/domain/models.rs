/// One row of the computed standings, best record first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStanding {
    pub id: i32,
    pub name: String,
    pub wins: i32,
    pub matches_played: i32,
}

/// Two adjacent players from the standings, matched for the next round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
    pub first_id: i32,
    pub first_name: String,
    pub second_id: i32,
    pub second_name: String,
}
