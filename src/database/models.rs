use chrono::NaiveDateTime;

#[derive(Debug, Clone)]
pub struct Player {
    pub id: i32,
    pub name: String,
    pub wins: i32,
    pub losses: i32,
    pub created_at: Option<NaiveDateTime>,
}

/// Row shape of the `standings` view, in view order.
#[derive(Debug, Clone)]
pub struct StandingsRow {
    pub id: i32,
    pub name: String,
    pub wins: i32,
    pub losses: i32,
}
