use sokoban_engine::core::{GameChangeType, LevelStats, LevelStatus, Map};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    LevelSelect,
    Playing,
}

pub struct LevelSelectRenderState<'a> {
    pub directory: String,
    pub level_names: &'a [String],
    pub selected: Option<usize>,
    pub preview: Option<&'a Map>,
    pub message: Option<String>,
}

pub struct GameRenderState<'a> {
    pub map: &'a Map,
    pub stats: LevelStats,
    pub elapsed: String,
    pub status: LevelStatus,
    pub has_next: bool,
    pub error: Option<String>,
    pub last_change: Option<GameChangeType>,
}
