use teamdeck_engine::AgentHealth;
use teamdeck_runtime::BoardSnapshot;

use crate::presentation::view_models::{AgentListViewModel, BoardViewModel};

pub fn present_board(snapshot: BoardSnapshot) -> BoardViewModel {
    BoardViewModel {
        board: snapshot.board,
        agents: snapshot.agents,
        durations: snapshot.durations,
    }
}

pub fn present_roster(agents: Vec<AgentHealth>) -> AgentListViewModel {
    AgentListViewModel { agents }
}
