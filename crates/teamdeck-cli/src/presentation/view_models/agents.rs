use serde::Serialize;
use teamdeck_engine::AgentHealth;

#[derive(Debug, Serialize)]
pub struct AgentListViewModel {
    pub agents: Vec<AgentHealth>,
}
