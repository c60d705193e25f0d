mod activity;
mod agent;
mod ids;
mod lane;
mod range;
mod task;
mod workload;

pub use activity::{ActivityKind, ActivityRecord, ShiftTypeCount};
pub use agent::{Agent, AgentStatus, HealthStatus};
pub use ids::{AgentId, TaskId};
pub use lane::Lane;
pub use range::DateRange;
pub use task::{Priority, Task, TaskHistoryEvent, TaskStatus};
pub use workload::{
    AggregateAgentRecord, CountField, DailyShiftRow, DailySwapRow, SwapCountRow, SwapStatus,
    TaskProductivityRecord, TaskWorkloadRecord, WorkloadRecord,
};
