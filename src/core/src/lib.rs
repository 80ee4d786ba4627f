pub mod staff;
pub mod training;
pub mod utils;

pub use staff::{Certificate, Coach, Experience};
pub use training::{
    ActivityCategory, AgendaCell, CompiledActivity, GroupAssignment, GroupAssignments, GroupFlags,
    GroupSelector, LiveStatus, LiveStatusClassifier, PlanValidationError, PositionGroup,
    ScheduleCompiler, TimeSlot, TrainingActivity, TrainingPlan, UnknownCategoryError,
    UnknownGroupError, reduce_agenda_cells,
};
