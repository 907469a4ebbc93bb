use lift_core::LiftError;
use lift_schedule::ScheduleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Lift(#[from] LiftError),

    #[error("call plan error: {0}")]
    Schedule(#[from] ScheduleError),
}

pub type SimResult<T> = Result<T, SimError>;
