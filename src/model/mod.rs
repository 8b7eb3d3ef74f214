// src/model/mod.rs

//! Domain model: tasks, developers, roles and the duty calendar.

pub mod calendar;
pub mod developer;
pub mod task;

pub use calendar::{Calendar, DutyKind, DutyPeriod, ZERO_DATE};
pub use developer::{Developer, Role, RoleTable};
pub use task::{Assignment, Task, TaskOrigin};
