//! Course sidebar data: the activity index and the teacher roster.

mod modules;
mod roster;

pub use modules::{RESOURCES_KEY, ModuleLink, course_module_index};
pub use roster::{TEACHER_ROLE, Teacher, teacher_roster};
