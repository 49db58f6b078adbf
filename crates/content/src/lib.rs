//! Static content for the vitae terminal portfolio.
//!
//! The data is defined once at build time and immutable for the session:
//! skill categories with proficiency levels, a technology tag list, and a
//! row of achievement statistics.

pub mod model;
pub mod profile;

pub use model::{ColorToken, Icon, Skill, SkillCategory, SkillsSection, Stat};
