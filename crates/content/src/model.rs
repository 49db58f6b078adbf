use serde::{Deserialize, Serialize};

/// Symbolic icon attached to a skill category. Glyph mapping is a
/// presentation concern and lives in the TUI theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Icon {
    Code,
    Smartphone,
    GitBranch,
    Database,
}

/// Abstract color reference resolved to a concrete style by the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorToken {
    Primary,
    Accent,
}

/// A single skill with a proficiency level in percent (0-100).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub color: ColorToken,
}

/// A titled group of skills rendered as one card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub icon: Icon,
    pub color: ColorToken,
    pub skills: Vec<Skill>,
}

/// An achievement statistic.
///
/// `number` is a display string and may carry a trailing qualifier such as
/// `"+"` or `"h+"`; `label` may contain an embedded `'\n'` which splits it
/// over multiple lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub number: String,
    pub label: String,
}

/// The complete "Skills & Expertise" section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillsSection {
    /// Navigation anchor identifying the section.
    pub anchor: String,
    pub title: String,
    pub subtitle: String,
    pub categories: Vec<SkillCategory>,
    pub technologies: Vec<String>,
    pub stats: Vec<Stat>,
}

impl Stat {
    /// Split the display string into its numeric prefix and qualifier
    /// suffix. `"2000+"` yields `(Some(2000), "+")`; a string with no
    /// leading digits yields `(None, full string)`.
    pub fn numeric_parts(&self) -> (Option<u64>, &str) {
        let digits_end = self
            .number
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(self.number.len());
        let (digits, suffix) = self.number.split_at(digits_end);
        match digits.parse::<u64>() {
            Ok(value) => (Some(value), suffix),
            Err(_) => (None, &self.number),
        }
    }

    /// Label split on embedded line breaks.
    pub fn label_lines(&self) -> impl Iterator<Item = &str> {
        self.label.split('\n')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(number: &str, label: &str) -> Stat {
        Stat {
            number: number.into(),
            label: label.into(),
        }
    }

    #[test]
    fn numeric_parts_with_plain_qualifier() {
        let s = stat("15+", "Projects Completed");
        let (value, suffix) = s.numeric_parts();
        assert_eq!(value, Some(15));
        assert_eq!(suffix, "+");
    }

    #[test]
    fn numeric_parts_with_unit_qualifier() {
        let s = stat("1000h+", "Hours of Coding");
        let (value, suffix) = s.numeric_parts();
        assert_eq!(value, Some(1000));
        assert_eq!(suffix, "h+");
    }

    #[test]
    fn numeric_parts_without_digits() {
        let s = stat("many", "Things");
        let (value, suffix) = s.numeric_parts();
        assert_eq!(value, None);
        assert_eq!(suffix, "many");
    }

    #[test]
    fn numeric_parts_bare_number() {
        let s = stat("42", "Answers");
        let (value, suffix) = s.numeric_parts();
        assert_eq!(value, Some(42));
        assert_eq!(suffix, "");
    }

    #[test]
    fn label_lines_split_on_newline() {
        let s = stat("2000+", "Code Commits\nSince 2024");
        let lines: Vec<&str> = s
            .label_lines()
            .collect();
        assert_eq!(lines, vec!["Code Commits", "Since 2024"]);
    }

    #[test]
    fn section_round_trips_through_json() {
        let section = crate::profile::skills_section();
        let json = match serde_json::to_string(&section) {
            Ok(json) => json,
            Err(error) => panic!("serialize failed: {error}"),
        };
        let back: SkillsSection = match serde_json::from_str(&json) {
            Ok(back) => back,
            Err(error) => panic!("deserialize failed: {error}"),
        };
        assert_eq!(back, section);
    }
}
