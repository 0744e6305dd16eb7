//! Static dashboard content: habit checklist and weekly narrative
//! blurbs. Illustrative copy only; nothing here is derived from the
//! scoring pipeline, and the scorer never reads it.

use once_cell::sync::Lazy;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HabitKind {
    Meditation,
    Exercise,
    Content,
    Study,
    Digital,
}

/// One tracked weekly habit with a seven-day completion strip.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub name: &'static str,
    pub completed: [bool; 7],
    pub target: u8,
    pub kind: HabitKind,
}

impl Habit {
    /// Completion percentage against the weekly target, capped at 100.
    pub fn completion_pct(&self) -> u8 {
        if self.target == 0 {
            return 0;
        }
        let done = self.completed.iter().filter(|c| **c).count() as u32;
        (done * 100 / self.target as u32).min(100) as u8
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyInsights {
    pub findings: Vec<&'static str>,
    pub watchouts: Vec<&'static str>,
    pub optimizations: Vec<&'static str>,
}

static HABITS: Lazy<Vec<Habit>> = Lazy::new(|| {
    vec![
        Habit {
            name: "Meditate 20 minutes daily",
            completed: [true, true, true, true, false, false, false],
            target: 7,
            kind: HabitKind::Meditation,
        },
        Habit {
            name: "Exercise 3x per week",
            completed: [true, false, true, false, false, false, false],
            target: 3,
            kind: HabitKind::Exercise,
        },
        Habit {
            name: "Publish 1 piece per week",
            completed: [false, false, false, true, false, false, false],
            target: 1,
            kind: HabitKind::Content,
        },
        Habit {
            name: "Study 1 hour daily",
            completed: [true, true, true, true, false, false, false],
            target: 7,
            kind: HabitKind::Study,
        },
        Habit {
            name: "Screen time under 6 hours",
            completed: [true, false, true, true, false, false, false],
            target: 7,
            kind: HabitKind::Digital,
        },
    ]
});

static WEEKLY: Lazy<WeeklyInsights> = Lazy::new(|| WeeklyInsights {
    findings: vec![
        "Sleep drives focus: after a high-quality night, next-day flow time runs about 45 minutes longer",
        "Exercise streaks pay off: three consecutive active days lift creative output quality noticeably",
        "The morning chain (exercise + meditation + writing) is the strongest overall-efficiency lever",
    ],
    watchouts: vec![
        "Midweek exercise frequency is low - consider moving sessions earlier in the day",
        "Idea capture volume is dropping - revisit the inbox/capture tooling",
        "Screen time overshoots on Tuesdays and Thursdays - plan a digital detox block",
    ],
    optimizations: vec![
        "Protect the 22:30 screens-off habit; deep-sleep share is holding at a good level",
        "Stabilize content production with a simple SOP from idea to publish",
        "Experiment with focus techniques and note which conditions trigger flow",
    ],
});

pub fn habits() -> &'static [Habit] {
    &HABITS
}

pub fn weekly() -> &'static WeeklyInsights {
    &WEEKLY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn habit_completion_is_capped_and_guarded() {
        let h = Habit {
            name: "x",
            completed: [true; 7],
            target: 3,
            kind: HabitKind::Exercise,
        };
        assert_eq!(h.completion_pct(), 100);

        let none = Habit {
            name: "y",
            completed: [false; 7],
            target: 0,
            kind: HabitKind::Digital,
        };
        assert_eq!(none.completion_pct(), 0);
    }

    #[test]
    fn static_content_is_present() {
        assert!(!habits().is_empty());
        assert_eq!(weekly().findings.len(), 3);
    }
}
