//! Course Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Menu course
///
/// Fixed category set used for both authoring and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Course {
    #[default]
    Starters,
    Mains,
    Desserts,
    Beverages,
    Sides,
}

impl Course {
    /// All courses, in menu display order
    pub const ALL: [Course; 5] = [
        Course::Starters,
        Course::Mains,
        Course::Desserts,
        Course::Beverages,
        Course::Sides,
    ];

    /// Display label
    pub const fn label(&self) -> &'static str {
        match self {
            Course::Starters => "Starters",
            Course::Mains => "Mains",
            Course::Desserts => "Desserts",
            Course::Beverages => "Beverages",
            Course::Sides => "Sides",
        }
    }

    /// Course icon shown in dish lists and the course picker
    pub const fn icon(&self) -> &'static str {
        match self {
            Course::Starters => "🥗",
            Course::Mains => "🍽️",
            Course::Desserts => "🍰",
            Course::Beverages => "🥤",
            Course::Sides => "🍟",
        }
    }

    /// Next course in display order, wrapping around (picker navigation)
    pub fn next(&self) -> Course {
        let idx = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous course in display order, wrapping around
    pub fn prev(&self) -> Course {
        let idx = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Course filter for menu queries
///
/// `All` is the sentinel that disables course filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CourseFilter {
    #[default]
    All,
    Only(Course),
}

impl CourseFilter {
    /// Whether a dish with the given course passes this filter
    pub fn matches(&self, course: Course) -> bool {
        match self {
            CourseFilter::All => true,
            CourseFilter::Only(c) => *c == course,
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            CourseFilter::All => "All Courses",
            CourseFilter::Only(c) => c.label(),
        }
    }

    /// Cycle to the next filter value: All -> Starters -> ... -> Sides -> All
    pub fn cycle(&self) -> CourseFilter {
        match self {
            CourseFilter::All => CourseFilter::Only(Course::ALL[0]),
            CourseFilter::Only(c) => {
                if *c == Course::ALL[Course::ALL.len() - 1] {
                    CourseFilter::All
                } else {
                    CourseFilter::Only(c.next())
                }
            }
        }
    }
}

impl fmt::Display for CourseFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_next_prev_wrap() {
        assert_eq!(Course::Starters.next(), Course::Mains);
        assert_eq!(Course::Sides.next(), Course::Starters);
        assert_eq!(Course::Starters.prev(), Course::Sides);
        assert_eq!(Course::Mains.prev(), Course::Starters);
    }

    #[test]
    fn test_filter_matches() {
        assert!(CourseFilter::All.matches(Course::Desserts));
        assert!(CourseFilter::Only(Course::Mains).matches(Course::Mains));
        assert!(!CourseFilter::Only(Course::Mains).matches(Course::Sides));
    }

    #[test]
    fn test_filter_cycle_covers_all_courses() {
        let mut filter = CourseFilter::All;
        let mut seen = Vec::new();
        for _ in 0..Course::ALL.len() {
            filter = filter.cycle();
            if let CourseFilter::Only(c) = filter {
                seen.push(c);
            }
        }
        assert_eq!(seen, Course::ALL.to_vec());
        assert_eq!(filter.cycle(), CourseFilter::All);
    }

    #[test]
    fn test_display() {
        assert_eq!(Course::Beverages.to_string(), "Beverages");
        assert_eq!(CourseFilter::All.to_string(), "All Courses");
        assert_eq!(CourseFilter::Only(Course::Sides).to_string(), "Sides");
    }
}
