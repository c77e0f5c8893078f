//! Predefined learning paths - ordered topic lists for a goal

/// A named sequence of topic codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LearningPath {
    /// Name used on the command line
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub codes: &'static [&'static str],
}

const PATHS: &[LearningPath] = &[
    LearningPath {
        name: "interview",
        title: "Interview Preparation",
        description: "The topics that come up most in coding interviews",
        codes: &[
            "2.1", "2.3", "3.1", "3.3", "4.2", "5.1", "5.2", "8.1", "8.4", "8.5", "9.2", "7.2", "7.3", "10.1",
            "10.2",
        ],
    },
    LearningPath {
        name: "web",
        title: "Web Development Focus",
        description: "Structures behind caches, routing and everyday backend code",
        codes: &["1.1", "2.1", "4.2", "3.1", "3.3", "9.2", "8.1", "8.4"],
    },
    LearningPath {
        name: "competition",
        title: "Algorithms Competition",
        description: "Broad coverage for contest problem solving",
        codes: &[
            "1.1", "2.1", "2.3", "3.1", "3.3", "4.2", "5.1", "5.2", "6.1", "7.1", "7.2", "7.3", "7.5", "10.1",
            "10.2", "10.3", "12.1",
        ],
    },
    LearningPath {
        name: "systems",
        title: "System Programming",
        description: "Memory, pointers and the structures systems code is built from",
        codes: &["1.2", "1.3", "2.1", "2.3", "3.1", "3.3", "4.2", "5.1", "8.4", "8.5", "9.2"],
    },
    LearningPath {
        name: "fundamentals",
        title: "Fundamentals First",
        description: "Complexity, memory, pointers and recursion",
        codes: &["1.1", "1.2", "1.3", "1.4"],
    },
];

pub fn all() -> &'static [LearningPath] {
    PATHS
}

/// Look up a path by name, ignoring case
pub fn find(name: &str) -> Option<&'static LearningPath> {
    PATHS.iter().find(|p| p.name.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum::Curriculum;

    #[test]
    fn test_every_path_code_exists() {
        let curriculum = Curriculum::standard().unwrap();
        for path in all() {
            for code in path.codes {
                assert!(curriculum.contains_topic(code), "path '{}' references unknown topic {}", path.name, code);
            }
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(find("Interview").map(|p| p.codes.len()), Some(15));
        assert_eq!(find(" systems ").map(|p| p.name), Some("systems"));
        assert!(find("gamedev").is_none());
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<&str> = all().iter().map(|p| p.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), all().len());
    }
}
