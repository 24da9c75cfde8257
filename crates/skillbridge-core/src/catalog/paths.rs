//! Learning paths on offer.

use std::sync::OnceLock;

use serde::Serialize;

use super::skills::slugify;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LearningPath {
    pub id: String,
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub level: &'static str,
    pub rating: f32,
    pub students: u32,
}

pub fn learning_paths() -> &'static [LearningPath] {
    static PATHS: OnceLock<Vec<LearningPath>> = OnceLock::new();
    PATHS.get_or_init(|| {
        vec![
            path(
                "Full-Stack Development",
                "Master both frontend and backend development with modern technologies",
                "6 months",
                "Intermediate",
                4.8,
                1234,
            ),
            path(
                "Data Science & AI",
                "Learn data analysis, machine learning, and artificial intelligence",
                "8 months",
                "Advanced",
                4.9,
                892,
            ),
            path(
                "Digital Marketing",
                "Master modern marketing techniques and strategies",
                "4 months",
                "Beginner",
                4.7,
                2156,
            ),
        ]
    })
}

pub fn find_path(path_id: &str) -> Option<&'static LearningPath> {
    learning_paths().iter().find(|path| path.id == path_id)
}

fn path(
    title: &'static str,
    description: &'static str,
    duration: &'static str,
    level: &'static str,
    rating: f32,
    students: u32,
) -> LearningPath {
    LearningPath {
        id: slugify(title),
        title,
        description,
        duration,
        level,
        rating,
        students,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_ids() {
        let ids: Vec<&str> = learning_paths().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["fullstack-development", "data-science-ai", "digital-marketing"]
        );
    }

    #[test]
    fn test_find_path() {
        assert_eq!(find_path("digital-marketing").unwrap().students, 2156);
        assert!(find_path("underwater-basket-weaving").is_none());
    }
}
