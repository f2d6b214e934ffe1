use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Notice and menu feeds served by the school data API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "학사")]
    Academic,
    #[serde(rename = "장학")]
    Scholarship,
    #[serde(rename = "일반")]
    General,
    #[serde(rename = "학사일정")]
    Schedule,
    #[serde(rename = "학생식단")]
    StudentMeals,
    #[serde(rename = "교직원식단")]
    StaffMeals,
    #[serde(rename = "기숙사식단")]
    DormMeals,
}

#[derive(Debug, PartialEq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Academic,
        Category::Scholarship,
        Category::General,
        Category::Schedule,
        Category::StudentMeals,
        Category::StaffMeals,
        Category::DormMeals,
    ];

    /// Korean name used in queries and user facing text
    pub fn name(&self) -> &'static str {
        match self {
            Category::Academic => "학사",
            Category::Scholarship => "장학",
            Category::General => "일반",
            Category::Schedule => "학사일정",
            Category::StudentMeals => "학생식단",
            Category::StaffMeals => "교직원식단",
            Category::DormMeals => "기숙사식단",
        }
    }

    /// Path segment of the upstream search endpoint
    pub fn endpoint(&self) -> &'static str {
        match self {
            Category::Academic => "academic-notices",
            Category::Scholarship => "scholarship-notices",
            Category::General => "hankyong-notices",
            Category::Schedule => "academic-schedule",
            Category::StudentMeals => "student-meals",
            Category::StaffMeals => "faculty-meals",
            Category::DormMeals => "dorm-meals",
        }
    }

    pub fn is_meal(&self) -> bool {
        matches!(
            self,
            Category::StudentMeals | Category::StaffMeals | Category::DormMeals
        )
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_maps_every_category_to_an_endpoint() {
        for category in Category::ALL {
            let parsed: Category = category.name().parse().unwrap();
            assert_eq!(parsed, category);
            assert!(!category.endpoint().is_empty());
        }
        assert_eq!(Category::General.endpoint(), "hankyong-notices");
        assert_eq!(Category::StaffMeals.endpoint(), "faculty-meals");
    }

    #[test]
    fn it_rejects_unknown_categories() {
        let err = "도서관".parse::<Category>().unwrap_err();
        assert_eq!(err, UnknownCategory("도서관".to_string()));
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn it_serializes_korean_names() {
        let json = serde_json::to_string(&Category::DormMeals).unwrap();
        assert_eq!(json, "\"기숙사식단\"");
    }
}
