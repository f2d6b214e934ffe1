use chrono::{DateTime, NaiveDate};
use serde::Serialize;
use serde_json::Value;

use super::category::Category;
use super::client::SchoolClient;
use super::notice::field_text;

pub const NO_MENU_SENTINEL: &str = "등록된 식단내용이(가) 없습니다.";
const MAX_MEAL_ID: f64 = 10.0;
const MAX_MEALS: usize = 10;
const MEAL_SECTIONS: [&str; 3] = ["아침", "점심", "저녁"];

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Meal {
    pub date: String,
    pub time: String,
    pub menu: Vec<String>,
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum MenuError {
    #[error("식단 데이터가 없습니다.")]
    Empty,
    #[error("유효한 식단 데이터가 없습니다.")]
    NoValidMeals,
}

fn first_non_empty(record: &Value, fields: &[&str]) -> Option<String> {
    fields
        .iter()
        .find_map(|f| field_text(record, f).filter(|s| !s.is_empty()))
}

fn meal_date(record: &Value) -> Option<NaiveDate> {
    let text = first_non_empty(record, &["mealDate", "date"])?;
    let text = text.trim();
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(text).ok().map(|d| d.date_naive()))
        .or_else(|| text.get(..10).and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()))
}

fn is_valid_meal(record: &Value) -> bool {
    let valid_id = record["id"].as_f64().is_some_and(|id| id <= MAX_MEAL_ID);
    let valid_menu = record["menu"]
        .as_str()
        .map(str::trim)
        .is_some_and(|menu| !menu.is_empty() && menu != NO_MENU_SENTINEL);
    valid_id && valid_menu
}

impl Meal {
    pub fn from_record(record: &Value) -> Self {
        let menu = match record["menu"].as_str() {
            Some(text) => text
                .split('\n')
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect(),
            None => vec!["메뉴 정보가 없습니다.".to_string()],
        };
        Self {
            date: first_non_empty(record, &["mealDate", "date"])
                .unwrap_or_else(|| "날짜 없음".to_string()),
            time: first_non_empty(record, &["mealTime", "time"])
                .unwrap_or_else(|| "시간 없음".to_string()),
            menu,
        }
    }
}

/// Registered meals, oldest first, at most ten.
pub fn extract_meals(records: &[Value]) -> Result<Vec<Meal>, MenuError> {
    if records.is_empty() {
        return Err(MenuError::Empty);
    }

    let mut valid: Vec<&Value> = records.iter().filter(|r| is_valid_meal(r)).collect();
    if valid.is_empty() {
        return Err(MenuError::NoValidMeals);
    }
    // Undated records sort first
    valid.sort_by_key(|r| meal_date(r));

    Ok(valid
        .into_iter()
        .take(MAX_MEALS)
        .map(Meal::from_record)
        .collect())
}

/// Split dormitory menu lines into breakfast, lunch and dinner. A
/// line that names a meal time starts that section; lines before any
/// marker are dropped.
pub fn group_dorm_menu(lines: &[String]) -> Vec<(&'static str, Vec<String>)> {
    let mut sections: Vec<(&'static str, Vec<String>)> =
        MEAL_SECTIONS.iter().map(|s| (*s, vec![])).collect();
    let mut current: Option<usize> = None;

    for line in lines {
        if line.contains("천원의 아침밥") || line.contains("08:00") {
            current = Some(0);
        } else if line.contains("12:00") || line.contains("점심") {
            current = Some(1);
        } else if line.contains("17:00") || line.contains("저녁") {
            current = Some(2);
        }
        if let Some(idx) = current {
            sections[idx].1.push(line.trim().to_string());
        }
    }

    sections.retain(|(_, lines)| !lines.is_empty());
    sections
}

pub fn format_meals(category: Category, label: &str, meals: &[Meal]) -> String {
    if meals.is_empty() {
        return format!("{} 식단 정보가 없습니다.", label);
    }

    let mut response = format!("{} 최근 식단 정보입니다:\n", label);
    for meal in meals {
        response.push_str(&format!("\n{} ({})\n", meal.date, meal.time));

        if category == Category::DormMeals {
            for (section, lines) in group_dorm_menu(&meal.menu) {
                response.push_str(&format!("[{}]\n", section));
                for line in lines {
                    response.push_str(&format!("- {}\n", line));
                }
                response.push('\n');
            }
        } else {
            let lines: Vec<String> = meal.menu.iter().map(|l| format!("- {}", l)).collect();
            response.push_str(&lines.join("\n"));
            response.push_str("\n\n");
        }
    }

    response.trim().to_string()
}

/// Fetch a meal feed and render it as a chat answer.
pub async fn get_menu(client: &SchoolClient, category: Category, label: &str) -> String {
    let meals = async {
        let records = client
            .notice_feed(category)
            .await?
            .into_records()
            .ok_or_else(|| anyhow::anyhow!("unrecognized meal response"))?;
        let meals = extract_meals(&records)?;
        Ok::<_, anyhow::Error>(meals)
    }
    .await;

    match meals {
        Ok(meals) => format_meals(category, label, &meals),
        Err(e) => {
            tracing::error!("{} error: {}", label, e);
            format!("{} 정보를 가져오는 데 오류가 발생했습니다.", label)
        }
    }
}
