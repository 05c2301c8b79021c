// crates/problem/src/application/fixtures.rs
#![cfg(test)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use shared_kernel::domain::value_objects::UserId;

use crate::domain::entities::{Comment, Problem};
use crate::domain::value_objects::{CommentContent, Description, ProblemId, ProblemStatus, Title};

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
}

/// Problème créé `minutes` après t0
pub fn problem(user_id: UserId, title: &str, minutes: i64) -> Problem {
    Problem::new(
        user_id,
        Title::try_new(title).unwrap(),
        Description::try_new(format!("{title} description")).unwrap(),
        t0() + Duration::minutes(minutes),
    )
}

pub fn problem_with_status(user_id: UserId, title: &str, minutes: i64, status: ProblemStatus) -> Problem {
    problem(user_id, title, minutes).with_status(status)
}

pub fn comment(problem_id: ProblemId, user_id: UserId, content: &str, minutes: i64) -> Comment {
    Comment::new(
        problem_id,
        user_id,
        CommentContent::try_new(content).unwrap(),
        t0() + Duration::minutes(minutes),
    )
}
