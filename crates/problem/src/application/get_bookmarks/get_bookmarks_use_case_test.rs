// crates/problem/src/application/get_bookmarks/get_bookmarks_use_case_test.rs

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use chrono::Duration;
    use shared_kernel::clock::FixedClock;
    use shared_kernel::domain::value_objects::UserId;

    use crate::application::add_bookmark::{AddBookmarkCommand, AddBookmarkUseCase};
    use crate::application::fixtures::{problem, t0};
    use crate::application::get_bookmarks::{GetBookmarksCommand, GetBookmarksUseCase};
    use crate::domain::entities::{Authored, Problem, ProblemView};
    use crate::domain::repositories::BookmarkRepositoryStub;

    fn visible(repo: &BookmarkRepositoryStub, p: &Problem) {
        repo.problems.lock().unwrap().insert(
            p.id,
            Authored::new(ProblemView::new(p.clone(), Some("Housing".into())), p.user_id, None),
        );
    }

    #[tokio::test]
    async fn test_most_recent_bookmark_first_and_hidden_problems_skipped() {
        // Arrange
        let repo = Arc::new(BookmarkRepositoryStub::default());
        let clock = Arc::new(FixedClock::at(t0()));
        let add = AddBookmarkUseCase::new(repo.clone(), clock.clone());
        let me = UserId::new();
        let author = UserId::new();
        let (older, newer, hidden) = (
            problem(author, "older", 0),
            problem(author, "newer", 1),
            problem(author, "hidden", 2),
        );
        visible(&repo, &older);
        visible(&repo, &newer);

        // Favoris posés dans l'ordre older, hidden, newer
        for p in [&older, &hidden, &newer] {
            add.execute(AddBookmarkCommand { user_id: me, problem_id: p.id }).await.unwrap();
            clock.advance(Duration::minutes(1));
        }

        // Act
        let result = GetBookmarksUseCase::new(repo)
            .execute(GetBookmarksCommand { user_id: me })
            .await
            .unwrap();

        // Assert
        let titles: Vec<&str> = result.iter().map(|b| b.item.problem.title.as_str()).collect();
        assert_eq!(titles, ["newer", "older"]);
        assert_eq!(result[0].item.category_name.as_deref(), Some("Housing"));
    }

    #[tokio::test]
    async fn test_no_bookmarks_is_empty() {
        let use_case = GetBookmarksUseCase::new(Arc::new(BookmarkRepositoryStub::default()));

        let result = use_case.execute(GetBookmarksCommand { user_id: UserId::new() }).await.unwrap();

        assert!(result.is_empty());
    }
}
