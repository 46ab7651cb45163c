// tests/slug_commit_race.rs
//
// Exercises the window between reading the slug set and committing: a rival
// writer can take the chosen slug first, the storage layer reports a
// conflict, and the command service re-resolves against the fresh set.
use std::sync::{
    Arc,
    atomic::{AtomicBool, AtomicU32, Ordering},
};

mod support;

use async_trait::async_trait;
use support::{FixedClock, InMemoryArticleRepo, actor, create_article_command, fixed_time};
use tusker_core::application::commands::articles::{ArticleCommandService, CreateArticleCommand};
use tusker_core::application::error::ApplicationError;
use tusker_core::domain::article::{
    Article, ArticleId, ArticleTitle, ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use tusker_core::domain::errors::{DomainError, DomainResult};

/// Write repository that simulates one rival writer grabbing the same slug
/// immediately before our first commit.
struct RacingWriteRepo {
    inner: Arc<InMemoryArticleRepo>,
    rival_fired: AtomicBool,
}

impl RacingWriteRepo {
    fn new(inner: Arc<InMemoryArticleRepo>) -> Self {
        Self {
            inner,
            rival_fired: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl ArticleWriteRepository for RacingWriteRepo {
    async fn insert(&self, new: NewArticle) -> DomainResult<Article> {
        if !self.rival_fired.swap(true, Ordering::SeqCst) {
            let rival = NewArticle {
                title: ArticleTitle::new("Rival").unwrap(),
                slug: new.slug.clone(),
                excerpt: "rival".into(),
                content: "rival".into(),
                images: vec![],
                category: "News".into(),
                tags: vec![],
                author: "Rival".into(),
                publish_date: fixed_time(),
                created_at: fixed_time(),
                updated_at: fixed_time(),
            };
            self.inner.insert(rival).await?;
        }
        self.inner.insert(new).await
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        self.inner.update(update).await
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.inner.delete(id).await
    }
}

/// Write repository whose inserts always hit the uniqueness constraint.
struct AlwaysConflictRepo {
    attempts: AtomicU32,
}

#[async_trait]
impl ArticleWriteRepository for AlwaysConflictRepo {
    async fn insert(&self, _new: NewArticle) -> DomainResult<Article> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(DomainError::Conflict("slug already exists".into()))
    }

    async fn update(&self, _update: ArticleUpdate) -> DomainResult<Article> {
        Err(DomainError::Conflict("slug already exists".into()))
    }

    async fn delete(&self, _id: ArticleId) -> DomainResult<()> {
        Err(DomainError::NotFound("article not found".into()))
    }
}

#[tokio::test]
async fn commit_conflict_triggers_re_resolution() {
    let store = Arc::new(InMemoryArticleRepo::new());
    let racing = Arc::new(RacingWriteRepo::new(store.clone()));
    let svc = ArticleCommandService::new(racing, store.clone(), Arc::new(FixedClock));

    let created = svc
        .create_article(&actor(), create_article_command("Asha"))
        .await
        .unwrap();

    // The rival owns "asha"; our write re-resolved to the next free suffix.
    assert_eq!(created.slug.as_deref(), Some("asha-1"));
}

#[tokio::test]
async fn persistent_conflict_is_surfaced_after_bounded_retries() {
    let store = Arc::new(InMemoryArticleRepo::new());
    let conflicting = Arc::new(AlwaysConflictRepo {
        attempts: AtomicU32::new(0),
    });
    let svc =
        ArticleCommandService::new(conflicting.clone(), store, Arc::new(FixedClock));

    let err = svc
        .create_article(&actor(), create_article_command("Asha"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Conflict(_))
    ));
    assert_eq!(conflicting.attempts.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn explicit_slug_commit_conflict_is_not_retried() {
    let store = Arc::new(InMemoryArticleRepo::new());
    let racing = Arc::new(RacingWriteRepo::new(store.clone()));
    let svc = ArticleCommandService::new(racing, store.clone(), Arc::new(FixedClock));

    let command = CreateArticleCommand {
        slug: Some("asha".into()),
        ..create_article_command("Asha")
    };
    let err = svc.create_article(&actor(), command).await.unwrap_err();

    // User-chosen slugs are never silently renamed, even on a race.
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Conflict(_))
    ));
}
