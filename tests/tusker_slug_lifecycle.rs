// tests/tusker_slug_lifecycle.rs
use std::sync::Arc;

mod support;

use support::{
    FixedClock, InMemoryArticleRepo, InMemoryTuskerRepo, actor, create_article_command,
    create_tusker_command,
};
use tusker_core::application::commands::articles::ArticleCommandService;
use tusker_core::application::commands::tuskers::{
    CreateTuskerCommand, TuskerCommandService, UpdateTuskerCommand,
};
use tusker_core::application::error::ApplicationError;
use tusker_core::domain::errors::DomainError;

fn service(repo: &Arc<InMemoryTuskerRepo>) -> TuskerCommandService {
    TuskerCommandService::new(repo.clone(), repo.clone(), Arc::new(FixedClock))
}

#[tokio::test]
async fn create_derives_slug_from_name() {
    let repo = Arc::new(InMemoryTuskerRepo::new());
    let svc = service(&repo);

    let created = svc
        .create_tusker(&actor(), create_tusker_command("Deega Danthu (Raja)"))
        .await
        .unwrap();

    assert_eq!(created.slug.as_deref(), Some("deega-danthu-raja"));
}

#[tokio::test]
async fn duplicate_names_get_numeric_suffixes() {
    let repo = Arc::new(InMemoryTuskerRepo::new());
    let svc = service(&repo);

    let first = svc
        .create_tusker(&actor(), create_tusker_command("Asha"))
        .await
        .unwrap();
    let second = svc
        .create_tusker(&actor(), create_tusker_command("Asha"))
        .await
        .unwrap();

    assert_eq!(first.slug.as_deref(), Some("asha"));
    assert_eq!(second.slug.as_deref(), Some("asha-1"));
}

#[tokio::test]
async fn duplicate_explicit_slug_is_a_conflict() {
    let repo = Arc::new(InMemoryTuskerRepo::new());
    let svc = service(&repo);

    svc.create_tusker(&actor(), create_tusker_command("Asha"))
        .await
        .unwrap();

    let command = CreateTuskerCommand {
        slug: Some("asha".into()),
        ..create_tusker_command("Another Name")
    };
    let err = svc.create_tusker(&actor(), command).await.unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Conflict(_))
    ));
}

#[tokio::test]
async fn rename_excludes_own_record() {
    let repo = Arc::new(InMemoryTuskerRepo::new());
    let svc = service(&repo);

    let created = svc
        .create_tusker(&actor(), create_tusker_command("Walawe Raja"))
        .await
        .unwrap();

    let updated = svc
        .update_tusker(
            &actor(),
            UpdateTuskerCommand {
                id: created.id,
                name: Some("Walawe  Raja!".into()),
                slug: None,
                age: None,
                location: None,
                status: None,
                category: None,
                description: None,
                tags: None,
                image_urls: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.slug.as_deref(), Some("walawe-raja"));
}

#[tokio::test]
async fn same_slug_may_exist_in_both_domains() {
    let tusker_repo = Arc::new(InMemoryTuskerRepo::new());
    let article_repo = Arc::new(InMemoryArticleRepo::new());
    let tusker_svc = service(&tusker_repo);
    let article_svc = ArticleCommandService::new(
        article_repo.clone(),
        article_repo.clone(),
        Arc::new(FixedClock),
    );

    let tusker = tusker_svc
        .create_tusker(&actor(), create_tusker_command("Asha"))
        .await
        .unwrap();
    let article = article_svc
        .create_article(&actor(), create_article_command("Asha"))
        .await
        .unwrap();

    // Articles and tuskers are independent uniqueness domains.
    assert_eq!(tusker.slug.as_deref(), Some("asha"));
    assert_eq!(article.slug.as_deref(), Some("asha"));
}
