// tests/support/builders.rs
use super::mocks::fixed_time;
use tusker_core::application::commands::{
    articles::CreateArticleCommand, tuskers::CreateTuskerCommand,
};
use tusker_core::domain::article::{Article, ArticleId, ArticleTitle};
use tusker_core::domain::slug::Slug;
use tusker_core::domain::tusker::{Tusker, TuskerId, TuskerName};

pub fn create_article_command(title: &str) -> CreateArticleCommand {
    CreateArticleCommand {
        title: title.into(),
        slug: None,
        excerpt: "An excerpt.".into(),
        content: "Some content.".into(),
        images: vec![],
        category: "News".into(),
        tags: vec!["conservation".into()],
        author: "Editor".into(),
        publish_date: fixed_time(),
    }
}

pub fn create_tusker_command(name: &str) -> CreateTuskerCommand {
    CreateTuskerCommand {
        name: name.into(),
        slug: None,
        age: "35".into(),
        location: "Udawalawe".into(),
        status: "alive".into(),
        category: "tusker".into(),
        description: "A well-known tusker.".into(),
        tags: vec!["udawalawe".into()],
        image_urls: vec![],
    }
}

pub fn stored_article(id: i64, title: &str, slug: Option<&str>) -> Article {
    Article {
        id: ArticleId::new(id).unwrap(),
        title: ArticleTitle::new(title).unwrap(),
        slug: slug.map(|s| Slug::new(s).unwrap()),
        excerpt: "An excerpt.".into(),
        content: "Some content.".into(),
        images: vec![],
        category: "News".into(),
        tags: vec![],
        author: "Editor".into(),
        publish_date: fixed_time(),
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}

pub fn stored_tusker(id: i64, name: &str, slug: Option<&str>) -> Tusker {
    Tusker {
        id: TuskerId::new(id).unwrap(),
        name: TuskerName::new(name).unwrap(),
        slug: slug.map(|s| Slug::new(s).unwrap()),
        age: "40".into(),
        location: "Kataragama".into(),
        status: "alive".into(),
        category: "tusker".into(),
        description: "A tusker.".into(),
        tags: vec![],
        image_urls: vec![],
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}
