// tests/support/mocks.rs
use std::collections::{HashMap, HashSet};
use std::sync::{
    Mutex,
    atomic::{AtomicI64, Ordering},
};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use tusker_core::application::ports::security::{PasswordHasher, TokenManager};
use tusker_core::application::ports::time::Clock;
use tusker_core::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
};
use tusker_core::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use tusker_core::domain::errors::{DomainError, DomainResult};
use tusker_core::domain::slug::Slug;
use tusker_core::domain::tusker::{
    NewTusker, Tusker, TuskerId, TuskerReadRepository, TuskerUpdate, TuskerWriteRepository,
};
use tusker_core::domain::user::{NewUser, User, UserId, UserRepository, Username};

pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_time()
    }
}

pub fn actor() -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId::new(1).unwrap(),
        username: "admin".into(),
        issued_at: fixed_time(),
        expires_at: fixed_time() + chrono::Duration::hours(1),
    }
}

pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("hashed:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        Ok(AuthTokenDto {
            access_token: format!("token-for-{}", subject.username),
            issued_at: fixed_time(),
            expires_at: fixed_time() + chrono::Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        if token == "test-token" {
            Ok(actor())
        } else {
            Err(ApplicationError::unauthorized("invalid token"))
        }
    }
}

/// In-memory article store mirroring the Postgres repository semantics,
/// including the slug uniqueness constraint.
#[derive(Default)]
pub struct InMemoryArticleRepo {
    inner: Mutex<HashMap<i64, Article>>,
    next_id: AtomicI64,
}

impl InMemoryArticleRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn with_articles(articles: Vec<Article>) -> Self {
        let max_id = articles
            .iter()
            .map(|article| i64::from(article.id))
            .max()
            .unwrap_or(0);
        let map = articles
            .into_iter()
            .map(|article| (i64::from(article.id), article))
            .collect();
        Self {
            inner: Mutex::new(map),
            next_id: AtomicI64::new(max_id + 1),
        }
    }

    fn slug_taken(map: &HashMap<i64, Article>, slug: &str, exclude: Option<i64>) -> bool {
        map.iter().any(|(id, article)| {
            Some(*id) != exclude && article.slug.as_ref().map(Slug::as_str) == Some(slug)
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, new: NewArticle) -> DomainResult<Article> {
        let mut map = self.inner.lock().unwrap();
        if Self::slug_taken(&map, new.slug.as_str(), None) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let article = Article {
            id: ArticleId::new(id).unwrap(),
            title: new.title,
            slug: Some(new.slug),
            excerpt: new.excerpt,
            content: new.content,
            images: new.images,
            category: new.category,
            tags: new.tags,
            author: new.author,
            publish_date: new.publish_date,
            created_at: new.created_at,
            updated_at: new.updated_at,
        };
        map.insert(id, article.clone());
        Ok(article)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut map = self.inner.lock().unwrap();
        let id = i64::from(update.id);
        if let Some(slug) = &update.slug {
            if Self::slug_taken(&map, slug.as_str(), Some(id)) {
                return Err(DomainError::Conflict("slug already exists".into()));
            }
        }
        let article = map
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        if let Some(title) = update.title {
            article.title = title;
        }
        if let Some(slug) = update.slug {
            article.slug = Some(slug);
        }
        if let Some(excerpt) = update.excerpt {
            article.excerpt = excerpt;
        }
        if let Some(content) = update.content {
            article.content = content;
        }
        if let Some(images) = update.images {
            article.images = images;
        }
        if let Some(category) = update.category {
            article.category = category;
        }
        if let Some(tags) = update.tags {
            article.tags = tags;
        }
        if let Some(author) = update.author {
            article.author = author;
        }
        if let Some(publish_date) = update.publish_date {
            article.publish_date = publish_date;
        }
        article.updated_at = update.updated_at;
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut map = self.inner.lock().unwrap();
        map.remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let map = self.inner.lock().unwrap();
        Ok(map.get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Article>> {
        let map = self.inner.lock().unwrap();
        Ok(map
            .values()
            .find(|article| article.slug.as_ref() == Some(slug))
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        let map = self.inner.lock().unwrap();
        let mut articles: Vec<Article> = map.values().cloned().collect();
        articles.sort_by(|a, b| b.publish_date.cmp(&a.publish_date));
        Ok(articles)
    }

    async fn list_recent(&self, limit: u32) -> DomainResult<Vec<Article>> {
        let mut articles = self.list().await?;
        articles.truncate(limit as usize);
        Ok(articles)
    }

    async fn list_by_category(&self, category: &str) -> DomainResult<Vec<Article>> {
        let needle = category.to_lowercase();
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|article| article.category.to_lowercase().contains(&needle))
            .collect())
    }

    async fn list_by_tag(&self, tag: &str) -> DomainResult<Vec<Article>> {
        let needle = tag.to_lowercase();
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|article| {
                article
                    .tags
                    .iter()
                    .any(|t| t.to_lowercase().contains(&needle))
            })
            .collect())
    }

    async fn search(&self, query: &str) -> DomainResult<Vec<Article>> {
        let needle = query.to_lowercase();
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|article| {
                article.title.as_str().to_lowercase().contains(&needle)
                    || article.content.to_lowercase().contains(&needle)
                    || article.excerpt.to_lowercase().contains(&needle)
            })
            .collect())
    }

    async fn list_tags(&self) -> DomainResult<Vec<String>> {
        let map = self.inner.lock().unwrap();
        let mut tags: Vec<String> = map
            .values()
            .flat_map(|article| article.tags.iter().cloned())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        tags.sort();
        Ok(tags)
    }

    async fn list_slugs(&self, exclude: Option<ArticleId>) -> DomainResult<HashSet<String>> {
        let map = self.inner.lock().unwrap();
        let exclude = exclude.map(i64::from);
        Ok(map
            .iter()
            .filter(|(id, _)| Some(**id) != exclude)
            .filter_map(|(_, article)| article.slug.as_ref().map(|s| s.as_str().to_string()))
            .collect())
    }
}

/// In-memory tusker store with the same slug constraint semantics.
#[derive(Default)]
pub struct InMemoryTuskerRepo {
    inner: Mutex<HashMap<i64, Tusker>>,
    next_id: AtomicI64,
}

impl InMemoryTuskerRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn with_tuskers(tuskers: Vec<Tusker>) -> Self {
        let max_id = tuskers
            .iter()
            .map(|tusker| i64::from(tusker.id))
            .max()
            .unwrap_or(0);
        let map = tuskers
            .into_iter()
            .map(|tusker| (i64::from(tusker.id), tusker))
            .collect();
        Self {
            inner: Mutex::new(map),
            next_id: AtomicI64::new(max_id + 1),
        }
    }

    fn slug_taken(map: &HashMap<i64, Tusker>, slug: &str, exclude: Option<i64>) -> bool {
        map.iter().any(|(id, tusker)| {
            Some(*id) != exclude && tusker.slug.as_ref().map(Slug::as_str) == Some(slug)
        })
    }
}

#[async_trait]
impl TuskerWriteRepository for InMemoryTuskerRepo {
    async fn insert(&self, new: NewTusker) -> DomainResult<Tusker> {
        let mut map = self.inner.lock().unwrap();
        if Self::slug_taken(&map, new.slug.as_str(), None) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let tusker = Tusker {
            id: TuskerId::new(id).unwrap(),
            name: new.name,
            slug: Some(new.slug),
            age: new.age,
            location: new.location,
            status: new.status,
            category: new.category,
            description: new.description,
            tags: new.tags,
            image_urls: new.image_urls,
            created_at: new.created_at,
            updated_at: new.updated_at,
        };
        map.insert(id, tusker.clone());
        Ok(tusker)
    }

    async fn update(&self, update: TuskerUpdate) -> DomainResult<Tusker> {
        let mut map = self.inner.lock().unwrap();
        let id = i64::from(update.id);
        if let Some(slug) = &update.slug {
            if Self::slug_taken(&map, slug.as_str(), Some(id)) {
                return Err(DomainError::Conflict("slug already exists".into()));
            }
        }
        let tusker = map
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("tusker not found".into()))?;

        if let Some(name) = update.name {
            tusker.name = name;
        }
        if let Some(slug) = update.slug {
            tusker.slug = Some(slug);
        }
        if let Some(age) = update.age {
            tusker.age = age;
        }
        if let Some(location) = update.location {
            tusker.location = location;
        }
        if let Some(status) = update.status {
            tusker.status = status;
        }
        if let Some(category) = update.category {
            tusker.category = category;
        }
        if let Some(description) = update.description {
            tusker.description = description;
        }
        if let Some(tags) = update.tags {
            tusker.tags = tags;
        }
        if let Some(image_urls) = update.image_urls {
            tusker.image_urls = image_urls;
        }
        tusker.updated_at = update.updated_at;
        Ok(tusker.clone())
    }

    async fn delete(&self, id: TuskerId) -> DomainResult<()> {
        let mut map = self.inner.lock().unwrap();
        map.remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("tusker not found".into()))
    }
}

#[async_trait]
impl TuskerReadRepository for InMemoryTuskerRepo {
    async fn find_by_id(&self, id: TuskerId) -> DomainResult<Option<Tusker>> {
        let map = self.inner.lock().unwrap();
        Ok(map.get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Tusker>> {
        let map = self.inner.lock().unwrap();
        Ok(map
            .values()
            .find(|tusker| tusker.slug.as_ref() == Some(slug))
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Tusker>> {
        let map = self.inner.lock().unwrap();
        let mut tuskers: Vec<Tusker> = map.values().cloned().collect();
        tuskers.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(tuskers)
    }

    async fn list_random(&self, limit: u32) -> DomainResult<Vec<Tusker>> {
        let mut tuskers = self.list().await?;
        tuskers.truncate(limit as usize);
        Ok(tuskers)
    }

    async fn search_by_name(&self, name: &str) -> DomainResult<Vec<Tusker>> {
        let needle = name.to_lowercase();
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|tusker| tusker.name.as_str().to_lowercase().contains(&needle))
            .collect())
    }

    async fn search_by_category(&self, category: &str) -> DomainResult<Vec<Tusker>> {
        let needle = category.to_lowercase();
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|tusker| tusker.category.to_lowercase().contains(&needle))
            .collect())
    }

    async fn list_tags(&self) -> DomainResult<Vec<String>> {
        let map = self.inner.lock().unwrap();
        let mut tags: Vec<String> = map
            .values()
            .flat_map(|tusker| tusker.tags.iter().cloned())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        tags.sort();
        Ok(tags)
    }

    async fn list_slugs(&self, exclude: Option<TuskerId>) -> DomainResult<HashSet<String>> {
        let map = self.inner.lock().unwrap();
        let exclude = exclude.map(i64::from);
        Ok(map
            .iter()
            .filter(|(id, _)| Some(**id) != exclude)
            .filter_map(|(_, tusker)| tusker.slug.as_ref().map(|s| s.as_str().to_string()))
            .collect())
    }
}

/// In-memory user store enforcing username uniqueness like the DB does.
#[derive(Default)]
pub struct InMemoryUserRepo {
    inner: Mutex<HashMap<i64, User>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut map = self.inner.lock().unwrap();
        if map
            .values()
            .any(|user| user.username.as_str() == new_user.username.as_str())
        {
            return Err(DomainError::Conflict("username already exists".into()));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = User {
            id: UserId::new(id).unwrap(),
            username: new_user.username,
            password_hash: new_user.password_hash,
            created_at: new_user.created_at,
        };
        map.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let map = self.inner.lock().unwrap();
        Ok(map
            .values()
            .find(|user| user.username.as_str() == username.as_str())
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let map = self.inner.lock().unwrap();
        Ok(map.get(&i64::from(id)).cloned())
    }
}
