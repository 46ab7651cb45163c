// src/application/queries/sitemap.rs
use std::sync::Arc;

use crate::{
    application::error::ApplicationResult,
    domain::{article::ArticleReadRepository, tusker::TuskerReadRepository},
};

const STATIC_PAGES: &[(&str, &str, &str)] = &[
    ("/", "daily", "1.0"),
    ("/about", "monthly", "0.8"),
    ("/contact", "monthly", "0.8"),
    ("/tuskers", "daily", "1.0"),
    ("/articles", "daily", "1.0"),
    ("/search-results", "daily", "1.0"),
];

/// Assembles the sitemap.xml body from static pages plus the slugs of all
/// published records. Records still waiting on slug backfill are skipped,
/// not treated as errors; they join the sitemap once the backfill job has
/// assigned them a slug.
pub struct SitemapService {
    article_repo: Arc<dyn ArticleReadRepository>,
    tusker_repo: Arc<dyn TuskerReadRepository>,
    base_url: String,
}

impl SitemapService {
    pub fn new(
        article_repo: Arc<dyn ArticleReadRepository>,
        tusker_repo: Arc<dyn TuskerReadRepository>,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            article_repo,
            tusker_repo,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn build_sitemap(&self) -> ApplicationResult<String> {
        let mut xml = String::from(concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
        ));

        for (path, changefreq, priority) in STATIC_PAGES {
            self.push_entry(&mut xml, path, changefreq, priority);
        }

        let mut skipped = 0usize;

        for tusker in self.tusker_repo.list().await? {
            match &tusker.slug {
                Some(slug) => {
                    self.push_entry(&mut xml, &format!("/tusker/{slug}"), "daily", "1.0");
                }
                None => skipped += 1,
            }
        }

        for article in self.article_repo.list().await? {
            match &article.slug {
                Some(slug) => {
                    self.push_entry(&mut xml, &format!("/article/{slug}"), "weekly", "0.8");
                }
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            tracing::debug!(skipped, "records without slugs omitted from sitemap");
        }

        xml.push_str("</urlset>\n");
        Ok(xml)
    }

    fn push_entry(&self, xml: &mut String, path: &str, changefreq: &str, priority: &str) {
        let loc = xml_escape(&format!("{}{path}", self.base_url));
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{loc}</loc>\n"));
        xml.push_str(&format!("    <changefreq>{changefreq}</changefreq>\n"));
        xml.push_str(&format!("    <priority>{priority}</priority>\n"));
        xml.push_str("  </url>\n");
    }
}

fn xml_escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}
