//! HTML fragments for the listing regions.
//!
//! Templates are registered under `.html` names so `minijinja` escapes every
//! interpolated value; article titles and URLs come from a third-party feed.

use crate::domain::event::Event;
use crate::domain::model::{Article, Fragment};
use crate::utils::error::Result;
use minijinja::{context, Environment};

const PREFERENCE_ITEM: &str = "<li>{{ name }}</li>";

const FEED_CARD: &str = r#"<div class="article-box">
    <h3>{{ title }}</h3>
    <p>{{ section }}</p>
    <span class="{{ label_class }}">{{ label_text }}</span><br>
    <a href="{{ url }}" target="_blank" class="button-link">Read More</a>
    <button class="save-article">Save Article</button>
</div>"#;

const SAVED_CARD: &str = r#"<div class="article-box">
    <h3>{{ title }}</h3>
    <p>{{ section }}</p>
    <a href="{{ url }}" target="_blank" class="button-link">Read More</a>
    <button class="delete-button" data-url="{{ url }}">Delete</button>
</div>"#;

/// Label shown on a feed card.
pub fn source_label(article: &Article) -> (&'static str, &'static str) {
    if article.is_cached {
        ("cached-label", "Cached Article")
    } else {
        ("api-label", "API Fetched")
    }
}

pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template("preference_item.html", PREFERENCE_ITEM)?;
        env.add_template("feed_card.html", FEED_CARD)?;
        env.add_template("saved_card.html", SAVED_CARD)?;
        Ok(Self { env })
    }

    pub fn preference_item(&self, name: &str) -> Result<Fragment> {
        let html = self
            .env
            .get_template("preference_item.html")?
            .render(context! { name => name })?;

        Ok(Fragment {
            html,
            text: name.to_string(),
            on_click: None,
        })
    }

    /// A feed card whose button saves the article.
    pub fn feed_card(&self, article: &Article) -> Result<Fragment> {
        let (label_class, label_text) = source_label(article);
        let html = self.env.get_template("feed_card.html")?.render(context! {
            title => &article.web_title,
            section => &article.section_name,
            url => &article.web_url,
            label_class => label_class,
            label_text => label_text,
        })?;

        Ok(Fragment {
            html,
            text: format!(
                "[{}] {} ({}) {}",
                label_text, article.web_title, article.section_name, article.web_url
            ),
            on_click: Some(Event::SaveArticle(article.clone())),
        })
    }

    /// A saved-article card whose button deletes it.
    pub fn saved_card(&self, article: &Article) -> Result<Fragment> {
        let html = self.env.get_template("saved_card.html")?.render(context! {
            title => &article.web_title,
            section => &article.section_name,
            url => &article.web_url,
        })?;

        let mut text = format!(
            "{} ({}) {}",
            article.web_title, article.section_name, article.web_url
        );
        if let Some(saved_at) = article.saved_at_utc() {
            text.push_str(&format!(" saved {}", saved_at.format("%Y-%m-%d %H:%M")));
        }

        Ok(Fragment {
            html,
            text,
            on_click: Some(Event::DeleteArticle {
                url: article.web_url.clone(),
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_item() {
        let templates = Templates::new().unwrap();
        let fragment = templates.preference_item("Technology").unwrap();
        assert_eq!(fragment.html, "<li>Technology</li>");
        assert_eq!(fragment.text, "Technology");
        assert!(fragment.on_click.is_none());
    }

    #[test]
    fn test_feed_card_labels() {
        let templates = Templates::new().unwrap();

        let cached = Article::new("Cached one", "Business", "https://example.com/c").cached(true);
        let fragment = templates.feed_card(&cached).unwrap();
        assert!(fragment.html.contains(r#"<span class="cached-label">Cached Article</span>"#));
        assert!(fragment.text.starts_with("[Cached Article] Cached one"));

        let live = Article::new("Live one", "Sport", "https://example.com/l");
        let fragment = templates.feed_card(&live).unwrap();
        assert!(fragment.html.contains(r#"<span class="api-label">API Fetched</span>"#));
        assert!(fragment.html.contains(r#"<button class="save-article">Save Article</button>"#));
        assert_eq!(fragment.on_click, Some(Event::SaveArticle(live)));
    }

    #[test]
    fn test_feed_card_escapes_title() {
        let templates = Templates::new().unwrap();
        let article = Article::new("<script>alert(1)</script>", "Tech", "https://example.com/x");
        let fragment = templates.feed_card(&article).unwrap();

        assert!(!fragment.html.contains("<script>"));
        assert!(fragment.html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_saved_card_binds_delete() {
        let templates = Templates::new().unwrap();
        let mut article = Article::new("Kept", "World", "https://example.com/kept");
        article.saved_at = Some("Sat, 17 Oct 2026 09:30:00 GMT".to_string());

        let fragment = templates.saved_card(&article).unwrap();
        assert!(fragment.html.contains(r#"class="delete-button""#));
        assert!(fragment.html.contains("data-url="));
        assert!(fragment.text.ends_with("saved 2026-10-17 09:30"));
        assert_eq!(
            fragment.on_click,
            Some(Event::DeleteArticle {
                url: "https://example.com/kept".to_string()
            })
        );
    }
}
