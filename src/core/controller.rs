use crate::core::render::Templates;
use crate::domain::event::Event;
use crate::domain::model::{Article, Credentials, PreferenceSelection, Region};
use crate::domain::ports::{Backend, Page};
use crate::utils::error::{ClientError, Result};

pub const SIGNUP_SUCCESS: &str = "Signup successful! You can now log in.";
pub const LOGIN_FAILED: &str = "Invalid username or password.";
pub const PREFERENCES_UPDATED: &str = "Preferences updated successfully!";
pub const PREFERENCES_FAILED: &str = "Error updating preferences. Please try again.";
pub const ARTICLE_SAVED: &str = "Article saved successfully!";
pub const ARTICLE_NOT_SAVED: &str = "Article could not be saved.";
pub const ARTICLE_DELETED: &str = "Article deleted successfully";

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const SAVED_ARTICLES_PATH: &str = "/saved_articles";

/// How a handled event ended. Failures have already been alerted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// Nothing to do on this page.
    Skipped,
    /// Blocked locally or refused by the server.
    Rejected,
    /// The request did not complete.
    Failed,
}

impl Outcome {
    pub fn is_done(&self) -> bool {
        matches!(self, Outcome::Done | Outcome::Skipped)
    }
}

/// Binds page events to backend calls and renders the replies.
pub struct Controller<B: Backend, P: Page> {
    backend: B,
    page: P,
    templates: Templates,
}

impl<B: Backend, P: Page> Controller<B, P> {
    pub fn new(backend: B, page: P) -> Result<Self> {
        Ok(Self {
            backend,
            page,
            templates: Templates::new()?,
        })
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    /// Page-load work: the preference list wherever the page shows one and the
    /// saved listing on its own route.
    pub async fn on_ready(&mut self) -> Outcome {
        tracing::debug!("page ready at {}", self.page.location());

        let mut outcome = Outcome::Skipped;
        if self.page.has_region(Region::UserPreferences) {
            outcome = self.load_user_preferences().await;
        }
        if self.page.location() == SAVED_ARTICLES_PATH {
            let saved = self.load_saved_articles().await;
            if outcome.is_done() {
                outcome = saved;
            }
        }
        outcome
    }

    pub async fn dispatch(&mut self, event: Event) -> Outcome {
        tracing::debug!("dispatching {}", event.name());

        match event {
            Event::SubmitSignup {
                credentials,
                checked,
            } => self.submit_signup(credentials, &checked).await,
            Event::SubmitLogin(credentials) => self.submit_login(credentials).await,
            Event::SubmitPreferences { checked } => self.submit_preferences(&checked).await,
            Event::FetchArticles => self.fetch_articles().await,
            Event::SaveArticle(article) => self.save_article(&article).await,
            Event::DeleteArticle { url } => self.delete_article(&url).await,
            Event::Logout => self.logout().await,
        }
    }

    pub async fn submit_signup(&mut self, credentials: Credentials, checked: &[String]) -> Outcome {
        let preferences = match PreferenceSelection::from_checked(checked.iter().cloned()) {
            Ok(preferences) => preferences,
            Err(e) => return self.fail("signup", e),
        };

        match self.backend.signup(&credentials, &preferences).await {
            Ok(reply) if reply.success => {
                tracing::info!("signed up {}", credentials.username);
                self.page.alert(SIGNUP_SUCCESS);
                self.page.navigate(LOGIN_PATH);
                Outcome::Done
            }
            Ok(reply) => {
                let message = format!("Error during signup: {}", reply.message_or("unknown error"));
                self.page.alert(&message);
                Outcome::Rejected
            }
            Err(e) => self.fail("signup", e),
        }
    }

    pub async fn submit_login(&mut self, credentials: Credentials) -> Outcome {
        match self.backend.login(&credentials).await {
            Ok(reply) if reply.success => {
                tracing::info!("logged in as {}", credentials.username);
                self.page.navigate(DASHBOARD_PATH);
                Outcome::Done
            }
            Ok(_) => {
                self.page.alert(LOGIN_FAILED);
                Outcome::Rejected
            }
            Err(e) => self.fail("login", e),
        }
    }

    pub async fn submit_preferences(&mut self, checked: &[String]) -> Outcome {
        let preferences = match PreferenceSelection::from_checked(checked.iter().cloned()) {
            Ok(preferences) => preferences,
            Err(e) => return self.fail("change preferences", e),
        };

        match self.backend.change_preferences(&preferences).await {
            Ok(reply) if reply.success => {
                self.page.alert(reply.message_or(PREFERENCES_UPDATED));
                Outcome::Done
            }
            Ok(reply) => {
                self.page.alert(reply.message_or(PREFERENCES_FAILED));
                Outcome::Rejected
            }
            Err(e) => self.fail("change preferences", e),
        }
    }

    pub async fn load_user_preferences(&mut self) -> Outcome {
        let names = match self.backend.user_preferences().await {
            Ok(names) => names,
            Err(e) => return self.fail("load preferences", e),
        };

        self.page.clear(Region::UserPreferences);
        for name in &names {
            match self.templates.preference_item(name) {
                Ok(fragment) => self.page.append(Region::UserPreferences, fragment),
                Err(e) => return self.fail("render preferences", e),
            }
        }
        Outcome::Done
    }

    pub async fn fetch_articles(&mut self) -> Outcome {
        let articles = match self.backend.fetch_articles().await {
            Ok(articles) => articles,
            Err(e) => return self.fail("fetch articles", e),
        };

        let cached = articles.iter().filter(|a| a.is_cached).count();
        tracing::info!(
            "fetched {} articles ({} cached, {} live)",
            articles.len(),
            cached,
            articles.len() - cached
        );

        self.page.clear(Region::Articles);
        for article in &articles {
            match self.templates.feed_card(article) {
                Ok(fragment) => self.page.append(Region::Articles, fragment),
                Err(e) => return self.fail("render articles", e),
            }
        }
        Outcome::Done
    }

    pub async fn save_article(&mut self, article: &Article) -> Outcome {
        match self.backend.save_article(article).await {
            Ok(reply) if reply.success => {
                self.page.alert(reply.message_or(ARTICLE_SAVED));
                Outcome::Done
            }
            Ok(reply) => {
                self.page.alert(reply.message_or(ARTICLE_NOT_SAVED));
                Outcome::Rejected
            }
            Err(e) => self.fail("save article", e),
        }
    }

    pub async fn load_saved_articles(&mut self) -> Outcome {
        if self.page.location() != SAVED_ARTICLES_PATH {
            return Outcome::Skipped;
        }

        let articles = match self.backend.saved_articles().await {
            Ok(articles) => articles,
            Err(e) => return self.fail("load saved articles", e),
        };

        self.page.clear(Region::SavedArticles);
        for article in &articles {
            match self.templates.saved_card(article) {
                Ok(fragment) => self.page.append(Region::SavedArticles, fragment),
                Err(e) => return self.fail("render saved articles", e),
            }
        }
        Outcome::Done
    }

    pub async fn delete_article(&mut self, url: &str) -> Outcome {
        match self.backend.delete_article(url).await {
            Ok(reply) if reply.success => {
                self.page.alert(ARTICLE_DELETED);
                self.page.reload();
                Outcome::Done
            }
            Ok(reply) => {
                let message = format!(
                    "Failed to delete article: {}",
                    reply.message_or("unknown error")
                );
                self.page.alert(&message);
                Outcome::Rejected
            }
            Err(e) => self.fail("delete article", e),
        }
    }

    pub async fn logout(&mut self) -> Outcome {
        match self.backend.logout().await {
            Ok(()) => {
                self.page.navigate(LOGIN_PATH);
                Outcome::Done
            }
            Err(e) => self.fail("logout", e),
        }
    }

    fn fail(&mut self, action: &str, err: ClientError) -> Outcome {
        self.page.alert(&err.alert_message());
        match err {
            ClientError::ValidationError { .. } => {
                tracing::warn!("{} blocked: {}", action, err);
                Outcome::Rejected
            }
            _ => {
                tracing::error!("{} failed: {}", action, err);
                Outcome::Failed
            }
        }
    }
}
