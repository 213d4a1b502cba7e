use crate::domain::model::{Article, Credentials};

/// A user action the controller reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    SubmitSignup {
        credentials: Credentials,
        checked: Vec<String>,
    },
    SubmitLogin(Credentials),
    SubmitPreferences {
        checked: Vec<String>,
    },
    FetchArticles,
    SaveArticle(Article),
    DeleteArticle {
        url: String,
    },
    Logout,
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::SubmitSignup { .. } => "submit_signup",
            Event::SubmitLogin(_) => "submit_login",
            Event::SubmitPreferences { .. } => "submit_preferences",
            Event::FetchArticles => "fetch_articles",
            Event::SaveArticle(_) => "save_article",
            Event::DeleteArticle { .. } => "delete_article",
            Event::Logout => "logout",
        }
    }
}
