use crate::domain::model::{
    ApiReply, Article, Credentials, Fragment, PreferenceSelection, Region,
};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The JSON endpoints of the curation backend.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn signup(
        &self,
        credentials: &Credentials,
        preferences: &PreferenceSelection,
    ) -> Result<ApiReply>;
    async fn login(&self, credentials: &Credentials) -> Result<ApiReply>;
    async fn change_preferences(&self, preferences: &PreferenceSelection) -> Result<ApiReply>;
    async fn user_preferences(&self) -> Result<Vec<String>>;
    async fn fetch_articles(&self) -> Result<Vec<Article>>;
    async fn save_article(&self, article: &Article) -> Result<ApiReply>;
    async fn saved_articles(&self) -> Result<Vec<Article>>;
    async fn delete_article(&self, url: &str) -> Result<ApiReply>;
    async fn logout(&self) -> Result<()>;
}

/// What the controller can do to the page it is bound to.
pub trait Page {
    /// Current path, e.g. `/saved_articles`.
    fn location(&self) -> &str;
    fn has_region(&self, region: Region) -> bool;
    fn alert(&mut self, message: &str);
    fn navigate(&mut self, path: &str);
    fn reload(&mut self);
    fn clear(&mut self, region: Region);
    fn append(&mut self, region: Region, fragment: Fragment);
}
