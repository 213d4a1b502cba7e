use crate::domain::event::Event;
use crate::domain::model::{Fragment, Region};
use crate::domain::ports::Page;
use std::collections::HashMap;

/// In-memory page: a location, the regions it contains, and a record of
/// everything the controller did to it.
#[derive(Debug, Clone, Default)]
pub struct Document {
    location: String,
    regions: HashMap<Region, Vec<Fragment>>,
    alerts: Vec<String>,
    history: Vec<String>,
    reloads: usize,
}

impl Document {
    pub fn at(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            ..Self::default()
        }
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.regions.entry(region).or_default();
        self
    }

    pub fn with_all_regions(self) -> Self {
        self.with_region(Region::UserPreferences)
            .with_region(Region::Articles)
            .with_region(Region::SavedArticles)
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn last_alert(&self) -> Option<&str> {
        self.alerts.last().map(String::as_str)
    }

    /// Paths navigated to, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn reloads(&self) -> usize {
        self.reloads
    }

    pub fn fragments(&self, region: Region) -> &[Fragment] {
        self.regions.get(&region).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn inner_html(&self, region: Region) -> String {
        self.fragments(region)
            .iter()
            .map(|fragment| fragment.html.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The event bound to the `index`-th fragment of a region, if it is clickable.
    pub fn click(&self, region: Region, index: usize) -> Option<Event> {
        self.fragments(region)
            .get(index)
            .and_then(|fragment| fragment.on_click.clone())
    }
}

impl Page for Document {
    fn location(&self) -> &str {
        &self.location
    }

    fn has_region(&self, region: Region) -> bool {
        self.regions.contains_key(&region)
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn navigate(&mut self, path: &str) {
        self.history.push(path.to_string());
        self.location = path.to_string();
    }

    fn reload(&mut self) {
        self.reloads += 1;
    }

    fn clear(&mut self, region: Region) {
        if let Some(fragments) = self.regions.get_mut(&region) {
            fragments.clear();
        }
    }

    fn append(&mut self, region: Region, fragment: Fragment) {
        match self.regions.get_mut(&region) {
            Some(fragments) => fragments.push(fragment),
            None => tracing::warn!(
                "no #{} on {}, dropping fragment",
                region.element_id(),
                self.location
            ),
        }
    }
}

/// A `Document` that echoes what happens to it on stdout.
#[derive(Debug, Clone)]
pub struct TerminalPage {
    document: Document,
    html: bool,
}

impl TerminalPage {
    pub fn new(location: impl Into<String>, html: bool) -> Self {
        Self {
            document: Document::at(location).with_all_regions(),
            html,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Page for TerminalPage {
    fn location(&self) -> &str {
        self.document.location()
    }

    fn has_region(&self, region: Region) -> bool {
        self.document.has_region(region)
    }

    fn alert(&mut self, message: &str) {
        println!("⚠️  {}", message);
        self.document.alert(message);
    }

    fn navigate(&mut self, path: &str) {
        println!("➡️  {}", path);
        self.document.navigate(path);
    }

    fn reload(&mut self) {
        println!("🔄 {}", self.document.location());
        self.document.reload();
    }

    fn clear(&mut self, region: Region) {
        self.document.clear(region);
    }

    fn append(&mut self, region: Region, fragment: Fragment) {
        let position = self.document.fragments(region).len() + 1;
        if self.html {
            println!("{}", fragment.html);
        } else if region == Region::UserPreferences {
            println!("  • {}", fragment.text);
        } else {
            println!("{:>3}. {}", position, fragment.text);
        }
        self.document.append(region, fragment);
    }
}
