use serde::{Deserialize, Serialize};

/// How links to parent headings are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ParentLinks {
    Hidden,
    #[default]
    Parent,
    Interlinked,
}

impl ParentLinks {
    pub const ALL: [Self; 3] = [Self::Hidden, Self::Parent, Self::Interlinked];

    pub fn label(self) -> &'static str {
        match self {
            Self::Hidden => "Don't show",
            Self::Parent => "Link to parent",
            Self::Interlinked => "Interlink siblings",
        }
    }
}

// Which nodes and links make it into the graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub orphans: bool,
    pub dailies: bool,
    pub parent: ParentLinks,
    pub fileless_cites: bool,
    /// Show links whose target does not exist.
    pub bad: bool,
    pub tags_blacklist: Vec<String>,
    pub tags_whitelist: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            orphans: false,
            dailies: false,
            parent: ParentLinks::Parent,
            fileless_cites: false,
            bad: true,
            tags_blacklist: Vec::new(),
            tags_whitelist: Vec::new(),
        }
    }
}

impl FilterConfig {
    /// Adds `tag` to the blacklist, dropping it from the whitelist.
    pub fn blacklist(&mut self, tag: &str) {
        self.tags_whitelist.retain(|t| t != tag);
        if !self.tags_blacklist.iter().any(|t| t == tag) {
            self.tags_blacklist.push(tag.to_owned());
        }
    }

    /// Adds `tag` to the whitelist, dropping it from the blacklist.
    pub fn whitelist(&mut self, tag: &str) {
        self.tags_blacklist.retain(|t| t != tag);
        if !self.tags_whitelist.iter().any(|t| t == tag) {
            self.tags_whitelist.push(tag.to_owned());
        }
    }

    pub fn unlist(&mut self, tag: &str) {
        self.tags_blacklist.retain(|t| t != tag);
        self.tags_whitelist.retain(|t| t != tag);
    }
}
