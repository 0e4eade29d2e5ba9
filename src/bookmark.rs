use serde::{Deserialize, Serialize};

/// A node of the bookmarks tree as stored by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BookmarkItem {
    Folder {
        path: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default)]
        ctime: i64,
    },
    File {
        path: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        /// Heading or block reference inside the file, e.g. `#Intro`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subpath: Option<String>,
        #[serde(default)]
        ctime: i64,
    },
    Group {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default)]
        items: Vec<BookmarkItem>,
        #[serde(default)]
        ctime: i64,
    },
    Search {
        query: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default)]
        ctime: i64,
    },
}

impl BookmarkItem {
    pub fn file(path: impl Into<String>, title: Option<&str>) -> Self {
        BookmarkItem::File {
            path: path.into(),
            title: title.map(str::to_string),
            subpath: None,
            ctime: 0,
        }
    }

    pub fn folder(path: impl Into<String>) -> Self {
        BookmarkItem::Folder {
            path: path.into(),
            title: None,
            ctime: 0,
        }
    }

    pub fn group(title: Option<&str>, items: Vec<BookmarkItem>) -> Self {
        BookmarkItem::Group {
            title: title.map(str::to_string),
            items,
            ctime: 0,
        }
    }

    pub fn search(query: impl Into<String>, title: Option<&str>) -> Self {
        BookmarkItem::Search {
            query: query.into(),
            title: title.map(str::to_string),
            ctime: 0,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            BookmarkItem::Folder { title, .. }
            | BookmarkItem::File { title, .. }
            | BookmarkItem::Group { title, .. }
            | BookmarkItem::Search { title, .. } => title.as_deref(),
        }
    }

    /// Creation time, used by the host to order bookmarks.
    pub fn ctime(&self) -> i64 {
        match self {
            BookmarkItem::Folder { ctime, .. }
            | BookmarkItem::File { ctime, .. }
            | BookmarkItem::Group { ctime, .. }
            | BookmarkItem::Search { ctime, .. } => *ctime,
        }
    }

    pub fn path(&self) -> Option<&str> {
        match self {
            BookmarkItem::Folder { path, .. } | BookmarkItem::File { path, .. } => Some(path),
            BookmarkItem::Group { .. } | BookmarkItem::Search { .. } => None,
        }
    }

    /// Text shown to the user and matched against the filter.
    pub fn display_title(&self) -> String {
        if let Some(title) = self.title().filter(|t| !t.trim().is_empty()) {
            return title.to_string();
        }
        match self {
            BookmarkItem::File { path, .. } => {
                let name = last_segment(path);
                name.strip_suffix(".md").unwrap_or(name).to_string()
            }
            BookmarkItem::Folder { path, .. } => last_segment(path).to_string(),
            BookmarkItem::Search { query, .. } => query.clone(),
            BookmarkItem::Group { .. } => String::new(),
        }
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
