//! Blog content model: post metadata, list pagination, and blog sidebars.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::BlogError;

/// A tag attached to a post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub label: String,
    pub permalink: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub image_url: Option<String>,
}

/// Link to a neighbouring page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub title: String,
    pub permalink: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlogPostMetadata {
    pub permalink: String,
    /// Source file the post was loaded from.
    pub source: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub formatted_date: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// Estimated reading time in minutes.
    #[serde(default)]
    pub reading_time: Option<f64>,
    /// Whether the post has a truncation marker for list views.
    #[serde(default)]
    pub truncated: bool,
    #[serde(default)]
    pub authors: Vec<Author>,
    /// Newer post.
    #[serde(default)]
    pub prev_item: Option<NavLink>,
    /// Older post.
    #[serde(default)]
    pub next_item: Option<NavLink>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub metadata: BlogPostMetadata,
    pub content: String,
}

/// Long form used on post headers, e.g. "March 4, 2024".
pub fn format_post_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Posts per list page. Written as `"ALL"` or a number in config.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PostsPerPageRepr", into = "PostsPerPageRepr")]
pub enum PostsPerPage {
    All,
    Count(usize),
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum PostsPerPageRepr {
    Keyword(AllKeyword),
    Count(usize),
}

#[derive(Serialize, Deserialize)]
enum AllKeyword {
    #[serde(rename = "ALL")]
    All,
}

impl From<PostsPerPageRepr> for PostsPerPage {
    fn from(repr: PostsPerPageRepr) -> Self {
        match repr {
            PostsPerPageRepr::Keyword(AllKeyword::All) => PostsPerPage::All,
            PostsPerPageRepr::Count(n) => PostsPerPage::Count(n),
        }
    }
}

impl From<PostsPerPage> for PostsPerPageRepr {
    fn from(value: PostsPerPage) -> Self {
        match value {
            PostsPerPage::All => PostsPerPageRepr::Keyword(AllKeyword::All),
            PostsPerPage::Count(n) => PostsPerPageRepr::Count(n),
        }
    }
}

impl Default for PostsPerPage {
    fn default() -> Self {
        PostsPerPage::Count(10)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPaginatedMetadata {
    pub permalink: String,
    /// 1-based page number.
    pub page: usize,
    pub posts_per_page: usize,
    pub total_pages: usize,
    pub total_count: usize,
    pub previous_page: Option<String>,
    pub next_page: Option<String>,
    pub blog_title: String,
    pub blog_description: String,
}

/// One list page and the ids of the posts on it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPaginated {
    pub metadata: BlogPaginatedMetadata,
    pub items: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogSidebar {
    pub title: String,
    pub items: Vec<NavLink>,
}

fn page_permalink(base_url: &str, page: usize) -> String {
    if page == 0 {
        base_url.to_string()
    } else {
        format!("{}/page/{}", base_url.trim_end_matches('/'), page + 1)
    }
}

/// Split post ids into list pages.
///
/// The first page lives at `base_url`, later ones at `base_url/page/N`.
pub fn paginate(
    post_ids: &[String],
    posts_per_page: PostsPerPage,
    base_url: &str,
    blog_title: &str,
    blog_description: &str,
) -> Result<Vec<BlogPaginated>, BlogError> {
    let total_count = post_ids.len();
    let per_page = match posts_per_page {
        PostsPerPage::Count(0) => return Err(BlogError::InvalidPostsPerPage),
        PostsPerPage::Count(n) => n,
        PostsPerPage::All => total_count.max(1),
    };
    let total_pages = total_count.div_ceil(per_page);

    let pages = post_ids
        .chunks(per_page)
        .enumerate()
        .map(|(page, ids)| BlogPaginated {
            metadata: BlogPaginatedMetadata {
                permalink: page_permalink(base_url, page),
                page: page + 1,
                posts_per_page: per_page,
                total_pages,
                total_count,
                previous_page: (page > 0).then(|| page_permalink(base_url, page - 1)),
                next_page: (page + 1 < total_pages).then(|| page_permalink(base_url, page + 1)),
                blog_title: blog_title.to_string(),
                blog_description: blog_description.to_string(),
            },
            items: ids.to_vec(),
        })
        .collect();

    Ok(pages)
}

/// The "recent posts" sidebar shown beside blog pages.
pub fn blog_sidebar(posts: &[BlogPost], count: PostsPerPage, title: &str) -> BlogSidebar {
    let take = match count {
        PostsPerPage::All => posts.len(),
        PostsPerPage::Count(n) => n,
    };
    BlogSidebar {
        title: title.to_string(),
        items: posts
            .iter()
            .take(take)
            .map(|post| NavLink {
                title: post.metadata.title.clone(),
                permalink: post.metadata.permalink.clone(),
            })
            .collect(),
    }
}

/// Fill `prev_item`/`next_item` for posts ordered newest first.
pub fn link_neighbours(posts: &mut [BlogPost]) {
    let links: Vec<NavLink> = posts
        .iter()
        .map(|post| NavLink {
            title: post.metadata.title.clone(),
            permalink: post.metadata.permalink.clone(),
        })
        .collect();

    for (idx, post) in posts.iter_mut().enumerate() {
        post.metadata.prev_item = idx.checked_sub(1).map(|prev| links[prev].clone());
        post.metadata.next_item = links.get(idx + 1).cloned();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("post-{i}")).collect()
    }

    fn post(id: &str, title: &str) -> BlogPost {
        let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        BlogPost {
            id: id.to_string(),
            metadata: BlogPostMetadata {
                permalink: format!("/blog/{id}"),
                source: format!("blog/{id}.md"),
                title: title.to_string(),
                description: String::new(),
                date,
                formatted_date: format_post_date(date),
                tags: vec![],
                reading_time: Some(2.5),
                truncated: false,
                authors: vec![],
                prev_item: None,
                next_item: None,
            },
            content: String::new(),
        }
    }

    #[test]
    fn test_paginate_pages_and_links() {
        let pages = paginate(&ids(25), PostsPerPage::Count(10), "/blog", "Blog", "News").unwrap();
        assert_eq!(pages.len(), 3);

        let first = &pages[0].metadata;
        assert_eq!(first.permalink, "/blog");
        assert_eq!(first.page, 1);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.total_count, 25);
        assert_eq!(first.previous_page, None);
        assert_eq!(first.next_page.as_deref(), Some("/blog/page/2"));

        let second = &pages[1].metadata;
        assert_eq!(second.permalink, "/blog/page/2");
        assert_eq!(second.previous_page.as_deref(), Some("/blog"));
        assert_eq!(second.next_page.as_deref(), Some("/blog/page/3"));

        assert_eq!(pages[2].items, vec!["post-21", "post-22", "post-23", "post-24", "post-25"]);
        assert_eq!(pages[2].metadata.next_page, None);
    }

    #[test]
    fn test_paginate_all_on_one_page() {
        let pages = paginate(&ids(7), PostsPerPage::All, "/blog/", "Blog", "").unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].items.len(), 7);
        assert_eq!(pages[0].metadata.posts_per_page, 7);
    }

    #[test]
    fn test_paginate_empty_and_invalid() {
        assert!(paginate(&[], PostsPerPage::Count(10), "/blog", "Blog", "").unwrap().is_empty());
        assert!(paginate(&[], PostsPerPage::All, "/blog", "Blog", "").unwrap().is_empty());
        assert!(matches!(
            paginate(&ids(3), PostsPerPage::Count(0), "/blog", "Blog", ""),
            Err(BlogError::InvalidPostsPerPage)
        ));
    }

    #[test]
    fn test_blog_sidebar_takes_recent() {
        let posts = vec![post("c", "Third"), post("b", "Second"), post("a", "First")];
        let sidebar = blog_sidebar(&posts, PostsPerPage::Count(2), "Recent posts");
        assert_eq!(sidebar.title, "Recent posts");
        assert_eq!(sidebar.items.len(), 2);
        assert_eq!(sidebar.items[0].permalink, "/blog/c");
        assert_eq!(blog_sidebar(&posts, PostsPerPage::All, "All").items.len(), 3);
    }

    #[test]
    fn test_link_neighbours() {
        let mut posts = vec![post("c", "Third"), post("b", "Second"), post("a", "First")];
        link_neighbours(&mut posts);
        assert_eq!(posts[0].metadata.prev_item, None);
        assert_eq!(posts[0].metadata.next_item.as_ref().unwrap().title, "Second");
        assert_eq!(posts[1].metadata.prev_item.as_ref().unwrap().title, "Third");
        assert_eq!(posts[2].metadata.next_item, None);
    }

    #[test]
    fn test_format_post_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        assert_eq!(format_post_date(date), "March 4, 2024");
    }

    #[test]
    fn test_posts_per_page_config_shape() {
        let all: PostsPerPage = serde_json::from_str(r#""ALL""#).unwrap();
        assert_eq!(all, PostsPerPage::All);
        let count: PostsPerPage = serde_json::from_str("5").unwrap();
        assert_eq!(count, PostsPerPage::Count(5));

        assert_eq!(serde_json::to_string(&PostsPerPage::All).unwrap(), r#""ALL""#);
        assert_eq!(serde_json::to_string(&PostsPerPage::default()).unwrap(), "10");
        assert!(serde_json::from_str::<PostsPerPage>(r#""all""#).is_err());
    }
}
