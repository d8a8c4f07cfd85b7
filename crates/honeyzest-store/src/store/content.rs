//! # Editorial Content
//!
//! Blog posts and their comments, plus the site-wide contact, about and
//! legal records.

use chrono::NaiveDate;
use honeyzest_core::validation::validate_text;
use honeyzest_core::{
    AboutInfo, Blog, BlogId, Comment, CommentId, ContactInfo, CoreError, Faq, FaqId, LegalInfo,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::ids::claim_child_ids;
use super::Store;
use crate::error::StoreResult;

/// Admin blog form. With `id` set the post is replaced; otherwise a new
/// post is published. `date` defaults to today, `comments` are kept unless
/// supplied. Supplied comments never share an id with each other or with
/// another post's comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogDraft {
    #[serde(default)]
    pub id: Option<BlogId>,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub comments: Option<Vec<Comment>>,
}

/// A wholesale replacement of one site content record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "lowercase")]
pub enum SiteContentUpdate {
    Contact(ContactInfo),
    About(AboutInfo),
    Legal(LegalInfo),
}

impl SiteContentUpdate {
    fn kind(&self) -> &'static str {
        match self {
            SiteContentUpdate::Contact(_) => "contact",
            SiteContentUpdate::About(_) => "about",
            SiteContentUpdate::Legal(_) => "legal",
        }
    }
}

impl Store {
    /// Publishes or edits a blog post. Admin only.
    pub fn save_blog(&mut self, mut draft: BlogDraft) -> StoreResult<BlogId> {
        self.require_admin("publish blog posts")?;
        validate_text("title", &draft.title, 200)?;
        validate_text("content", &draft.content, 20_000)?;

        let target = draft.id;
        if let Some(comments) = draft.comments.as_mut() {
            let blogs = &self.blogs;
            let replaced = claim_child_ids(comments, |comment_id| {
                blogs
                    .iter()
                    .filter(|b| Some(b.id) != target)
                    .any(|b| b.comments.iter().any(|c| c.id == *comment_id))
            });
            if replaced > 0 {
                debug!(replaced, "Reassigned duplicate comment ids");
            }
        }

        let date = draft.date.unwrap_or_else(Store::today);
        match draft.id {
            Some(id) => {
                let blog = self
                    .blogs
                    .iter_mut()
                    .find(|b| b.id == id)
                    .ok_or(CoreError::BlogNotFound(id))?;
                blog.title = draft.title;
                blog.content = draft.content;
                blog.image = draft.image;
                blog.date = date;
                if let Some(comments) = draft.comments {
                    blog.comments = comments;
                }
                info!(blog_id = %id, "Blog post updated");
                Ok(id)
            }
            None => {
                let id = self.ids.blog();
                self.blogs.push(Blog {
                    id,
                    title: draft.title,
                    content: draft.content,
                    image: draft.image,
                    date,
                    comments: draft.comments.unwrap_or_default(),
                });
                info!(blog_id = %id, "Blog post published");
                Ok(id)
            }
        }
    }

    /// Removes a blog post with its comments. Admin only.
    pub fn delete_blog(&mut self, id: BlogId) -> StoreResult<Blog> {
        self.require_admin("delete blog posts")?;

        let index = self
            .blogs
            .iter()
            .position(|b| b.id == id)
            .ok_or(CoreError::BlogNotFound(id))?;
        let removed = self.blogs.remove(index);
        info!(blog_id = %id, "Blog post deleted");
        Ok(removed)
    }

    /// Appends a visitor comment. No author is recorded.
    pub fn add_comment(&mut self, blog_id: BlogId, text: &str) -> StoreResult<CommentId> {
        validate_text("comment", text, 2000)?;

        let blog = self
            .blogs
            .iter_mut()
            .find(|b| b.id == blog_id)
            .ok_or(CoreError::BlogNotFound(blog_id))?;

        let comment = Comment {
            id: CommentId::new(),
            text: text.trim().to_string(),
        };
        let comment_id = comment.id;
        blog.comments.push(comment);

        debug!(blog_id = %blog_id, comment_id = %comment_id, "Comment added");
        Ok(comment_id)
    }

    /// Removes one comment by id. Admin only.
    pub fn delete_comment(&mut self, blog_id: BlogId, comment_id: CommentId) -> StoreResult<Comment> {
        self.require_admin("moderate comments")?;

        let blog = self
            .blogs
            .iter_mut()
            .find(|b| b.id == blog_id)
            .ok_or(CoreError::BlogNotFound(blog_id))?;
        let index = blog
            .comments
            .iter()
            .position(|c| c.id == comment_id)
            .ok_or(CoreError::CommentNotFound {
                blog: blog_id,
                comment: comment_id,
            })?;

        let removed = blog.comments.remove(index);
        info!(blog_id = %blog_id, comment_id = %comment_id, "Comment deleted");
        Ok(removed)
    }

    /// Replaces the contact, about or legal record. Admin only.
    ///
    /// Repeated FAQ ids in a legal update are replaced so each entry stays
    /// addressable by [`Store::remove_faq`].
    pub fn save_content(&mut self, update: SiteContentUpdate) -> StoreResult<()> {
        self.require_admin("edit site content")?;

        let kind = update.kind();
        match update {
            SiteContentUpdate::Contact(contact) => self.content.contact = contact,
            SiteContentUpdate::About(about) => self.content.about = about,
            SiteContentUpdate::Legal(mut legal) => {
                let replaced = claim_child_ids(&mut legal.faqs, |_| false);
                if replaced > 0 {
                    debug!(replaced, "Reassigned duplicate FAQ ids");
                }
                self.content.legal = legal;
            }
        }
        info!(kind, "Site content saved");
        Ok(())
    }

    /// Appends an FAQ entry. Admin only.
    pub fn add_faq(&mut self, question: &str, answer: &str) -> StoreResult<FaqId> {
        self.require_admin("edit site content")?;
        validate_text("question", question, 500)?;
        validate_text("answer", answer, 5000)?;

        let faq = Faq {
            id: FaqId::new(),
            question: question.trim().to_string(),
            answer: answer.trim().to_string(),
        };
        let id = faq.id;

        let mut legal = self.content.legal.clone();
        legal.faqs.push(faq);
        self.save_content(SiteContentUpdate::Legal(legal))?;
        Ok(id)
    }

    /// Removes an FAQ entry. Admin only.
    pub fn remove_faq(&mut self, id: FaqId) -> StoreResult<Faq> {
        self.require_admin("edit site content")?;

        let mut legal = self.content.legal.clone();
        let index = legal
            .faqs
            .iter()
            .position(|f| f.id == id)
            .ok_or(CoreError::FaqNotFound(id))?;
        let removed = legal.faqs.remove(index);

        self.save_content(SiteContentUpdate::Legal(legal))?;
        Ok(removed)
    }
}
