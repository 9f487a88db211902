//! The course tree: course, modules, lessons and resources.

use serde::{Deserialize, Serialize};

use super::blocks::ContentBlock;
use super::digest::ContentDigest;

/// A complete course as supplied by the content provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Modules in course order.
    pub modules: Vec<Module>,
    /// Study aids listed beside the course.
    #[serde(default)]
    pub resources: Vec<Resource>,
}

/// A group of lessons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: String,
    pub title: String,
    /// Lessons in module order.
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

/// One lesson: metadata plus its ordered content blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    /// Human-readable duration, e.g. "15 min".
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_image: Option<String>,
    /// Blocks in render order.
    #[serde(default)]
    pub blocks: Vec<ContentBlock>,
}

impl Lesson {
    /// Identity of `block` as mounted in this lesson: its content together
    /// with the lesson id, so the same block in another lesson differs.
    #[must_use]
    pub fn block_identity(&self, block: &ContentBlock) -> ContentDigest {
        ContentDigest::of(&(&self.id, block))
    }
}

/// A downloadable or linked study aid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    /// Resource format label, e.g. "PDF".
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub meta: String,
    pub link: String,
    #[serde(default)]
    pub icon: String,
}
