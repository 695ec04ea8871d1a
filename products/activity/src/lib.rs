//! Activity feed slice.
//!
//! Turns activity log entries into feed items: who did what, how long ago,
//! where to click, and which avatar color to show.

pub mod colors;
pub mod describe;
pub mod entry;
pub mod error;
pub mod feed;
pub mod greeting;
pub mod render;
pub mod rich_text;
mod story;
mod summary;
pub mod time;
pub mod topic;
pub mod urls;

pub use colors::{ColorSlot, PALETTE_SIZE, UserColorMap};
pub use describe::{ActivityDescriber, Description, StoryBody};
pub use entry::{ActivityEntry, DashcardRef, DatabaseRef, Details, TableRef, UserRef, Viewer};
pub use error::FeedError;
pub use feed::{
    ActivityFeed, ActivityFetcher, FeedItem, FeedState, FeedView, JsonFileFetcher, LoadTicket,
};
pub use greeting::Greeting;
pub use rich_text::{RichText, Segment};
pub use topic::Topic;
pub use urls::{SiteUrls, UrlBuilder};
