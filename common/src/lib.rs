//! Greig's Ledgers Common Library
//!
//! WebとCLIで共有されるカタログ・コンテンツとUI状態管理

pub mod types;
pub mod error;
pub mod catalog;
pub mod content;
pub mod seo;
pub mod scroll_spy;
pub mod filter;
pub mod timer;
pub mod carousel;
pub mod coordinator;
pub mod rotator;
pub mod typing;

pub use types::{Category, Filter, NavigationTarget, ProjectDetails, ProjectId, ProjectRecord};
pub use error::{Error, Result};
pub use catalog::{Catalog, Navigation};
pub use scroll_spy::{ActiveBand, Region, ScrollSpy, Viewport, VisibilityEvent};
pub use filter::{visible_projects, FilterSelector};
pub use timer::{Scheduler, TimerCommand, TimerSlot, TimerToken};
pub use carousel::{CarouselState, GalleryCarousel};
pub use coordinator::{CoordinatorConfig, UiCoordinator, UiEvent, UiSnapshot, UiState};
pub use rotator::TestimonialRotator;
pub use typing::{TypingEffect, TypingTimings};
