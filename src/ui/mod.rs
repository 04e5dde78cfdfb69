pub mod animated_region;
pub mod footer;
pub mod header;
pub mod icon;
pub mod pages;
pub mod sections;
pub mod visibility;

pub use animated_region::AnimatedRegion;
pub use footer::PageFooter;
pub use header::PageHeader;
pub use icon::{Icon, IconKind};
pub use pages::{LandingPage, NotFoundPage};
pub use sections::{AiFeaturesSection, FeaturesSection, HeroSection};
pub use visibility::use_viewport_visibility;
