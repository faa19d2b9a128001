mod de;

pub mod account;
pub mod analytics;
pub mod page;
pub mod social;
pub mod user;

pub use account::{
    AuthStatus, Availability, ImageFile, LoginRequest, MessageResponse, ProfileSetup,
    ProfileUpdate, RegisterRequest, RegisterResponse, UploadKind, UploadResponse, UserEnvelope,
    UsernameCheck,
};
pub use analytics::{Activity, AnalyticsMetric, OverviewStat};
pub use page::{
    CreatePageInfo, Link, NewPage, Page, PageSummary, PageUpdate, Portfolio, TrackLink,
    VisibilityUpdate,
};
pub use social::{Platform, SocialLink, UnknownPlatform};
pub use user::{PageOwner, User};
