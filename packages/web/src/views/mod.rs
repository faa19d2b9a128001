//! Route components. Each one only adapts route parameters for a `ui` view.

mod account;
pub use account::{Login, Setup, Signup};

mod dashboard;
pub use dashboard::{CreatePage, Dashboard, EditPage, Help, Overview, Pages, Profile, Themes};

mod public;
pub use public::{Landing, NotFound, Portfolio, PortfolioPage};
