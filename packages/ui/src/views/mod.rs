//! Full-page views. The `web` crate mounts each one on a route.

mod profile_card;
pub use profile_card::{CardLink, ProfileCard};

mod pages_card;
pub use pages_card::PagesCard;

mod landing;
pub use landing::LandingView;

mod login;
pub use login::{LoginView, OAuthButtons};

mod signup;
pub use signup::SignupView;

mod setup_wizard;
pub use setup_wizard::SetupWizardView;

mod dashboard_layout;
pub use dashboard_layout::DashboardLayout;

mod overview;
pub use overview::OverviewView;

mod pages_list;
pub use pages_list::PagesListView;

mod page_editor;
pub use page_editor::PageEditorView;

mod themes;
pub use themes::ThemesView;

mod profile_settings;
pub use profile_settings::ProfileSettingsView;

mod help;
pub use help::HelpView;

mod portfolio;
pub use portfolio::PortfolioView;

mod not_found;
pub use not_found::NotFoundView;
