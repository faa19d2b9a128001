//! Modal dialogs used by the page editor.

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod social_links;
pub use social_links::SocialLinksDialog;

mod background;
pub use background::BackgroundDialog;

mod share;
pub use share::ShareDialog;

mod success_card;
pub use success_card::SuccessCard;
