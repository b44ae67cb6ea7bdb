pub mod action_button;
pub mod card;
pub mod common;

// Screening page building blocks
pub mod search_form;
pub mod member_sidebar;
pub mod status_panel;
pub mod sections;
pub mod results_view;
pub mod chat_panel;

pub use action_button::{ActionButton, ActionTone};
pub use card::Card;
pub use common::{LoadingText, ErrorMessage, EmptyState};
pub use search_form::SearchForm;
pub use member_sidebar::MemberSidebar;
pub use status_panel::StatusPanel;
pub use sections::SectionCard;
pub use results_view::ResultsView;
pub use chat_panel::ChatPanel;
