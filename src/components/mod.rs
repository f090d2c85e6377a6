//! UI Components
//!
//! Reusable Leptos components.

mod dashboard;
mod delete_keyword_button;
mod filter_bar;
mod history_panel;
mod keyword_form;
mod keyword_row;
mod keyword_table;
mod log_panel;
mod login_page;
mod status_banners;
mod title_bar;
mod toolbar;

pub use dashboard::Dashboard;
pub use delete_keyword_button::DeleteKeywordButton;
pub use filter_bar::FilterBar;
pub use history_panel::HistoryPanel;
pub use keyword_form::KeywordForm;
pub use keyword_row::KeywordRow;
pub use keyword_table::KeywordTable;
pub use log_panel::LogPanel;
pub use login_page::LoginPage;
pub use status_banners::{ErrorBanner, NoticeBanner};
pub use title_bar::TitleBar;
pub use toolbar::Toolbar;
