pub mod alert;
pub mod dashboard;
pub mod data_panel;
pub mod help_bar;
pub mod landing;
pub mod location_header;
pub mod mascot;
pub mod scene;
pub mod search_overlay;
pub mod timeline;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use alert::{ALERT_HEADLINE, AlertModal, AlertModalProps, ERROR_ICON};
pub use dashboard::{Dashboard, DashboardProps};
pub use data_panel::{DataPanel, DataPanelProps};
pub use help_bar::{HelpBar, HelpBarProps};
pub use landing::{APP_TITLE, Landing, LandingProps};
pub use location_header::{LOCATION_ICON, LocationHeader, LocationHeaderProps, SPINNERS};
pub use mascot::{MASCOT_NAME, Mascot, MascotProps};
pub use scene::{Scene, SceneProps};
pub use search_overlay::{SearchOverlay, SearchOverlayProps};
pub use timeline::{Timeline, TimelineProps};
