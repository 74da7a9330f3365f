//! Page managers, one per slice of the portfolio markup

pub mod animation;
pub mod certificate;
pub mod contact;
pub mod navigation;
pub mod performance;
pub mod profile;
pub mod projects;
pub mod skills;
pub mod theme;

pub use animation::AnimationManager;
pub use certificate::CertificateManager;
pub use contact::ContactManager;
pub use navigation::NavigationManager;
pub use performance::PerformanceManager;
pub use profile::ProfilePhotoManager;
pub use projects::ProjectManager;
pub use skills::SkillsManager;
pub use theme::ThemeManager;
