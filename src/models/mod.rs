//! Data models for AssetDesk

pub mod activity;
pub mod asset;
pub mod employee;
pub mod enums;
pub mod ids;
pub mod notification;
pub mod session;

// Re-export commonly used types
pub use activity::{Activity, ActivityKind};
pub use asset::{Asset, AssetForm, Assignment, AssignmentForm, CreateAsset, UpdateAsset};
pub use employee::{AssigneeOption, CreateEmployee, Employee, EmployeeForm, UpdateEmployee};
pub use enums::{AssetStatus, AssetType, Department, Role};
pub use ids::{AssetId, EmployeeId};
pub use notification::{Notification, Notifications, Variant};
pub use session::{Credentials, MenuSection, UserProfile};
