// Database queries organized by domain area
// Each module contains focused queries for one group of tables

pub mod activity;
pub mod audit;
pub mod categories;
pub mod ledger;
pub mod store;
pub mod students;

// Re-export commonly used query functions
pub use activity::{list_incidents_for_student, points_by_day, recent_feed};
pub use audit::{insert_audit_entry, recent_audit_entries};
pub use categories::{get_category, list_active_categories};
pub use ledger::{insert_point_event, net_balance};
pub use store::{
    decrement_stock, get_store_item, insert_redemption, list_active_store_items,
    lock_store_item, lock_student_for_redemption,
};
pub use students::{get_student, list_active_students, list_students_for_guardian};
